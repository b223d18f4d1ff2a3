use std::f32::consts::TAU;

/*
One-Pole Low-Pass
=================

The ambient loop runs its whole mix through the simplest filter there is: an
RC low-pass discretized with backward Euler.

    RC = 1 / (2π · cutoff)
    α  = dt / (RC + dt)          dt = 1 / sample_rate
    y[n] = y[n-1] + α · (x[n] - y[n-1])

α close to 1 means a high cutoff (output follows input); α close to 0 means
a low cutoff (output barely moves). The slope is a gentle 6 dB/octave, which
is why it suits a slow "breathing" sweep better than a resonant SVF would.

State
-----
The only memory is `previous_output`. A filter value is created at the top
of one synthesis call and dropped at its end. It is never stored on a
long-lived object, so one generated buffer cannot leak into the next.
*/

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OnePole {
    previous_output: f32,
}

impl OnePole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Smoothing coefficient for a cutoff in Hz at time step `dt` seconds.
    #[inline]
    pub fn coefficient(cutoff_hz: f32, dt: f32) -> f32 {
        let rc = 1.0 / (TAU * cutoff_hz.max(1.0));
        dt / (rc + dt)
    }

    /// Filter one sample with an explicit coefficient.
    #[inline]
    pub fn next_sample(&mut self, input: f32, alpha: f32) -> f32 {
        self.previous_output += alpha * (input - self.previous_output);
        self.previous_output
    }

    /// Filter one sample at `cutoff_hz`.
    #[inline]
    pub fn process(&mut self, input: f32, cutoff_hz: f32, dt: f32) -> f32 {
        self.next_sample(input, Self::coefficient(cutoff_hz, dt))
    }

    pub fn previous_output(&self) -> f32 {
        self.previous_output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::sine;

    fn peak_after_transient(buffer: &[f32]) -> f32 {
        let skip = buffer.len().min(256);
        buffer[skip..].iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    #[test]
    fn coefficient_matches_rc_formula() {
        let dt = 1.0 / 48_000.0;
        let alpha = OnePole::coefficient(1000.0, dt);
        let rc = 1.0 / (TAU * 1000.0);
        assert!((alpha - dt / (rc + dt)).abs() < 1e-7);
        assert!(alpha > 0.0 && alpha < 1.0);
    }

    #[test]
    fn dc_passes_through() {
        let mut filter = OnePole::new();
        let dt = 1.0 / 48_000.0;
        let mut out = 0.0;
        for _ in 0..4800 {
            out = filter.process(1.0, 500.0, dt);
        }
        assert!(out > 0.99, "Expected DC to settle at input, got {out}");
    }

    #[test]
    fn lowpass_filters_high_freq() {
        let sample_rate = 48_000.0;
        let dt = 1.0 / sample_rate;
        let mut filter = OnePole::new();
        let buffer: Vec<f32> = (0..2048)
            .map(|i| filter.process(sine(8_000.0, i as f32 * dt), 300.0, dt))
            .collect();

        let peak = peak_after_transient(&buffer);
        assert!(peak < 0.1, "Expected high freq attenuation, got peak: {peak}");
    }

    #[test]
    fn fresh_filters_do_not_share_memory() {
        let dt = 1.0 / 44_100.0;
        let mut first = OnePole::new();
        for _ in 0..100 {
            first.process(1.0, 1000.0, dt);
        }
        let second = OnePole::new();
        assert!(first.previous_output() > 0.5);
        assert_eq!(second.previous_output(), 0.0);
    }
}
