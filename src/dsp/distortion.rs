//! Soft clipping / output staging
//!
//! Every generator ends with a waveshaper. The summed layers can exceed
//! ±1, and the shaper folds that headroom back in smoothly instead of
//! clipping hard.
//!
//! # Transfer function
//!
//!   f(x) = tanh(x · drive)
//!
//! - drive near 1: almost linear for small signals
//! - higher drive: warmer, denser, peaks compressed toward ±1
//!
//! tanh never leaves (-1, 1), so multiplying by a gain ≤ 1 keeps the
//! result in range. `clamp_unit` runs last and maps non-finite values to
//! silence.

/// tanh soft clip with input drive.
#[inline]
pub fn soft_clip(sample: f32, drive: f32) -> f32 {
    (sample * drive).tanh()
}

/// Clamp to [-1, 1]. Non-finite input becomes silence.
#[inline]
pub fn clamp_unit(sample: f32) -> f32 {
    if sample.is_finite() {
        sample.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Soft clip, apply gain, then clamp, in place.
pub fn soft_clip_buffer(buffer: &mut [f32], drive: f32, gain: f32) {
    for sample in buffer.iter_mut() {
        *sample = clamp_unit(soft_clip(*sample, drive) * gain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_clip_unity_drive() {
        // tanh(0.1) ≈ 0.0997
        let output = soft_clip(0.1, 1.0);
        assert!((output - 0.0997).abs() < 1e-3);
    }

    #[test]
    fn test_soft_clip_high_drive() {
        let output = soft_clip(1.0, 10.0);
        assert!(output > 0.99 && output <= 1.0);
    }

    #[test]
    fn test_clamp_unit_handles_nan() {
        assert_eq!(clamp_unit(f32::NAN), 0.0);
        assert_eq!(clamp_unit(4.0), 1.0);
        assert_eq!(clamp_unit(-4.0), -1.0);
    }

    #[test]
    fn test_buffer_stays_in_range() {
        let mut buffer = vec![-50.0, -1.0, 0.0, 0.5, 80.0];
        soft_clip_buffer(&mut buffer, 1.5, 1.0);
        assert!(buffer.iter().all(|s| (-1.0..=1.0).contains(s)));
    }
}
