//! moodsynth - mood-adaptive ambient audio in the terminal
//!
//! # Usage
//!
//! ```bash
//! moodsynth                         # follow the local clock
//! moodsynth --hour 12               # noon combat
//! moodsynth --date 2026-12-25       # festive variant
//! moodsynth --mood mysterious --log-file moodsynth.log
//! moodsynth --headless 30           # play 30 s without the TUI
//! ```
//!
//! # Keys
//!
//! - any key: unlock audio (first press)
//! - Space: start/stop the ambient loop
//! - +/-: volume
//! - Left/Right: select effect, Enter: play it
//! - r: reroll the style for the current time
//! - q / Esc: quit

mod app;
mod ui;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{Datelike, Local, NaiveDate, Timelike, Weekday};
use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use rand::Rng;
use tracing_subscriber::EnvFilter;

use moodsynth::dsp::noise::{create_rng, derive_seed};
use moodsynth::{style_for_hour, EngineConfig, Mood, MusicStyle, PlaybackController, SpecialDate};

use app::App;

#[derive(Debug, Parser)]
#[command(name = "moodsynth", version, about = "Mood-adaptive ambient audio engine")]
struct Args {
    /// Hour of the day (0-23). Defaults to the local clock
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..24))]
    hour: Option<u8>,

    /// Apply the weekend modifier
    #[arg(long)]
    weekend: bool,

    /// Date used for weekend and holiday detection
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,

    /// Play a fixed mood instead of the hourly table
    #[arg(long)]
    mood: Option<Mood>,

    /// Base seed for noise and tempo jitter
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,

    /// Initial volume (0-1)
    #[arg(long, default_value_t = 0.3)]
    volume: f32,

    /// Ambient loop length in seconds
    #[arg(long, default_value_t = 16.0)]
    loop_seconds: f32,

    /// Write logs here (the TUI owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Play for this many seconds without the TUI, logging to stderr
    #[arg(long, value_name = "SECONDS")]
    headless: Option<f32>,
}

impl Args {
    /// True when nothing pins the style, so it may follow the clock.
    fn follows_clock(&self) -> bool {
        self.hour.is_none() && self.date.is_none() && self.mood.is_none() && !self.weekend
    }

    fn style(&self, rng: &mut impl Rng) -> MusicStyle {
        if let Some(mood) = self.mood {
            return MusicStyle::for_mood(mood);
        }

        let now = Local::now();
        let date = self.date.unwrap_or_else(|| now.date_naive());
        let hour = self.hour.unwrap_or(now.hour() as u8);
        let weekend = self.weekend || matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        style_for_hour(hour, weekend, SpecialDate::for_date(&date), rng)
    }
}

fn init_tracing(args: &Args) -> EyreResult<()> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moodsynth=info"))
    };

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if args.headless.is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(&args)?;

    let mut rng = create_rng(derive_seed(args.seed, "cli-style"));
    let style = args.style(&mut rng);

    let config = EngineConfig::new()
        .loop_seconds(args.loop_seconds)
        .seed(args.seed)
        .initial_volume(args.volume)
        .requires_unlock(args.headless.is_none());

    let mut controller = PlaybackController::new(config)
        .with_style(style)
        .wrap_err("invalid style")?;

    if let Some(seconds) = args.headless {
        return run_headless(controller, seconds);
    }

    controller.init();
    let mut terminal = ratatui::init();
    let result = App::new(controller, args.follows_clock(), rng).run(&mut terminal);
    ratatui::restore();
    result
}

fn run_headless(mut controller: PlaybackController, seconds: f32) -> EyreResult<()> {
    controller.init();
    controller.start();

    tracing::info!(
        style = %controller.style().name,
        state = ?controller.state(),
        seconds,
        "playing headless"
    );
    std::thread::sleep(Duration::try_from_secs_f32(seconds).unwrap_or_default());

    controller.destroy();
    Ok(())
}
