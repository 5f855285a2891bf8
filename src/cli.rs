// src/cli.rs

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Lists recording timestamps, lets you pick one and plays every camera view of it.",
    long_about = None
)]
pub struct Cli {
    /// How many days back to list. Missing, invalid or 0 means the last 2 days.
    #[clap(allow_negative_numbers = true)]
    pub days_back: Option<String>,

    /// Only list recordings from exactly that many days ago.
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub exact_day: bool,

    /// Recordings directory for this run (supports ~ and env vars).
    #[clap(short, long)]
    pub dir: Option<String>,
}

impl Cli {
    /// The requested day count; anything that is not a positive integer is 0.
    pub fn days_back(&self) -> u32 {
        self.days_back
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|n| *n > 0)
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .unwrap_or(0)
    }
}
