//! Command-line configuration.

use std::time::Duration;

use clap::Parser;
use sodo_client::Level;

/// Sodo puzzle client.
#[derive(Debug, Clone, Parser)]
#[command(name = "sodo", version, about)]
pub struct Config {
    /// Base URL of the solving service.
    #[arg(long, env = "SODO_SERVER", default_value = "http://127.0.0.1:5000")]
    pub server: String,

    /// Difficulty of the first game: 1 (Beginner) to 5 (Expert).
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub level: u8,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}

impl Config {
    /// The starting difficulty.
    #[must_use]
    pub fn level(&self) -> Level {
        Level::from_number(self.level).unwrap_or_default()
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
