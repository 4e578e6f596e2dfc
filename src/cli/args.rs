//! CLI argument definitions
//!
//! Command-line flags and config-file merging.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "daily-observations")]
#[command(
    about = "Mail yourself the observations written on this day in past years",
    version
)]
pub(crate) struct Cli {
    /// Print the digest instead of mailing it (also enables debug logging)
    #[arg(long)]
    pub(crate) debug: bool,

    /// Directory holding the observations [default: ~/Dropbox/Observations]
    #[arg(long, value_name = "DIR")]
    pub(crate) root: Option<PathBuf>,

    /// Treat this date as today (YYYYMMDD or YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub(crate) date: Option<String>,

    /// Timezone used to work out today's date (e.g., "Europe/Berlin", "UTC")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.root.is_none() {
            self.root = config.root.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        self
    }
}
