use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Opdeck: headless workspace shell driving tabs and panel layout.
#[derive(Parser, Debug)]
#[command(name = "opdeck", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive such as `opdeck_tabs=debug`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the shell, reading JSON lines from stdin (default).
    Run {
        /// Interval of the home-redirect timer check, in milliseconds.
        #[arg(long, default_value_t = 20)]
        tick_ms: u64,
    },
    /// Load and validate the config, then print it as JSON.
    CheckConfig,
    /// Print the config and data file locations.
    Paths,
}

impl Default for Command {
    fn default() -> Self {
        Command::Run { tick_ms: 20 }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_run() {
        let args = Args::try_parse_from(["opdeck"]).unwrap();
        assert_eq!(args.command.unwrap_or_default(), Command::Run { tick_ms: 20 });
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["opdeck", "check-config", "--config", "/tmp/c.toml"]).unwrap();
        assert_eq!(args.command, Some(Command::CheckConfig));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn run_tick_override() {
        let args = Args::try_parse_from(["opdeck", "run", "--tick-ms", "50"]).unwrap();
        assert_eq!(args.command, Some(Command::Run { tick_ms: 50 }));
    }
}
