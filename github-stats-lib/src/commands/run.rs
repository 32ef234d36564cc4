//! Command dispatch logic for github-stats

use super::{InitArgs, RateLimitArgs, StatsArgs, init_config, process_stats, show_rate_limit};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "github-stats", version, author, long_about = None)]
#[command(about = "Report activity statistics for a GitHub account")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Collect and report statistics for an account
    Stats(Box<StatsArgs>),
    /// Show the remaining API request quota
    RateLimit(RateLimitArgs),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        Command::Stats(stats_args) => process_stats(host, stats_args).await,
        Command::RateLimit(rate_limit_args) => show_rate_limit(host, rate_limit_args).await,
        Command::Init(init_args) => init_config(host, init_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::common::{ColorMode, LogLevel};
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_stats() {
        let cli = Cli::try_parse_from(["github-stats", "stats", "octocat", "--detailed", "--json", "out.json", "--color", "never"]).unwrap();
        let Command::Stats(args) = cli.command else {
            panic!("expected the stats command");
        };

        assert_eq!(args.username, "octocat");
        assert!(args.detailed);
        assert_eq!(args.json.as_deref().map(camino::Utf8Path::as_str), Some("out.json"));
        assert_eq!(args.common.color, ColorMode::Never);
        assert_eq!(args.common.log_level, LogLevel::None);
        assert!(args.common.token.is_none());
    }

    #[test]
    fn test_parse_rate_limit() {
        let cli = Cli::try_parse_from(["github-stats", "rate-limit", "--token", "abc"]).unwrap();
        let Command::RateLimit(args) = cli.command else {
            panic!("expected the rate-limit command");
        };
        assert_eq!(args.common.token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_stats_requires_username() {
        assert!(Cli::try_parse_from(["github-stats", "stats"]).is_err());
    }
}
