//! Setup shared by the commands that talk to GitHub.

use super::ProgressReporter;
use super::config::Config;
use crate::Result;
use crate::client::{Account, ApiError, GitHubClient, RemoteClient};
use crate::metrics::AccountRef;
use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use core::time::Duration;
use ohno::app_err;
use std::io::{IsTerminal, stderr, stdout};

const LOG_TARGET: &str = "   session";

/// Environment variables consulted for a token, in order of preference.
const TOKEN_VARIABLES: [&str; 2] = ["GITHUB_TOKEN", "GITHUB_PAT"];

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    fn resolve(self, is_terminal: impl FnOnce() -> bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal(),
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Arguments shared by every command that talks to GitHub
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// GitHub personal access token (default is `GITHUB_TOKEN`, then `GITHUB_PAT`)
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Path to configuration file (default is `config.toml` in the platform config directory)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

/// Initialize logger based on log level
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // a logger may already be installed when commands run repeatedly in one process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

/// Pick the token to authenticate with.
///
/// An explicit token wins over the environment. Empty values are treated as absent.
pub fn resolve_token(explicit: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    let non_empty = |value: String| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    explicit
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| TOKEN_VARIABLES.iter().find_map(|name| lookup(name).and_then(non_empty)))
}

/// Confirm the credentials are accepted and return the account they belong to.
pub async fn authenticate<C: RemoteClient>(client: &C) -> Result<Account> {
    match client.validate_auth().await {
        Ok(account) => {
            log::info!(target: LOG_TARGET, "Authenticated as {}", account.login);
            Ok(account)
        }
        Err(ApiError::Unauthorized) => Err(app_err!("authentication failed: GitHub rejected the token")),
        Err(e) => Err(e.into_app_err("validating GitHub credentials")),
    }
}

/// Confirm that `username` names an existing account and return its canonical login.
pub async fn resolve_account<C: RemoteClient>(client: &C, username: &str) -> Result<AccountRef> {
    let requested = AccountRef::new(username)?;

    match client.get_account(requested.as_str()).await {
        Ok(account) => AccountRef::new(&account.login),
        Err(ApiError::NotFound) => Err(app_err!("GitHub account '{requested}' not found")),
        Err(e) => Err(e.into_app_err(format!("looking up GitHub account '{requested}'"))),
    }
}

/// An authenticated connection to GitHub plus the settings that shape a run.
#[derive(Debug)]
pub struct Session {
    pub client: GitHubClient,
    pub config: Config,
    color: ColorMode,
    log_level: LogLevel,
}

impl Session {
    /// Set up logging, load the configuration, and authenticate.
    pub async fn open(args: &CommonArgs) -> Result<Self> {
        init_logging(args.log_level);

        let config = Config::load(args.config.as_ref())?;

        let token = resolve_token(args.token.as_deref(), |name| std::env::var(name).ok())
            .ok_or_else(|| app_err!("no GitHub token found: pass --token or set GITHUB_TOKEN or GITHUB_PAT"))?;

        let client = GitHubClient::new(Some(&token), config.api_url.as_str())?;
        let _ = authenticate(&client).await?;

        Ok(Self {
            client,
            config,
            color: args.color,
            log_level: args.log_level,
        })
    }

    #[must_use]
    pub fn use_colors_for_output(&self) -> bool {
        self.color.resolve(|| stdout().is_terminal())
    }

    /// Create a progress reporter on stderr.
    ///
    /// When logging is on, the indicator stays hidden so it does not interleave with log lines.
    #[must_use]
    pub fn progress_reporter(&self) -> ProgressReporter {
        let delay = if self.log_level == LogLevel::None {
            Duration::from_millis(300)
        } else {
            Duration::from_hours(365 * 24)
        };

        ProgressReporter::new(delay, self.color.resolve(|| stderr().is_terminal()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::test_support::FakeClient;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_resolve_token_precedence() {
        let lookup = env(&[("GITHUB_TOKEN", "from-token"), ("GITHUB_PAT", "from-pat")]);
        assert_eq!(resolve_token(Some("explicit"), &lookup).as_deref(), Some("explicit"));
        assert_eq!(resolve_token(None, &lookup).as_deref(), Some("from-token"));

        let lookup = env(&[("GITHUB_PAT", "from-pat")]);
        assert_eq!(resolve_token(None, &lookup).as_deref(), Some("from-pat"));
    }

    #[test]
    fn test_resolve_token_ignores_empty_values() {
        let lookup = env(&[("GITHUB_TOKEN", "  "), ("GITHUB_PAT", "from-pat")]);
        assert_eq!(resolve_token(Some(""), &lookup).as_deref(), Some("from-pat"));
        assert_eq!(resolve_token(None, env(&[])), None);
    }

    #[test]
    fn test_color_mode_resolve() {
        assert!(ColorMode::Always.resolve(|| false));
        assert!(!ColorMode::Never.resolve(|| true));
        assert!(ColorMode::Auto.resolve(|| true));
        assert!(!ColorMode::Auto.resolve(|| false));
    }

    #[tokio::test]
    async fn test_authenticate() {
        let client = FakeClient::new().authenticated_as("me");
        assert_eq!(authenticate(&client).await.unwrap().login, "me");
    }

    #[tokio::test]
    async fn test_authenticate_rejected() {
        let err = authenticate(&FakeClient::new()).await.unwrap_err();
        assert!(err.to_string().contains("authentication failed"));
    }

    #[tokio::test]
    async fn test_resolve_account() {
        let client = FakeClient::new().with_profile("octocat", 1, 2);
        assert_eq!(resolve_account(&client, " octocat ").await.unwrap().as_str(), "octocat");

        let err = resolve_account(&client, "ghost").await.unwrap_err();
        assert!(err.to_string().contains("GitHub account 'ghost' not found"));

        assert!(resolve_account(&client, "   ").await.is_err());
    }
}
