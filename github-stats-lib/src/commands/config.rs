use crate::Result;
use crate::client::DEFAULT_API_URL;
use crate::collection::{CollectionOptions, DEFAULT_LOW_RATE_LIMIT_THRESHOLD};
use crate::metrics::{CollectorLimits, DEFAULT_MAX_COMMITS_PER_REPO, DEFAULT_SAMPLE_SIZE};
use camino::{Utf8Path, Utf8PathBuf};
use directories::ProjectDirs;
use ohno::{IntoAppError, app_err};
use serde::Deserialize;
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Upper bound imposed by the search endpoint's page size.
const MAX_SAMPLE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the GitHub REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Number of issues or pull requests inspected to estimate open/closed splits (1..=100)
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Commits counted per repository before giving up on exactness
    #[serde(default = "default_max_commits_per_repo")]
    pub max_commits_per_repo: usize,

    /// Remaining-request count below which a warning is shown before collecting
    #[serde(default = "default_low_rate_limit_threshold")]
    pub low_rate_limit_threshold: u64,

    /// Run the collectors side by side
    #[serde(default = "default_concurrent_collectors")]
    pub concurrent_collectors: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

const fn default_max_commits_per_repo() -> usize {
    DEFAULT_MAX_COMMITS_PER_REPO
}

const fn default_low_rate_limit_threshold() -> u64 {
    DEFAULT_LOW_RATE_LIMIT_THRESHOLD
}

const fn default_concurrent_collectors() -> bool {
    true
}

/// Where the configuration lives when no path is given, if the platform has a config directory.
#[must_use]
pub fn default_path() -> Option<Utf8PathBuf> {
    let dirs = ProjectDirs::from("", "", "github-stats")?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().join("config.toml")).ok()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// An explicit path must exist. Without one, the platform config file is used when present.
    pub fn load(config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            return Self::parse(&text, path);
        }

        let Some(path) = default_path() else {
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(text) => Self::parse(&text, &path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
        }
    }

    fn parse(text: &str, path: &Utf8Path) -> Result<Self> {
        let config: Self = toml::from_str(text).into_app_err_with(|| format!("parsing configuration file '{path}'"))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the default configuration to a TOML file, creating parent directories as needed
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        if let Some(parent) = output_path.parent()
            && !parent.as_str().is_empty()
        {
            fs::create_dir_all(parent).into_app_err_with(|| format!("creating directory '{parent}'"))?;
        }

        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_url).into_app_err_with(|| format!("api_url '{}' is not a valid URL", self.api_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(app_err!("api_url must use http or https, got '{}'", url.scheme()));
        }

        if !(1..=MAX_SAMPLE_SIZE).contains(&self.sample_size) {
            return Err(app_err!("sample_size must be between 1 and {MAX_SAMPLE_SIZE}, got {}", self.sample_size));
        }

        if self.max_commits_per_repo == 0 {
            return Err(app_err!("max_commits_per_repo must be at least 1"));
        }

        Ok(())
    }

    #[must_use]
    pub const fn collection_options(&self) -> CollectionOptions {
        CollectionOptions {
            limits: CollectorLimits {
                sample_size: self.sample_size,
                max_commits_per_repo: self.max_commits_per_repo,
            },
            concurrent: self.concurrent_collectors,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            sample_size: default_sample_size(),
            max_commits_per_repo: default_max_commits_per_repo(),
            low_rate_limit_threshold: default_low_rate_limit_threshold(),
            concurrent_collectors: default_concurrent_collectors(),
        }
    }
}
