use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use diagnostics::LogLevel;
use sitegen::SiteConfig;

/// Default location of the site description.
pub const DEFAULT_CONFIG: &str = "site.yaml";

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "DEVCONF_CONFIG";

/// Pick the config path: explicit override, then `DEVCONF_CONFIG`, then
/// `site.yaml` in the current directory.
pub fn config_path_with_override(override_path: Option<PathBuf>) -> PathBuf {
    override_path
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG))
}

/// A parsed site configuration plus the directory its relative paths
/// resolve against.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub config_path: PathBuf,
    pub root: PathBuf,
    pub config: SiteConfig,
}

impl SiteContext {
    pub fn load(config_path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        let config = SiteConfig::from_yaml(&text)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?;

        let root = match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            Some(_) => PathBuf::from("."),
            None => return Err(anyhow!("Config path has no parent: {}", config_path.display())),
        };

        Ok(Self {
            config_path: config_path.to_path_buf(),
            root,
            config,
        })
    }
}

/// Map the global `--quiet` / `--debug` flags to a log level. Without
/// either flag, `DEVCONF_LOG` decides and defaults to info.
pub fn log_level(quiet: bool, debug: bool) -> (LogLevel, Option<String>) {
    if quiet {
        (LogLevel::Warn, None)
    } else if debug {
        (LogLevel::Debug, None)
    } else {
        diagnostics::level_from_env(LogLevel::Info)
    }
}
