use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::error::MailError;

/// Optional settings file; every CLI flag overrides its counterpart here
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) root: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        log::warn!("Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/daily-observations/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(".config")
                    .join("daily-observations")
                    .join("config.toml"),
            );
        }

        // 2. Platform config dir (macOS Application Support)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("daily-observations").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.daily-observations.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".daily-observations.toml"));
        }

        paths
    }
}

/// Storage root used when neither `--root` nor the config file names one
pub(crate) fn default_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join("Dropbox")
        .join("Observations")
}

/// SMTP settings taken from `EMAIL_*` environment variables
#[derive(Debug, Clone)]
pub(crate) struct MailSettings {
    /// Sender and sole recipient
    pub(crate) address: String,
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) username: String,
    pub(crate) password: String,
}

impl MailSettings {
    pub(crate) fn from_env() -> Result<Self, MailError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MailError> {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(MailError::MissingVar { name })
        };

        let raw_port = require("EMAIL_PORT")?;
        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| MailError::InvalidVar {
                name: "EMAIL_PORT",
                value: raw_port.clone(),
            })?;

        Ok(Self {
            address: require("EMAIL_TO")?,
            host: require("EMAIL_HOST")?,
            port,
            username: require("EMAIL_USER")?,
            password: require("EMAIL_PASS")?,
        })
    }
}
