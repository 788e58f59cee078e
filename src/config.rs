// src/config.rs
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, time::Duration};
use url::Url;

use crate::error::{PortalError, Result};

/// Published sheet the portal reads when nothing else is configured.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSGHrehWfRjbr4oEw58UofOXIZGrCy94xLaDXfXXzUnwfkRZ6qaVTNUThwpjSVY-bX9ZO9Ma2PiOeG2/pub?output=csv";

pub const CONFIG_PATH_VAR: &str = "DCPORTAL_CONFIG";
const SHEET_URL_VAR: &str = "DCPORTAL_SHEET_URL";
const CACHE_TTL_VAR: &str = "DCPORTAL_CACHE_TTL_SECS";
const HIGHLIGHT_DAYS_VAR: &str = "DCPORTAL_HIGHLIGHT_DAYS";
const HTTP_TIMEOUT_VAR: &str = "DCPORTAL_HTTP_TIMEOUT_SECS";
const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sheet_url: String,
    pub cache_ttl_secs: u64,
    /// Rows pending longer than this are flagged `overdue` for display.
    pub highlight_days: f64,
    pub http_timeout_secs: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_url: DEFAULT_SHEET_URL.to_string(),
            cache_ttl_secs: 60,
            highlight_days: 2.0,
            http_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then the YAML file named by `DCPORTAL_CONFIG` if set, then
    /// individual environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = match env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        cfg.apply_overrides(|key| env::var(key).ok())?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            PortalError::Config(format!("reading config {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| PortalError::Config(format!("parsing config: {}", e)))
    }

    /// Apply `DCPORTAL_*` / `LOG_LEVEL` values from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(SHEET_URL_VAR) {
            self.sheet_url = v.trim().to_string();
        }
        if let Some(v) = lookup(CACHE_TTL_VAR) {
            self.cache_ttl_secs = parse_var(CACHE_TTL_VAR, &v)?;
        }
        if let Some(v) = lookup(HIGHLIGHT_DAYS_VAR) {
            self.highlight_days = parse_var(HIGHLIGHT_DAYS_VAR, &v)?;
        }
        if let Some(v) = lookup(HTTP_TIMEOUT_VAR) {
            self.http_timeout_secs = parse_var(HTTP_TIMEOUT_VAR, &v)?;
        }
        if let Some(v) = lookup(LOG_LEVEL_VAR) {
            self.log_level = v.trim().to_string();
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.sheet_url()?;
        if self.cache_ttl_secs == 0 {
            return Err(PortalError::Config("cache_ttl_secs must be > 0".into()));
        }
        if self.http_timeout_secs == 0 {
            return Err(PortalError::Config("http_timeout_secs must be > 0".into()));
        }
        if !self.highlight_days.is_finite() || self.highlight_days < 0.0 {
            return Err(PortalError::Config(format!(
                "highlight_days must be a non-negative number, got {}",
                self.highlight_days
            )));
        }
        Ok(())
    }

    pub fn sheet_url(&self) -> Result<Url> {
        let url = Url::parse(&self.sheet_url)
            .map_err(|e| PortalError::Config(format!("sheet_url {:?}: {}", self.sheet_url, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(PortalError::Config(format!(
                "sheet_url scheme must be http or https, got {}",
                other
            ))),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| PortalError::Config(format!("{}={:?}: {}", key, raw, e)))
}
