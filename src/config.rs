use crate::duration::Speed;
use crate::lookup::client::DEFAULT_ENDPOINT;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    /// Duration-lookup endpoint that accepts `{"playlistUrl": ...}`
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub default_speed: Speed,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint)
            .with_context(|| format!("Invalid service endpoint '{}'", self.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!(
                "Service endpoint must use http or https, got '{}'",
                url.scheme()
            );
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("Service timeout must be greater than 0");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        // default_speed is range-checked when deserialized
        self.service.validate()
    }

    /// Set a dotted key such as `service.endpoint`, then re-check the result.
    pub fn set_key(&mut self, key: &str, raw: &str) -> Result<()> {
        let current = serde_json::to_value(&*self).context("Failed to serialize config")?;
        *self = apply_key(current, key, raw)?;
        Ok(())
    }
}

/// Overlay `file` on the defaults, set `key` to `raw` and validate the merged result.
///
/// `file` may itself be invalid; only the outcome has to pass validation.
pub fn apply_key(file: serde_json::Value, key: &str, raw: &str) -> Result<Config> {
    let mut merged = serde_json::to_value(Config::default()).context("Failed to serialize config")?;
    // The default at `key` decides how `raw` is read.
    let template = walk(&mut merged, key)?.clone();
    merge(&mut merged, file);

    *walk(&mut merged, key)? = coerce(raw, &template)?;

    let updated: Config = serde_json::from_value(merged)
        .with_context(|| format!("Invalid value '{}' for {}", raw, key))?;
    updated.validate()?;
    Ok(updated)
}

fn walk<'a>(value: &'a mut serde_json::Value, key: &str) -> Result<&'a mut serde_json::Value> {
    let mut current = value;
    for part in key.split('.') {
        current = current
            .get_mut(part)
            .with_context(|| format!("Key not found: {}", part))?;
    }
    Ok(current)
}

fn merge(base: &mut serde_json::Value, overlay: serde_json::Value) {
    match (base, overlay) {
        (serde_json::Value::Object(base), serde_json::Value::Object(overlay)) => {
            for (k, v) in overlay {
                merge(base.entry(k).or_insert(serde_json::Value::Null), v);
            }
        }
        (base, overlay) => *base = overlay,
    }
}

fn coerce(raw: &str, template: &serde_json::Value) -> Result<serde_json::Value> {
    use serde_json::Value;

    match template {
        Value::Number(n) if n.is_u64() => raw
            .parse::<u64>()
            .map(Value::from)
            .with_context(|| format!("'{}' is not a whole number", raw)),
        Value::Number(_) => raw
            .parse::<f64>()
            .map(Value::from)
            .with_context(|| format!("'{}' is not a number", raw)),
        Value::Bool(_) => raw
            .parse::<bool>()
            .map(Value::from)
            .with_context(|| format!("'{}' is not true or false", raw)),
        _ => Ok(Value::from(raw)),
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(home::home_dir()
        .context("Could not find home directory")?
        .join(".playlist-clock")
        .join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;

    config.validate()?;
    Ok(config)
}

/// Load `~/.playlist-clock/config.toml`, falling back to defaults when absent.
pub fn load() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    load_from_path(&path)
}

/// Read the config file without validating it, for repairing it in place.
pub fn load_raw_from_path<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

/// Like [`load`], but an unusable file only warns and yields defaults.
pub fn load_or_default() -> Config {
    load().unwrap_or_else(|err| {
        tracing::warn!("config file unusable, showing defaults: {:#}", err);
        Config::default()
    })
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, toml_string).context("Failed to write config file")?;

    Ok(())
}
