use crate::config::{Config, apply_key, config_path, load_raw_from_path, save_to_path};
use anyhow::{Context, Result};

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    // Dot notation: "service.endpoint"
    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .with_context(|| format!("Key not found: {}", part))?;
    }

    match current {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }

    Ok(())
}

/// Update one key in the config file.
///
/// The file is read without validation so a broken value can be fixed here.
pub fn set(key: &str, value: &str) -> Result<()> {
    let path = config_path()?;
    let file = if path.exists() {
        load_raw_from_path(&path)?
    } else {
        serde_json::Value::Object(Default::default())
    };

    let updated = apply_key(file, key, value)?;
    save_to_path(&updated, &path)?;
    println!("✓ {} = {} (saved to {})", key, value, path.display());
    Ok(())
}
