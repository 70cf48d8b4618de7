//! Configuration commands (`vialis config ...`)

use crate::error::{Result, VialisError};
use crate::remote::Config;

/// Keys accepted by `config get` and `config set`.
const VALID_KEYS: &[&str] = &["api.base_url", "api.token"];

/// Print one configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;

    let value = match key {
        "api.base_url" => Some(config.base_url()),
        "api.token" => config.token(),
        _ => {
            return Err(VialisError::Config(format!(
                "unknown key '{}', expected one of: {}",
                key,
                VALID_KEYS.join(", ")
            )));
        }
    };

    match value {
        Some(value) => println!("{}", value),
        None => println!("(not set)"),
    }
    Ok(())
}

/// Set one configuration value and save the file
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "api.base_url" => config.set_base_url(value.to_string()),
        "api.token" => config.set_token(value.to_string()),
        _ => {
            return Err(VialisError::Config(format!(
                "unknown key '{}', expected one of: {}",
                key,
                VALID_KEYS.join(", ")
            )));
        }
    }

    config.save()?;
    println!("{} = {}", key, value);
    Ok(())
}

/// Print the effective configuration
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;
    println!("api.base_url = {}", config.base_url());
    match config.token() {
        Some(_) => println!("api.token = (set)"),
        None => println!("api.token = (not set)"),
    }
    Ok(())
}
