//! Runtime configuration loaded from the environment.
//!
//! A `.env` file in the working directory is read first when present; variables
//! already set in the process environment win.

use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
pub const DEFAULT_FEATURED_LIMIT: usize = 10;
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid { key: &'static str, value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Mailbox size of every resource actor (`STORE_CHANNEL_CAPACITY`).
    pub channel_capacity: usize,
    /// Products shown on the home feed (`STORE_FEATURED_LIMIT`).
    pub featured_product_limit: usize,
    /// Minimum sign-up password length (`STORE_MIN_PASSWORD_LEN`).
    pub min_password_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            featured_product_limit: DEFAULT_FEATURED_LIMIT,
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Missing keys take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            channel_capacity: positive(&lookup, "STORE_CHANNEL_CAPACITY", defaults.channel_capacity)?,
            featured_product_limit: positive(&lookup, "STORE_FEATURED_LIMIT", defaults.featured_product_limit)?,
            min_password_len: positive(&lookup, "STORE_MIN_PASSWORD_LEN", defaults.min_password_len)?,
        })
    }
}

fn positive<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let invalid = |reason: String| ConfigError::Invalid { key, value: raw.clone(), reason };
    match usize::from_str(raw.trim()) {
        Ok(0) => Err(invalid("must be greater than zero".into())),
        Ok(value) => Ok(value),
        Err(e) => Err(invalid(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_keys_use_defaults() {
        assert_eq!(StoreConfig::from_lookup(lookup(&[])).unwrap(), StoreConfig::default());
    }

    #[test]
    fn values_are_parsed() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("STORE_CHANNEL_CAPACITY", "8"),
            ("STORE_FEATURED_LIMIT", " 4 "),
        ]))
        .unwrap();
        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.featured_product_limit, 4);
        assert_eq!(config.min_password_len, DEFAULT_MIN_PASSWORD_LEN);
    }

    #[test]
    fn zero_and_garbage_are_rejected() {
        let err = StoreConfig::from_lookup(lookup(&[("STORE_CHANNEL_CAPACITY", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "STORE_CHANNEL_CAPACITY", .. }));

        let err = StoreConfig::from_lookup(lookup(&[("STORE_MIN_PASSWORD_LEN", "six")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "STORE_MIN_PASSWORD_LEN", .. }));
    }
}
