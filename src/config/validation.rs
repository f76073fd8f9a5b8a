//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the network pair (count, unique chain IDs and keys)
//! - Validate URLs and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use thiserror::Error;

use crate::config::schema::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected exactly 2 networks, found {0}")]
    NetworkCount(usize),

    #[error("duplicate chain id {0}")]
    DuplicateChainId(u64),

    #[error("duplicate network key '{0}'")]
    DuplicateKey(String),

    #[error("network '{0}' has an empty label")]
    EmptyLabel(String),

    #[error("{field} '{value}' is not an http(s) URL")]
    InvalidUrl { field: String, value: String },

    #[error("rpc.timeout_secs must be greater than 0")]
    ZeroTimeout,

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.networks.len() != 2 {
        errors.push(ValidationError::NetworkCount(config.networks.len()));
    }

    let mut chain_ids = HashSet::new();
    let mut keys = HashSet::new();
    for network in &config.networks {
        if !chain_ids.insert(network.chain_id) {
            errors.push(ValidationError::DuplicateChainId(network.chain_id));
        }
        if !keys.insert(network.key.as_str()) {
            errors.push(ValidationError::DuplicateKey(network.key.clone()));
        }
        if network.label.trim().is_empty() {
            errors.push(ValidationError::EmptyLabel(network.key.clone()));
        }
        check_url(&mut errors, format!("networks.{}.rpc_url", network.key), &network.rpc_url);
        check_url(
            &mut errors,
            format!("networks.{}.explorer_url", network.key),
            &network.explorer_url,
        );
    }

    if let Some(endpoint) = &config.wallet.endpoint {
        check_url(&mut errors, "wallet.endpoint".to_string(), endpoint);
    }

    if config.rpc.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(errors: &mut Vec<ValidationError>, field: String, value: &str) {
    let ok = url::Url::parse(value)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false);
    if !ok {
        errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = AppConfig::default();
        config.networks[1].chain_id = config.networks[0].chain_id;
        config.networks[1].rpc_url = "ws://mainnet.base.org".to_string();
        config.rpc.timeout_secs = 0;
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::DuplicateChainId(84532)));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::UnknownLogLevel("loud".to_string())));
    }

    #[test]
    fn test_requires_network_pair() {
        let mut config = AppConfig::default();
        config.networks.truncate(1);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::NetworkCount(1)]);
    }

    #[test]
    fn test_wallet_endpoint_checked() {
        let mut config = AppConfig::default();
        config.wallet.endpoint = Some("not a url".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("wallet.endpoint"));
    }
}
