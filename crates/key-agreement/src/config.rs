//! Exchange configuration

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_MAX_VALUE, ParameterError};

/// Bounds applied to every integer that enters an exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    /// Largest accepted generator, modulus or private exponent.
    /// Keeps trial division cheap.
    pub max_value: i64,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

impl ExchangeConfig {
    /// Accept `value` only if `0 < value <= max_value`
    pub fn check_bound(&self, name: &'static str, value: i64) -> Result<i64, ParameterError> {
        if value <= 0 {
            return Err(ParameterError::NotPositive { name, value });
        }
        if value > self.max_value {
            return Err(ParameterError::ExceedsMaximum {
                name,
                value,
                max: self.max_value,
            });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bound() {
        let config = ExchangeConfig::default();
        assert_eq!(config.check_bound("p", 1_000_000), Ok(1_000_000));
        assert_eq!(
            config.check_bound("p", 1_000_001),
            Err(ParameterError::ExceedsMaximum {
                name: "p",
                value: 1_000_001,
                max: 1_000_000
            })
        );
        assert_eq!(
            config.check_bound("g", 0),
            Err(ParameterError::NotPositive { name: "g", value: 0 })
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ExchangeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ExchangeConfig::default());

        let config: ExchangeConfig = serde_json::from_str(r#"{"max_value": 500}"#).unwrap();
        assert_eq!(config.max_value, 500);
        assert!(config.check_bound("a", 501).is_err());
    }
}
