use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_MAX_LOANS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub loan_feature_enabled: bool,
    pub max_loans_per_account: u32,
}

impl LedgerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_loans_per_account == 0 {
            return Err(ConfigError::InvalidLoanLimit(self.max_loans_per_account));
        }
        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            loan_feature_enabled: true,
            max_loans_per_account: DEFAULT_MAX_LOANS,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn test_defaults() {
        let config = LedgerConfig::default();
        assert!(config.loan_feature_enabled);
        assert_eq!(config.max_loans_per_account, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: LedgerConfig =
            serde_json::from_str(r#"{"loan_feature_enabled": false}"#).expect("parse config");

        assert!(!config.loan_feature_enabled);
        assert_eq!(config.max_loans_per_account, DEFAULT_MAX_LOANS);
    }

    #[test]
    fn test_zero_loan_limit_rejected() {
        let config = LedgerConfig {
            loan_feature_enabled: true,
            max_loans_per_account: 0,
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidLoanLimit(0)));
    }
}
