use serde::{Deserialize, Serialize};
use std::fs;

use crate::constants::{
    CREATION_FEE, FEE_DENOMINATOR, FEE_NUMERATOR, INITIAL_TOKEN_RESERVE, PRICE_SCALE,
    VOLUME_WINDOW_MS,
};
use crate::errors::{LaunchpadError, LaunchpadResult};
use crate::math::{mul_div_u64, safe_sub_u64};

/// Launch parameters loaded from a TOML file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LaunchpadConfig {
    /// Minimum payment for creating a coin (base-currency units)
    pub creation_fee: u64,

    /// Unminted token units of a new coin
    pub initial_token_reserve: u64,

    /// Fixed-point scale of reported prices
    pub price_scale: u64,

    /// Rolling window for the trading-volume accumulator (milliseconds)
    pub volume_window_ms: u64,

    /// Who may edit metadata records
    pub metadata_policy: MetadataUpdatePolicy,

    /// Trade fee schedule
    pub fee: FeeSchedule,
}

/// Portion of a trade amount that survives the fee: `numerator / denominator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeeSchedule {
    pub numerator: u64,
    pub denominator: u64,
}

/// Authorization rule for metadata mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataUpdatePolicy {
    /// Anyone holding a reference may edit
    #[default]
    Open,
    /// Only the address that created the coin may edit
    CreatorOnly,
}

impl LaunchpadConfig {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> LaunchpadResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| LaunchpadError::ConfigIo {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> LaunchpadResult<Self> {
        let config: LaunchpadConfig =
            toml::from_str(content).map_err(|e| LaunchpadError::ConfigParse(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    pub fn to_toml_string(&self) -> LaunchpadResult<String> {
        toml::to_string_pretty(self).map_err(|e| LaunchpadError::ConfigParse(e.to_string()))
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: &str) -> LaunchpadResult<()> {
        let content = self.to_toml_string()?;
        fs::write(path, content).map_err(|e| LaunchpadError::ConfigIo {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> LaunchpadResult<()> {
        self.fee.validate()?;

        if self.initial_token_reserve == 0 {
            return Err(LaunchpadError::invalid_config(
                "initial_token_reserve must be greater than 0",
            ));
        }

        if self.price_scale == 0 {
            return Err(LaunchpadError::invalid_config(
                "price_scale must be greater than 0",
            ));
        }

        if self.volume_window_ms == 0 {
            return Err(LaunchpadError::invalid_config(
                "volume_window_ms must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl FeeSchedule {
    pub fn validate(&self) -> LaunchpadResult<()> {
        if self.denominator == 0 {
            return Err(LaunchpadError::invalid_config(
                "fee.denominator must be greater than 0",
            ));
        }

        if self.numerator == 0 || self.numerator >= self.denominator {
            return Err(LaunchpadError::invalid_config(format!(
                "fee.numerator must be in 1..{} (got {})",
                self.denominator, self.numerator
            )));
        }

        Ok(())
    }

    /// Fee rate in basis points, floored
    pub fn fee_bps(&self) -> LaunchpadResult<u64> {
        let retained = safe_sub_u64(self.denominator, self.numerator)?;
        mul_div_u64(retained, 10_000, self.denominator)
    }
}

impl Default for LaunchpadConfig {
    fn default() -> Self {
        Self {
            creation_fee: CREATION_FEE,
            initial_token_reserve: INITIAL_TOKEN_RESERVE,
            fee: FeeSchedule::default(),
            price_scale: PRICE_SCALE,
            volume_window_ms: VOLUME_WINDOW_MS,
            metadata_policy: MetadataUpdatePolicy::Open,
        }
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            numerator: FEE_NUMERATOR,
            denominator: FEE_DENOMINATOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let mut config = LaunchpadConfig::default();
        assert!(config.validate().is_ok());

        config.fee.numerator = 1000;
        assert!(config.validate().is_err());

        config.fee = FeeSchedule::default();
        config.initial_token_reserve = 0;
        assert!(config.validate().is_err());

        config.initial_token_reserve = 1;
        config.volume_window_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_fee_is_thirty_bps() {
        assert_eq!(FeeSchedule::default().fee_bps(), Ok(30));
    }

    #[test]
    fn test_fee_bps_with_wide_denominator() {
        let fee = FeeSchedule {
            numerator: u64::MAX - u64::MAX / 100,
            denominator: u64::MAX,
        };
        assert!(fee.validate().is_ok());
        assert_eq!(fee.fee_bps(), Ok(99));

        let inverted = FeeSchedule {
            numerator: 10,
            denominator: 5,
        };
        assert_eq!(inverted.fee_bps(), Err(LaunchpadError::MathUnderflow));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = LaunchpadConfig::from_toml_str(
            r#"
            creation_fee = 5000
            metadata_policy = "creator_only"

            [fee]
            numerator = 99
            denominator = 100
            "#,
        )
        .unwrap();

        assert_eq!(config.creation_fee, 5000);
        assert_eq!(config.metadata_policy, MetadataUpdatePolicy::CreatorOnly);
        assert_eq!(config.fee.fee_bps(), Ok(100));
        assert_eq!(config.initial_token_reserve, INITIAL_TOKEN_RESERVE);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = LaunchpadConfig::from_toml_str("creation_fee = \"lots\"").unwrap_err();
        assert!(matches!(err, LaunchpadError::ConfigParse(_)));

        let err = LaunchpadConfig::from_toml_str("price_scale = 0").unwrap_err();
        assert!(matches!(err, LaunchpadError::InvalidConfig(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = LaunchpadConfig {
            metadata_policy: MetadataUpdatePolicy::CreatorOnly,
            ..LaunchpadConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(LaunchpadConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = LaunchpadConfig::load("/nonexistent/launchpad.toml").unwrap_err();
        assert!(matches!(err, LaunchpadError::ConfigIo { .. }));
    }
}
