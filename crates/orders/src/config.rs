//! Placement policy thresholds.
//!
//! # Environment Variables
//!
//! All optional; unset variables keep the default.
//! - `ORDER_MIN_TOTAL_AMOUNT` - Smallest accepted order total (default: 100)
//! - `ORDER_MIN_CREDIT_RATING` - Credit rating a customer must exceed (default: 200)
//! - `ORDER_EXPEDITE_MIN_TOTAL_PURCHASES` - Purchase total to exceed for expedited shipping (default: 5000)
//! - `ORDER_EXPEDITE_MIN_CREDIT_RATING` - Credit rating to exceed for expedited shipping (default: 500)

use core::fmt::Display;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

const MIN_TOTAL_AMOUNT_VAR: &str = "ORDER_MIN_TOTAL_AMOUNT";
const MIN_CREDIT_RATING_VAR: &str = "ORDER_MIN_CREDIT_RATING";
const EXPEDITE_MIN_TOTAL_PURCHASES_VAR: &str = "ORDER_EXPEDITE_MIN_TOTAL_PURCHASES";
const EXPEDITE_MIN_CREDIT_RATING_VAR: &str = "ORDER_EXPEDITE_MIN_CREDIT_RATING";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Business thresholds applied by the placement pipeline.
///
/// Can be deserialized from an application's own config file; missing keys
/// fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlacementPolicy {
    /// Smallest accepted order total (inclusive).
    pub min_total_amount: Decimal,
    /// Credit rating a customer must exceed to order at all.
    pub min_credit_rating: i32,
    /// Lifetime purchases a customer must exceed for expedited shipping.
    pub expedite_min_total_purchases: Decimal,
    /// Credit rating a customer must exceed for expedited shipping.
    pub expedite_min_credit_rating: i32,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self {
            min_total_amount: Decimal::ONE_HUNDRED,
            min_credit_rating: 200,
            expedite_min_total_purchases: Decimal::new(5000, 0),
            expedite_min_credit_rating: 500,
        }
    }
}

impl PlacementPolicy {
    /// Load the policy from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present, then
    /// reads the process environment through [`from_lookup`](Self::from_lookup).
    /// This is the entry point for applications; tests drive `from_lookup`
    /// directly so they never touch process-wide state.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the policy from an arbitrary key/value source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is present but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            min_total_amount: parse_or_default(
                &lookup,
                MIN_TOTAL_AMOUNT_VAR,
                defaults.min_total_amount,
            )?,
            min_credit_rating: parse_or_default(
                &lookup,
                MIN_CREDIT_RATING_VAR,
                defaults.min_credit_rating,
            )?,
            expedite_min_total_purchases: parse_or_default(
                &lookup,
                EXPEDITE_MIN_TOTAL_PURCHASES_VAR,
                defaults.expedite_min_total_purchases,
            )?,
            expedite_min_credit_rating: parse_or_default(
                &lookup,
                EXPEDITE_MIN_CREDIT_RATING_VAR,
                defaults.expedite_min_credit_rating,
            )?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a looked-up value, keeping the default when the key is unset.
fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}
