//! # Validation Module
//!
//! Checks the cart invariants on data the cart did not produce itself,
//! i.e. a blob read back from storage.
//!
//! ```text
//! stored blob ──► serde_json ──► validate_entries ──► Cart
//!                    │                  │
//!                    └── MalformedCart  └── Validation(...)
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::CartEntry;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an entry amount.
///
/// ## Example
/// ```rust
/// use rocketshoes_core::validation::validate_amount;
///
/// assert!(validate_amount(1).is_ok());
/// assert!(validate_amount(0).is_err());
/// ```
pub fn validate_amount(amount: i64) -> ValidationResult<()> {
    if amount <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price (free items are allowed, negative prices are not).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a full entry sequence.
///
/// ## Rules
/// - every amount >= 1
/// - every price >= 0
/// - no product id appears twice
pub fn validate_entries(entries: &[CartEntry]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(entries.len());

    for entry in entries {
        validate_amount(entry.amount)?;
        validate_price_cents(entry.price.cents())?;

        if !seen.insert(entry.id) {
            return Err(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: entry.id.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
