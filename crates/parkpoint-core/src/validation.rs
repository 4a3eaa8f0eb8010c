//! # Validation Module
//!
//! Input validation utilities for ParkPoint.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell (console menu / API front end)                         │
//! │  ├── Basic format checks, immediate user feedback                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Garage service boundary                                      │
//! │  └── THIS MODULE: business rule validation                             │
//! │                                                                         │
//! │  The service never trusts the shell; every operation re-validates      │
//! │  its inputs before touching garage state.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_PLATE_LENGTH, MAX_SPOTS_PER_REQUEST};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a licence plate and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_PLATE_LENGTH`] characters
///
/// ## Example
/// ```rust
/// use parkpoint_core::validation::validate_plate;
///
/// assert_eq!(validate_plate(" AB-123 ").unwrap(), "AB-123");
/// assert!(validate_plate("").is_err());
/// assert!(validate_plate("   ").is_err());
/// ```
pub fn validate_plate(plate: &str) -> ValidationResult<String> {
    let plate = plate.trim();

    if plate.is_empty() {
        return Err(ValidationError::Required {
            field: "plate".to_string(),
        });
    }

    // Characters, not bytes: plates with multibyte letters (e.g. umlauts)
    // must be measured the way the limit is phrased.
    if plate.chars().count() > MAX_PLATE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "plate".to_string(),
            max: MAX_PLATE_LENGTH,
        });
    }

    Ok(plate.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an hourly rate in cents. Zero is allowed (free garage).
pub fn validate_rate_per_hour_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "rate_per_hour".to_string(),
        });
    }

    Ok(())
}

/// Validates a grace period in minutes. Zero is allowed (no free window).
pub fn validate_grace_minutes(minutes: i64) -> ValidationResult<()> {
    if minutes < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "grace_minutes".to_string(),
        });
    }

    Ok(())
}

/// Validates a spot count for one add-spots entry.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_SPOTS_PER_REQUEST`]
pub fn validate_spot_count(count: i64) -> ValidationResult<()> {
    if count <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "count".to_string(),
        });
    }

    if count > MAX_SPOTS_PER_REQUEST {
        return Err(ValidationError::OutOfRange {
            field: "count".to_string(),
            min: 1,
            max: MAX_SPOTS_PER_REQUEST,
        });
    }

    Ok(())
}

/// Validates a tendered payment amount in cents.
///
/// Zero is allowed: a stay within the grace period costs nothing and is
/// settled with a zero payment.
pub fn validate_paid_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "paid_amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_plate() {
        assert_eq!(validate_plate("AB-123").unwrap(), "AB-123");
        assert_eq!(validate_plate("  DL-01-AAA  ").unwrap(), "DL-01-AAA");

        assert!(validate_plate("").is_err());
        assert!(validate_plate("   ").is_err());
        assert!(validate_plate(&"A".repeat(MAX_PLATE_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_plate_counts_characters_not_bytes() {
        // "Ü" is two bytes in UTF-8; a plate of exactly MAX_PLATE_LENGTH
        // such characters is within the limit, one more is not.
        let at_limit = "Ü".repeat(MAX_PLATE_LENGTH);
        assert_eq!(validate_plate(&at_limit).unwrap(), at_limit);
        assert!(validate_plate(&"Ü".repeat(MAX_PLATE_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_rate_and_grace() {
        assert!(validate_rate_per_hour_cents(0).is_ok());
        assert!(validate_rate_per_hour_cents(4000).is_ok());
        assert!(validate_rate_per_hour_cents(-1).is_err());

        assert!(validate_grace_minutes(0).is_ok());
        assert!(validate_grace_minutes(10).is_ok());
        assert!(validate_grace_minutes(-1).is_err());
    }

    #[test]
    fn test_validate_spot_count() {
        assert!(validate_spot_count(1).is_ok());
        assert!(validate_spot_count(MAX_SPOTS_PER_REQUEST).is_ok());

        assert!(validate_spot_count(0).is_err());
        assert!(validate_spot_count(-3).is_err());
        assert!(validate_spot_count(MAX_SPOTS_PER_REQUEST + 1).is_err());
    }

    #[test]
    fn test_validate_paid_cents() {
        assert!(validate_paid_cents(0).is_ok());
        assert!(validate_paid_cents(4667).is_ok());
        assert!(validate_paid_cents(-1).is_err());
    }
}
