//! # Tariff Module
//!
//! The active pricing rule: an hourly rate plus a grace period.
//!
//! ## Fee Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  duration ≤ grace      →  fee = 0                                       │
//! │  duration > grace      →  fee = ceil(duration × rate / 60) cents        │
//! │                                                                         │
//! │  The FULL duration is billed once the grace period is exceeded; the    │
//! │  grace period is a threshold, not a deductible.                         │
//! │                                                                         │
//! │  Rounding is CEILING to the cent — never round down, so the garage     │
//! │  never undercharges by a fraction of a cent.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Replacing the garage's tariff never touches already-closed tickets;
//! open tickets are billed under whichever tariff is in effect when they
//! exit.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GarageResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_grace_minutes, validate_rate_per_hour_cents};
use crate::{DEFAULT_GRACE_MINUTES, DEFAULT_RATE_PER_HOUR_CENTS};

// =============================================================================
// Tariff
// =============================================================================

/// The active pricing rule. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    rate_per_hour_cents: i64,
    grace_minutes: i64,
}

impl Tariff {
    /// Creates a tariff, rejecting negative rate or grace period.
    pub fn new(rate_per_hour_cents: i64, grace_minutes: i64) -> GarageResult<Self> {
        validate_rate_per_hour_cents(rate_per_hour_cents)?;
        validate_grace_minutes(grace_minutes)?;
        Ok(Tariff {
            rate_per_hour_cents,
            grace_minutes,
        })
    }

    /// Hourly rate.
    #[inline]
    pub fn rate_per_hour(&self) -> Money {
        Money::from_cents(self.rate_per_hour_cents)
    }

    /// Minutes of stay that incur zero fee.
    #[inline]
    pub const fn grace_minutes(&self) -> i64 {
        self.grace_minutes
    }

    /// Computes the fee for a stay of `duration_minutes`.
    ///
    /// ## Rules
    /// - Negative durations are a precondition violation (the caller must
    ///   never present `now < entry_time`) and fail as invalid input.
    /// - Durations within the grace period are free.
    /// - Otherwise the full duration is billed at the per-minute rate and
    ///   rounded **up** to the nearest cent.
    ///
    /// ## Example
    /// ```rust
    /// use parkpoint_core::Tariff;
    ///
    /// // 40.00/hour with 10 free minutes
    /// let tariff = Tariff::new(4000, 10).unwrap();
    ///
    /// assert_eq!(tariff.compute_fee(10).unwrap().cents(), 0);
    /// // 70 × (4000 / 60) = 4666.67 → rounds up to 46.67
    /// assert_eq!(tariff.compute_fee(70).unwrap().cents(), 4667);
    /// ```
    pub fn compute_fee(&self, duration_minutes: i64) -> GarageResult<Money> {
        if duration_minutes < 0 {
            return Err(ValidationError::MustBeNonNegative {
                field: "duration_minutes".to_string(),
            }
            .into());
        }

        if duration_minutes <= self.grace_minutes {
            return Ok(Money::zero());
        }

        // Ceiling division in i128 to rule out overflow on absurd stays.
        let raw = duration_minutes as i128 * self.rate_per_hour_cents as i128;
        let fee_cents = (raw + 59) / 60;
        Ok(Money::from_cents(fee_cents as i64))
    }
}

/// The tariff the garage opens with until an operator reconfigures it.
impl Default for Tariff {
    fn default() -> Self {
        Tariff {
            rate_per_hour_cents: DEFAULT_RATE_PER_HOUR_CENTS,
            grace_minutes: DEFAULT_GRACE_MINUTES,
        }
    }
}

impl fmt::Display for Tariff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tariff: {} per hour, {} min grace",
            self.rate_per_hour(),
            self.grace_minutes
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
