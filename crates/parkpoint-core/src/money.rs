//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A parking fee computed as 70 × (40.0 / 60.0) lands on                  │
//! │  46.66666666666667 and needs an epsilon to compare against the          │
//! │  amount tendered at the gate.                                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    The fee is 4667 cents, the tendered amount is 4667 cents, and        │
//! │    `paid < required` is an exact integer comparison.                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use parkpoint_core::money::Money;
//!
//! // Create from cents (preferred)
//! let fee = Money::from_cents(4667); // 46.67
//!
//! // Arithmetic operations
//! let total = fee + Money::from_cents(500); // 51.67
//!
//! // NEVER do this:
//! // let bad = Money::from_float(46.67); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction (change computation) may transit through
///   negative intermediates before clamping
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support plus total ordering for fee comparison
///
/// ## Where Money is Used
/// ```text
/// Tariff.rate_per_hour ──► compute_fee ──► Ticket.fee ──► Payment.amount
///                                               │
///                                               └──► change at the gate
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use parkpoint_core::money::Money;
    ///
    /// let fee = Money::from_cents(4667); // Represents 46.67
    /// assert_eq!(fee.cents(), 4667);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use parkpoint_core::money::Money;
    ///
    /// let rate = Money::from_major_minor(40, 0); // 40.00
    /// assert_eq!(rate.cents(), 4000);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major_units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Subtracts `other`, clamping the result at zero.
    ///
    /// ## Example
    /// ```rust
    /// use parkpoint_core::money::Money;
    ///
    /// let paid = Money::from_cents(5000);
    /// let fee = Money::from_cents(4667);
    ///
    /// // Change given at the gate: never negative
    /// assert_eq!(paid.saturating_sub_at_zero(fee).cents(), 333);
    /// assert_eq!(fee.saturating_sub_at_zero(paid).cents(), 0);
    /// ```
    #[inline]
    pub const fn saturating_sub_at_zero(&self, other: Money) -> Money {
        let diff = self.0 - other.0;
        if diff < 0 {
            Money(0)
        } else {
            Money(diff)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. Receipt rendering belongs to the shell
/// layer, which handles currency symbols and localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.major_units().abs(),
            self.minor_units()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
