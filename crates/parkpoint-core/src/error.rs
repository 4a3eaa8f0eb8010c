//! # Error Types
//!
//! Domain-specific error types for parkpoint-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  parkpoint-core errors (this file)                                     │
//! │  ├── GarageError       - Domain workflow failures                      │
//! │  └── ValidationError   - Input validation failures                     │
//! │                                                                         │
//! │  Flow: ValidationError → GarageError → caller-facing message           │
//! │                                                                         │
//! │  Every error is recoverable: the caller corrects its input and         │
//! │  retries. No error leaves partial state behind (all workflows are      │
//! │  all-or-nothing) and none is fatal to the process.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (ticket id, amounts, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;
use crate::types::VehicleCategory;

// =============================================================================
// Garage Error
// =============================================================================

/// Garage workflow errors.
///
/// These errors represent business rule violations during entry, exit or
/// configuration. They should be caught and translated to user-friendly
/// messages by the caller.
#[derive(Debug, Error)]
pub enum GarageError {
    /// Malformed input: empty plate, unknown enum value, negative amount.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// No free spot is compatible with the vehicle.
    ///
    /// ## When This Occurs
    /// - Every spot type in the category's preference list is full
    /// - The handicapped fallback is also full (or not configured)
    ///
    /// Entry is denied with no state change; the vehicle may retry once
    /// another vehicle exits.
    #[error("No suitable spot available for {category} vehicle")]
    NoAvailableSpot { category: VehicleCategory },

    /// Internal consistency failure while allocating.
    ///
    /// ## When This Occurs
    /// - A spot reported free turned out occupied at assignment time
    /// - A freshly generated ticket id collided with an existing one
    ///
    /// Should be unreachable in a correctly-locked single-threaded garage;
    /// if seen, it indicates a concurrency bug. The entry is aborted, never
    /// retried silently.
    #[error("Allocation conflict: {0}")]
    AllocationConflict(String),

    /// Unknown or already-closed ticket id.
    ///
    /// "Never existed" and "already settled" are indistinguishable to the
    /// caller; both produce this error.
    #[error("Invalid or already-closed ticket: {0}")]
    InvalidTicket(String),

    /// Tendered amount is below the computed fee.
    ///
    /// ## User Workflow
    /// ```text
    /// Exit request (paid: 40.00)
    ///      │
    ///      ▼
    /// Required fee: 46.67
    ///      │
    ///      ▼
    /// InsufficientPayment { required: 46.67, provided: 40.00 }
    ///      │
    ///      ▼
    /// Gate shows: "Required 46.67, provided 40.00" (ticket stays open)
    /// ```
    #[error("Insufficient payment: required {required}, provided {provided}")]
    InsufficientPayment { required: Money, provided: Money },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in the allowed set (unknown enum name).
    #[error("{field} '{value}' must be one of: {allowed:?}")]
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<&'static str>,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with GarageError.
pub type GarageResult<T> = Result<T, GarageError>;

// =============================================================================
// Unit Tests
// =============================================================================
