//! # parkpoint-core: Pure Business Logic for ParkPoint
//!
//! This crate is the **heart** of ParkPoint. It contains all parking-garage
//! business rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ParkPoint Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                External caller (console menu, API, ...)         │   │
//! │  │    configure tariff ──► add spots ──► entry ──► exit            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  parkpoint-garage (service layer)                │   │
//! │  │    SpotInventory, TicketLedger, GarageService, GarageState      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ parkpoint-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  tariff   │  │  policy   │  │   │
//! │  │   │  Vehicle  │  │   Money   │  │  Tariff   │  │ spot-type │  │   │
//! │  │   │  Ticket   │  │  (cents)  │  │  fee calc │  │ prefs     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO RANDOMNESS • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vehicle, Spot, Ticket, Payment, enums)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`tariff`] - Grace-period tariff and fee computation
//! - [`policy`] - Vehicle category to spot type compatibility
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Clock reads and id generation are injected by the layer above
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod policy;
pub mod tariff;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use parkpoint_core::Money` instead of
// `use parkpoint_core::money::Money`

pub use error::{GarageError, GarageResult, ValidationError};
pub use money::Money;
pub use tariff::Tariff;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default tariff rate: 40.00 per hour, in cents.
///
/// ## Why a constant?
/// A garage is usable straight after construction; operators reconfigure
/// the tariff at will, but the service never starts without one.
pub const DEFAULT_RATE_PER_HOUR_CENTS: i64 = 4000;

/// Default grace period: the first 10 minutes of any stay are free.
pub const DEFAULT_GRACE_MINUTES: i64 = 10;

/// Maximum accepted length of a licence plate string.
///
/// ## Business Reason
/// No real plate comes close; longer input is almost certainly a paste
/// mistake at the gate terminal.
pub const MAX_PLATE_LENGTH: usize = 32;

/// Maximum number of spots a single add-spots entry may create.
///
/// ## Business Reason
/// Prevents accidental runaway configuration (e.g. typing 10000 instead
/// of 100). Larger garages are configured in several batches.
pub const MAX_SPOTS_PER_REQUEST: i64 = 1000;
