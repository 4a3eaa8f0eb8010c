//! # Domain Types
//!
//! Core domain types used throughout ParkPoint.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Vehicle     │   │      Spot       │   │     Ticket      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  plate          │   │  id (u32 ≥ 1)   │   │  id (string)    │       │
//! │  │  category       │   │  spot_type      │   │  vehicle        │       │
//! │  └─────────────────┘   │  occupied_by    │   │  spot_id        │       │
//! │                        └─────────────────┘   │  entry/exit/fee │       │
//! │  ┌─────────────────┐   ┌─────────────────┐   └─────────────────┘       │
//! │  │ VehicleCategory │   │    SpotType     │   ┌─────────────────┐       │
//! │  │  Car            │   │  Compact        │   │     Payment     │       │
//! │  │  Truck          │   │  Regular        │   │  ─────────────  │       │
//! │  │  Motorbike      │   │  Large          │   │  id, ticket_id  │       │
//! │  │  Van            │   │  Motorbike      │   │  amount, method │       │
//! │  └─────────────────┘   │  Handicapped    │   │  paid_at        │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants Guarded Here
//! - `Spot::occupied_by` is `Some` ⇔ the spot is unavailable; only
//!   `assign`/`release` mutate it.
//! - A `Ticket` is open ⇔ `exit_time` and `fee` are both unset; `close`
//!   sets both exactly once and never unsets them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Vehicle Category
// =============================================================================

/// The category of a vehicle requesting entry. Fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    Car,
    Truck,
    Motorbike,
    Van,
}

impl VehicleCategory {
    /// All categories, for error messages and iteration.
    pub const ALL: [VehicleCategory; 4] = [
        VehicleCategory::Car,
        VehicleCategory::Truck,
        VehicleCategory::Motorbike,
        VehicleCategory::Van,
    ];

    /// Canonical uppercase name, as entered at the gate terminal.
    pub const fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "CAR",
            VehicleCategory::Truck => "TRUCK",
            VehicleCategory::Motorbike => "MOTORBIKE",
            VehicleCategory::Van => "VAN",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the canonical name case-insensitively ("car", "CAR", "Car").
impl FromStr for VehicleCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|c| c.as_str() == upper)
            .copied()
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "vehicle category".to_string(),
                value: s.trim().to_string(),
                allowed: Self::ALL.iter().map(|c| c.as_str()).collect(),
            })
    }
}

// =============================================================================
// Spot Type
// =============================================================================

/// The physical type of a parking spot. Fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpotType {
    Compact,
    Regular,
    Large,
    Motorbike,
    Handicapped,
}

impl SpotType {
    /// All spot types, for error messages and iteration.
    pub const ALL: [SpotType; 5] = [
        SpotType::Compact,
        SpotType::Regular,
        SpotType::Large,
        SpotType::Motorbike,
        SpotType::Handicapped,
    ];

    /// Canonical uppercase name, as used in configuration input.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SpotType::Compact => "COMPACT",
            SpotType::Regular => "REGULAR",
            SpotType::Large => "LARGE",
            SpotType::Motorbike => "MOTORBIKE",
            SpotType::Handicapped => "HANDICAPPED",
        }
    }
}

impl fmt::Display for SpotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the canonical name case-insensitively.
impl FromStr for SpotType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|t| t.as_str() == upper)
            .copied()
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "spot type".to_string(),
                value: s.trim().to_string(),
                allowed: Self::ALL.iter().map(|t| t.as_str()).collect(),
            })
    }
}

// =============================================================================
// Vehicle
// =============================================================================

/// A vehicle presenting at the entry gate. Immutable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Licence plate (non-empty, validated at the service boundary).
    pub plate: String,

    /// Vehicle category, drives spot compatibility.
    pub category: VehicleCategory,
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.plate, self.category)
    }
}

// =============================================================================
// Spot
// =============================================================================

/// A single physical parking space of one fixed type.
///
/// Created at configuration time; never deleted during a session. The
/// occupancy field is private so that only `assign`/`release` can touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    /// Unique identifier, ≥ 1, assigned by the inventory.
    pub id: u32,

    /// Physical spot type; fixed for the spot's lifetime.
    pub spot_type: SpotType,

    /// Ticket currently occupying this spot, if any.
    occupied_by: Option<String>,
}

impl Spot {
    /// Creates a free spot.
    pub fn new(id: u32, spot_type: SpotType) -> Self {
        Spot {
            id,
            spot_type,
            occupied_by: None,
        }
    }

    /// Whether the spot can take a new assignment.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.occupied_by.is_none()
    }

    /// Ticket id of the current occupant, if occupied.
    #[inline]
    pub fn occupied_by(&self) -> Option<&str> {
        self.occupied_by.as_deref()
    }

    /// Marks the spot occupied by `ticket_id`.
    ///
    /// All-or-nothing: returns `false` without mutating if the spot is
    /// already occupied. A `false` here signals a double-assignment and
    /// must abort the entry in progress.
    pub fn assign(&mut self, ticket_id: &str) -> bool {
        if self.occupied_by.is_some() {
            return false;
        }
        self.occupied_by = Some(ticket_id.to_string());
        true
    }

    /// Clears occupancy unconditionally. Idempotent.
    pub fn release(&mut self) {
        self.occupied_by = None;
    }
}

impl fmt::Display for Spot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Spot[{}:{}] {}",
            self.id,
            self.spot_type,
            if self.is_available() {
                "(FREE)"
            } else {
                "(OCCUPIED)"
            }
        )
    }
}

// =============================================================================
// Ticket
// =============================================================================

/// The record of one vehicle's stay, from entry to (eventual) exit.
///
/// ## Lifecycle
/// ```text
/// enter_vehicle ──► OPEN (exit_time = None, fee = None)
///                     │
///                     ▼ settle
///                   CLOSED (exit_time = Some, fee = Some) — immutable
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket identifier.
    pub id: String,

    /// Vehicle this ticket was issued to.
    pub vehicle: Vehicle,

    /// Spot the vehicle was assigned.
    pub spot_id: u32,

    /// When the vehicle entered.
    pub entry_time: DateTime<Utc>,

    /// When the vehicle exited; `None` while the ticket is open.
    exit_time: Option<DateTime<Utc>>,

    /// Settled fee in cents; `None` while the ticket is open.
    fee_cents: Option<i64>,
}

impl Ticket {
    /// Creates a new open ticket.
    pub fn new(id: String, vehicle: Vehicle, spot_id: u32, entry_time: DateTime<Utc>) -> Self {
        Ticket {
            id,
            vehicle,
            spot_id,
            entry_time,
            exit_time: None,
            fee_cents: None,
        }
    }

    /// Whether the ticket is still open (vehicle inside).
    #[inline]
    pub fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }

    /// Exit timestamp, set exactly once at settlement.
    #[inline]
    pub fn exit_time(&self) -> Option<DateTime<Utc>> {
        self.exit_time
    }

    /// Settled fee, set exactly once at settlement.
    #[inline]
    pub fn fee(&self) -> Option<Money> {
        self.fee_cents.map(Money::from_cents)
    }

    /// Closes the ticket with an exit time and the settled fee.
    ///
    /// Returns `false` without mutating if the ticket was already closed;
    /// a closed ticket is immutable and is never re-opened.
    pub fn close(&mut self, exit_time: DateTime<Utc>, fee: Money) -> bool {
        if self.exit_time.is_some() {
            return false;
        }
        self.exit_time = Some(exit_time);
        self.fee_cents = Some(fee.cents());
        true
    }

    /// Whole minutes elapsed between entry and `end_time`.
    ///
    /// Negative when `end_time < entry_time`, which callers must treat as
    /// a precondition violation (the tariff rejects it).
    pub fn duration_minutes_up_to(&self, end_time: DateTime<Utc>) -> i64 {
        (end_time - self.entry_time).num_minutes()
    }
}

// =============================================================================
// Payment
// =============================================================================

/// Immutable record of an accepted settlement.
///
/// Exists only if the settlement succeeded; a rejected payment leaves no
/// trace. The amount is the fee actually kept, never including change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique payment identifier.
    pub id: String,

    /// Ticket this payment settled.
    pub ticket_id: String,

    /// Amount kept, in cents.
    pub amount_cents: i64,

    /// When the settlement was accepted.
    pub paid_at: DateTime<Utc>,

    /// Free-form method label ("CASH", "CARD", "UPI", ...).
    pub method: String,
}

impl Payment {
    /// Creates a settlement record.
    pub fn new(
        id: String,
        ticket_id: String,
        amount: Money,
        paid_at: DateTime<Utc>,
        method: String,
    ) -> Self {
        Payment {
            id,
            ticket_id,
            amount_cents: amount.cents(),
            paid_at,
            method,
        }
    }

    /// Amount kept as a Money value.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
