//! # Garage State
//!
//! Shared-ownership wrapper around one [`GarageService`].
//!
//! ## Thread Safety
//! The service is wrapped in `Arc<Mutex<T>>` because:
//! 1. The reference behavior is single-threaded, but embedding shells may
//!    serve several gates/terminals against one garage
//! 2. Each entry or exit must run as one critical section: the
//!    read-modify-write of spot occupancy and the move of a ticket from
//!    active to archived are atomic with respect to other workflows
//! 3. Two concurrent exits for the same ticket cannot both succeed — the
//!    second finds the ticket already archived and fails with
//!    `InvalidTicket`, never double-paying or double-releasing
//!
//! ## Why Not RwLock?
//! Entry and exit both mutate, and snapshots are cheap. An RwLock would
//! add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use crate::service::GarageService;

/// Shareable handle to a single garage.
#[derive(Clone)]
pub struct GarageState {
    garage: Arc<Mutex<GarageService>>,
}

impl GarageState {
    /// Creates a state wrapper around a fresh default garage.
    pub fn new() -> Self {
        Self::from_service(GarageService::new())
    }

    /// Wraps an already-configured service (tests inject their clock and
    /// id source through this).
    pub fn from_service(service: GarageService) -> Self {
        GarageState {
            garage: Arc::new(Mutex::new(service)),
        }
    }

    /// Executes a function with read access to the garage.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let snapshot = state.with_garage(|g| g.occupancy_snapshot());
    /// ```
    pub fn with_garage<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&GarageService) -> R,
    {
        let garage = self.garage.lock().expect("Garage mutex poisoned");
        f(&garage)
    }

    /// Executes a function with write access to the garage.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let ticket = state.with_garage_mut(|g| g.enter_vehicle(plate, category))?;
    /// ```
    pub fn with_garage_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut GarageService) -> R,
    {
        let mut garage = self.garage.lock().expect("Garage mutex poisoned");
        f(&mut garage)
    }
}

impl Default for GarageState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
