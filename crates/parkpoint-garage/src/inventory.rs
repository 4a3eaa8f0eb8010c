//! # Spot Inventory
//!
//! The set of typed spots with occupancy state. Spots keep their
//! configuration (insertion) order, which makes allocation fully
//! deterministic: given the same inventory and occupancy, the same vehicle
//! category always gets the same spot.

use parkpoint_core::policy::{preferred_spot_types, FALLBACK_SPOT_TYPE};
use parkpoint_core::{Spot, SpotType, VehicleCategory};

/// Insertion-ordered spot inventory with a monotone id counter.
///
/// Spots are created at configuration time and never deleted during a
/// session; ids start at 1 and are never reused.
#[derive(Debug)]
pub struct SpotInventory {
    spots: Vec<Spot>,
    next_id: u32,
}

/// Same as `new()`: ids must start at 1, so a derived all-zero default
/// would hand out an invalid id 0.
impl Default for SpotInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl SpotInventory {
    pub fn new() -> Self {
        SpotInventory {
            spots: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates one spot of `spot_type` and returns its id.
    pub fn add_spot(&mut self, spot_type: SpotType) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.spots.push(Spot::new(id, spot_type));
        id
    }

    /// All spots in configuration order.
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Looks a spot up by id.
    pub fn spot(&self, id: u32) -> Option<&Spot> {
        self.spots.iter().find(|s| s.id == id)
    }

    /// Finds the spot a vehicle of `category` should be assigned, if any.
    ///
    /// ## Search Order
    /// 1. Each type in the category's preference list, most preferred
    ///    first; within a type, spots in configuration order.
    /// 2. Any free HANDICAPPED spot as the universal last resort.
    ///
    /// No randomness, no load balancing: the first free match wins.
    pub fn find_allocatable(&self, category: VehicleCategory) -> Option<u32> {
        for &wanted in preferred_spot_types(category) {
            if let Some(spot) = self
                .spots
                .iter()
                .find(|s| s.spot_type == wanted && s.is_available())
            {
                return Some(spot.id);
            }
        }

        self.spots
            .iter()
            .find(|s| s.spot_type == FALLBACK_SPOT_TYPE && s.is_available())
            .map(|s| s.id)
    }

    /// Marks `spot_id` occupied by `ticket_id`.
    ///
    /// Returns `false` if the spot does not exist or was already occupied;
    /// the caller must abort the entry, not retry silently.
    pub fn assign(&mut self, spot_id: u32, ticket_id: &str) -> bool {
        match self.spots.iter_mut().find(|s| s.id == spot_id) {
            Some(spot) => spot.assign(ticket_id),
            None => false,
        }
    }

    /// Frees `spot_id` unconditionally. Idempotent; unknown ids are a no-op.
    pub fn release(&mut self, spot_id: u32) {
        if let Some(spot) = self.spots.iter_mut().find(|s| s.id == spot_id) {
            spot.release();
        }
    }

    /// Total number of configured spots.
    pub fn total(&self) -> usize {
        self.spots.len()
    }

    /// Number of currently occupied spots.
    pub fn occupied(&self) -> usize {
        self.spots.iter().filter(|s| !s.is_available()).count()
    }

    /// Number of currently free spots.
    pub fn free(&self) -> usize {
        self.total() - self.occupied()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
