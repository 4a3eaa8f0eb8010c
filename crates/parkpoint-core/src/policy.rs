//! # Compatibility Policy
//!
//! Maps a vehicle category to the ordered list of spot types it may park
//! in, first entry most preferred. Represented as pure lookup data so that
//! adding a category or spot type is a data change, not a code change.
//!
//! Handicapped spots never appear in a preference list; they are the
//! universal last-resort fallback for ANY category when nothing else is
//! free. The fallback is intentionally unconditional (no permit check) —
//! a known policy gap, kept deliberately; see DESIGN.md.

use crate::types::{SpotType, VehicleCategory};

// =============================================================================
// Preference Tables
// =============================================================================

const CAR_PREFERENCES: &[SpotType] = &[SpotType::Compact, SpotType::Regular, SpotType::Large];
const TRUCK_PREFERENCES: &[SpotType] = &[SpotType::Large];
const MOTORBIKE_PREFERENCES: &[SpotType] =
    &[SpotType::Motorbike, SpotType::Compact, SpotType::Regular];
const VAN_PREFERENCES: &[SpotType] = &[SpotType::Regular];

/// The spot type any vehicle may fall back to when its preference list is
/// exhausted.
pub const FALLBACK_SPOT_TYPE: SpotType = SpotType::Handicapped;

/// Ordered spot-type preferences for a vehicle category (first = most
/// preferred).
pub const fn preferred_spot_types(category: VehicleCategory) -> &'static [SpotType] {
    match category {
        VehicleCategory::Car => CAR_PREFERENCES,
        VehicleCategory::Truck => TRUCK_PREFERENCES,
        VehicleCategory::Motorbike => MOTORBIKE_PREFERENCES,
        VehicleCategory::Van => VAN_PREFERENCES,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_orders() {
        assert_eq!(
            preferred_spot_types(VehicleCategory::Motorbike),
            &[SpotType::Motorbike, SpotType::Compact, SpotType::Regular]
        );
        assert_eq!(
            preferred_spot_types(VehicleCategory::Truck),
            &[SpotType::Large]
        );
        assert_eq!(
            preferred_spot_types(VehicleCategory::Van),
            &[SpotType::Regular]
        );
        assert_eq!(
            preferred_spot_types(VehicleCategory::Car),
            &[SpotType::Compact, SpotType::Regular, SpotType::Large]
        );
    }

    #[test]
    fn test_handicapped_is_never_a_preference() {
        for category in VehicleCategory::ALL {
            assert!(
                !preferred_spot_types(category).contains(&SpotType::Handicapped),
                "{category} lists HANDICAPPED as a preference"
            );
        }
    }
}
