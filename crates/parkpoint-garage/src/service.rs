//! # Garage Service
//!
//! Orchestrates the two workflows with nontrivial decision logic:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ENTRY                              EXIT                                │
//! │                                                                         │
//! │  validate plate + category          look up active ticket               │
//! │        │                                  │                             │
//! │        ▼                                  ▼                             │
//! │  policy → inventory search          elapsed minutes → tariff fee        │
//! │        │                                  │                             │
//! │        ▼                                  ▼                             │
//! │  assign spot (all-or-nothing)       paid ≥ required?                    │
//! │        │                                  │                             │
//! │        ▼                                  ▼                             │
//! │  open ticket in ledger              close ticket, release spot,         │
//! │                                     record payment, report change       │
//! │                                                                         │
//! │  Every failure leaves the garage exactly as it was: no partial          │
//! │  mutation survives a denied entry or a rejected settlement.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service is single-threaded by design; see `GarageState` for the
//! mutual-exclusion wrapper used when callers share one garage.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use parkpoint_core::validation::{validate_paid_cents, validate_plate, validate_spot_count};
use parkpoint_core::{
    GarageError, GarageResult, Money, Payment, SpotType, Tariff, Ticket, Vehicle, VehicleCategory,
};

use crate::clock::{Clock, SystemClock};
use crate::ids::{IdSource, UuidIdSource};
use crate::inventory::SpotInventory;
use crate::ledger::TicketLedger;

// =============================================================================
// Report DTOs
// =============================================================================

/// One entry of an add-spots request: a spot type name and how many to
/// create. The type arrives as text because configuration input is text
/// (`REGULAR:10,COMPACT:5`); unknown names are reported, not fatal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotRequest {
    pub spot_type: String,
    pub count: i64,
}

/// An add-spots entry that was skipped, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedSpotRequest {
    pub spot_type: String,
    pub count: i64,
    pub reason: String,
}

/// Outcome of an add-spots request. Partial success is normal: valid
/// entries are processed, invalid ones are listed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotReport {
    pub created_ids: Vec<u32>,
    pub skipped: Vec<SkippedSpotRequest>,
}

/// Per-spot status within an occupancy snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotStatus {
    pub spot_id: u32,
    pub spot_type: SpotType,
    pub occupied: bool,
    /// Occupying ticket, when held.
    pub ticket_id: Option<String>,
    /// Occupying vehicle's plate, when held.
    pub plate: Option<String>,
    /// Occupying vehicle's category, when held.
    pub category: Option<VehicleCategory>,
}

/// Point-in-time view of the whole garage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancySnapshot {
    pub total: usize,
    pub occupied: usize,
    pub free: usize,
    pub spots: Vec<SpotStatus>,
}

/// Active and archived tickets, oldest entry first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketLists {
    pub active: Vec<Ticket>,
    pub archived: Vec<Ticket>,
}

/// Result of a successful settlement.
///
/// Change is a reporting artifact at this boundary only — it is handed to
/// the driver and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitReceipt {
    pub ticket: Ticket,
    pub payment: Payment,
    pub change_cents: i64,
}

impl ExitReceipt {
    /// Change as a Money value.
    pub fn change(&self) -> Money {
        Money::from_cents(self.change_cents)
    }
}

// =============================================================================
// Garage Service
// =============================================================================

/// One garage: spot inventory, ticket ledger, payment records and the
/// active tariff, plus the injected clock and id-source capabilities.
///
/// No ambient/static state anywhere: construct as many independent
/// garages as you like, each fully isolated (and trivially testable).
pub struct GarageService {
    inventory: SpotInventory,
    ledger: TicketLedger,
    payments: HashMap<String, Payment>,
    tariff: Tariff,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
}

impl GarageService {
    /// Creates a garage with the system clock, UUID-derived ids and the
    /// default tariff. Spots are added separately via [`Self::add_spots`].
    pub fn new() -> Self {
        Self::with_capabilities(Box::new(SystemClock), Box::new(UuidIdSource))
    }

    /// Creates a garage with injected clock and id source (tests pass a
    /// `ManualClock` and a `SequenceIdSource` here).
    pub fn with_capabilities(clock: Box<dyn Clock>, ids: Box<dyn IdSource>) -> Self {
        GarageService {
            inventory: SpotInventory::new(),
            ledger: TicketLedger::new(),
            payments: HashMap::new(),
            tariff: Tariff::default(),
            clock,
            ids,
        }
    }

    /// The tariff currently in effect.
    pub fn tariff(&self) -> Tariff {
        self.tariff
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Replaces the current tariff. Rejects negative rate or grace period.
    ///
    /// Only open tickets are affected: whichever tariff is in effect at
    /// exit time governs the fee. Already-closed tickets keep the fee they
    /// settled at.
    pub fn configure_tariff(
        &mut self,
        rate_per_hour_cents: i64,
        grace_minutes: i64,
    ) -> GarageResult<Tariff> {
        let tariff = Tariff::new(rate_per_hour_cents, grace_minutes)?;
        self.tariff = tariff;
        info!(%tariff, "tariff configured");
        Ok(tariff)
    }

    /// Adds spots in batches, one entry per spot type.
    ///
    /// Invalid entries (unknown type name, non-positive or oversized
    /// count) are skipped with a recorded reason while the remaining
    /// entries are still processed — partial success is reported, never
    /// hidden.
    pub fn add_spots(&mut self, requests: &[SpotRequest]) -> SpotReport {
        let mut report = SpotReport {
            created_ids: Vec::new(),
            skipped: Vec::new(),
        };

        for request in requests {
            match self.admit_spot_request(request) {
                Ok(ids) => report.created_ids.extend(ids),
                Err(err) => {
                    warn!(
                        spot_type = %request.spot_type,
                        count = request.count,
                        %err,
                        "skipping invalid spot request"
                    );
                    report.skipped.push(SkippedSpotRequest {
                        spot_type: request.spot_type.clone(),
                        count: request.count,
                        reason: err.to_string(),
                    });
                }
            }
        }

        info!(
            created = report.created_ids.len(),
            skipped = report.skipped.len(),
            "spots configured"
        );
        report
    }

    fn admit_spot_request(&mut self, request: &SpotRequest) -> GarageResult<Vec<u32>> {
        let spot_type: SpotType = request.spot_type.parse()?;
        validate_spot_count(request.count)?;

        let ids = (0..request.count)
            .map(|_| self.inventory.add_spot(spot_type))
            .collect();
        Ok(ids)
    }

    // -------------------------------------------------------------------------
    // Entry Workflow
    // -------------------------------------------------------------------------

    /// Admits a vehicle: finds a compatible free spot, assigns it and
    /// issues an open ticket stamped with the current time.
    ///
    /// ## Failure Modes (all leave the garage unchanged)
    /// - `InvalidInput`: empty plate or unknown category
    /// - `NoAvailableSpot`: nothing compatible is free
    /// - `AllocationConflict`: internal consistency error (double
    ///   assignment or ticket id collision) — entry aborted, not retried
    pub fn enter_vehicle(&mut self, plate: &str, category: &str) -> GarageResult<Ticket> {
        debug!(plate, category, "enter_vehicle");

        let plate = validate_plate(plate)?;
        let category: VehicleCategory = category.parse()?;

        let spot_id = self
            .inventory
            .find_allocatable(category)
            .ok_or(GarageError::NoAvailableSpot { category })?;

        let ticket_id = self.ids.ticket_id();
        if !self.inventory.assign(spot_id, &ticket_id) {
            return Err(GarageError::AllocationConflict(format!(
                "spot {spot_id} was already occupied"
            )));
        }

        let ticket = Ticket::new(
            ticket_id,
            Vehicle { plate, category },
            spot_id,
            self.clock.now(),
        );

        // Roll the spot back if the ledger rejects the id, keeping the
        // whole workflow all-or-nothing.
        if let Err(err) = self.ledger.open(ticket.clone()) {
            self.inventory.release(spot_id);
            return Err(err);
        }

        info!(ticket_id = %ticket.id, spot_id, plate = %ticket.vehicle.plate, "vehicle entered");
        Ok(ticket)
    }

    // -------------------------------------------------------------------------
    // Exit Workflow
    // -------------------------------------------------------------------------

    /// Settles a ticket: computes the fee under the CURRENT tariff,
    /// verifies the tendered amount, then — as one indivisible step —
    /// closes the ticket, releases the spot and records the payment.
    ///
    /// The recorded payment amount is the required fee (the amount kept);
    /// overpayment is returned as change on the receipt and never stored.
    ///
    /// ## Failure Modes (all leave the garage unchanged)
    /// - `InvalidInput`: negative tendered amount
    /// - `InvalidTicket`: unknown or already-closed ticket id
    /// - `InsufficientPayment`: tendered amount below the required fee
    pub fn exit_vehicle(
        &mut self,
        ticket_id: &str,
        paid_cents: i64,
        method: &str,
    ) -> GarageResult<ExitReceipt> {
        debug!(ticket_id, paid_cents, method, "exit_vehicle");

        validate_paid_cents(paid_cents)?;
        let paid = Money::from_cents(paid_cents);

        let now = self.clock.now();
        let (spot_id, duration_minutes) = {
            let ticket = self
                .ledger
                .get_active(ticket_id)
                .ok_or_else(|| GarageError::InvalidTicket(ticket_id.to_string()))?;
            (ticket.spot_id, ticket.duration_minutes_up_to(now))
        };

        let required = self.tariff.compute_fee(duration_minutes)?;
        if paid < required {
            return Err(GarageError::InsufficientPayment {
                required,
                provided: paid,
            });
        }

        // Settlement proper: from here on nothing can fail, so the three
        // mutations below are indivisible with respect to the caller.
        let ticket = self.ledger.close(ticket_id, now, required)?;
        self.inventory.release(spot_id);

        let payment = Payment::new(
            self.ids.payment_id(),
            ticket_id.to_string(),
            required,
            now,
            method.trim().to_uppercase(),
        );
        self.payments.insert(payment.id.clone(), payment.clone());

        let change = paid.saturating_sub_at_zero(required);
        info!(
            ticket_id,
            duration_minutes,
            fee = %required,
            change = %change,
            "vehicle exited"
        );

        Ok(ExitReceipt {
            ticket,
            payment,
            change_cents: change.cents(),
        })
    }

    // -------------------------------------------------------------------------
    // Read-Only Views
    // -------------------------------------------------------------------------

    /// Point-in-time occupancy: totals plus per-spot status with the
    /// occupying ticket and vehicle where held.
    pub fn occupancy_snapshot(&self) -> OccupancySnapshot {
        let spots = self
            .inventory
            .spots()
            .iter()
            .map(|spot| {
                let ticket = spot
                    .occupied_by()
                    .and_then(|tid| self.ledger.get_active(tid));
                SpotStatus {
                    spot_id: spot.id,
                    spot_type: spot.spot_type,
                    occupied: !spot.is_available(),
                    ticket_id: spot.occupied_by().map(str::to_string),
                    plate: ticket.map(|t| t.vehicle.plate.clone()),
                    category: ticket.map(|t| t.vehicle.category),
                }
            })
            .collect();

        OccupancySnapshot {
            total: self.inventory.total(),
            occupied: self.inventory.occupied(),
            free: self.inventory.free(),
            spots,
        }
    }

    /// Active and archived tickets, oldest entry first.
    pub fn list_tickets(&self) -> TicketLists {
        TicketLists {
            active: self.ledger.active_tickets(),
            archived: self.ledger.archived_tickets(),
        }
    }

    /// All accepted settlements, oldest first.
    pub fn list_payments(&self) -> Vec<Payment> {
        let mut payments: Vec<Payment> = self.payments.values().cloned().collect();
        payments.sort_by(|a, b| a.paid_at.cmp(&b.paid_at).then(a.id.cmp(&b.id)));
        payments
    }
}

impl Default for GarageService {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::Arc;

    use crate::clock::ManualClock;
    use crate::ids::SequenceIdSource;

    fn start_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    /// A deterministic garage plus a handle to its clock.
    fn test_garage() -> (GarageService, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(start_time()));
        let garage = GarageService::with_capabilities(
            Box::new(SharedClock(clock.clone())),
            Box::new(SequenceIdSource::new()),
        );
        (garage, clock)
    }

    /// Lets the test keep a handle to the clock the garage owns.
    struct SharedClock(Arc<ManualClock>);

    impl Clock for SharedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0.now()
        }
    }

    fn spots(entries: &[(&str, i64)]) -> Vec<SpotRequest> {
        entries
            .iter()
            .map(|(t, c)| SpotRequest {
                spot_type: t.to_string(),
                count: *c,
            })
            .collect()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let (mut garage, clock) = test_garage();

        // Configure tariff 40.00/hr, 10 min grace; add one REGULAR spot.
        garage.configure_tariff(4000, 10).unwrap();
        let report = garage.add_spots(&spots(&[("REGULAR", 1)]));
        assert_eq!(report.created_ids, vec![1]);
        assert!(report.skipped.is_empty());

        // Enter CAR "AB-123" → ticket T0001 on that spot.
        let ticket = garage.enter_vehicle("AB-123", "CAR").unwrap();
        assert_eq!(ticket.id, "T0001");
        assert_eq!(ticket.spot_id, 1);
        assert!(ticket.is_open());

        // Second CAR entry → denied, inventory exhausted.
        assert!(matches!(
            garage.enter_vehicle("CD-456", "CAR"),
            Err(GarageError::NoAvailableSpot { .. })
        ));

        // 70 minutes later, 40.00 is not enough: required is 46.67.
        clock.advance_minutes(70);
        match garage.exit_vehicle("T0001", 4000, "CASH") {
            Err(GarageError::InsufficientPayment { required, provided }) => {
                assert_eq!(required.cents(), 4667);
                assert_eq!(provided.cents(), 4000);
            }
            other => panic!("expected InsufficientPayment, got {other:?}"),
        }
        // The failed settlement changed nothing.
        assert_eq!(garage.occupancy_snapshot().occupied, 1);
        assert_eq!(garage.list_tickets().active.len(), 1);

        // Exact payment settles with zero change and frees the spot.
        let receipt = garage.exit_vehicle("T0001", 4667, "CASH").unwrap();
        assert_eq!(receipt.change_cents, 0);
        assert_eq!(receipt.ticket.fee(), Some(Money::from_cents(4667)));
        assert_eq!(receipt.payment.amount_cents, 4667);
        assert_eq!(receipt.payment.ticket_id, "T0001");
        assert_eq!(receipt.payment.method, "CASH");

        let snapshot = garage.occupancy_snapshot();
        assert_eq!((snapshot.occupied, snapshot.free), (0, 1));

        let tickets = garage.list_tickets();
        assert!(tickets.active.is_empty());
        assert_eq!(tickets.archived.len(), 1);
        assert_eq!(garage.list_payments().len(), 1);
    }

    #[test]
    fn test_entry_rejects_invalid_input_without_state_change() {
        let (mut garage, _clock) = test_garage();
        garage.add_spots(&spots(&[("REGULAR", 1)]));

        assert!(matches!(
            garage.enter_vehicle("", "CAR"),
            Err(GarageError::InvalidInput(_))
        ));
        assert!(matches!(
            garage.enter_vehicle("AB-123", "BICYCLE"),
            Err(GarageError::InvalidInput(_))
        ));

        assert_eq!(garage.occupancy_snapshot().occupied, 0);
        assert!(garage.list_tickets().active.is_empty());
    }

    #[test]
    fn test_no_double_allocation() {
        let (mut garage, _clock) = test_garage();
        garage.add_spots(&spots(&[("REGULAR", 2)]));

        let first = garage.enter_vehicle("AB-123", "VAN").unwrap();
        let second = garage.enter_vehicle("CD-456", "VAN").unwrap();
        assert_ne!(first.spot_id, second.spot_id);

        let snapshot = garage.occupancy_snapshot();
        assert!(snapshot.spots.iter().all(|s| s.occupied));
    }

    #[test]
    fn test_exit_within_grace_period_is_free() {
        let (mut garage, clock) = test_garage();
        garage.add_spots(&spots(&[("COMPACT", 1)]));

        let ticket = garage.enter_vehicle("AB-123", "CAR").unwrap();
        clock.advance_minutes(10);

        // Grace boundary: zero fee, zero payment accepted.
        let receipt = garage.exit_vehicle(&ticket.id, 0, "CASH").unwrap();
        assert_eq!(receipt.ticket.fee(), Some(Money::zero()));
        assert_eq!(receipt.change_cents, 0);
    }

    #[test]
    fn test_overpayment_returns_change() {
        let (mut garage, clock) = test_garage();
        garage.add_spots(&spots(&[("REGULAR", 1)]));

        let ticket = garage.enter_vehicle("AB-123", "CAR").unwrap();
        clock.advance_minutes(70);

        let receipt = garage.exit_vehicle(&ticket.id, 5000, "CARD").unwrap();
        // Fee kept is 46.67; the 3.33 surplus is change, not revenue.
        assert_eq!(receipt.payment.amount_cents, 4667);
        assert_eq!(receipt.change_cents, 333);
        assert_eq!(garage.list_payments()[0].amount_cents, 4667);
    }

    #[test]
    fn test_exit_underpaid_by_one_cent_fails() {
        let (mut garage, clock) = test_garage();
        garage.add_spots(&spots(&[("REGULAR", 1)]));

        let ticket = garage.enter_vehicle("AB-123", "CAR").unwrap();
        clock.advance_minutes(70);

        assert!(matches!(
            garage.exit_vehicle(&ticket.id, 4666, "CASH"),
            Err(GarageError::InsufficientPayment { .. })
        ));
        // Negative tender is malformed input, not an insufficiency.
        assert!(matches!(
            garage.exit_vehicle(&ticket.id, -1, "CASH"),
            Err(GarageError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_second_exit_fails_and_state_is_unchanged() {
        let (mut garage, clock) = test_garage();
        garage.add_spots(&spots(&[("REGULAR", 1)]));

        let ticket = garage.enter_vehicle("AB-123", "CAR").unwrap();
        clock.advance_minutes(30);
        garage.exit_vehicle(&ticket.id, 2000, "CASH").unwrap();

        assert!(matches!(
            garage.exit_vehicle(&ticket.id, 2000, "CASH"),
            Err(GarageError::InvalidTicket(_))
        ));

        // Still exactly one archived ticket and one payment.
        assert_eq!(garage.list_tickets().archived.len(), 1);
        assert_eq!(garage.list_payments().len(), 1);
        assert_eq!(garage.occupancy_snapshot().free, 1);
    }

    #[test]
    fn test_tariff_change_isolation() {
        let (mut garage, clock) = test_garage();
        garage.configure_tariff(4000, 10).unwrap();
        garage.add_spots(&spots(&[("REGULAR", 2)]));

        // First ticket settles under tariff A.
        let first = garage.enter_vehicle("AB-123", "CAR").unwrap();
        clock.advance_minutes(60);
        let settled = garage.exit_vehicle(&first.id, 4000, "CASH").unwrap();
        assert_eq!(settled.ticket.fee(), Some(Money::from_cents(4000)));

        // Second ticket is open across the reconfiguration; the tariff in
        // effect at exit time governs its fee.
        let second = garage.enter_vehicle("CD-456", "CAR").unwrap();
        clock.advance_minutes(60);
        garage.configure_tariff(6000, 10).unwrap();
        let receipt = garage.exit_vehicle(&second.id, 6000, "CASH").unwrap();
        assert_eq!(receipt.ticket.fee(), Some(Money::from_cents(6000)));

        // The already-closed first ticket kept its fee.
        let archived = garage.list_tickets().archived;
        let kept = archived.iter().find(|t| t.id == first.id).unwrap();
        assert_eq!(kept.fee(), Some(Money::from_cents(4000)));
    }

    #[test]
    fn test_configure_tariff_rejects_negatives() {
        let (mut garage, _clock) = test_garage();
        assert!(garage.configure_tariff(-1, 10).is_err());
        assert!(garage.configure_tariff(4000, -1).is_err());
        // The failed attempts left the default tariff in place.
        assert_eq!(garage.tariff(), Tariff::default());
    }

    #[test]
    fn test_add_spots_partial_success() {
        let (mut garage, _clock) = test_garage();

        let report = garage.add_spots(&spots(&[
            ("REGULAR", 2),
            ("HUGE", 3),    // unknown type name
            ("COMPACT", 0), // non-positive count
            ("MOTORBIKE", 1),
        ]));

        assert_eq!(report.created_ids, vec![1, 2, 3]);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].spot_type, "HUGE");
        assert!(report.skipped[0].reason.contains("must be one of"));
        assert_eq!(report.skipped[1].spot_type, "COMPACT");
        assert!(report.skipped[1].reason.contains("positive"));

        // Valid entries landed despite the invalid ones.
        assert_eq!(garage.occupancy_snapshot().total, 3);
    }

    #[test]
    fn test_occupancy_snapshot_details() {
        let (mut garage, _clock) = test_garage();
        garage.add_spots(&spots(&[("COMPACT", 1), ("REGULAR", 1)]));

        let ticket = garage.enter_vehicle("AB-123", "CAR").unwrap();
        let snapshot = garage.occupancy_snapshot();
        assert_eq!((snapshot.total, snapshot.occupied, snapshot.free), (2, 1, 1));

        let taken = &snapshot.spots[0];
        assert_eq!(taken.spot_id, ticket.spot_id);
        assert!(taken.occupied);
        assert_eq!(taken.ticket_id.as_deref(), Some(ticket.id.as_str()));
        assert_eq!(taken.plate.as_deref(), Some("AB-123"));
        assert_eq!(taken.category, Some(VehicleCategory::Car));

        let empty = &snapshot.spots[1];
        assert!(!empty.occupied);
        assert!(empty.ticket_id.is_none() && empty.plate.is_none());
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let (mut garage, _clock) = test_garage();
        garage.add_spots(&spots(&[("LARGE", 1)]));

        let value = serde_json::to_value(garage.occupancy_snapshot()).unwrap();
        let spot = &value["spots"][0];
        assert_eq!(spot["spotId"], 1);
        assert_eq!(spot["spotType"], "large");
        assert_eq!(spot["occupied"], false);
    }

    #[test]
    fn test_motorbike_cascades_then_falls_back_to_handicapped() {
        let (mut garage, _clock) = test_garage();
        garage.add_spots(&spots(&[
            ("MOTORBIKE", 1),
            ("COMPACT", 1),
            ("HANDICAPPED", 1),
        ]));

        let first = garage.enter_vehicle("M-1", "MOTORBIKE").unwrap();
        assert_eq!(first.spot_id, 1);
        let second = garage.enter_vehicle("M-2", "MOTORBIKE").unwrap();
        assert_eq!(second.spot_id, 2);
        // Preference list exhausted: the unconditional fallback kicks in.
        let third = garage.enter_vehicle("M-3", "MOTORBIKE").unwrap();
        assert_eq!(third.spot_id, 3);
        assert!(matches!(
            garage.enter_vehicle("M-4", "MOTORBIKE"),
            Err(GarageError::NoAvailableSpot { .. })
        ));
    }
}
