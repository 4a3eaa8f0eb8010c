//! # Ticket Ledger
//!
//! Tracks open (active) and settled (archived) tickets by id.
//!
//! The active→archived move in [`TicketLedger::close`] is the
//! serialization point for double-exit protection: once a ticket has been
//! archived, a second close attempt finds no active ticket and fails
//! cleanly, never double-paying or double-releasing.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use parkpoint_core::{GarageError, GarageResult, Money, Ticket};

/// Open and settled tickets, keyed by ticket id.
///
/// Ids are unique across the WHOLE ledger: an archived ticket's id can
/// never be reissued to a new entry.
#[derive(Debug, Default)]
pub struct TicketLedger {
    active: HashMap<String, Ticket>,
    archived: HashMap<String, Ticket>,
}

impl TicketLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is known to the ledger, active or archived.
    pub fn contains_id(&self, id: &str) -> bool {
        self.active.contains_key(id) || self.archived.contains_key(id)
    }

    /// Records a freshly issued open ticket.
    ///
    /// Fails with `AllocationConflict` when the id is already present
    /// anywhere in the ledger; the caller must abort the entry and roll
    /// back its spot assignment.
    pub fn open(&mut self, ticket: Ticket) -> GarageResult<()> {
        if self.contains_id(&ticket.id) {
            return Err(GarageError::AllocationConflict(format!(
                "ticket id {} already issued",
                ticket.id
            )));
        }
        self.active.insert(ticket.id.clone(), ticket);
        Ok(())
    }

    /// Looks up an open ticket.
    pub fn get_active(&self, id: &str) -> Option<&Ticket> {
        self.active.get(id)
    }

    /// Settles an open ticket: sets exit time and fee, moves it to the
    /// archive, and returns the closed ticket.
    ///
    /// Unknown and already-closed ids are indistinguishable to the caller;
    /// both fail with `InvalidTicket`.
    pub fn close(
        &mut self,
        id: &str,
        exit_time: DateTime<Utc>,
        fee: Money,
    ) -> GarageResult<Ticket> {
        let mut ticket = self
            .active
            .remove(id)
            .ok_or_else(|| GarageError::InvalidTicket(id.to_string()))?;

        // Tickets in the active map are open by construction.
        let closed = ticket.close(exit_time, fee);
        debug_assert!(closed, "active ticket {id} was already closed");

        self.archived.insert(ticket.id.clone(), ticket.clone());
        Ok(ticket)
    }

    /// Open tickets, oldest entry first.
    pub fn active_tickets(&self) -> Vec<Ticket> {
        let mut tickets: Vec<Ticket> = self.active.values().cloned().collect();
        tickets.sort_by(|a, b| a.entry_time.cmp(&b.entry_time).then(a.id.cmp(&b.id)));
        tickets
    }

    /// Settled tickets, oldest entry first.
    pub fn archived_tickets(&self) -> Vec<Ticket> {
        let mut tickets: Vec<Ticket> = self.archived.values().cloned().collect();
        tickets.sort_by(|a, b| a.entry_time.cmp(&b.entry_time).then(a.id.cmp(&b.id)));
        tickets
    }

    /// Number of open tickets.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use parkpoint_core::{Vehicle, VehicleCategory};

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, minute, 0).unwrap()
    }

    fn ticket(id: &str, minute: u32) -> Ticket {
        Ticket::new(
            id.to_string(),
            Vehicle {
                plate: format!("PL-{id}"),
                category: VehicleCategory::Car,
            },
            1,
            at(minute),
        )
    }

    #[test]
    fn test_open_rejects_duplicate_ids_across_whole_ledger() {
        let mut ledger = TicketLedger::new();
        ledger.open(ticket("T1", 0)).unwrap();

        // Duplicate against the active set.
        assert!(matches!(
            ledger.open(ticket("T1", 5)),
            Err(GarageError::AllocationConflict(_))
        ));

        // Settle T1, then try to reuse the id: still rejected.
        ledger.close("T1", at(30), Money::from_cents(100)).unwrap();
        assert!(matches!(
            ledger.open(ticket("T1", 40)),
            Err(GarageError::AllocationConflict(_))
        ));
    }

    #[test]
    fn test_close_moves_ticket_to_archive() {
        let mut ledger = TicketLedger::new();
        ledger.open(ticket("T1", 0)).unwrap();

        let closed = ledger.close("T1", at(30), Money::from_cents(2000)).unwrap();
        assert!(!closed.is_open());
        assert_eq!(closed.fee(), Some(Money::from_cents(2000)));

        assert!(ledger.get_active("T1").is_none());
        assert_eq!(ledger.active_count(), 0);
        assert_eq!(ledger.archived_tickets().len(), 1);
        assert!(ledger.contains_id("T1"));
    }

    #[test]
    fn test_second_close_fails_with_invalid_ticket() {
        let mut ledger = TicketLedger::new();
        ledger.open(ticket("T1", 0)).unwrap();
        ledger.close("T1", at(30), Money::from_cents(2000)).unwrap();

        // Already-closed and never-existed look the same.
        assert!(matches!(
            ledger.close("T1", at(45), Money::from_cents(9999)),
            Err(GarageError::InvalidTicket(_))
        ));
        assert!(matches!(
            ledger.close("NOPE", at(45), Money::from_cents(1)),
            Err(GarageError::InvalidTicket(_))
        ));

        // The archived ticket is untouched by the failed attempts.
        let archived = ledger.archived_tickets();
        assert_eq!(archived[0].fee(), Some(Money::from_cents(2000)));
        assert_eq!(archived[0].exit_time(), Some(at(30)));
    }

    #[test]
    fn test_listings_are_entry_time_ordered() {
        let mut ledger = TicketLedger::new();
        ledger.open(ticket("T2", 20)).unwrap();
        ledger.open(ticket("T1", 5)).unwrap();
        ledger.open(ticket("T3", 40)).unwrap();

        let ids: Vec<String> = ledger.active_tickets().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["T1", "T2", "T3"]);
    }
}
