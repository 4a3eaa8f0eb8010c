//! # Id Source Capability
//!
//! Ticket and payment ids are generated through a trait so tests can use
//! deterministic sequences while production uses UUID-derived ids with
//! negligible collision odds.
//!
//! Id shapes:
//! - ticket: 8 uppercase hex characters, e.g. `3F9A12BC`
//! - payment: `P-` plus 7 uppercase hex characters, e.g. `P-04D77AE`

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh ticket and payment identifiers.
pub trait IdSource: Send + Sync {
    fn ticket_id(&self) -> String;
    fn payment_id(&self) -> String;
}

/// Production id source: uppercase prefixes of UUID v4 hex.
///
/// Short ids stay readable on a printed ticket; the ledger still verifies
/// uniqueness on open, so the (negligible) collision case fails loudly
/// instead of overwriting.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn ticket_id(&self) -> String {
        Uuid::new_v4().simple().to_string()[..8].to_uppercase()
    }

    fn payment_id(&self) -> String {
        format!("P-{}", Uuid::new_v4().simple().to_string()[..7].to_uppercase())
    }
}

/// Deterministic id source for tests: `T0001`, `T0002`, ... and `P0001`,
/// `P0002`, ...
#[derive(Debug, Default)]
pub struct SequenceIdSource {
    next_ticket: AtomicU64,
    next_payment: AtomicU64,
}

impl SequenceIdSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequenceIdSource {
    fn ticket_id(&self) -> String {
        let n = self.next_ticket.fetch_add(1, Ordering::Relaxed) + 1;
        format!("T{n:04}")
    }

    fn payment_id(&self) -> String {
        let n = self.next_payment.fetch_add(1, Ordering::Relaxed) + 1;
        format!("P{n:04}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_id_shapes() {
        let ids = UuidIdSource;

        let ticket = ids.ticket_id();
        assert_eq!(ticket.len(), 8);
        assert!(ticket.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(ticket, ticket.to_uppercase());

        let payment = ids.payment_id();
        assert!(payment.starts_with("P-"));
        assert_eq!(payment.len(), 9);
    }

    #[test]
    fn test_uuid_ids_do_not_repeat_in_sample() {
        let ids = UuidIdSource;
        let sample: HashSet<String> = (0..256).map(|_| ids.ticket_id()).collect();
        assert_eq!(sample.len(), 256);
    }

    #[test]
    fn test_sequence_ids_are_deterministic() {
        let ids = SequenceIdSource::new();
        assert_eq!(ids.ticket_id(), "T0001");
        assert_eq!(ids.ticket_id(), "T0002");
        assert_eq!(ids.payment_id(), "P0001");
    }
}
