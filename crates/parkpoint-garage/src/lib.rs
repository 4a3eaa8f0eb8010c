//! # parkpoint-garage: Stateful Facility Layer
//!
//! Everything mutable about one parking garage lives here, behind a single
//! [`GarageService`]. The pure rules (fees, compatibility, validation) come
//! from `parkpoint-core`; this crate adds the state that changes as
//! vehicles come and go.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        parkpoint-garage                                 │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ SpotInventory│  │ TicketLedger │  │   GarageService  │              │
//! │  │              │  │              │  │                  │              │
//! │  │  insertion-  │  │  active /    │  │  entry, exit,    │              │
//! │  │  ordered     │  │  archived    │  │  tariff, spots,  │              │
//! │  │  spots       │  │  tickets     │  │  snapshots       │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │    Clock     │  │   IdSource   │  │   GarageState    │              │
//! │  │  injectable  │  │  injectable  │  │  Arc<Mutex<..>>  │              │
//! │  │  timestamps  │  │  ticket ids  │  │  shared access   │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • GarageService itself is single-threaded by design                   │
//! │  • GarageState wraps it in Arc<Mutex<_>> so each entry/exit runs       │
//! │    as one critical section when callers share a garage                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod clock;
mod ids;
mod inventory;
mod ledger;
mod service;
mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ids::{IdSource, SequenceIdSource, UuidIdSource};
pub use inventory::SpotInventory;
pub use ledger::TicketLedger;
pub use service::{
    ExitReceipt, GarageService, OccupancySnapshot, SkippedSpotRequest, SpotReport, SpotRequest,
    SpotStatus, TicketLists,
};
pub use state::GarageState;
