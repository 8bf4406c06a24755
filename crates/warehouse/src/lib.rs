//! Warehouse domain module.
//!
//! This crate contains the business rules for the single-warehouse inventory
//! tracker, implemented purely as deterministic domain logic (no IO, no
//! console, no storage): the ordered stock ledger, the bounded low-stock
//! alert table with its reconciliation rules, and the facade the outer shell
//! drives.

pub mod alert;
pub mod ledger;
pub mod warehouse;

pub use alert::{ALERT_CAPACITY, AlertEntry, AlertTracker, LOW_STOCK_THRESHOLD};
pub use ledger::{StockLedger, pack_outbound};
pub use warehouse::{RemoveOutcome, Warehouse};
