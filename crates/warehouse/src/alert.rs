//! Low-stock alert table and its reconciliation rules.

use serde::Serialize;

use depot_core::ProductCode;

use crate::ledger::StockLedger;

/// Quantity at or above which a product counts as adequately stocked.
pub const LOW_STOCK_THRESHOLD: u32 = 4;

/// Hard cap on distinct tracked codes; reaching it triggers replenishment.
pub const ALERT_CAPACITY: usize = 3;

/// One tracked low-stock product and its last-known quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct AlertEntry {
    pub code: ProductCode,
    pub remaining: u32,
}

/// Bounded, insertion-ordered table of low-stock alerts.
///
/// Holds at most [`ALERT_CAPACITY`] distinct codes. Every tracked code is
/// expected to sit strictly below [`LOW_STOCK_THRESHOLD`] in the ledger;
/// [`AlertTracker::reconcile`] re-establishes that after each mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AlertTracker {
    entries: Vec<AlertEntry>,
}

impl AlertTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Tracked alerts, oldest first.
    pub fn entries(&self) -> &[AlertEntry] {
        &self.entries
    }

    /// Last-known quantity for `code`, if tracked.
    pub fn remaining_for(&self, code: ProductCode) -> Option<u32> {
        self.position(code).map(|idx| self.entries[idx].remaining)
    }

    fn position(&self, code: ProductCode) -> Option<usize> {
        self.entries.iter().position(|e| e.code == code)
    }

    /// Reconcile the table against the ledger after a mutation.
    ///
    /// Three steps: purge codes that left the ledger entirely, recount every
    /// distinct code once, then walk the counts in encounter order opening,
    /// updating and resolving alerts. Opening a fourth alert first drains the
    /// full table through [`AlertTracker::replenish`].
    ///
    /// The recount snapshot is taken once per pass and is NOT refreshed after
    /// an in-pass replenishment; the remainder of the pass keeps using the
    /// pre-replenishment counts.
    pub fn reconcile(&mut self, ledger: &mut StockLedger) {
        self.entries.retain(|e| ledger.contains(e.code));

        let counts = ledger.distinct_counts();
        for (code, count) in counts {
            if count >= LOW_STOCK_THRESHOLD {
                if let Some(idx) = self.position(code) {
                    let entry = self.entries.remove(idx);
                    tracing::debug!(code = %entry.code, count, "alert resolved");
                }
            } else if let Some(idx) = self.position(code) {
                self.entries[idx].remaining = count;
            } else {
                if self.entries.len() >= ALERT_CAPACITY {
                    self.replenish(ledger);
                }
                tracing::debug!(%code, count, "alert opened");
                self.entries.push(AlertEntry { code, remaining: count });
            }
        }
    }

    /// Restock every tracked product line, then clear the table.
    ///
    /// Each entry's stored quantity drives the top-up: units are appended one
    /// at a time while it sits at or below the threshold, landing at
    /// threshold + 1. The stored quantity wins over a live recount when the
    /// two diverge.
    pub fn replenish(&mut self, ledger: &mut StockLedger) {
        for entry in &self.entries {
            let mut remaining = entry.remaining;
            while remaining < LOW_STOCK_THRESHOLD + 1 {
                ledger.add_units(&[entry.code]);
                remaining += 1;
            }
            tracing::info!(code = %entry.code, from = entry.remaining, "replenished product line");
        }
        self.entries.clear();
    }
}
