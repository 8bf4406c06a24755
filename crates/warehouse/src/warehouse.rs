//! Warehouse facade: the operations the outer shell drives.

use serde::Serialize;

use depot_core::{DomainResult, ProductCode, parse_batch};

use crate::alert::{AlertEntry, AlertTracker};
use crate::ledger::{StockLedger, pack_outbound};

/// Fixed initial inventory: 24 units across 6 product lines.
const SEED: &str = "A1 Z8 Z8 Z8 T6 A1 T6 T6 A1 T6 T3 T3 T3 T3 O3 O3 A1 O3 A1 O3 S3 S3 S3 S3";

/// Result of a removal attempt, for the caller to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RemoveOutcome {
    /// A single requested unit was found and removed.
    Single(ProductCode),
    /// A batch was removed and packed; `not_found` lists the requested codes
    /// that were never located on the shelf.
    Batch {
        packed: Vec<ProductCode>,
        not_found: Vec<ProductCode>,
    },
    /// Nothing requested was on the shelf.
    NotFound { requested: Vec<ProductCode> },
}

/// The single warehouse: stock ledger plus alert table.
///
/// Explicitly constructed and owned by the caller; the core never touches the
/// console. Raw input strings are uppercase-normalized here, validated, and
/// every successful mutation is followed by an alert reconciliation pass
/// before control returns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Warehouse {
    ledger: StockLedger,
    alerts: AlertTracker,
}

impl Warehouse {
    /// An empty warehouse with no stock and no alerts.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The warehouse as it stands at startup: the fixed 24-unit seed, with
    /// one reconciliation pass already run (tracking Z8 at 3 remaining).
    pub fn seeded() -> Self {
        let units = parse_batch(SEED).expect("seed inventory is valid");
        let mut warehouse = Self {
            ledger: StockLedger::from_units(units),
            alerts: AlertTracker::new(),
        };
        warehouse.alerts.reconcile(&mut warehouse.ledger);
        warehouse
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Current ledger contents, in shelf order, for display.
    pub fn describe(&self) -> &[ProductCode] {
        self.ledger.units()
    }

    /// Read-only snapshot of the current alert table, oldest first.
    pub fn alerts(&self) -> &[AlertEntry] {
        self.alerts.entries()
    }

    /// Add a single product or a space-separated batch.
    ///
    /// Input of up to 2 characters validates as a single token, longer input
    /// as a batch. Reconciliation runs afterward regardless of the validation
    /// outcome: alert state must reflect the ledger after any add attempt.
    pub fn add_entry(&mut self, raw: &str) -> DomainResult<Vec<ProductCode>> {
        let normalized = raw.to_uppercase();
        let parsed = parse_entry(&normalized);
        if let Ok(codes) = &parsed {
            self.ledger.add_units(codes);
            tracing::info!(added = codes.len(), "stock received");
        }
        self.alerts.reconcile(&mut self.ledger);
        parsed
    }

    /// Remove a single product or a space-separated batch.
    ///
    /// Single removals take at most one unit and report found/not-found.
    /// Batch removals pick matching units front-to-back, pack them ascending
    /// by digit, and report the requested codes never located. Reconciliation
    /// runs afterward only when validation succeeded.
    pub fn remove_entry(&mut self, raw: &str) -> DomainResult<RemoveOutcome> {
        let normalized = raw.to_uppercase();
        let outcome = if normalized.chars().count() <= 2 {
            let code = ProductCode::parse(&normalized)?;
            let (removed, _) = self.ledger.remove_matching(vec![code]);
            match removed.into_iter().next() {
                Some(unit) => RemoveOutcome::Single(unit),
                None => RemoveOutcome::NotFound {
                    requested: vec![code],
                },
            }
        } else {
            let wanted = parse_batch(&normalized)?;
            let requested = wanted.clone();
            let (removed, not_found) = self.ledger.remove_matching(wanted);
            if removed.is_empty() {
                RemoveOutcome::NotFound { requested }
            } else {
                RemoveOutcome::Batch {
                    packed: pack_outbound(removed),
                    not_found,
                }
            }
        };
        tracing::info!(?outcome, "stock dispatched");
        self.alerts.reconcile(&mut self.ledger);
        Ok(outcome)
    }
}

/// Route raw input to single-token or batch validation by length.
fn parse_entry(normalized: &str) -> DomainResult<Vec<ProductCode>> {
    if normalized.chars().count() <= 2 {
        Ok(vec![ProductCode::parse(normalized)?])
    } else {
        parse_batch(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::DomainError;

    fn code(s: &str) -> ProductCode {
        ProductCode::parse(s).unwrap()
    }

    fn codes(raw: &str) -> Vec<ProductCode> {
        raw.split(' ').map(code).collect()
    }

    fn alert_snapshot(warehouse: &Warehouse) -> Vec<(String, u32)> {
        warehouse
            .alerts()
            .iter()
            .map(|e| (e.code.to_string(), e.remaining))
            .collect()
    }

    #[test]
    fn seeded_warehouse_holds_the_fixed_initial_inventory() {
        let warehouse = Warehouse::seeded();
        assert_eq!(warehouse.describe(), codes(SEED));
        assert_eq!(warehouse.describe().len(), 24);
    }

    #[test]
    fn startup_reconciliation_tracks_only_z8() {
        let warehouse = Warehouse::seeded();
        assert_eq!(alert_snapshot(&warehouse), vec![("Z8".to_string(), 3)]);
    }

    #[test]
    fn add_entry_accepts_single_and_lowercase_input() {
        let mut warehouse = Warehouse::seeded();
        let added = warehouse.add_entry("z8").unwrap();
        assert_eq!(added, codes("Z8"));
        assert_eq!(warehouse.describe().last(), Some(&code("Z8")));
        // Z8 reached the threshold, so its alert resolved.
        assert!(warehouse.alerts().is_empty());
    }

    #[test]
    fn add_entry_accepts_batches() {
        let mut warehouse = Warehouse::empty();
        let added = warehouse.add_entry("A1 B2 A1").unwrap();
        assert_eq!(added, codes("A1 B2 A1"));
        assert_eq!(warehouse.describe(), codes("A1 B2 A1"));
    }

    #[test]
    fn add_entry_rejects_invalid_input_without_mutation() {
        let mut warehouse = Warehouse::seeded();
        let before = warehouse.describe().to_vec();

        assert!(matches!(
            warehouse.add_entry(""),
            Err(DomainError::InvalidProduct(_))
        ));
        assert!(matches!(
            warehouse.add_entry("A0"),
            Err(DomainError::InvalidProduct(_))
        ));
        assert!(matches!(
            warehouse.add_entry("A1 99"),
            Err(DomainError::InvalidBatch(_))
        ));
        assert_eq!(warehouse.describe(), before);
        assert_eq!(alert_snapshot(&warehouse), vec![("Z8".to_string(), 3)]);
    }

    #[test]
    fn one_character_input_is_a_single_token_not_a_batch() {
        let mut warehouse = Warehouse::seeded();
        assert!(matches!(
            warehouse.remove_entry("A"),
            Err(DomainError::InvalidProduct(_))
        ));
    }

    #[test]
    fn remove_entry_takes_at_most_one_unit_for_single_input() {
        let mut warehouse = Warehouse::seeded();
        let outcome = warehouse.remove_entry("A1").unwrap();
        assert_eq!(outcome, RemoveOutcome::Single(code("A1")));
        assert_eq!(warehouse.describe().iter().filter(|c| **c == code("A1")).count(), 4);
    }

    #[test]
    fn remove_entry_reports_missing_single_unit() {
        let mut warehouse = Warehouse::seeded();
        let outcome = warehouse.remove_entry("Q9").unwrap();
        assert_eq!(
            outcome,
            RemoveOutcome::NotFound {
                requested: codes("Q9")
            }
        );
        assert_eq!(warehouse.describe().len(), 24);
    }

    #[test]
    fn removing_z8_three_times_purges_its_alert() {
        let mut warehouse = Warehouse::seeded();
        for _ in 0..3 {
            let outcome = warehouse.remove_entry("Z8").unwrap();
            assert_eq!(outcome, RemoveOutcome::Single(code("Z8")));
        }
        // Z8 left the ledger entirely, so the alert is purged, not updated.
        assert!(warehouse.alerts().is_empty());
        assert!(!warehouse.describe().contains(&code("Z8")));
    }

    #[test]
    fn batch_removal_packs_all_t6_units_without_raising_an_alert() {
        let mut warehouse = Warehouse::seeded();
        let outcome = warehouse.remove_entry("T6 T6 T6 T6").unwrap();
        assert_eq!(
            outcome,
            RemoveOutcome::Batch {
                packed: codes("T6 T6 T6 T6"),
                not_found: Vec::new(),
            }
        );
        // T6 is absent from the ledger now: no alert for it.
        assert_eq!(alert_snapshot(&warehouse), vec![("Z8".to_string(), 3)]);
    }

    #[test]
    fn batch_removal_packs_ascending_by_digit() {
        let mut warehouse = Warehouse::seeded();
        let outcome = warehouse.remove_entry("T3 Z8 A1").unwrap();
        assert_eq!(
            outcome,
            RemoveOutcome::Batch {
                packed: codes("A1 T3 Z8"),
                not_found: Vec::new(),
            }
        );
    }

    #[test]
    fn batch_removal_reports_codes_never_located() {
        let mut warehouse = Warehouse::seeded();
        let outcome = warehouse.remove_entry("Z8 Z8 Z8 Z8").unwrap();
        assert_eq!(
            outcome,
            RemoveOutcome::Batch {
                packed: codes("Z8 Z8 Z8"),
                not_found: codes("Z8"),
            }
        );
    }

    #[test]
    fn batch_removal_with_nothing_on_the_shelf_reports_not_found() {
        let mut warehouse = Warehouse::seeded();
        let outcome = warehouse.remove_entry("Q9 Q8").unwrap();
        assert_eq!(
            outcome,
            RemoveOutcome::NotFound {
                requested: codes("Q9 Q8")
            }
        );
    }

    #[test]
    fn malformed_batch_leaves_everything_untouched() {
        let mut warehouse = Warehouse::seeded();
        let before = warehouse.clone();
        assert!(matches!(
            warehouse.remove_entry("A1 99"),
            Err(DomainError::InvalidBatch(_))
        ));
        assert_eq!(warehouse, before);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: adding one valid unit grows its occurrence count by one.
            #[test]
            fn adding_one_unit_increments_its_count(token in "[A-Z][1-9]") {
                let mut warehouse = Warehouse::seeded();
                let unit = ProductCode::parse(&token).unwrap();
                let before = warehouse.describe().iter().filter(|c| **c == unit).count();
                warehouse.add_entry(&token).unwrap();
                let after = warehouse.describe().iter().filter(|c| **c == unit).count();
                prop_assert_eq!(after, before + 1);
            }

            /// Property: the alert table never exceeds capacity after any
            /// sequence of valid additions.
            #[test]
            fn alert_table_stays_bounded_under_additions(
                tokens in prop::collection::vec("[A-E][1-9]", 1..25)
            ) {
                let mut warehouse = Warehouse::seeded();
                for token in &tokens {
                    warehouse.add_entry(token).unwrap();
                    prop_assert!(warehouse.alerts().len() <= crate::ALERT_CAPACITY);
                }
            }

            /// Property: every unit removed by a batch is accounted for - the
            /// packed parcel plus the not-found list covers the request.
            #[test]
            fn batch_removal_accounts_for_every_requested_code(
                tokens in prop::collection::vec("[AZT][136]", 2..8)
            ) {
                let mut warehouse = Warehouse::seeded();
                let raw = tokens.join(" ");
                match warehouse.remove_entry(&raw).unwrap() {
                    RemoveOutcome::Batch { packed, not_found } => {
                        prop_assert_eq!(packed.len() + not_found.len(), tokens.len());
                    }
                    RemoveOutcome::NotFound { requested } => {
                        prop_assert_eq!(requested.len(), tokens.len());
                    }
                    RemoveOutcome::Single(_) => prop_assert!(false, "batch input"),
                }
            }
        }
    }
}
