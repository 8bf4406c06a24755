//! Ordered stock ledger: the physical units on the shelf.

use serde::Serialize;

use depot_core::ProductCode;

/// Ordered multiset of product units, duplicates allowed.
///
/// Order reflects arrival order for additions and is the pick order for
/// outbound removal. Counts never depend on order; only the FIFO-style scan
/// in [`StockLedger::remove_matching`] does.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StockLedger {
    units: Vec<ProductCode>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_units(units: Vec<ProductCode>) -> Self {
        Self { units }
    }

    /// Append units in the order given. Infallible for validated codes.
    pub fn add_units(&mut self, codes: &[ProductCode]) {
        self.units.extend_from_slice(codes);
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Current ledger contents, in shelf order.
    pub fn units(&self) -> &[ProductCode] {
        &self.units
    }

    pub fn contains(&self, code: ProductCode) -> bool {
        self.units.contains(&code)
    }

    /// Number of units of `code` currently on the shelf.
    pub fn count_of(&self, code: ProductCode) -> u32 {
        self.units.iter().filter(|u| **u == code).count() as u32
    }

    /// Per-code unit counts, keyed in first-encounter order of the shelf scan.
    ///
    /// The encounter order is what makes reconciliation deterministic; callers
    /// iterate the returned pairs exactly once per pass.
    pub fn distinct_counts(&self) -> Vec<(ProductCode, u32)> {
        let mut counts: Vec<(ProductCode, u32)> = Vec::new();
        for unit in &self.units {
            match counts.iter_mut().find(|(code, _)| code == unit) {
                Some((_, n)) => *n += 1,
                None => counts.push((*unit, 1)),
            }
        }
        counts
    }

    /// Remove units matching `wanted`, scanning from the front of the shelf.
    ///
    /// A unit whose code still has an instance in `wanted` is moved into the
    /// removed sequence (consuming that instance, remaining shelf order
    /// preserved); other units are skipped. The scan stops once the shelf or
    /// `wanted` is exhausted. Returns the removed units in pick order plus
    /// whatever was left of `wanted` - requested codes never located, which
    /// is not an error.
    pub fn remove_matching(
        &mut self,
        mut wanted: Vec<ProductCode>,
    ) -> (Vec<ProductCode>, Vec<ProductCode>) {
        let mut removed = Vec::new();
        let mut cursor = 0;
        while cursor < self.units.len() && !wanted.is_empty() {
            let unit = self.units[cursor];
            if let Some(pos) = wanted.iter().position(|w| *w == unit) {
                wanted.remove(pos);
                removed.push(self.units.remove(cursor));
            } else {
                cursor += 1;
            }
        }
        (removed, wanted)
    }
}

/// Pack removed units into an outbound parcel, largest volume at the bottom.
///
/// Repeatedly selects the remaining unit with the numerically largest code
/// digit (a strictly greater digit displaces the running maximum, so ties
/// keep the earliest unit) and prepends it to the parcel. Net effect: the
/// parcel reads ascending by digit, front to back.
pub fn pack_outbound(mut pool: Vec<ProductCode>) -> Vec<ProductCode> {
    let mut parcel = Vec::with_capacity(pool.len());
    while !pool.is_empty() {
        let mut max_idx = 0;
        for (idx, unit) in pool.iter().enumerate().skip(1) {
            if unit.digit() > pool[max_idx].digit() {
                max_idx = idx;
            }
        }
        let unit = pool.remove(max_idx);
        parcel.insert(0, unit);
    }
    parcel
}
