use core::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use batchalloc_core::{BatchRef, Entity, Sku};

use crate::line::OrderLine;

/// Entity: a quantity of stock of one SKU.
///
/// A batch without an `eta` is already on the warehouse shelf; one with an
/// `eta` is expected to arrive on that date. The batch owns the set of order
/// lines allocated to it, so its capacity invariant is checked locally:
/// `allocated_quantity() <= purchased_quantity()` at all times.
///
/// Equality and hashing consider the reference only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "BatchRecord")]
pub struct Batch {
    reference: BatchRef,
    sku: Sku,
    purchased_quantity: u32,
    eta: Option<NaiveDate>,
    allocations: HashSet<OrderLine>,
}

impl Batch {
    pub fn new(
        reference: impl Into<BatchRef>,
        sku: impl Into<Sku>,
        purchased_quantity: u32,
        eta: Option<NaiveDate>,
    ) -> Self {
        Self {
            reference: reference.into(),
            sku: sku.into(),
            purchased_quantity,
            eta,
            allocations: HashSet::new(),
        }
    }

    pub fn reference(&self) -> &BatchRef {
        &self.reference
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn eta(&self) -> Option<NaiveDate> {
        self.eta
    }

    pub fn purchased_quantity(&self) -> u32 {
        self.purchased_quantity
    }

    /// Already in the warehouse (no expected arrival date).
    pub fn is_in_stock(&self) -> bool {
        self.eta.is_none()
    }

    pub fn allocations(&self) -> impl Iterator<Item = &OrderLine> + '_ {
        self.allocations.iter()
    }

    pub fn is_allocated(&self, line: &OrderLine) -> bool {
        self.allocations.contains(line)
    }

    pub fn allocated_quantity(&self) -> u32 {
        self.allocations.iter().map(|line| line.quantity).sum()
    }

    pub fn available_quantity(&self) -> u32 {
        self.purchased_quantity.saturating_sub(self.allocated_quantity())
    }

    /// True iff the SKU matches and enough capacity is left.
    pub fn can_allocate(&self, line: &OrderLine) -> bool {
        self.sku == line.sku && self.available_quantity() >= line.quantity
    }

    /// Commit `line` to this batch.
    ///
    /// Ineligible lines (wrong SKU, not enough capacity) are ignored, and
    /// re-allocating a line already held is absorbed by the set. Callers that
    /// need a failure signal go through [`crate::allocate`] instead.
    pub fn allocate(&mut self, line: &OrderLine) {
        if !self.can_allocate(line) {
            tracing::trace!(
                batch_ref = %self.reference,
                sku = %line.sku,
                quantity = line.quantity,
                "ignoring ineligible order line"
            );
            return;
        }
        self.allocations.insert(line.clone());
    }

    /// Release `line`; a no-op when it was never allocated here.
    pub fn deallocate(&mut self, line: &OrderLine) {
        self.allocations.remove(line);
    }

    /// Sort key for allocation preference: in-stock first, then earliest eta.
    pub fn preference_key(&self) -> (bool, Option<NaiveDate>) {
        (self.eta.is_some(), self.eta)
    }

    /// Explicit preference comparison used by the allocator.
    ///
    /// `Less` means `a` should be tried before `b`. Two in-stock batches
    /// compare `Equal`, leaving the tie to a stable sort.
    pub fn cmp_preference(a: &Batch, b: &Batch) -> Ordering {
        a.preference_key().cmp(&b.preference_key())
    }
}

impl Entity for Batch {
    type Id = BatchRef;

    fn id(&self) -> &Self::Id {
        &self.reference
    }
}

impl PartialEq for Batch {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Batch {}

impl core::hash::Hash for Batch {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}

/// Stored shape of a batch. Allocations are replayed through
/// [`Batch::allocate`] so a snapshot can never load past capacity.
#[derive(Deserialize)]
struct BatchRecord {
    reference: BatchRef,
    sku: Sku,
    purchased_quantity: u32,
    #[serde(default)]
    eta: Option<NaiveDate>,
    #[serde(default)]
    allocations: Vec<OrderLine>,
}

impl From<BatchRecord> for Batch {
    fn from(record: BatchRecord) -> Self {
        let mut batch = Batch::new(
            record.reference,
            record.sku,
            record.purchased_quantity,
            record.eta,
        );
        for line in &record.allocations {
            batch.allocate(line);
        }
        batch
    }
}
