//! Allocation service: pick a batch for an order line.

use tracing::{debug, instrument, warn};

use batchalloc_core::{BatchRef, DomainError, DomainResult};

use crate::batch::Batch;
use crate::line::OrderLine;

/// Allocate `line` to the preferred eligible batch and return its reference.
///
/// Candidates are stable-sorted with [`Batch::cmp_preference`] (in-stock
/// first, then earliest eta; in-stock ties keep input order) and the first one
/// that [`Batch::can_allocate`] the line wins.
///
/// Fails with [`DomainError::OutOfStock`] when no candidate qualifies, in
/// which case no batch is touched. The call does not look for an existing
/// allocation of the same line elsewhere.
///
/// Accepts anything yielding `&mut Batch`: `&mut Vec<Batch>`, `iter_mut()`,
/// `HashMap::values_mut()`, ...
#[instrument(
    level = "debug",
    skip_all,
    fields(order_id = %line.order_id, sku = %line.sku, quantity = line.quantity)
)]
pub fn allocate<'a, I>(line: &OrderLine, batches: I) -> DomainResult<BatchRef>
where
    I: IntoIterator<Item = &'a mut Batch>,
{
    let mut candidates: Vec<&'a mut Batch> = batches.into_iter().collect();
    candidates.sort_by(|a, b| Batch::cmp_preference(a, b));
    let candidate_count = candidates.len();

    let Some(batch) = candidates
        .into_iter()
        .find(|batch| batch.can_allocate(line))
    else {
        warn!(candidate_count, "no batch can take order line");
        return Err(DomainError::out_of_stock(line.sku.clone()));
    };

    batch.allocate(line);
    debug!(batch_ref = %batch.reference(), "allocated order line");
    Ok(batch.reference().clone())
}
