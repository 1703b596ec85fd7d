use serde::{Deserialize, Serialize};

use batchalloc_core::{OrderId, Sku, ValueObject};

/// Order line: a request for `quantity` units of one SKU, belonging to one order.
///
/// Compared and hashed by value, so two lines with equal fields are the same
/// line as far as a batch's allocation set is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: OrderId,
    pub sku: Sku,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(order_id: impl Into<OrderId>, sku: impl Into<Sku>, quantity: u32) -> Self {
        Self {
            order_id: order_id.into(),
            sku: sku.into(),
            quantity,
        }
    }
}

impl ValueObject for OrderLine {}
