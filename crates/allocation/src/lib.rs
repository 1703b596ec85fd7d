//! Batch allocation domain module.
//!
//! This crate contains the allocation policy for stock batches, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).
//!
//! Batch mutation takes `&mut self` and is not internally synchronized; a
//! concurrent caller must guard batches itself (e.g. one lock per SKU).

pub mod batch;
pub mod line;
pub mod service;

pub use batch::Batch;
pub use line::OrderLine;
pub use service::allocate;
