use crate::engine::types::{OrderId, OrderValidationError};

/// EngineError represents a recoverable rejection at the `submit` boundary.
///
/// This is distinct from an internal invariant violation: it reflects a
/// caller mistake (a malformed or duplicate order) rather than corrupted
/// engine state, and the caller is expected to log-and-skip or surface it to
/// the operator rather than abort the run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The order failed construction-time validation (non-positive volume or peak).
    #[error("order `{id}` rejected: {source}")]
    InvalidOrder {
        id: OrderId,
        #[source]
        source: OrderValidationError,
    },

    /// An order with this id is already resting on the book.
    ///
    /// The reference implementation leaves duplicate-id handling undefined
    /// (it silently overwrites the id record, leaving a stale heap entry).
    /// This implementation instead rejects the duplicate outright, which
    /// keeps the id index and side books from ever disagreeing.
    #[error("order id `{0}` is already resting on the book")]
    DuplicateOrderId(OrderId),
}
