use crate::engine::types::{OrderId, Price, Quantity};

/// TradeRecord is one aggregated, finalised trade produced by a matching pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRecord {
    /// The more recently arrived of the two crossing orders.
    pub aggressor_id: OrderId,
    /// The resting order that was crossed into; its price sets the trade price.
    pub passive_id: OrderId,
    pub price: Price,
    pub amount: Quantity,
}

/// TradeSink is the ordered emission surface for finalised trade records.
///
/// The engine commits one batch per `submit`; within a batch, `batch` is
/// already sorted by first-seen wall-clock time. The sink is otherwise
/// opaque to the engine — it may print, persist, or forward the batch.
pub trait TradeSink {
    fn emit_batch(&mut self, batch: &[TradeRecord]);
}

/// NullTradeSink discards every batch. Useful for benches and tests that only
/// care about resting-book state.
#[derive(Debug, Default)]
pub struct NullTradeSink;

impl TradeSink for NullTradeSink {
    fn emit_batch(&mut self, _batch: &[TradeRecord]) {}
}

/// VecTradeSink accumulates every emitted trade in arrival order, across
/// batches. Used by tests that assert on the full trade stream.
#[derive(Debug, Default)]
pub struct VecTradeSink {
    pub trades: Vec<TradeRecord>,
}

impl TradeSink for VecTradeSink {
    fn emit_batch(&mut self, batch: &[TradeRecord]) {
        self.trades.extend_from_slice(batch);
    }
}
