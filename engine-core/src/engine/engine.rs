use crate::engine::book::SideBook;
use crate::engine::error::EngineError;
use crate::engine::sink::{TradeRecord, TradeSink};
use crate::engine::types::{Order, OrderId, Price, Priority, Side};
use std::cell::Cell;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, trace};

/// MonotonicClock hands out strictly increasing [`Priority`] readings.
///
/// Sampled at construction, at every submission, and at every iceberg
/// restart (§5 of the spec). Readings are nanoseconds since construction,
/// forced strictly increasing even if the underlying `Instant` has
/// insufficient resolution to separate two back-to-back reads — the core
/// only requires `later > earlier`, never a specific duration.
pub struct MonotonicClock {
    start: Instant,
    last: Cell<u64>,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last: Cell::new(0),
        }
    }

    /// Returns a fresh, strictly-greater-than-every-prior-reading timestamp.
    pub fn tick(&self) -> Priority {
        let elapsed = self.start.elapsed().as_nanos() as u64;
        let next = elapsed.max(self.last.get() + 1);
        self.last.set(next);
        next
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

/// A match key identifies one emitted trade line: the aggressor, the passive
/// counterparty, and the price it executed at (always the passive order's
/// price). Multiple matching-pass iterations that share a match key — caused
/// by an iceberg restarting mid-pass against the same counterparty — are
/// aggregated into a single [`TradeRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MatchKey {
    aggressor_id: OrderId,
    passive_id: OrderId,
    price: Price,
}

/// NewOrderRequest is the boundary type submitted to the engine: an order
/// with no `arrival_ts` yet assigned. The engine assigns one at `submit`
/// time (or at restart time), never taking it from the caller.
pub enum NewOrderRequest {
    Regular {
        id: OrderId,
        side: Side,
        price: Price,
        volume: u64,
    },
    Iceberg {
        id: OrderId,
        side: Side,
        price: Price,
        volume: u64,
        peak: u64,
    },
}

/// CentralLimitOrderBook is the matching engine for a single instrument.
///
/// It owns both side books and the id→order index, and is the sole entry
/// point (`submit`) through which orders enter the book. It is not
/// `Send`/`Sync`-constrained in any particular direction by this crate: the
/// engine is single-threaded by contract (§5), and callers needing
/// cross-thread access are expected to serialize `submit` calls themselves.
pub struct CentralLimitOrderBook<S: TradeSink> {
    buy_book: SideBook,
    sell_book: SideBook,
    orders: HashMap<OrderId, Order>,
    clock: MonotonicClock,
    sink: S,
}

impl<S: TradeSink> CentralLimitOrderBook<S> {
    pub fn new(sink: S) -> Self {
        Self {
            buy_book: SideBook::new(Side::Buy),
            sell_book: SideBook::new(Side::Sell),
            orders: HashMap::new(),
            clock: MonotonicClock::new(),
            sink,
        }
    }

    /// Read-only access to the trade sink, e.g. for tests asserting on the
    /// emitted trade stream.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Read-only access to the resting book for one side, in priority order,
    /// for the external snapshot printer.
    pub fn resting_orders(&self, side: Side) -> Vec<&Order> {
        let book = self.side_book(side);
        book.snapshot()
            .into_iter()
            .map(|(_, id)| {
                self.orders
                    .get(&id)
                    .expect("id index desynced from side book during snapshot")
            })
            .collect()
    }

    fn side_book(&self, side: Side) -> &SideBook {
        match side {
            Side::Buy => &self.buy_book,
            Side::Sell => &self.sell_book,
        }
    }

    /// Inserts `incoming` into its side book and the id index, assigning a
    /// fresh arrival timestamp, then runs a full matching pass. Returns an
    /// error without mutating any state if the order is rejected at the
    /// boundary (duplicate id or failed construction-time validation, which
    /// the caller is expected to have already performed via
    /// [`Order::regular`]/[`Order::iceberg`] — this method takes an already
    /// validated order so the boundary check here is solely the duplicate-id
    /// check).
    pub fn submit(&mut self, mut incoming: Order) -> Result<(), EngineError> {
        if self.orders.contains_key(&incoming.id) {
            return Err(EngineError::DuplicateOrderId(incoming.id));
        }

        let arrival = self.clock.tick();
        incoming.set_arrival(arrival);
        debug!(id = %incoming.id, side = ?incoming.side, price = %incoming.price, volume = incoming.volume, "order accepted");

        let key = incoming.book_key();
        let id = incoming.id.clone();
        let side = incoming.side;
        self.orders.insert(id.clone(), incoming);
        self.side_book(side).push(key, id);

        let batch = self.run_matching_pass();
        if !batch.is_empty() {
            self.sink.emit_batch(&batch);
        }
        Ok(())
    }

    /// Repeatedly crosses the best bid against the best ask until no cross
    /// remains, returning the pass's aggregated trades sorted by first-seen
    /// wall-clock time (§4.3).
    fn run_matching_pass(&mut self) -> Vec<TradeRecord> {
        let mut log: Vec<(MatchKey, Priority, u64)> = Vec::new();
        let mut index: HashMap<MatchKey, usize> = HashMap::new();

        loop {
            let Some((buy_key, buy_id)) = self.buy_book.peek() else {
                break;
            };
            let Some((sell_key, sell_id)) = self.sell_book.peek() else {
                break;
            };
            if buy_key.price < sell_key.price {
                break;
            }

            let buy_ts = buy_key.arrival_ts;
            let sell_ts = sell_key.arrival_ts;

            let requested = self
                .orders
                .get(&buy_id)
                .expect("id index desynced from buy book")
                .displayed_volume();

            let traded = self
                .orders
                .get_mut(&sell_id)
                .expect("id index desynced from sell book")
                .trade(requested, buy_ts);

            let (aggressor_id, passive_id, passive_price) = if buy_ts > sell_ts {
                let passive_price = self.orders[&sell_id].price;
                (buy_id.clone(), sell_id.clone(), passive_price)
            } else {
                let passive_price = self.orders[&buy_id].price;
                (sell_id.clone(), buy_id.clone(), passive_price)
            };

            // Reciprocal update on the buy side, for its side effect only:
            // by construction this returns exactly `traded`.
            let _ = self
                .orders
                .get_mut(&buy_id)
                .expect("id index desynced from buy book")
                .trade(traded, sell_ts);

            let match_key = MatchKey {
                aggressor_id,
                passive_id,
                price: passive_price,
            };
            let seen_at = self.clock.tick();
            match index.get(&match_key) {
                Some(&slot) => log[slot].2 += traded,
                None => {
                    index.insert(match_key.clone(), log.len());
                    log.push((match_key, seen_at, traded));
                }
            }
            trace!(%sell_id, %buy_id, traded, "cross processed");

            self.settle(Side::Sell, &sell_id);
            self.settle(Side::Buy, &buy_id);
        }

        log.sort_by_key(|(_, seen_at, _)| *seen_at);
        log.into_iter()
            .map(|(key, _, amount)| TradeRecord {
                aggressor_id: key.aggressor_id,
                passive_id: key.passive_id,
                price: key.price,
                amount,
            })
            .collect()
    }

    /// After a trade, pops `id` from its side book if complete, then either
    /// re-pushes it under a fresh arrival timestamp (iceberg restart) or
    /// removes it from the id index entirely. Orders that are not complete
    /// are left untouched in the book: a trade never changes `price` or
    /// `arrival_ts`, so a non-restarting order's book key is unaffected and
    /// its existing entry still points at the right id.
    fn settle(&mut self, side: Side, id: &OrderId) {
        let complete = self.orders[id].is_complete();
        if !complete {
            return;
        }

        self.side_book(side)
            .pop_front()
            .expect("invariant violated: side book root missing during settle");

        let should_restart = self
            .orders
            .get_mut(id)
            .expect("id index desynced during settle")
            .should_restart();

        if should_restart {
            let fresh_ts = self.clock.tick();
            let order = self.orders.get_mut(id).expect("id index desynced during settle");
            order.set_arrival(fresh_ts);
            let key = order.book_key();
            debug!(%id, fresh_ts, "iceberg restarted");
            self.side_book(side).push(key, id.clone());
        } else {
            self.orders.remove(id);
        }
    }
}

impl NewOrderRequest {
    /// Validates the request and builds the engine-internal [`Order`], with
    /// `arrival_ts` left at its placeholder value — `submit` assigns the real
    /// one. This is the one boundary check `submit` itself does not perform
    /// (construction-time validation), kept separate so a caller can
    /// validate a batch of requests before submitting any of them.
    pub fn build(self) -> Result<Order, EngineError> {
        match self {
            NewOrderRequest::Regular {
                id,
                side,
                price,
                volume,
            } => Order::regular(id.clone(), side, price, volume)
                .map_err(|source| EngineError::InvalidOrder { id, source }),
            NewOrderRequest::Iceberg {
                id,
                side,
                price,
                volume,
                peak,
            } => Order::iceberg(id.clone(), side, price, volume, peak)
                .map_err(|source| EngineError::InvalidOrder { id, source }),
        }
    }
}
