use crate::engine::types::{BookKey, OrderId, Price, Side};
use crossbeam::epoch;
use crossbeam::epoch::default_collector;
use crossbeam_skiplist::SkipList;

/// SideBook is the priority queue over resting order ids for one side of the book.
///
/// It stores only `(BookKey, OrderId)` pairs — the authoritative, mutable
/// `Order` record lives in the matching engine's id index. This split means
/// a trade (which only ever changes `volume`/`visible`, never `price` or
/// `arrival_ts` for an order that isn't restarting) never needs to touch the
/// book at all, and an iceberg restart only needs to remove-then-reinsert the
/// id under a fresh key.
///
/// The underlying structure is a [`crossbeam_skiplist::SkipList`], the same
/// ordered map the teacher uses for its own per-side books. The engine here
/// is single-threaded, so the lock-free properties aren't load-bearing, but
/// the skip list still gives cheap non-destructive front-to-back iteration in
/// priority order, which the snapshot printer needs.
pub struct SideBook {
    side: Side,
    entries: SkipList<BookKey, OrderId>,
}

impl SideBook {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            entries: SkipList::new(default_collector().clone()),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Enqueues `id` under `key`. `key.side` must equal this book's side.
    pub fn push(&self, key: BookKey, id: OrderId) {
        debug_assert_eq!(key.side, self.side, "pushed a key onto the wrong side's book");
        let guard = &epoch::pin();
        self.entries.insert(key, id, guard);
    }

    /// Returns the id at the root without removing it.
    pub fn peek(&self) -> Option<(BookKey, OrderId)> {
        let guard = &epoch::pin();
        self.entries
            .front(guard)
            .map(|entry| (entry.key().clone(), entry.value().clone()))
    }

    /// Removes and returns the id at the root.
    pub fn pop_front(&self) -> Option<(BookKey, OrderId)> {
        let guard = &epoch::pin();
        let entry = self.entries.front(guard)?;
        let key = entry.key().clone();
        let id = entry.value().clone();
        entry.remove();
        Some((key, id))
    }

    pub fn is_empty(&self) -> bool {
        let guard = &epoch::pin();
        self.entries.is_empty(guard)
    }

    pub fn best_price(&self) -> Option<Price> {
        let guard = &epoch::pin();
        self.entries.front(guard).map(|entry| entry.key().price)
    }

    /// A non-destructive, best-to-worst snapshot of every resting id, for the
    /// external printer.
    pub fn snapshot(&self) -> Vec<(BookKey, OrderId)> {
        let guard = &epoch::pin();
        self.entries
            .iter(guard)
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}
