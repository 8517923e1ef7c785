use rust_decimal::Decimal;

/// OrderId is the type used for order identity.
///
/// The wire format (see the `clob-cli` crate) carries ids as opaque strings,
/// so unlike a purely in-memory engine we cannot assume a dense integer space.
pub type OrderId = String;

/// Price is the type used for prices in the order.
///
/// Prices are exact base-10 decimals: binary floating point is never used for
/// comparison, hashing, or rendering, since price-time priority and trade
/// rendering both depend on exact equality.
pub type Price = Decimal;

/// Quantity is the type used for resting/visible/peak volumes.
pub type Quantity = u64;

/// Priority is the engine-assigned arrival timestamp used for price-time
/// ordering. It is a monotonically increasing logical clock reading, not a
/// wall-clock duration; see [`crate::engine::engine::MonotonicClock`].
pub type Priority = u64;

/// Side indicates the direction of the order.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Side {
    /// Buy means the user wants to acquire the asset, matching against resting sell orders.
    Buy,
    /// Sell means the user wants to sell the asset, matching against resting buy orders.
    Sell,
}

/// BookKey is the composite priority key for an order's position in one side book.
///
/// Ordering semantics:
/// - For Buy orders: higher prices are prioritized (sorted descending),
///   and for the same price, earlier orders (lower `arrival_ts`) are prioritized.
/// - For Sell orders: lower prices are prioritized (sorted ascending),
///   and for the same price, earlier orders (lower `arrival_ts`) are prioritized.
///
/// `id` is a final, purely-for-totality tiebreak: the engine's monotonic clock
/// never actually hands out two equal `arrival_ts` values, but the comparator
/// must still be total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookKey {
    pub price: Price,
    pub arrival_ts: Priority,
    pub side: Side,
    pub id: OrderId,
}

impl Ord for BookKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.side {
            Side::Buy => self
                .price
                .cmp(&other.price)
                .reverse()
                .then(self.arrival_ts.cmp(&other.arrival_ts))
                .then(self.id.cmp(&other.id)),
            Side::Sell => self
                .price
                .cmp(&other.price)
                .then(self.arrival_ts.cmp(&other.arrival_ts))
                .then(self.id.cmp(&other.id)),
        }
    }
}

impl PartialOrd for BookKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// OrderVariant is the closed sum distinguishing regular orders from icebergs.
///
/// Dispatch over the variant is static (a `match`), not a trait object: the
/// set of variants is closed and no open extension is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderVariant {
    /// No additional state beyond the common order fields.
    Regular,
    /// `peak` is immutable after construction. `visible` is the current
    /// visible residual and always satisfies `visible <= min(volume, peak)`.
    Iceberg { peak: Quantity, visible: Quantity },
}

/// OrderValidationError represents possible validation failures for order parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderValidationError {
    /// The order's volume is zero (or would be, after clamping).
    #[error("order volume must be positive")]
    NonPositiveVolume,
    /// An iceberg's peak is zero.
    #[error("iceberg peak must be positive")]
    NonPositivePeak,
}

/// Order represents a single resting or in-flight order in the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    pub volume: Quantity,
    pub arrival_ts: Priority,
    pub variant: OrderVariant,
}

impl Order {
    /// Builds a regular (non-iceberg) order. `arrival_ts` is set to `0`; the
    /// engine overwrites it at submission time (see [`Order::set_arrival`]).
    pub fn regular(
        id: OrderId,
        side: Side,
        price: Price,
        volume: Quantity,
    ) -> Result<Self, OrderValidationError> {
        if volume == 0 {
            return Err(OrderValidationError::NonPositiveVolume);
        }
        Ok(Self {
            id,
            side,
            price,
            volume,
            arrival_ts: 0,
            variant: OrderVariant::Regular,
        })
    }

    /// Builds an iceberg order. `peak` must be strictly positive. If
    /// `peak >= volume`, the visible slice is clamped to `volume` immediately
    /// rather than waiting for the first trade to clamp it.
    pub fn iceberg(
        id: OrderId,
        side: Side,
        price: Price,
        volume: Quantity,
        peak: Quantity,
    ) -> Result<Self, OrderValidationError> {
        if volume == 0 {
            return Err(OrderValidationError::NonPositiveVolume);
        }
        if peak == 0 {
            return Err(OrderValidationError::NonPositivePeak);
        }
        let visible = peak.min(volume);
        Ok(Self {
            id,
            side,
            price,
            volume,
            arrival_ts: 0,
            variant: OrderVariant::Iceberg { peak, visible },
        })
    }

    /// Assigns a freshly minted arrival timestamp, as the engine does at
    /// submission time and on every iceberg restart.
    pub(crate) fn set_arrival(&mut self, arrival_ts: Priority) {
        self.arrival_ts = arrival_ts;
    }

    /// The book key for this order's current priority position.
    pub fn book_key(&self) -> BookKey {
        BookKey {
            price: self.price,
            arrival_ts: self.arrival_ts,
            side: self.side,
            id: self.id.clone(),
        }
    }

    /// The amount of volume this order currently offers to a crossing counterparty.
    #[inline]
    pub fn displayed_volume(&self) -> Quantity {
        match self.variant {
            OrderVariant::Regular => self.volume,
            OrderVariant::Iceberg { visible, .. } => visible,
        }
    }

    /// Reduces this order's residual volume by up to `requested`, returning the
    /// amount actually consumed. `counter_ts` is the arrival timestamp of the
    /// order on the other side of the cross being processed; it decides,
    /// for an iceberg, whether this order is the aggressor or the passive side.
    pub fn trade(&mut self, requested: Quantity, counter_ts: Priority) -> Quantity {
        match &mut self.variant {
            OrderVariant::Regular => {
                let consumed = self.volume.min(requested);
                self.volume -= consumed;
                consumed
            }
            OrderVariant::Iceberg { visible, .. } => {
                let is_aggressive = self.arrival_ts > counter_ts;
                let consumed = if is_aggressive {
                    let consumed = self.volume.min(requested);
                    self.volume -= consumed;
                    consumed
                } else {
                    let consumed = (*visible).min(requested);
                    *visible -= consumed;
                    self.volume -= consumed;
                    consumed
                };
                *visible = (*visible).min(self.volume);
                consumed
            }
        }
    }

    /// True if this order is complete with respect to its current visible
    /// slice (regular orders: fully filled; icebergs: visible slice exhausted,
    /// even if residual volume remains and a restart is pending).
    #[inline]
    pub fn is_complete(&self) -> bool {
        match self.variant {
            OrderVariant::Regular => self.volume == 0,
            OrderVariant::Iceberg { visible, .. } => visible == 0,
        }
    }

    /// If this is an iceberg with an exhausted visible slice and remaining
    /// volume, refills the visible slice (side effect) and returns true.
    /// Regular orders never restart.
    pub fn should_restart(&mut self) -> bool {
        match &mut self.variant {
            OrderVariant::Regular => false,
            OrderVariant::Iceberg { peak, visible } => {
                if *visible == 0 && self.volume > 0 {
                    *visible = self.volume.min(*peak);
                    true
                } else {
                    false
                }
            }
        }
    }
}
