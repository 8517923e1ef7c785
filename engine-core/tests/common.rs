use engine_core::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Quickly builds a regular limit order for testing.
pub fn regular(id: &str, side: Side, price: &str, volume: u64) -> Order {
    Order::regular(id.to_string(), side, dec(price), volume).unwrap()
}

/// Quickly builds an iceberg order for testing.
pub fn iceberg(id: &str, side: Side, price: &str, volume: u64, peak: u64) -> Order {
    Order::iceberg(id.to_string(), side, dec(price), volume, peak).unwrap()
}

/// A fresh engine with a capturing sink, for asserting on the emitted trade stream.
pub fn fresh_engine() -> CentralLimitOrderBook<VecTradeSink> {
    CentralLimitOrderBook::new(VecTradeSink::default())
}
