mod common;

use crate::common::*;
use engine_core::prelude::*;

/// S1 — Simple cross.
#[test]
fn s1_simple_cross() {
    let mut engine = fresh_engine();
    engine
        .submit(regular("A", Side::Buy, "100.00", 50))
        .unwrap();
    engine
        .submit(regular("X", Side::Sell, "100.00", 50))
        .unwrap();

    let trades = &engine.sink().trades;
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].aggressor_id, "X");
    assert_eq!(trades[0].passive_id, "A");
    assert_eq!(trades[0].amount, 50);

    assert!(engine.resting_orders(Side::Buy).is_empty());
    assert!(engine.resting_orders(Side::Sell).is_empty());
}

/// S2 — Price-improvement for aggressor: trade executes at the maker's price.
#[test]
fn s2_price_improvement_for_aggressor() {
    let mut engine = fresh_engine();
    engine
        .submit(regular("A", Side::Buy, "100.00", 50))
        .unwrap();
    engine
        .submit(regular("X", Side::Sell, "99.00", 50))
        .unwrap();

    let trades = &engine.sink().trades;
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].aggressor_id, "X");
    assert_eq!(trades[0].passive_id, "A");
    assert_eq!(trades[0].price.to_string(), "100.00");
    assert_eq!(trades[0].amount, 50);
}

/// S3 — Partial fill: buy book retains the resting order with residual volume.
#[test]
fn s3_partial_fill() {
    let mut engine = fresh_engine();
    engine
        .submit(regular("A", Side::Buy, "100.00", 100))
        .unwrap();
    engine
        .submit(regular("X", Side::Sell, "100.00", 30))
        .unwrap();

    let trades = &engine.sink().trades;
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].amount, 30);

    let resting = engine.resting_orders(Side::Buy);
    assert_eq!(resting.len(), 1);
    assert_eq!(resting[0].id, "A");
    assert_eq!(resting[0].volume, 70);
}

/// S4 — Passive iceberg, small taker.
#[test]
fn s4_passive_iceberg_small_taker() {
    let mut engine = fresh_engine();
    engine
        .submit(iceberg("I", Side::Buy, "100.00", 1000, 100))
        .unwrap();
    engine
        .submit(regular("X", Side::Sell, "100.00", 30))
        .unwrap();

    let trades = &engine.sink().trades;
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].aggressor_id, "X");
    assert_eq!(trades[0].passive_id, "I");
    assert_eq!(trades[0].amount, 30);

    let resting = engine.resting_orders(Side::Buy);
    assert_eq!(resting.len(), 1);
    assert_eq!(resting[0].volume, 970);
    match resting[0].variant {
        OrderVariant::Iceberg { visible, .. } => assert_eq!(visible, 70),
        OrderVariant::Regular => panic!("expected iceberg"),
    }
}

/// S5 — Passive iceberg, slice exhaustion and restart: one aggregated trade
/// across three internal refill iterations (100 + 100 + 50).
#[test]
fn s5_passive_iceberg_restart_aggregated() {
    let mut engine = fresh_engine();
    engine
        .submit(iceberg("I", Side::Buy, "100.00", 1000, 100))
        .unwrap();
    engine
        .submit(regular("X", Side::Sell, "100.00", 250))
        .unwrap();

    let trades = &engine.sink().trades;
    assert_eq!(trades.len(), 1, "must aggregate into a single trade line");
    assert_eq!(trades[0].aggressor_id, "X");
    assert_eq!(trades[0].passive_id, "I");
    assert_eq!(trades[0].amount, 250);

    let resting = engine.resting_orders(Side::Buy);
    assert_eq!(resting.len(), 1);
    assert_eq!(resting[0].volume, 750);
    match resting[0].variant {
        OrderVariant::Iceberg { visible, .. } => assert_eq!(visible, 50),
        OrderVariant::Regular => panic!("expected iceberg"),
    }
}

/// S6 — Aggressive iceberg sweeping resting regulars at the same price: one
/// trade per passive counter-order, in cross order, plus the aggressive
/// iceberg's visible slice clamped from peak afterwards.
#[test]
fn s6_aggressive_iceberg_sweeps_regulars() {
    let mut engine = fresh_engine();
    engine
        .submit(regular("A", Side::Sell, "100.00", 40))
        .unwrap();
    engine
        .submit(regular("B", Side::Sell, "100.00", 40))
        .unwrap();
    engine
        .submit(regular("C", Side::Sell, "100.00", 40))
        .unwrap();
    engine
        .submit(iceberg("I", Side::Buy, "100.00", 200, 50))
        .unwrap();

    let trades = &engine.sink().trades;
    assert_eq!(trades.len(), 3);
    for (trade, expected_passive) in trades.iter().zip(["A", "B", "C"]) {
        assert_eq!(trade.aggressor_id, "I");
        assert_eq!(trade.passive_id, expected_passive);
        assert_eq!(trade.amount, 40);
    }

    let resting = engine.resting_orders(Side::Buy);
    assert_eq!(resting.len(), 1);
    assert_eq!(resting[0].volume, 80);
    match resting[0].variant {
        OrderVariant::Iceberg { visible, peak } => {
            assert_eq!(peak, 50);
            assert_eq!(visible, 50);
        }
        OrderVariant::Regular => panic!("expected iceberg"),
    }
}
