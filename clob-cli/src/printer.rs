use engine_core::prelude::{CentralLimitOrderBook, Side, TradeRecord, TradeSink};
use std::fmt::Write as _;

const COLUMN_WIDTH: usize = 11;

/// Renders one aggregated trade as `trade <aggressor>, <passive>, <price>, <amount>`.
///
/// `price` carries whatever scale the input line gave it — [`rust_decimal::Decimal`]'s
/// `Display` preserves the original precision, so no trailing-zero normalisation happens here.
pub fn format_trade(trade: &TradeRecord) -> String {
    format!(
        "trade {}, {}, {}, {}",
        trade.aggressor_id, trade.passive_id, trade.price, trade.amount
    )
}

/// Renders the final resting-book snapshot: buys left, sells right, each
/// column in priority order from best to worst, independently of the other
/// side. An exhausted side is padded with blanks rather than truncating the
/// listing early.
pub fn format_snapshot<S: TradeSink>(engine: &CentralLimitOrderBook<S>) -> String {
    let buys = engine.resting_orders(Side::Buy);
    let sells = engine.resting_orders(Side::Sell);
    let rows = buys.len().max(sells.len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  Sellers", "Buyers", width = COLUMN_WIDTH + 8);

    for i in 0..rows {
        let (buy_volume, buy_price) = match buys.get(i) {
            Some(order) => (thousands(order.displayed_volume()), order.price.to_string()),
            None => (String::new(), String::new()),
        };
        let (sell_price, sell_volume) = match sells.get(i) {
            Some(order) => (order.price.to_string(), thousands(order.displayed_volume())),
            None => (String::new(), String::new()),
        };
        let _ = writeln!(
            out,
            "{:<w$} {:<w$} | {:<w$} {:<w$}",
            buy_volume,
            buy_price,
            sell_price,
            sell_volume,
            w = COLUMN_WIDTH
        );
    }

    out
}

/// Formats a non-negative integer with `,` thousands separators, e.g. `12345` → `12,345`.
fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
