use crate::error::CliError;
use engine_core::prelude::{NewOrderRequest, Side};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses one input record into a validated [`NewOrderRequest`].
///
/// Field order: `id, side, price, volume[, peak]`. A fifth field marks the
/// order as iceberg; its presence, not its value, is what distinguishes the
/// two variants (§6 of the wire contract).
pub fn parse_line(line: &str, line_no: usize) -> Result<NewOrderRequest, CliError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 4 && fields.len() != 5 {
        return Err(CliError::WrongFieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let id = fields[0].to_string();
    let side = parse_side(fields[1], line_no)?;
    let price = parse_decimal(fields[2], line_no)
        .map_err(|value| CliError::InvalidPrice { line: line_no, value })?;
    let volume = parse_u64(fields[3], line_no)
        .map_err(|value| CliError::InvalidVolume { line: line_no, value })?;

    if fields.len() == 5 {
        let peak = parse_u64(fields[4], line_no)
            .map_err(|value| CliError::InvalidPeak { line: line_no, value })?;
        Ok(NewOrderRequest::Iceberg {
            id,
            side,
            price,
            volume,
            peak,
        })
    } else {
        Ok(NewOrderRequest::Regular {
            id,
            side,
            price,
            volume,
        })
    }
}

fn parse_side(raw: &str, line_no: usize) -> Result<Side, CliError> {
    match raw {
        "B" => Ok(Side::Buy),
        "S" => Ok(Side::Sell),
        other => Err(CliError::InvalidSide {
            line: line_no,
            value: other.to_string(),
        }),
    }
}

fn parse_decimal(raw: &str, _line_no: usize) -> Result<Decimal, String> {
    Decimal::from_str(raw).map_err(|_| raw.to_string())
}

fn parse_u64(raw: &str, _line_no: usize) -> Result<u64, String> {
    let value: i64 = raw.parse().map_err(|_| raw.to_string())?;
    if value <= 0 {
        return Err(raw.to_string());
    }
    Ok(value as u64)
}
