//! Line-oriented front end for the matching engine core: reads one order
//! record per line from stdin, prints each emitted trade as it is produced,
//! and prints a final resting-book snapshot once stdin is exhausted.
//!
//! This crate is the sole owner of I/O; [`engine_core`] itself never touches
//! stdin, stdout, or the filesystem. The binary in `src/main.rs` is a thin
//! wrapper around [`run`] so the reader and printer surfaces stay testable
//! from `tests/` without shelling out to a built executable.

pub mod error;
pub mod printer;
pub mod reader;

use engine_core::prelude::{CentralLimitOrderBook, VecTradeSink};
use error::CliError;
use std::io::{BufRead, Write};

/// Consumes `stdin` line by line, submitting each parsed order to a fresh
/// engine and printing every trade it produces as it happens, then writes
/// the final resting-book snapshot once input is exhausted.
pub fn run(stdin: impl BufRead, out: &mut impl Write) -> Result<(), CliError> {
    let mut engine = CentralLimitOrderBook::new(VecTradeSink::default());
    let mut printed = 0;

    for (i, line) in stdin.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = i + 1;

        let request = reader::parse_line(&line, line_no)?;
        let order = request
            .build()
            .map_err(|source| CliError::Rejected { line: line_no, source })?;
        engine
            .submit(order)
            .map_err(|source| CliError::Rejected { line: line_no, source })?;

        for trade in &engine.sink().trades[printed..] {
            writeln!(out, "{}", printer::format_trade(trade))?;
        }
        printed = engine.sink().trades.len();
    }

    write!(out, "{}", printer::format_snapshot(&engine))?;
    Ok(())
}
