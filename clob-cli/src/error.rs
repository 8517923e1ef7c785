use engine_core::prelude::EngineError;

/// CliError covers every way a run can fail outside the matching core itself:
/// malformed input records and engine-boundary rejections. Both are fatal —
/// the reader never attempts to recover a bad line, per the malformed-input
/// contract in the core.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("line {line}: expected 4 or 5 comma-separated fields, got {found}")]
    WrongFieldCount { line: usize, found: usize },

    #[error("line {line}: side must be `B` or `S`, got `{value}`")]
    InvalidSide { line: usize, value: String },

    #[error("line {line}: invalid price `{value}`")]
    InvalidPrice { line: usize, value: String },

    #[error("line {line}: invalid volume `{value}`")]
    InvalidVolume { line: usize, value: String },

    #[error("line {line}: invalid peak `{value}`")]
    InvalidPeak { line: usize, value: String },

    #[error("line {line}: order rejected by engine: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: EngineError,
    },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
