//! Custom error types

use thiserror::Error;

/// Error kinds the simulation surfaces to its caller.
///
/// Everything else (file I/O, deserialization) propagates as
/// `anyhow::Error` from the boundary that touched it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A required upstream artifact is absent; the pipeline does not run.
    #[error("missing input: {0}")]
    MissingInput(String),
    /// A value violates its declared numeric domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The trace yields zero distance or zero consumption, so range and
    /// cost are undefined. Reported explicitly, never as `inf`/`NaN`.
    #[error("undefined result for this trace: {0}")]
    DegenerateTrace(String),
}
