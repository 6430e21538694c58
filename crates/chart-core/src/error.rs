// File: crates/chart-core/src/error.rs
// Summary: Error types for sample ingestion and coordinate mapping.

use thiserror::Error;

/// Mapping failures. A zero maximum is not one of them: it collapses to the baseline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("cannot map an empty sample sequence")]
    EmptyInput,
    #[error("invalid canvas: {0}")]
    InvalidCanvas(&'static str),
    #[error("{count} bars need {needed}px but the canvas is {available}px wide")]
    BarsOverflow { count: usize, needed: f64, available: f64 },
}

/// Rejections at the sample construction boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("sample '{label}' has negative value {value}")]
    Negative { label: String, value: f64 },
    #[error("sample '{label}' has a non-finite value")]
    NonFinite { label: String },
    #[error("sample '{label}' has unparseable value '{raw}'")]
    Unparseable { label: String, raw: String },
}
