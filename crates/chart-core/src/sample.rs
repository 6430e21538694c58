// File: crates/chart-core/src/sample.rs
// Summary: Validated sample type built once at the ingestion boundary.
// Notes:
// - A `Sample` value is always finite and non-negative, so the mapper never
//   has to re-check its input domain.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SampleError;

/// What to do with a negative reading at ingestion time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativePolicy {
    #[default]
    Reject,
    #[serde(alias = "clamp-to-zero")]
    Clamp,
}

/// One labeled observation in a time-ordered series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSample")]
pub struct Sample {
    label: String,
    value: f64,
}

/// Unvalidated wire shape of a sample.
#[derive(Clone, Debug, Deserialize)]
pub struct RawSample {
    pub label: String,
    pub value: f64,
}

impl TryFrom<RawSample> for Sample {
    type Error = SampleError;

    fn try_from(raw: RawSample) -> Result<Self, Self::Error> {
        Sample::new(raw.label, raw.value)
    }
}

impl Sample {
    /// Construct a sample, rejecting negative and non-finite values.
    pub fn new(label: impl Into<String>, value: f64) -> Result<Self, SampleError> {
        Self::with_policy(label, value, NegativePolicy::Reject)
    }

    pub fn with_policy(label: impl Into<String>, value: f64, policy: NegativePolicy) -> Result<Self, SampleError> {
        let label = label.into();
        if !value.is_finite() {
            return Err(SampleError::NonFinite { label });
        }
        if value < 0.0 {
            return match policy {
                NegativePolicy::Reject => Err(SampleError::Negative { label, value }),
                NegativePolicy::Clamp => {
                    warn!(label = %label, value, "clamping negative sample to zero");
                    Ok(Self { label, value: 0.0 })
                }
            };
        }
        // -0.0 would otherwise leak into formatted output.
        let value = if value == 0.0 { 0.0 } else { value };
        Ok(Self { label, value })
    }

    /// Parse a textual reading (e.g. a CSV cell). Blank cells are rejected.
    pub fn parse(label: impl Into<String>, raw: &str, policy: NegativePolicy) -> Result<Self, SampleError> {
        let label = label.into();
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(v) => Self::with_policy(label, v, policy),
            Err(_) => Err(SampleError::Unparseable { label, raw: trimmed.to_string() }),
        }
    }

    pub fn label(&self) -> &str { &self.label }
    pub fn value(&self) -> f64 { self.value }
}

/// Build a sample sequence from `(label, value)` pairs, stopping at the first rejection.
pub fn ingest<I, L>(records: I, policy: NegativePolicy) -> Result<Vec<Sample>, SampleError>
where
    I: IntoIterator<Item = (L, f64)>,
    L: Into<String>,
{
    records
        .into_iter()
        .map(|(label, value)| Sample::with_policy(label, value, policy))
        .collect()
}

/// Convenience for static mock arrays whose values are known to be valid.
/// Invalid entries are dropped with a warning rather than panicking.
pub fn from_static(records: &[(&str, f64)]) -> Vec<Sample> {
    records
        .iter()
        .filter_map(|&(label, value)| match Sample::new(label, value) {
            Ok(s) => Some(s),
            Err(e) => {
                warn!(error = %e, "dropping invalid static sample");
                None
            }
        })
        .collect()
}

/// Largest value in the sequence, or `None` when it is empty.
pub fn max_value(samples: &[Sample]) -> Option<f64> {
    samples.iter().map(Sample::value).reduce(f64::max)
}

/// Smallest value in the sequence, or `None` when it is empty.
pub fn min_value(samples: &[Sample]) -> Option<f64> {
    samples.iter().map(Sample::value).reduce(f64::min)
}
