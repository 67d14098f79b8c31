use crate::utils::round_float;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

/// Where a throughput figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize, Default)]
pub enum ThroughputSource {
    /// Parsed from a rate token in the dd diagnostic output.
    #[default]
    #[display("reported")]
    #[serde(rename = "reported")]
    Reported,
    /// Computed from transferred bytes over wall-clock duration.
    #[display("estimated")]
    #[serde(rename = "estimated")]
    Estimated,
}

/// One successful dd invocation of the sweep.
#[derive(Debug, Clone, Serialize, Deserialize, derive_new::new, PartialEq)]
pub struct SweepMeasurement {
    pub multiplier: u32,
    pub buffer_size_bytes: u64,
    #[serde(serialize_with = "round_float")]
    pub duration_secs: f64,
    #[serde(serialize_with = "round_float")]
    pub throughput_mb_s: f64,
    pub source: ThroughputSource,
}

/// One failed dd invocation, kept only for the progress table and the
/// report file; failures never abort the sweep.
#[derive(Debug, Clone, Serialize, Deserialize, derive_new::new, PartialEq)]
pub struct SweepFailure {
    pub multiplier: u32,
    pub buffer_size_bytes: u64,
    pub reason: String,
}
