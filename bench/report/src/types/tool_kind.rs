use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
    Default,
    PartialOrd,
    Ord,
)]
pub enum ToolKind {
    #[default]
    #[display("Buffer Sweep")]
    #[serde(rename = "buffer_sweep")]
    Sweep,
    #[display("Performance Summary")]
    #[serde(rename = "performance_summary")]
    Summary,
}
