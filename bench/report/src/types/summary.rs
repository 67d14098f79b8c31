use crate::utils::round_float;
use serde::{Deserialize, Serialize};

/// One program in the fixed comparison table.
#[derive(Debug, Clone, Serialize, Deserialize, derive_new::new, PartialEq)]
pub struct SummaryEntry {
    pub label: String,
    pub description: String,
    #[serde(serialize_with = "round_float")]
    pub time_ms: f64,
}

impl SummaryEntry {
    /// Execution time relative to a baseline time.
    pub fn ratio_to(&self, baseline_ms: f64) -> f64 {
        self.time_ms / baseline_ms
    }

    pub fn formatted_time(&self) -> String {
        format_time_ms(self.time_ms)
    }

    /// `x% faster` / `x% slower` phrase against a baseline time.
    pub fn performance_vs(&self, baseline_ms: f64) -> String {
        let relative = self.ratio_to(baseline_ms);
        if relative < 1.0 {
            format!("{:.1}% faster", (1.0 - relative) * 100.0)
        } else {
            format!("{:.1}% slower", (relative - 1.0) * 100.0)
        }
    }
}

/// Times above ten seconds read better in seconds.
pub fn format_time_ms(time_ms: f64) -> String {
    if time_ms > 10_000.0 {
        format!("{:.1}s", time_ms / 1000.0)
    } else {
        format!("{time_ms:.1}ms")
    }
}
