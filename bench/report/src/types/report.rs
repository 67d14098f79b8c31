use crate::types::analysis::SweepAnalysis;
use crate::types::hardware::BenchmarkHardware;
use crate::types::measurement::{SweepFailure, SweepMeasurement};
use crate::types::params::BenchmarkParams;
use crate::types::summary::SummaryEntry;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SweepReport {
    /// Sweep unique identifier
    pub uuid: Uuid,

    /// meowlab-bench version
    pub tool_version: String,

    /// Timestamp when the sweep was finished
    pub timestamp: String,

    /// Benchmark hardware
    pub hardware: BenchmarkHardware,

    /// Benchmark parameters
    pub params: BenchmarkParams,

    /// Successful dd invocations in sweep order
    pub measurements: Vec<SweepMeasurement>,

    /// Failed dd invocations in sweep order
    pub failures: Vec<SweepFailure>,

    /// Optimum statistics, absent when every invocation failed
    pub analysis: Option<SweepAnalysis>,
}

impl SweepReport {
    pub fn dump_to_json(&self, output_dir: &str) {
        write_report_json(self, output_dir);
    }

    pub fn throughputs(&self) -> Vec<f64> {
        self.measurements.iter().map(|m| m.throughput_mb_s).collect()
    }

    /// Bytes pushed through dd across all successful runs.
    pub fn total_bytes_transferred(&self) -> u64 {
        self.measurements
            .iter()
            .map(|m| (m.buffer_size_bytes * (self.params.total_volume_bytes / m.buffer_size_bytes)))
            .sum()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SummaryReport {
    /// Summary unique identifier
    pub uuid: Uuid,

    /// meowlab-bench version
    pub tool_version: String,

    /// Timestamp when the summary was rendered
    pub timestamp: String,

    /// Benchmark hardware
    pub hardware: BenchmarkHardware,

    /// Benchmark parameters
    pub params: BenchmarkParams,

    /// Fixed comparison table in presentation order
    pub entries: Vec<SummaryEntry>,

    /// Label of the entry every ratio is computed against
    pub baseline_label: String,

    /// Label of the entry excluded from the linear-scale chart
    pub outlier_label: String,
}

impl SummaryReport {
    pub fn dump_to_json(&self, output_dir: &str) {
        write_report_json(self, output_dir);
    }

    pub fn baseline(&self) -> Option<&SummaryEntry> {
        self.entries.iter().find(|e| e.label == self.baseline_label)
    }

    pub fn entry(&self, label: &str) -> Option<&SummaryEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Entries without the designated outlier, in presentation order.
    pub fn filtered_entries(&self) -> Vec<&SummaryEntry> {
        self.entries
            .iter()
            .filter(|e| e.label != self.outlier_label)
            .collect()
    }

    /// Fastest entry among the filtered ones.
    pub fn winner(&self) -> Option<&SummaryEntry> {
        self.filtered_entries()
            .into_iter()
            .reduce(|best, candidate| {
                if candidate.time_ms < best.time_ms {
                    candidate
                } else {
                    best
                }
            })
    }
}

fn write_report_json<T: Serialize>(report: &T, output_dir: &str) {
    // Create the output directory
    std::fs::create_dir_all(output_dir).expect("Failed to create output directory");

    let report_path = Path::new(output_dir).join("report.json");
    let report_json = serde_json::to_string(report).unwrap();
    std::fs::write(&report_path, report_json).expect("Failed to write report to file");
    info!("Report was dumped to {}", report_path.display());
}
