use chrono::Utc;
use meowlab_bench_report::{
    analysis::SweepAnalysis,
    hardware::BenchmarkHardware,
    measurement::{SweepFailure, SweepMeasurement},
    params::BenchmarkParams,
    report::{SummaryReport, SweepReport},
    summary::SummaryEntry,
};

pub struct SweepReportBuilder;

impl SweepReportBuilder {
    pub fn build(
        hardware: BenchmarkHardware,
        params: BenchmarkParams,
        mut measurements: Vec<SweepMeasurement>,
        failures: Vec<SweepFailure>,
    ) -> SweepReport {
        let uuid = uuid::Uuid::new_v4();
        let timestamp = Utc::now().to_rfc3339();
        let tool_version = env!("CARGO_PKG_VERSION").to_string();

        // Keep the sweep order so the smallest multiplier is the first to
        // reach the recommendation threshold
        measurements.sort_by_key(|m| {
            params
                .multipliers
                .iter()
                .position(|&m2| m2 == m.multiplier)
                .unwrap_or(usize::MAX)
        });

        let analysis = SweepAnalysis::from_measurements(&measurements);

        SweepReport {
            uuid,
            tool_version,
            timestamp,
            hardware,
            params,
            measurements,
            failures,
            analysis,
        }
    }
}

pub struct SummaryReportBuilder;

impl SummaryReportBuilder {
    pub fn build(
        hardware: BenchmarkHardware,
        params: BenchmarkParams,
        entries: Vec<SummaryEntry>,
        baseline_label: String,
        outlier_label: String,
    ) -> SummaryReport {
        let uuid = uuid::Uuid::new_v4();
        let timestamp = Utc::now().to_rfc3339();
        let tool_version = env!("CARGO_PKG_VERSION").to_string();

        SummaryReport {
            uuid,
            tool_version,
            timestamp,
            hardware,
            params,
            entries,
            baseline_label,
            outlier_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meowlab_bench_report::measurement::ThroughputSource;
    use meowlab_bench_report::tool_kind::ToolKind;

    fn sweep_params(multipliers: Vec<u32>) -> BenchmarkParams {
        BenchmarkParams {
            tool_kind: ToolKind::Sweep,
            base_block_size: 4096,
            multipliers,
            total_volume_bytes: 512 * 1024 * 1024,
            source: "/dev/zero".to_string(),
            sink: "/dev/null".to_string(),
            dd_path: "dd".to_string(),
            remark: None,
            extra_info: None,
            gitref: None,
            gitref_date: None,
            pretty_name: String::new(),
            bench_command: String::new(),
            params_identifier: String::new(),
        }
    }

    fn measurement(multiplier: u32, throughput: f64) -> SweepMeasurement {
        SweepMeasurement::new(
            multiplier,
            4096 * u64::from(multiplier),
            1.0,
            throughput,
            ThroughputSource::Reported,
        )
    }

    #[test]
    fn sweep_report_keeps_measurements_in_sweep_order() {
        let params = sweep_params(vec![1, 2, 4]);
        let measurements = vec![
            measurement(4, 95.0),
            measurement(1, 50.0),
            measurement(2, 100.0),
        ];

        let report = SweepReportBuilder::build(
            BenchmarkHardware::default(),
            params,
            measurements,
            Vec::new(),
        );

        let order: Vec<u32> = report.measurements.iter().map(|m| m.multiplier).collect();
        assert_eq!(order, vec![1, 2, 4]);

        let analysis = report.analysis.expect("analysis should be present");
        assert_eq!(analysis.optimal_multiplier, 2);
        assert_eq!(analysis.recommended_multiplier, 2);
    }

    #[test]
    fn sweep_report_without_measurements_has_no_analysis() {
        let report = SweepReportBuilder::build(
            BenchmarkHardware::default(),
            sweep_params(vec![1, 2]),
            Vec::new(),
            vec![SweepFailure::new(1, 4096, "dd exited with status 1".to_string())],
        );

        assert!(report.analysis.is_none());
        assert_eq!(report.failures.len(), 1);
    }
}
