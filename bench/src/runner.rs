use crate::analytics::report_builder::{SummaryReportBuilder, SweepReportBuilder};
use crate::args::common::MeowlabBenchArgs;
use crate::args::kind::ToolCommand;
use crate::error::BenchError;
use crate::plot::{plot_summary_chart, plot_sweep_chart, SummaryChartType, SweepChartType};
use crate::summary;
use crate::sweep;
use meowlab_bench_report::hardware::BenchmarkHardware;
use meowlab_bench_report::params::BenchmarkParams;
use std::path::Path;
use tracing::{error, info};

pub struct BenchmarkRunner {
    pub args: Option<MeowlabBenchArgs>,
}

impl BenchmarkRunner {
    pub fn new(args: MeowlabBenchArgs) -> Self {
        Self { args: Some(args) }
    }

    pub fn run(&mut self) -> Result<(), BenchError> {
        let args = self.args.take().unwrap();
        args.validate();

        let params = BenchmarkParams::from(&args);
        let hardware = BenchmarkHardware::detect(args.identifier());

        match &args.tool {
            ToolCommand::Sweep(_) => {
                let recommended = Self::run_sweep(&args, hardware, params)?;
                info!("Recommended buffer size multiplier: {recommended}x");
            }
            ToolCommand::Summary(_) => Self::run_summary(&args, hardware, params)?,
            // Resolved by as_simple_kind() while building the params
            ToolCommand::Examples => unreachable!(),
        }

        Ok(())
    }

    fn run_sweep(
        args: &MeowlabBenchArgs,
        hardware: BenchmarkHardware,
        params: BenchmarkParams,
    ) -> Result<u32, BenchError> {
        let ToolCommand::Sweep(sweep_args) = &args.tool else {
            unreachable!()
        };

        let outcome = sweep::run_sweep(sweep_args);
        let report =
            SweepReportBuilder::build(hardware, params, outcome.measurements, outcome.failures);
        report.print_analysis();

        let Some(analysis) = &report.analysis else {
            // Every run failed, so there is nothing to recommend or plot
            return Ok(1);
        };

        if let Some(output_dir) = args.output_dir() {
            let dir_name = args.generate_dir_name();
            let full_output_path = Path::new(&output_dir)
                .join(dir_name)
                .to_string_lossy()
                .to_string();

            report.dump_to_json(&full_output_path);

            plot_sweep_chart(&report, &full_output_path, SweepChartType::Line).map_err(|e| {
                error!("Failed to generate plots: {e}");
                BenchError::CannotWriteToFile
            })?;
            plot_sweep_chart(&report, &full_output_path, SweepChartType::Bars).map_err(|e| {
                error!("Failed to generate plots: {e}");
                BenchError::CannotWriteToFile
            })?;

            if args.open_charts() {
                open_charts(&full_output_path, &["throughput_line", "throughput_bars"])?;
            }
        }

        Ok(analysis.recommended_multiplier)
    }

    fn run_summary(
        args: &MeowlabBenchArgs,
        hardware: BenchmarkHardware,
        params: BenchmarkParams,
    ) -> Result<(), BenchError> {
        let report = SummaryReportBuilder::build(
            hardware,
            params,
            summary::entries(),
            summary::BASELINE_LABEL.to_string(),
            summary::OUTLIER_LABEL.to_string(),
        );
        report.print_summary();

        if let Some(output_dir) = args.output_dir() {
            let dir_name = args.generate_dir_name();
            let full_output_path = Path::new(&output_dir)
                .join(dir_name)
                .to_string_lossy()
                .to_string();

            report.dump_to_json(&full_output_path);

            plot_summary_chart(&report, &full_output_path, SummaryChartType::Full).map_err(|e| {
                error!("Failed to generate plots: {e}");
                BenchError::CannotWriteToFile
            })?;
            plot_summary_chart(&report, &full_output_path, SummaryChartType::Filtered).map_err(
                |e| {
                    error!("Failed to generate plots: {e}");
                    BenchError::CannotWriteToFile
                },
            )?;

            if args.open_charts() {
                open_charts(&full_output_path, &["comparison_full", "comparison_filtered"])?;
            }
        }

        Ok(())
    }
}

fn open_charts(output_path: &str, chart_names: &[&str]) -> Result<(), BenchError> {
    for chart_name in chart_names {
        let chart_path = Path::new(output_path).join(format!("{chart_name}.html"));
        info!("Opening chart in browser: {}", chart_path.display());
        open::that(chart_path)?;
    }
    Ok(())
}
