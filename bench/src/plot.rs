use byte_unit::{Byte, UnitType};
use charming::theme::Theme;
use charming::{Chart, HtmlRenderer};
use meowlab_bench_report::report::{SummaryReport, SweepReport};
use std::path::Path;
use std::time::Instant;
use tracing::info;

pub enum SweepChartType {
    Line,
    Bars,
}

impl SweepChartType {
    fn name(&self) -> &'static str {
        match self {
            SweepChartType::Line => "throughput_line",
            SweepChartType::Bars => "throughput_bars",
        }
    }

    fn create_chart(&self) -> fn(&SweepReport, bool) -> Chart {
        match self {
            SweepChartType::Line => meowlab_bench_report::create_sweep_line_chart,
            SweepChartType::Bars => meowlab_bench_report::create_sweep_bar_chart,
        }
    }

    fn get_samples(&self, report: &SweepReport) -> usize {
        report.measurements.len()
    }
}

pub enum SummaryChartType {
    Full,
    Filtered,
}

impl SummaryChartType {
    fn name(&self) -> &'static str {
        match self {
            SummaryChartType::Full => "comparison_full",
            SummaryChartType::Filtered => "comparison_filtered",
        }
    }

    fn create_chart(&self) -> fn(&SummaryReport, bool) -> Chart {
        match self {
            SummaryChartType::Full => meowlab_bench_report::create_summary_full_chart,
            SummaryChartType::Filtered => meowlab_bench_report::create_summary_filtered_chart,
        }
    }

    fn get_samples(&self, report: &SummaryReport) -> usize {
        match self {
            SummaryChartType::Full => report.entries.len(),
            SummaryChartType::Filtered => report.filtered_entries().len(),
        }
    }
}

pub fn plot_sweep_chart(
    report: &SweepReport,
    output_directory: &str,
    chart_type: SweepChartType,
) -> std::io::Result<()> {
    let data_processing_start = Instant::now();
    let chart = (chart_type.create_chart())(report, true); // Use dark theme by default
    let data_processing_time = data_processing_start.elapsed();

    let chart_render_start = Instant::now();
    save_chart(&chart, chart_type.name(), output_directory, 1600, 1200)?;
    let chart_render_time = chart_render_start.elapsed();

    log_generated_plot(
        chart_type.name(),
        output_directory,
        chart_type.get_samples(report),
        data_processing_time,
        chart_render_time,
    )
}

pub fn plot_summary_chart(
    report: &SummaryReport,
    output_directory: &str,
    chart_type: SummaryChartType,
) -> std::io::Result<()> {
    let data_processing_start = Instant::now();
    let chart = (chart_type.create_chart())(report, true); // Use dark theme by default
    let data_processing_time = data_processing_start.elapsed();

    let chart_render_start = Instant::now();
    save_chart(&chart, chart_type.name(), output_directory, 1600, 1200)?;
    let chart_render_time = chart_render_start.elapsed();

    log_generated_plot(
        chart_type.name(),
        output_directory,
        chart_type.get_samples(report),
        data_processing_time,
        chart_render_time,
    )
}

fn log_generated_plot(
    chart_name: &str,
    output_directory: &str,
    total_samples: usize,
    data_processing_time: std::time::Duration,
    chart_render_time: std::time::Duration,
) -> std::io::Result<()> {
    let chart_path = format!("{}/{}.html", output_directory, chart_name);
    let report_path = format!("{}/report.json", output_directory);
    let report_size = Byte::from_u64(std::fs::metadata(&report_path)?.len());

    info!(
        "Generated {} plot at: {} ({} samples, report.json size: {:.2}, data processing: {:.2?}, chart render: {:.2?})",
        chart_name,
        chart_path,
        total_samples,
        report_size.get_appropriate_unit(UnitType::Binary),
        data_processing_time,
        chart_render_time
    );
    Ok(())
}

fn save_chart(
    chart: &Chart,
    file_name: &str,
    output_directory: &str,
    width: u64,
    height: u64,
) -> std::io::Result<()> {
    std::fs::create_dir_all(output_directory)?;
    let full_output_path = Path::new(output_directory).join(format!("{}.html", file_name));

    let mut renderer = HtmlRenderer::new(file_name, width, height).theme(Theme::Dark);
    renderer.save(chart, &full_output_path).map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to save HTML plot: {}", e),
        )
    })
}
