use charming::{
    datatype::DataPointItem,
    element::{ItemStyle, Symbol},
    Chart,
};

use crate::plotting::chart::LabChart;
use crate::plotting::chart_kind::ChartKind;
use crate::report::SweepReport;

const LINE_COLOR: &str = "blue";
const OPTIMAL_POINT_COLOR: &str = "red";
const THRESHOLD_COLOR: &str = "orange";
const BAR_COLOR: &str = "skyblue";
const OPTIMAL_BAR_COLOR: &str = "gold";

pub fn create_sweep_line_chart(report: &SweepReport, dark: bool) -> Chart {
    let chart = LabChart::new(&report.title(ChartKind::SweepLine), &report.subtext(), dark)
        .with_category_x_axis("Buffer Size Multiplier", multiplier_labels(report))
        .with_y_axis("Speed (MB/s)")
        .add_line_series("Throughput", report.throughputs(), Symbol::Circle, LINE_COLOR);

    let Some(analysis) = &report.analysis else {
        return chart.inner;
    };

    let optimal_index = report
        .measurements
        .iter()
        .position(|m| m.multiplier == analysis.optimal_multiplier)
        .unwrap_or(0);

    chart
        .add_reference_line(
            "90% Threshold",
            analysis.threshold_mb_s,
            report.measurements.len(),
            THRESHOLD_COLOR,
        )
        .add_point(
            &format!(
                "Optimal: {}x ({:.0} MB/s)",
                analysis.optimal_multiplier, analysis.max_throughput_mb_s
            ),
            optimal_index,
            analysis.max_throughput_mb_s,
            OPTIMAL_POINT_COLOR,
        )
        .inner
}

pub fn create_sweep_bar_chart(report: &SweepReport, dark: bool) -> Chart {
    let optimal_multiplier = report.analysis.as_ref().map(|a| a.optimal_multiplier);
    let items = report
        .measurements
        .iter()
        .map(|m| {
            let color = if Some(m.multiplier) == optimal_multiplier {
                OPTIMAL_BAR_COLOR
            } else {
                BAR_COLOR
            };
            DataPointItem::new(m.throughput_mb_s)
                .name(format!("{:.0}", m.throughput_mb_s))
                .item_style(ItemStyle::new().color(color))
        })
        .collect();

    LabChart::new(&report.title(ChartKind::SweepBars), &report.subtext(), dark)
        .with_category_x_axis("Buffer Size Multiplier", multiplier_labels(report))
        .with_y_axis("Speed (MB/s)")
        .add_bar_series("Throughput", items, true)
        .inner
}

fn multiplier_labels(report: &SweepReport) -> Vec<String> {
    report
        .measurements
        .iter()
        .map(|m| m.multiplier.to_string())
        .collect()
}
