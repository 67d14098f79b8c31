use charming::{datatype::DataPointItem, element::ItemStyle, Chart};

use crate::plotting::chart::LabChart;
use crate::plotting::chart_kind::ChartKind;
use crate::report::SummaryReport;
use crate::summary::SummaryEntry;

const FULL_PALETTE: [&str; 7] = ["blue", "red", "orange", "yellow", "green", "purple", "pink"];
const FILTERED_PALETTE: [&str; 6] = ["blue", "orange", "yellow", "green", "purple", "pink"];
const WINNER_COLOR: &str = "gold";

pub fn create_summary_full_chart(report: &SummaryReport, dark: bool) -> Chart {
    let items = report
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| bar_item(entry, FULL_PALETTE[i % FULL_PALETTE.len()], false))
        .collect();

    LabChart::new(
        &report.title(ChartKind::SummaryFull),
        &report.subtext(),
        dark,
    )
    .with_category_x_axis("Implementation", entry_labels(&report.entries))
    .with_log_y_axis("Execution Time (ms, log scale)")
    .add_bar_series("Execution Time", items, true)
    .inner
}

pub fn create_summary_filtered_chart(report: &SummaryReport, dark: bool) -> Chart {
    let filtered = report.filtered_entries();
    let winner_label = report.winner().map(|w| w.label.clone()).unwrap_or_default();

    let items = filtered
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if entry.label == winner_label {
                bar_item(entry, WINNER_COLOR, true)
            } else {
                bar_item(entry, FILTERED_PALETTE[i % FILTERED_PALETTE.len()], false)
            }
        })
        .collect();

    let labels = filtered.iter().map(|e| e.label.clone()).collect();

    LabChart::new(
        &report.title(ChartKind::SummaryFiltered),
        &report.subtext(),
        dark,
    )
    .with_category_x_axis("Implementation", labels)
    .with_y_axis("Execution Time (ms)")
    .add_bar_series("Execution Time", items, true)
    .inner
}

fn bar_item(entry: &SummaryEntry, color: &str, winner: bool) -> DataPointItem {
    let name = if winner {
        format!("★ WINNER ★ {}", entry.formatted_time())
    } else {
        entry.formatted_time()
    };
    DataPointItem::new(entry.time_ms)
        .name(name)
        .item_style(ItemStyle::new().color(color))
}

fn entry_labels(entries: &[SummaryEntry]) -> Vec<String> {
    entries.iter().map(|e| e.label.clone()).collect()
}
