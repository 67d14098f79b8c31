pub mod chart;
pub mod chart_kind;
mod summary;
mod sweep;
mod text;

pub use summary::{create_summary_filtered_chart, create_summary_full_chart};
pub use sweep::{create_sweep_bar_chart, create_sweep_line_chart};
