mod plotting;
mod prints;
mod types;
pub mod utils;

pub use plotting::chart_kind;
pub use plotting::{
    create_summary_filtered_chart, create_summary_full_chart, create_sweep_bar_chart,
    create_sweep_line_chart,
};
pub use types::*;
