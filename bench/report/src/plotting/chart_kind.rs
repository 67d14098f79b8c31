use derive_more::Display;

/// The charts the two tools can render; the display strings become chart
/// titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ChartKind {
    #[display("Read/Write Speed vs Buffer Size")]
    SweepLine,
    #[display("Buffer Size Performance Comparison")]
    SweepBars,
    #[display("Complete Performance Comparison (Including Naive Implementation)")]
    SummaryFull,
    #[display("Optimized cat Implementations (Practical Comparison)")]
    SummaryFiltered,
}
