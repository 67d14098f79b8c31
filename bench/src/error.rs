use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Cannot write benchmark results to file")]
    CannotWriteToFile,

    #[error("Cannot open charts in browser: {0}")]
    CannotOpenCharts(#[from] std::io::Error),
}
