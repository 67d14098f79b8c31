use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatError {
    #[error("cannot open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("read failed: {source}")]
    Read { source: io::Error },
    #[error("write failed: {source}")]
    Write { source: io::Error },
}
