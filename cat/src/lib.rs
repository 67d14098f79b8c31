pub mod blocksize;
pub mod buffer;
mod copier;
mod error;
mod strategy;

pub use copier::cat_file;
pub use error::CatError;
pub use strategy::Strategy;
