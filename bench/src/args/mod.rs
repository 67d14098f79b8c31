pub mod common;
pub mod defaults;
pub mod examples;
pub mod kind;
pub mod output;
pub mod summary;
pub mod sweep;
