pub mod analysis;
pub mod hardware;
pub mod measurement;
pub mod params;
pub mod report;
pub mod summary;
pub mod tool_kind;
