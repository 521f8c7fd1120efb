mod engine;
mod model;

pub use engine::ReportLayoutEngine;
pub use model::LogEntry;
