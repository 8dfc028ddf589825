//! Result formatting, summary statistics and cut list rendering.

mod format;
mod report;
mod summary;

pub use format::format_results;
pub use report::{format_length, generate_report};
pub use summary::CutSummary;
