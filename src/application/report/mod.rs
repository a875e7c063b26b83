pub mod stats;
pub mod writer;

pub use stats::TextStats;
pub use writer::write_session_report;
