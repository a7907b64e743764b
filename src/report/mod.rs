//! Report destinations and persistence

mod path;
mod writer;

pub use path::{derive_destination, ReportDestination};
pub use writer::write_report;
