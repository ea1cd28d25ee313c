//! Output formatters for scan results.
//!
//! The only format is the semicolon report written to stdout, see
//! [`report::ReportOutput`].

pub mod report;

pub use report::ReportOutput;
