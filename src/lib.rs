//! Daily Report Library
//!
//! Turns a dated report folder of categorized site photographs into a
//! XeLaTeX document. This library provides functionality to:
//! - Count images per category
//! - Parse and localize the report date
//! - Lay out each category's images in grids of up to four
//! - Assemble the full document and drive the external compiler and viewer
//!
//! # Example
//!
//! ```no_run
//! use daily_report::config::ReportConfig;
//! use daily_report::date::ReportDate;
//! use daily_report::report::{build_report, write_report};
//! use std::path::Path;
//!
//! let root = Path::new("9-9-2030");
//! let config = ReportConfig::default();
//! let date = ReportDate::parse("9-9-2030").expect("valid date");
//!
//! let report = build_report(root, &date, &config).expect("Failed to build report");
//! write_report(root, &date, &report).expect("Failed to write report");
//! ```

pub mod error;
pub mod config;
pub mod date;
pub mod counter;
pub mod images;
pub mod layout;
pub mod tex;
pub mod report;
pub mod external;
pub mod pdf;

// Re-export commonly used items
pub use error::{Error, Result};
