//! Lists the classes inside JAR archives together with their superclass,
//! fields and methods.

pub mod jar;
pub mod logging;
pub mod report;
pub mod types;

pub use jar::{collect_jar_report, scan_jar, summarize_class, InspectError, ScanOptions};
pub use report::{write_json, write_text, TextRenderer};
