//! Analysis modules for JAR file introspection
//!
//! This module walks the entries of a JAR archive and turns every class
//! file it finds into a `ClassSummary`.

pub mod introspection;
pub mod scanner;

// Re-export commonly used analysis functionality
pub use introspection::{internal_to_dotted, summarize_class, PARSER_OPTIONS};
pub use scanner::{
    collect_jar_report, entry_class_name, is_class_entry, scan_jar, ScanOptions,
};
