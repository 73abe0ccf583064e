//! JAR inspection library
//!
//! Tools for reading JAR archives and describing the classes inside them.
//! The functionality is organized into several sub-modules:
//!
//! - `analysis`: JAR scanning and per-class introspection
//! - `core`: access flags, descriptors and disassembly
//! - `io`: opening archives and reading entries
//!
//! # Example Usage
//!
//! ```no_run
//! use class_inspector::jar::{analysis::ScanOptions, io::open_jar, scan_jar};
//! use class_inspector::types::InspectionEvent;
//!
//! let mut zip = open_jar("app.jar")?;
//! scan_jar(&mut zip, &ScanOptions::default(), |event| {
//!     if let InspectionEvent::Class(class) = event {
//!         println!("{}", class.name);
//!     }
//! })?;
//! # Ok::<(), class_inspector::jar::InspectError>(())
//! ```

// Sub-modules
pub mod analysis;
pub mod core;
pub mod error;
pub mod io;

// Re-export the most commonly used functionality for convenience
pub use analysis::{collect_jar_report, scan_jar, summarize_class, ScanOptions};
pub use core::{disassemble_class, AccessFlags, MemberKind};
pub use error::InspectError;
pub use io::{open_jar, read_class_bytes};
