//! Reading JAR archives and their entries

pub mod reader;

pub use reader::{open_jar, read_class_bytes};
