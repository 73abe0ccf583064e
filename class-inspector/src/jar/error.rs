use std::path::PathBuf;

use krakatau2::zip::result::ZipError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("The specified JAR file does not exist or is not a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("{source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: ZipError,
    },
    #[error("failed to read entry {entry}: {source}")]
    Entry {
        entry: String,
        #[source]
        source: ZipError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed class file: {0}")]
    MalformedClass(String),
    #[error("unresolvable constant pool reference #{index} ({what})")]
    BadConstant { index: u16, what: &'static str },
    #[error("no class {0} in archive")]
    ClassNotFound(String),
    #[error("disassemble error: {0}")]
    Disassemble(std::io::Error),
    #[error("disassembly is not valid UTF-8: {0}")]
    DisassemblyEncoding(#[from] std::str::Utf8Error),
}
