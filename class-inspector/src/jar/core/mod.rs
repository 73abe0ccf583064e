//! Class-file level building blocks
//!
//! Access flag decoding, descriptor parsing and Krakatau disassembly.

pub mod access;
pub mod assembly;
pub mod descriptor;

pub use access::{AccessFlag, AccessFlags, MemberKind};
pub use assembly::disassemble_class;
pub use descriptor::{parse_field_type, parse_method_descriptor, DescriptorError, JavaType};
