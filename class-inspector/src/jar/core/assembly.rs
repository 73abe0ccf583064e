use krakatau2::lib::{classfile, DisassemblerOptions};

use crate::jar::{analysis::introspection::PARSER_OPTIONS, error::InspectError};

/// Disassemble a class file into Krakatau assembly source
pub fn disassemble_class(bytes: &[u8]) -> Result<String, InspectError> {
    let class = classfile::parse(bytes, PARSER_OPTIONS)
        .map_err(|err| InspectError::MalformedClass(format!("{:?}", err)))?;

    let mut out = Vec::new();
    krakatau2::lib::disassemble::disassemble(
        &mut out,
        &class,
        DisassemblerOptions { roundtrip: false },
    )
    .map_err(InspectError::Disassemble)?;

    Ok(std::str::from_utf8(&out)?.to_owned())
}
