use krakatau2::lib::{
    classfile::{self, parse::Class},
    parse_utf8, ParserOptions,
};

use crate::{
    jar::{core::access::AccessFlags, error::InspectError},
    types::{ClassSummary, ClassVersion, MemberSummary},
};

pub const PARSER_OPTIONS: ParserOptions = ParserOptions {
    no_short_code_attr: true,
};

/// `java/lang/Object` -> `java.lang.Object`
pub fn internal_to_dotted(name: &str) -> String {
    name.replace('/', ".")
}

fn utf8_at(class: &Class<'_>, index: u16, what: &'static str) -> Result<String, InspectError> {
    class
        .cp
        .utf8(index)
        .and_then(parse_utf8)
        .ok_or(InspectError::BadConstant { index, what })
}

fn class_name_at(class: &Class<'_>, index: u16, what: &'static str) -> Result<String, InspectError> {
    class
        .cp
        .clsutf(index)
        .and_then(parse_utf8)
        .map(|name| internal_to_dotted(&name))
        .ok_or(InspectError::BadConstant { index, what })
}

/// Parse one class file and collect its name, hierarchy and member list
pub fn summarize_class(entry: &str, bytes: &[u8]) -> Result<ClassSummary, InspectError> {
    let class = classfile::parse(bytes, PARSER_OPTIONS)
        .map_err(|err| InspectError::MalformedClass(format!("{:?}", err)))?;

    let name = class_name_at(&class, class.this, "this class")?;

    // Index 0 means no superclass: java.lang.Object and module-info
    let super_name = match class.super_ {
        0 => None,
        idx => Some(class_name_at(&class, idx, "superclass")?),
    };

    let interfaces = class
        .interfaces
        .iter()
        .map(|idx| class_name_at(&class, *idx, "interface"))
        .collect::<Result<Vec<_>, _>>()?;

    let fields = class
        .fields
        .iter()
        .map(|field| {
            Ok(MemberSummary {
                name: utf8_at(&class, field.name, "field name")?,
                descriptor: utf8_at(&class, field.desc, "field descriptor")?,
                access: AccessFlags(field.access),
            })
        })
        .collect::<Result<Vec<_>, InspectError>>()?;

    let methods = class
        .methods
        .iter()
        .map(|method| {
            Ok(MemberSummary {
                name: utf8_at(&class, method.name, "method name")?,
                descriptor: utf8_at(&class, method.desc, "method descriptor")?,
                access: AccessFlags(method.access),
            })
        })
        .collect::<Result<Vec<_>, InspectError>>()?;

    let (major, minor) = class.version;

    Ok(ClassSummary {
        entry: entry.to_string(),
        name,
        super_name,
        interfaces,
        access: AccessFlags(class.access),
        version: ClassVersion { major, minor },
        fields,
        methods,
    })
}
