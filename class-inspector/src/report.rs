use std::io::Write;

use colored::Colorize;

use crate::{
    jar::core::{
        access::{AccessFlags, MemberKind},
        descriptor::{parse_field_type, parse_method_descriptor},
    },
    types::{ClassSummary, JarReport, MemberSummary},
};

/// Plain-text listing, one block per class
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    /// Add version, access flags, interfaces and Java signatures
    pub details: bool,
    pub color: bool,
}

impl TextRenderer {
    pub fn jar_header(&self, out: &mut impl Write, path: &str) -> std::io::Result<()> {
        writeln!(out, "Inspecting classes in {}:", path)
    }

    pub fn class(&self, out: &mut impl Write, class: &ClassSummary) -> std::io::Result<()> {
        writeln!(out)?;
        if self.color {
            writeln!(out, "{} {}", "Class:".bold(), class.name.bold().cyan())?;
        } else {
            writeln!(out, "Class: {}", class.name)?;
        }

        if self.details {
            writeln!(
                out,
                "  Version: {} (Java {})",
                class.version,
                class.version.java_release()
            )?;
            let access = class.access.keywords(MemberKind::Class);
            if !access.is_empty() {
                writeln!(out, "  Access: {}", access.join(" "))?;
            }
        }

        if let Some(super_name) = &class.super_name {
            writeln!(out, "  Superclass: {}", super_name)?;
        }

        if self.details {
            for interface in &class.interfaces {
                writeln!(out, "  Interface: {}", interface)?;
            }
        }

        for field in &class.fields {
            write!(out, "  Field: {} ({})", field.name, field.descriptor)?;
            if self.details {
                let java = parse_field_type(&field.descriptor).ok().map(|ty| ty.to_string());
                self.member_details(out, field, MemberKind::Field, java)?;
            }
            writeln!(out)?;
        }

        for method in &class.methods {
            write!(out, "  Method: {} {}", method.name, method.descriptor)?;
            if self.details {
                let java = parse_method_descriptor(&method.descriptor)
                    .ok()
                    .map(|ty| ty.signature(&method.name));
                self.member_details(out, method, MemberKind::Method, java)?;
            }
            writeln!(out)?;
        }

        Ok(())
    }

    fn member_details(
        &self,
        out: &mut impl Write,
        member: &MemberSummary,
        kind: MemberKind,
        java: Option<String>,
    ) -> std::io::Result<()> {
        write_flags(out, member.access, kind)?;
        if let Some(java) = java {
            write!(out, " -> {}", java)?;
        }
        Ok(())
    }
}

fn write_flags(out: &mut impl Write, access: AccessFlags, kind: MemberKind) -> std::io::Result<()> {
    let keywords = access.keywords(kind);
    if keywords.is_empty() {
        return Ok(());
    }
    write!(out, " [{}]", keywords.join(" "))
}

/// Render a whole report the way the CLI streams it
pub fn write_text(
    renderer: &TextRenderer,
    report: &JarReport,
    out: &mut impl Write,
) -> std::io::Result<()> {
    renderer.jar_header(out, &report.path)?;
    for class in &report.classes {
        renderer.class(out, class)?;
    }
    Ok(())
}

pub fn write_json(reports: &[JarReport], out: impl Write) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(out, reports)
}
