use serde::Serialize;

use crate::jar::core::access::AccessFlags;

#[derive(Debug, Clone, Serialize)]
pub struct ClassSummary {
    /// Archive entry the class was read from
    pub entry: String,
    pub name: String,
    pub super_name: Option<String>,
    pub interfaces: Vec<String>,
    pub access: AccessFlags,
    pub version: ClassVersion,
    pub fields: Vec<MemberSummary>,
    pub methods: Vec<MemberSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberSummary {
    pub name: String,
    pub descriptor: String,
    pub access: AccessFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassVersion {
    pub major: u16,
    pub minor: u16,
}

impl ClassVersion {
    /// Java release that introduced this class file major version
    pub fn java_release(&self) -> String {
        match self.major {
            45..=48 => format!("1.{}", self.major - 44),
            major if major > 48 => (major - 44).to_string(),
            major => format!("unknown ({})", major),
        }
    }
}

impl std::fmt::Display for ClassVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassFailure {
    pub entry: String,
    pub message: String,
}

#[derive(Debug, Default, Serialize)]
pub struct JarReport {
    pub path: String,
    pub classes: Vec<ClassSummary>,
    pub failures: Vec<ClassFailure>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub entries: usize,
    pub classes: usize,
    pub failures: usize,
    pub skipped: usize,
}

#[derive(Debug)]
pub enum InspectionEvent {
    Started { entries: usize },
    Class(ClassSummary),
    Failure(ClassFailure),
    Progress(StageProgress),
    Finished(ScanStats),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StageProgress {
    Percentage(f32),
    Done,
}

impl StageProgress {
    pub fn as_str(&self) -> String {
        match self {
            StageProgress::Percentage(p) => format!("{:.0}%", p * 100.0),
            StageProgress::Done => "Done".into(),
        }
    }
}
