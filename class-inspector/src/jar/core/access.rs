use serde::{Serialize, Serializer};
use strum::IntoEnumIterator as _;

/// Where a set of access flags was read from; several bits mean different
/// things on classes, fields and methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Class,
    Field,
    Method,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::EnumIter)]
pub enum AccessFlag {
    Public,
    Private,
    Protected,
    Static,
    Final,
    Super,
    Synchronized,
    Volatile,
    Bridge,
    Transient,
    Varargs,
    Native,
    Interface,
    Abstract,
    Strict,
    Synthetic,
    Annotation,
    Enum,
    Module,
}

impl AccessFlag {
    pub fn mask(self) -> u16 {
        use AccessFlag::*;
        match self {
            Public => 0x0001,
            Private => 0x0002,
            Protected => 0x0004,
            Static => 0x0008,
            Final => 0x0010,
            Super | Synchronized => 0x0020,
            Volatile | Bridge => 0x0040,
            Transient | Varargs => 0x0080,
            Native => 0x0100,
            Interface => 0x0200,
            Abstract => 0x0400,
            Strict => 0x0800,
            Synthetic => 0x1000,
            Annotation => 0x2000,
            Enum => 0x4000,
            Module => 0x8000,
        }
    }

    pub fn applies_to(self, kind: MemberKind) -> bool {
        use AccessFlag::*;
        use MemberKind as K;
        match self {
            Public | Final | Synthetic | Enum => true,
            Private | Protected | Static => kind != K::Class,
            Super | Interface | Annotation | Module => kind == K::Class,
            Abstract => kind != K::Field,
            Synchronized | Bridge | Varargs | Native | Strict => kind == K::Method,
            Volatile | Transient => kind == K::Field,
        }
    }

    pub fn keyword(self) -> &'static str {
        use AccessFlag::*;
        match self {
            Public => "public",
            Private => "private",
            Protected => "protected",
            Static => "static",
            Final => "final",
            Super => "super",
            Synchronized => "synchronized",
            Volatile => "volatile",
            Bridge => "bridge",
            Transient => "transient",
            Varargs => "varargs",
            Native => "native",
            Interface => "interface",
            Abstract => "abstract",
            Strict => "strictfp",
            Synthetic => "synthetic",
            Annotation => "annotation",
            Enum => "enum",
            Module => "module",
        }
    }
}

/// Raw `access_flags` word of a class, field or method
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessFlags(pub u16);

impl AccessFlags {
    pub fn contains(&self, flag: AccessFlag) -> bool {
        self.0 & flag.mask() != 0
    }

    /// Keywords of the set flags that are meaningful for `kind`, lowest bit first
    pub fn keywords(&self, kind: MemberKind) -> Vec<&'static str> {
        AccessFlag::iter()
            .filter(|flag| flag.applies_to(kind) && self.contains(*flag))
            .map(AccessFlag::keyword)
            .collect()
    }
}

impl Serialize for AccessFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}
