// Helpers shared by the integration tests: hand-assembled class files and
// JARs written into temporary directories.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use krakatau2::file_output_util::Writer;

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_PRIVATE: u16 = 0x0002;
pub const ACC_STATIC: u16 = 0x0008;
pub const ACC_FINAL: u16 = 0x0010;
pub const ACC_SUPER: u16 = 0x0020;
pub const ACC_INTERFACE: u16 = 0x0200;
pub const ACC_ABSTRACT: u16 = 0x0400;

#[derive(Default)]
struct ConstPoolBuilder {
    entries: Vec<Vec<u8>>,
    utf8s: HashMap<String, u16>,
    classes: HashMap<String, u16>,
}

impl ConstPoolBuilder {
    fn push(&mut self, entry: Vec<u8>) -> u16 {
        self.entries.push(entry);
        self.entries.len() as u16
    }

    fn utf8(&mut self, s: &str) -> u16 {
        if let Some(idx) = self.utf8s.get(s) {
            return *idx;
        }
        let mut entry = vec![1];
        entry.extend_from_slice(&(s.len() as u16).to_be_bytes());
        entry.extend_from_slice(s.as_bytes());
        let idx = self.push(entry);
        self.utf8s.insert(s.to_string(), idx);
        idx
    }

    fn class(&mut self, internal_name: &str) -> u16 {
        if let Some(idx) = self.classes.get(internal_name) {
            return *idx;
        }
        let name_idx = self.utf8(internal_name);
        let mut entry = vec![7];
        entry.extend_from_slice(&name_idx.to_be_bytes());
        let idx = self.push(entry);
        self.classes.insert(internal_name.to_string(), idx);
        idx
    }
}

/// Minimal class file description; members carry no attributes.
pub struct ClassFile {
    pub name: String,
    pub super_name: Option<String>,
    pub interfaces: Vec<String>,
    pub access: u16,
    pub major: u16,
    pub fields: Vec<(u16, String, String)>,
    pub methods: Vec<(u16, String, String)>,
}

impl ClassFile {
    pub fn new(internal_name: &str) -> Self {
        Self {
            name: internal_name.to_string(),
            super_name: Some("java/lang/Object".to_string()),
            interfaces: Vec::new(),
            access: ACC_PUBLIC | ACC_SUPER,
            major: 52,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn without_super(mut self) -> Self {
        self.super_name = None;
        self
    }

    pub fn super_class(mut self, internal_name: &str) -> Self {
        self.super_name = Some(internal_name.to_string());
        self
    }

    pub fn interface(mut self, internal_name: &str) -> Self {
        self.interfaces.push(internal_name.to_string());
        self
    }

    pub fn access(mut self, access: u16) -> Self {
        self.access = access;
        self
    }

    pub fn field(mut self, access: u16, name: &str, desc: &str) -> Self {
        self.fields.push((access, name.to_string(), desc.to_string()));
        self
    }

    pub fn method(mut self, access: u16, name: &str, desc: &str) -> Self {
        self.methods
            .push((access, name.to_string(), desc.to_string()));
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut cp = ConstPoolBuilder::default();
        let this = cp.class(&self.name);
        let super_idx = self
            .super_name
            .as_deref()
            .map(|name| cp.class(name))
            .unwrap_or(0);
        let interfaces = self
            .interfaces
            .iter()
            .map(|name| cp.class(name))
            .collect::<Vec<_>>();
        let encode_members = |cp: &mut ConstPoolBuilder, members: &[(u16, String, String)]| {
            let mut out = Vec::new();
            out.extend_from_slice(&(members.len() as u16).to_be_bytes());
            for (access, name, desc) in members {
                out.extend_from_slice(&access.to_be_bytes());
                out.extend_from_slice(&cp.utf8(name).to_be_bytes());
                out.extend_from_slice(&cp.utf8(desc).to_be_bytes());
                out.extend_from_slice(&0u16.to_be_bytes());
            }
            out
        };
        let fields = encode_members(&mut cp, &self.fields);
        let methods = encode_members(&mut cp, &self.methods);

        let mut out = Vec::new();
        out.extend_from_slice(&0xCAFE_BABEu32.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());
        out.extend_from_slice(&self.major.to_be_bytes());
        out.extend_from_slice(&(cp.entries.len() as u16 + 1).to_be_bytes());
        for entry in &cp.entries {
            out.extend_from_slice(entry);
        }
        out.extend_from_slice(&self.access.to_be_bytes());
        out.extend_from_slice(&this.to_be_bytes());
        out.extend_from_slice(&super_idx.to_be_bytes());
        out.extend_from_slice(&(interfaces.len() as u16).to_be_bytes());
        for idx in interfaces {
            out.extend_from_slice(&idx.to_be_bytes());
        }
        out.extend_from_slice(&fields);
        out.extend_from_slice(&methods);
        out.extend_from_slice(&0u16.to_be_bytes());
        out
    }
}

/// `com.example.Greeter`: one static field, a constructor and `main`
pub fn greeter() -> ClassFile {
    ClassFile::new("com/example/Greeter")
        .interface("java/lang/Runnable")
        .field(ACC_PRIVATE | ACC_STATIC, "count", "I")
        .field(ACC_FINAL, "name", "Ljava/lang/String;")
        .method(ACC_PUBLIC, "<init>", "()V")
        .method(ACC_PUBLIC | ACC_STATIC, "main", "([Ljava/lang/String;)V")
        .method(ACC_PUBLIC, "run", "()V")
}

pub fn util() -> ClassFile {
    ClassFile::new("org/other/Util")
        .super_class("java/util/AbstractList")
        .method(ACC_PUBLIC | ACC_STATIC, "size", "()I")
}

/// Expected default listing of `greeter()`
pub const GREETER_TEXT: &str = "\nClass: com.example.Greeter\n  Superclass: java.lang.Object\n  Field: count (I)\n  Field: name (Ljava/lang/String;)\n  Method: <init> ()V\n  Method: main ([Ljava/lang/String;)V\n  Method: run ()V\n";

pub const UTIL_TEXT: &str = "\nClass: org.other.Util\n  Superclass: java.util.AbstractList\n  Method: size ()I\n";

/// Write a JAR with the given entries, in order, into `dir`
pub fn write_jar(dir: &Path, file_name: &str, entries: &[(&str, Vec<u8>)]) -> PathBuf {
    let path = dir.join(file_name);
    {
        let mut writer = Writer::new(&path).unwrap();
        for (name, data) in entries {
            writer.write(Some(*name), data).unwrap();
        }
    }
    path
}

/// The usual fixture: a manifest, a directory entry, two classes and a resource
pub fn sample_jar(dir: &Path) -> PathBuf {
    write_jar(
        dir,
        "sample.jar",
        &[
            ("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\n".to_vec()),
            ("com/example/", Vec::new()),
            ("com/example/Greeter.class", greeter().to_bytes()),
            ("org/other/Util.class", util().to_bytes()),
            ("com/example/messages.properties", b"hello=world\n".to_vec()),
        ],
    )
}

const LOCAL_HEADER: [u8; 4] = *b"PK\x03\x04";
const CENTRAL_HEADER: [u8; 4] = *b"PK\x01\x02";

fn u16_at(bytes: &[u8], pos: usize) -> usize {
    u16::from_le_bytes([bytes[pos], bytes[pos + 1]]) as usize
}

/// Offsets of the local and central headers written for `entry`
fn header_offsets(bytes: &[u8], entry: &str) -> (Vec<usize>, Vec<usize>) {
    let name = entry.as_bytes();
    let mut local = Vec::new();
    let mut central = Vec::new();
    for pos in 0..bytes.len().saturating_sub(4) {
        let sig = &bytes[pos..pos + 4];
        if sig == LOCAL_HEADER && pos + 30 <= bytes.len() {
            let len = u16_at(bytes, pos + 26);
            if bytes.get(pos + 30..pos + 30 + len) == Some(name) {
                local.push(pos);
            }
        } else if sig == CENTRAL_HEADER && pos + 46 <= bytes.len() {
            let len = u16_at(bytes, pos + 28);
            if bytes.get(pos + 46..pos + 46 + len) == Some(name) {
                central.push(pos);
            }
        }
    }
    assert_eq!(local.len(), 1, "local header of {}", entry);
    assert_eq!(central.len(), 1, "central header of {}", entry);
    (local, central)
}

/// Rewrite the compression method recorded for `entry` in both headers
pub fn set_compression_method(jar: &Path, entry: &str, method: u16) {
    let mut bytes = std::fs::read(jar).unwrap();
    let (local, central) = header_offsets(&bytes, entry);
    bytes[local[0] + 8..local[0] + 10].copy_from_slice(&method.to_le_bytes());
    bytes[central[0] + 10..central[0] + 12].copy_from_slice(&method.to_le_bytes());
    std::fs::write(jar, bytes).unwrap();
}

/// Overwrite the uncompressed size the central directory declares for `entry`
pub fn set_declared_size(jar: &Path, entry: &str, size: u32) {
    let mut bytes = std::fs::read(jar).unwrap();
    let (_, central) = header_offsets(&bytes, entry);
    bytes[central[0] + 24..central[0] + 28].copy_from_slice(&size.to_le_bytes());
    std::fs::write(jar, bytes).unwrap();
}

/// Break the signature of the local header written for `entry`
pub fn corrupt_local_header(jar: &Path, entry: &str) {
    let mut bytes = std::fs::read(jar).unwrap();
    let (local, _) = header_offsets(&bytes, entry);
    bytes[local[0]..local[0] + 4].copy_from_slice(b"XXXX");
    std::fs::write(jar, bytes).unwrap();
}

/// A JAR holding `count` small resources, then one class
pub fn many_entries_jar(dir: &Path, count: usize) -> PathBuf {
    let mut entries = (0..count)
        .map(|i| (format!("res/r{}.txt", i), vec![b'x']))
        .collect::<Vec<_>>();
    entries.push(("org/other/Util.class".to_string(), util().to_bytes()));
    let borrowed = entries
        .iter()
        .map(|(name, data)| (name.as_str(), data.clone()))
        .collect::<Vec<_>>();
    write_jar(dir, "many.jar", &borrowed)
}
