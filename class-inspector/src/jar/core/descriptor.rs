//! Field and method descriptors (JVMS 4.3) rendered as Java source types

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("unexpected end of descriptor {0:?}")]
    UnexpectedEnd(String),
    #[error("invalid type tag {tag:?} at offset {offset} in {desc:?}")]
    InvalidTag {
        tag: char,
        offset: usize,
        desc: String,
    },
    #[error("trailing characters in descriptor {0:?}")]
    Trailing(String),
    #[error("method descriptor must start with '(': {0:?}")]
    NotAMethod(String),
    #[error("more than 255 array dimensions in {0:?}")]
    TooManyDimensions(String),
}

/// JVMS 4.3.2
pub const MAX_ARRAY_DIMS: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JavaType {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
    Void,
    Object(String),
    /// `elem` is never itself an array
    Array { dims: u8, elem: Box<JavaType> },
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Byte => f.write_str("byte"),
            JavaType::Char => f.write_str("char"),
            JavaType::Double => f.write_str("double"),
            JavaType::Float => f.write_str("float"),
            JavaType::Int => f.write_str("int"),
            JavaType::Long => f.write_str("long"),
            JavaType::Short => f.write_str("short"),
            JavaType::Boolean => f.write_str("boolean"),
            JavaType::Void => f.write_str("void"),
            JavaType::Object(name) => f.write_str(name),
            JavaType::Array { dims, elem } => {
                write!(f, "{}", elem)?;
                for _ in 0..*dims {
                    f.write_str("[]")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodType {
    pub params: Vec<JavaType>,
    pub ret: JavaType,
}

impl MethodType {
    /// `void main(java.lang.String[])`
    pub fn signature(&self, name: &str) -> String {
        let params = self
            .params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {}({})", self.ret, name, params)
    }
}

struct Cursor<'a> {
    desc: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.desc[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Result<char, DescriptorError> {
        let c = self
            .peek()
            .ok_or_else(|| DescriptorError::UnexpectedEnd(self.desc.to_string()))?;
        self.pos += c.len_utf8();
        Ok(c)
    }

    fn java_type(&mut self, allow_void: bool) -> Result<JavaType, DescriptorError> {
        let mut dims = 0usize;
        while self.peek() == Some('[') {
            self.pos += 1;
            dims += 1;
        }
        if dims > MAX_ARRAY_DIMS {
            return Err(DescriptorError::TooManyDimensions(self.desc.to_string()));
        }

        let elem = self.element_type(allow_void && dims == 0)?;
        Ok(match dims {
            0 => elem,
            dims => JavaType::Array {
                dims: dims as u8,
                elem: Box::new(elem),
            },
        })
    }

    fn element_type(&mut self, allow_void: bool) -> Result<JavaType, DescriptorError> {
        let offset = self.pos;
        let tag = self.bump()?;
        let ty = match tag {
            'B' => JavaType::Byte,
            'C' => JavaType::Char,
            'D' => JavaType::Double,
            'F' => JavaType::Float,
            'I' => JavaType::Int,
            'J' => JavaType::Long,
            'S' => JavaType::Short,
            'Z' => JavaType::Boolean,
            'V' if allow_void => JavaType::Void,
            'L' => {
                let rest = &self.desc[self.pos..];
                let end = rest
                    .find(';')
                    .ok_or_else(|| DescriptorError::UnexpectedEnd(self.desc.to_string()))?;
                if end == 0 {
                    return Err(DescriptorError::InvalidTag {
                        tag: ';',
                        offset: self.pos,
                        desc: self.desc.to_string(),
                    });
                }
                let name = rest[..end].replace('/', ".");
                self.pos += end + 1;
                JavaType::Object(name)
            }
            tag => {
                return Err(DescriptorError::InvalidTag {
                    tag,
                    offset,
                    desc: self.desc.to_string(),
                })
            }
        };
        Ok(ty)
    }

    fn finish(&self) -> Result<(), DescriptorError> {
        if self.pos == self.desc.len() {
            Ok(())
        } else {
            Err(DescriptorError::Trailing(self.desc.to_string()))
        }
    }
}

pub fn parse_field_type(desc: &str) -> Result<JavaType, DescriptorError> {
    let mut cursor = Cursor { desc, pos: 0 };
    let ty = cursor.java_type(false)?;
    cursor.finish()?;
    Ok(ty)
}

pub fn parse_method_descriptor(desc: &str) -> Result<MethodType, DescriptorError> {
    let mut cursor = Cursor { desc, pos: 0 };
    if cursor.peek() != Some('(') {
        return Err(DescriptorError::NotAMethod(desc.to_string()));
    }
    cursor.pos += 1;

    let mut params = Vec::new();
    loop {
        match cursor.peek() {
            Some(')') => {
                cursor.pos += 1;
                break;
            }
            Some(_) => params.push(cursor.java_type(false)?),
            None => return Err(DescriptorError::UnexpectedEnd(desc.to_string())),
        }
    }

    let ret = cursor.java_type(true)?;
    cursor.finish()?;
    Ok(MethodType { params, ret })
}
