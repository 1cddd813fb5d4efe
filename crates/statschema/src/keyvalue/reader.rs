//! Binary KeyValue decoder.
//!
//! A document is a sequence of entries terminated by an `End` tag:
//!
//! ```text
//! entry := tag:u8 name:cstr payload
//! payload (by tag):
//!   None        nested entries, then End
//!   String      cstr
//!   Int32       i32 LE
//!   Float32     f32 LE
//!   Pointer     u32 LE
//!   Color       u32 LE
//!   UInt64      u64 LE
//!   WideString  rejected
//! ```
//!
//! An entry must always be followed by at least one more byte, and the root
//! `End` must be the last byte of the input.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::{KeyValue, KeyValueType, Value};
use crate::error::{Error, FormatError, Result};

/// Deepest container nesting accepted by the decoder
pub const MAX_DEPTH: usize = 512;

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn read_u8(&mut self) -> std::result::Result<u8, FormatError> {
        let byte = *self
            .data
            .get(self.pos)
            .ok_or(FormatError::UnexpectedEof { offset: self.pos })?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_array<const N: usize>(&mut self) -> std::result::Result<[u8; N], FormatError> {
        let bytes = self
            .data
            .get(self.pos..self.pos + N)
            .ok_or(FormatError::UnexpectedEof { offset: self.pos })?;
        self.pos += N;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read a NUL-terminated UTF-8 string, replacing invalid sequences
    fn read_cstring(&mut self) -> std::result::Result<String, FormatError> {
        let rest = &self.data[self.pos.min(self.data.len())..];
        let len = memchr::memchr(0, rest).ok_or(FormatError::UnexpectedEof { offset: self.pos })?;
        let (decoded, _) = encoding_rs::UTF_8.decode_without_bom_handling(&rest[..len]);
        self.pos += len + 1;
        Ok(decoded.into_owned())
    }
}

fn read_entries(
    reader: &mut Reader<'_>,
    depth: usize,
) -> std::result::Result<Vec<KeyValue>, FormatError> {
    if depth > MAX_DEPTH {
        return Err(FormatError::NestingTooDeep(MAX_DEPTH));
    }

    let mut children = Vec::new();

    loop {
        let offset = reader.pos;
        let tag = reader.read_u8()?;
        let kind = KeyValueType::from_u8(tag).ok_or(FormatError::InvalidTag { tag, offset })?;

        if kind == KeyValueType::End {
            break;
        }

        let name = reader.read_cstring()?;

        let entry = match kind {
            KeyValueType::None => {
                let nested = read_entries(reader, depth + 1)?;
                KeyValue::container(name, nested)
            }
            KeyValueType::String => {
                let value = reader.read_cstring()?;
                KeyValue::leaf(name, kind, Value::String(value))
            }
            KeyValueType::WideString => {
                return Err(FormatError::WideStringUnsupported { offset });
            }
            KeyValueType::Int32 => {
                let value = i32::from_le_bytes(reader.read_array()?);
                KeyValue::leaf(name, kind, Value::Int32(value))
            }
            KeyValueType::UInt64 => {
                let value = u64::from_le_bytes(reader.read_array()?);
                KeyValue::leaf(name, kind, Value::UInt64(value))
            }
            KeyValueType::Float32 => {
                let value = f32::from_le_bytes(reader.read_array()?);
                KeyValue::leaf(name, kind, Value::Float32(value))
            }
            KeyValueType::Color | KeyValueType::Pointer => {
                let value = u32::from_le_bytes(reader.read_array()?);
                KeyValue::leaf(name, kind, Value::UInt32(value))
            }
            KeyValueType::End => unreachable!("End is handled before reading a name"),
        };

        if reader.is_at_end() {
            return Err(FormatError::MissingTerminator { offset: reader.pos });
        }

        children.push(entry);
    }

    Ok(children)
}

impl KeyValue {
    /// Decode a complete binary document.
    ///
    /// The input must end exactly at the root's `End` tag.
    pub fn from_bytes(data: &[u8]) -> std::result::Result<Self, FormatError> {
        let mut reader = Reader::new(data);
        let children = read_entries(&mut reader, 0)?;

        if !reader.is_at_end() {
            return Err(FormatError::TrailingData(reader.remaining()));
        }

        Ok(Self::container(Self::ROOT_NAME.to_string(), children))
    }

    /// Read and decode a binary document from disk
    pub fn load_binary<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::DocumentNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let root = Self::from_bytes(&data).inspect_err(|e| {
            debug!("Failed to decode {}: {}", path.display(), e);
        })?;

        debug!(
            "Decoded {} ({} bytes, {} top-level entries)",
            path.display(),
            data.len(),
            root.children().len()
        );
        Ok(root)
    }
}
