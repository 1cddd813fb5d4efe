//! Test helper producing binary KeyValue bytes.

use super::KeyValueType;

/// Builder for binary KeyValue documents in tests
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    bytes: Vec<u8>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a tag and name without any payload
    pub fn raw_entry(mut self, kind: KeyValueType, name: &str) -> Self {
        self.bytes.push(kind as u8);
        self.bytes.extend_from_slice(name.as_bytes());
        self.bytes.push(0);
        self
    }

    pub fn raw(mut self, data: &[u8]) -> Self {
        self.bytes.extend_from_slice(data);
        self
    }

    pub fn begin(self, name: &str) -> Self {
        self.raw_entry(KeyValueType::None, name)
    }

    pub fn end(mut self) -> Self {
        self.bytes.push(KeyValueType::End as u8);
        self
    }

    pub fn string(self, name: &str, value: &str) -> Self {
        self.raw_entry(KeyValueType::String, name)
            .raw(value.as_bytes())
            .raw(&[0])
    }

    pub fn int32(self, name: &str, value: i32) -> Self {
        self.raw_entry(KeyValueType::Int32, name)
            .raw(&value.to_le_bytes())
    }

    pub fn float32(self, name: &str, value: f32) -> Self {
        self.raw_entry(KeyValueType::Float32, name)
            .raw(&value.to_le_bytes())
    }

    pub fn uint64(self, name: &str, value: u64) -> Self {
        self.raw_entry(KeyValueType::UInt64, name)
            .raw(&value.to_le_bytes())
    }

    pub fn pointer(self, name: &str, value: u32) -> Self {
        self.raw_entry(KeyValueType::Pointer, name)
            .raw(&value.to_le_bytes())
    }

    pub fn color(self, name: &str, value: u32) -> Self {
        self.raw_entry(KeyValueType::Color, name)
            .raw(&value.to_le_bytes())
    }

    /// Bytes written so far, without closing the root
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }

    /// Close the root container and return the document
    pub fn finish(self) -> Vec<u8> {
        self.end().build()
    }
}
