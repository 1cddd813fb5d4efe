//! Decoded KeyValue tree and its lenient accessors.

use std::fmt;
use std::ops::Index;

use super::KeyValueType;

/// Scalar payload of a leaf entry
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int32(i32),
    Float32(f32),
    /// Shared representation of `Pointer` and `Color` entries
    UInt32(u32),
    UInt64(u64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int32(v) => write!(f, "{}", v),
            Self::Float32(v) => write!(f, "{}", v),
            Self::UInt32(v) => write!(f, "{}", v),
            Self::UInt64(v) => write!(f, "{}", v),
        }
    }
}

/// Returned by lookups that match nothing
static INVALID: KeyValue = KeyValue::invalid();

/// One node of a decoded document.
///
/// A node is either a container (`children` present) or a scalar leaf
/// (`value` present). Lookups never fail: a missing key yields a shared
/// invalid node whose accessors all return the caller's default, so chains
/// like `stat["display"]["name"].as_string("")` are safe on any document.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    name: String,
    kind: KeyValueType,
    value: Option<Value>,
    children: Option<Vec<KeyValue>>,
    valid: bool,
}

impl KeyValue {
    /// Name carried by the document root
    pub const ROOT_NAME: &'static str = "<root>";

    const fn invalid() -> Self {
        Self {
            name: String::new(),
            kind: KeyValueType::None,
            value: None,
            children: None,
            valid: false,
        }
    }

    pub(crate) fn container(name: String, children: Vec<KeyValue>) -> Self {
        Self {
            name,
            kind: KeyValueType::None,
            value: None,
            children: Some(children),
            valid: true,
        }
    }

    pub(crate) fn leaf(name: String, kind: KeyValueType, value: Value) -> Self {
        Self {
            name,
            kind,
            value: Some(value),
            children: None,
            valid: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> KeyValueType {
        self.kind
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_container(&self) -> bool {
        self.children.is_some()
    }

    /// Direct children; empty for leaves and invalid nodes
    pub fn children(&self) -> std::slice::Iter<'_, KeyValue> {
        self.children.as_deref().unwrap_or(&[]).iter()
    }

    /// Case-insensitive child lookup.
    ///
    /// When several children share the name the first one wins.
    pub fn get(&self, key: &str) -> &KeyValue {
        self.children()
            .find(|child| names_match(&child.name, key))
            .unwrap_or(&INVALID)
    }

    /// All children whose name matches `key`, in document order
    pub fn children_named<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a KeyValue> {
        self.children()
            .filter(move |child| names_match(&child.name, key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_valid()
    }

    fn scalar(&self) -> Option<&Value> {
        if !self.valid {
            return None;
        }
        self.value.as_ref()
    }

    pub fn as_string(&self, default: &str) -> String {
        match self.scalar() {
            Some(value) => value.to_string(),
            None => default.to_string(),
        }
    }

    pub fn as_integer(&self, default: i32) -> i32 {
        match self.scalar() {
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            Some(Value::Int32(v)) => *v,
            Some(Value::Float32(v)) => *v as i32,
            Some(Value::UInt64(v)) => (*v & 0xFFFF_FFFF) as u32 as i32,
            Some(Value::UInt32(_)) | None => default,
        }
    }

    pub fn as_boolean(&self, default: bool) -> bool {
        match self.scalar() {
            Some(Value::String(s)) => s.trim().parse::<i32>().map_or(default, |v| v != 0),
            Some(Value::Int32(v)) => *v != 0,
            Some(Value::Float32(v)) => (*v as i32) != 0,
            Some(Value::UInt64(v)) => *v != 0,
            Some(Value::UInt32(_)) | None => default,
        }
    }

    pub fn as_float(&self, default: f32) -> f32 {
        match self.scalar() {
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            Some(Value::Int32(v)) => *v as f32,
            Some(Value::Float32(v)) => *v,
            Some(Value::UInt64(v)) => *v as f32,
            Some(Value::UInt32(_)) | None => default,
        }
    }
}

impl Index<&str> for KeyValue {
    type Output = KeyValue;

    fn index(&self, key: &str) -> &KeyValue {
        self.get(key)
    }
}

fn names_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
        || a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
}
