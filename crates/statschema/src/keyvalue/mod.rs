//! Binary KeyValue documents.
//!
//! - **Decoding**: [`KeyValue::from_bytes`] and [`KeyValue::load_binary`]
//! - **Tree access**: case-insensitive lookup through `node["key"]`
//! - **Coercion**: `as_string` / `as_integer` / `as_boolean` / `as_float`
//!   with caller-supplied defaults

mod kind;
mod node;
mod reader;

#[cfg(test)]
pub(crate) mod builder;

pub use kind::KeyValueType;
pub use node::{KeyValue, Value};
pub use reader::MAX_DEPTH;

#[cfg(test)]
pub(crate) use builder::DocumentBuilder;
