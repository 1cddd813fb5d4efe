use strum::{Display, FromRepr, IntoStaticStr};

/// Type tag preceding every entry of a binary KeyValue document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr, Display,
)]
#[repr(u8)]
pub enum KeyValueType {
    /// Nested container
    None = 0,
    String = 1,
    Int32 = 2,
    Float32 = 3,
    Pointer = 4,
    WideString = 5,
    Color = 6,
    UInt64 = 7,
    /// Terminates the current container
    End = 8,
}

impl KeyValueType {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Whether entries of this type carry a scalar value instead of children
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::None | Self::End)
    }
}
