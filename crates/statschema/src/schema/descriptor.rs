use std::fmt;

use serde::Serialize;

use super::{StatFlags, StatKind};

/// Numeric value of a statistic, typed by its [`StatKind`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Integer(i32),
    Float(f32),
}

impl StatValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(v) => f64::from(*v),
            Self::Float(v) => f64::from(*v),
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
        }
    }
}

/// One achievement from a schema's `bits` section
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Icon shown once unlocked
    pub icon_normal: String,
    /// Icon shown while locked
    pub icon_locked: String,
    pub hidden: bool,
    pub permission: i32,
    pub achieved: bool,
    /// Global unlock percentage (0-100)
    pub percent: f32,
    pub flags: StatFlags,
}

impl AchievementDescriptor {
    pub fn is_protected(&self) -> bool {
        self.flags.is_protected()
    }
}

/// One statistic entry
#[derive(Debug, Clone, PartialEq)]
pub struct StatDescriptor {
    pub id: String,
    pub name: String,
    pub kind: StatKind,
    pub min_value: StatValue,
    pub max_value: StatValue,
    pub default_value: StatValue,
    /// Current value reported by the live provider
    pub value: StatValue,
    pub increment_only: bool,
    pub permission: i32,
    pub flags: StatFlags,
}

impl StatDescriptor {
    pub fn is_protected(&self) -> bool {
        self.flags.is_protected()
    }

    pub fn is_increment_only(&self) -> bool {
        self.flags.contains(StatFlags::INCREMENT_ONLY)
    }
}
