//! Entry classification across the two schema conventions.
//!
//! Older schema files tag each entry with `type_int` or `type`. Newer ones
//! drop both, so the type has to be inferred from the entry's shape.

use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr};

use crate::keyvalue::{KeyValue, KeyValueType};

/// Raw type code of a `stats` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
#[strum(ascii_case_insensitive)]
#[repr(i32)]
pub enum StatType {
    #[strum(serialize = "INT")]
    Integer = 1,
    #[strum(serialize = "FLOAT")]
    Float = 2,
    #[strum(serialize = "AVGRATE")]
    AverageRate = 3,
    #[strum(serialize = "ACHIEVEMENT", serialize = "ACHIEVEMENTS")]
    Achievement = 4,
    #[strum(disabled)]
    GroupAchievement = 5,
}

impl StatType {
    /// Map a raw code to a known type. `GroupAchievement` has no `type`
    /// string, so it is only reachable through this mapping.
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Integer),
            2 => Some(Self::Float),
            3 => Some(Self::AverageRate),
            4 => Some(Self::Achievement),
            5 => Some(Self::GroupAchievement),
            _ => None,
        }
    }

    pub fn is_achievement(&self) -> bool {
        matches!(self, Self::Achievement | Self::GroupAchievement)
    }

    /// Value kind for statistic types; `None` for achievement groups
    pub fn stat_kind(&self) -> Option<StatKind> {
        match self {
            Self::Integer => Some(StatKind::Integer),
            Self::Float => Some(StatKind::Float),
            Self::AverageRate => Some(StatKind::AverageRate),
            Self::Achievement | Self::GroupAchievement => None,
        }
    }
}

/// Value kind of a statistic descriptor
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr, Display,
)]
pub enum StatKind {
    #[strum(serialize = "integer")]
    #[serde(rename = "integer")]
    Integer,
    #[strum(serialize = "float")]
    #[serde(rename = "float")]
    Float,
    #[strum(serialize = "avgrate")]
    #[serde(rename = "avgrate")]
    AverageRate,
}

impl StatKind {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Classify a `stats` entry into its raw type code.
///
/// Returns 0 for a `type` string that names no known type. Codes outside
/// 1..=5 are passed through unchanged; callers skip them.
pub fn classify(entry: &KeyValue) -> i32 {
    let type_int = &entry["type_int"];
    if type_int.is_valid() {
        return type_int.as_integer(0);
    }

    let type_field = &entry["type"];
    if type_field.is_valid() {
        if type_field.kind() == KeyValueType::String {
            return type_field
                .as_string("")
                .parse::<StatType>()
                .map_or(0, |t| t as i32);
        }
        return type_field.as_integer(0);
    }

    infer_type(entry) as i32
}

/// Structural inference for schema files without explicit type fields
fn infer_type(entry: &KeyValue) -> StatType {
    if entry.contains_key("bits") {
        return StatType::Achievement;
    }

    if entry.contains_key("window") {
        return StatType::AverageRate;
    }

    let has_float_bounds = ["min", "max", "default"]
        .iter()
        .any(|key| entry[*key].kind() == KeyValueType::Float32);

    if has_float_bounds {
        StatType::Float
    } else {
        StatType::Integer
    }
}
