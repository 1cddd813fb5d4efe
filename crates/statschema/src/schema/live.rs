//! Live stat values supplied alongside the static schema.
//!
//! The schema only describes what exists; current values, unlock state,
//! global percentages and localized display text come from a running game
//! client. [`LiveStats`] is that seam. It must already reflect up-to-date
//! values when the schema is interpreted.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, warn};

use crate::error::Result;

/// Localized achievement attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DisplayAttribute {
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "desc")]
    Desc,
}

/// Source of current stat values and achievement state.
///
/// Every lookup may fail; the interpreter substitutes defaults instead of
/// aborting.
pub trait LiveStats {
    fn integer_stat(&self, id: &str) -> Option<i32>;

    fn float_stat(&self, id: &str) -> Option<f32>;

    fn achievement_state(&self, id: &str) -> Option<bool>;

    fn achievement_global_percent(&self, id: &str) -> Option<f32>;

    /// Localized text, or an empty string when unavailable
    fn achievement_display_attribute(&self, id: &str, attribute: DisplayAttribute) -> String;
}

/// Provider with no live data; descriptors carry defaults and schema text
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLiveStats;

impl LiveStats for NoLiveStats {
    fn integer_stat(&self, _id: &str) -> Option<i32> {
        None
    }

    fn float_stat(&self, _id: &str) -> Option<f32> {
        None
    }

    fn achievement_state(&self, _id: &str) -> Option<bool> {
        None
    }

    fn achievement_global_percent(&self, _id: &str) -> Option<f32> {
        None
    }

    fn achievement_display_attribute(&self, _id: &str, _attribute: DisplayAttribute) -> String {
        String::new()
    }
}

/// Captured live state of one achievement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementSnapshot {
    #[serde(default)]
    pub achieved: Option<bool>,
    #[serde(default)]
    pub percent: Option<f32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
}

/// Live values captured to a JSON file
///
/// ```json
/// {
///   "integer_stats": { "NumGames": 12 },
///   "float_stats": { "FeetTraveled": 5321.5 },
///   "achievements": { "ACH_WIN_ONE_GAME": { "achieved": true, "percent": 61.2 } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveSnapshot {
    #[serde(default)]
    pub integer_stats: HashMap<String, i32>,
    #[serde(default)]
    pub float_stats: HashMap<String, f32>,
    #[serde(default)]
    pub achievements: HashMap<String, AchievementSnapshot>,
}

impl LiveSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a snapshot from a JSON file
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let snapshot = fs::read_to_string(path)
            .map_err(Into::into)
            .and_then(|content| Self::from_json(&content))
            .inspect_err(|e| warn!("Failed to load live snapshot {}: {}", path.display(), e))?;
        debug!(
            "Loaded live snapshot from {}: {} integer stats, {} float stats, {} achievements",
            path.display(),
            snapshot.integer_stats.len(),
            snapshot.float_stats.len(),
            snapshot.achievements.len()
        );
        Ok(snapshot)
    }

    pub fn with_integer_stat(mut self, id: &str, value: i32) -> Self {
        self.integer_stats.insert(id.to_string(), value);
        self
    }

    pub fn with_float_stat(mut self, id: &str, value: f32) -> Self {
        self.float_stats.insert(id.to_string(), value);
        self
    }

    pub fn with_achievement(mut self, id: &str, achievement: AchievementSnapshot) -> Self {
        self.achievements.insert(id.to_string(), achievement);
        self
    }
}

impl LiveStats for LiveSnapshot {
    fn integer_stat(&self, id: &str) -> Option<i32> {
        self.integer_stats.get(id).copied()
    }

    fn float_stat(&self, id: &str) -> Option<f32> {
        self.float_stats.get(id).copied()
    }

    fn achievement_state(&self, id: &str) -> Option<bool> {
        self.achievements.get(id)?.achieved
    }

    fn achievement_global_percent(&self, id: &str) -> Option<f32> {
        self.achievements.get(id)?.percent
    }

    fn achievement_display_attribute(&self, id: &str, attribute: DisplayAttribute) -> String {
        let Some(achievement) = self.achievements.get(id) else {
            return String::new();
        };

        let text = match attribute {
            DisplayAttribute::Name => &achievement.name,
            DisplayAttribute::Desc => &achievement.desc,
        };
        text.clone().unwrap_or_default()
    }
}
