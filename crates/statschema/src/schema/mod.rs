//! Stats schema interpretation.
//!
//! Turns a decoded `UserGameStatsSchema` document into achievement and
//! statistic descriptors, merging in live values from a [`LiveStats`]
//! provider.

mod descriptor;
mod flags;
mod kind;
mod live;
mod loader;

pub use descriptor::{AchievementDescriptor, StatDescriptor, StatValue};
pub use flags::{StatFlags, Subject};
pub use kind::{StatKind, StatType, classify};
pub use live::{AchievementSnapshot, DisplayAttribute, LiveSnapshot, LiveStats, NoLiveStats};
pub use loader::StatsSchema;
