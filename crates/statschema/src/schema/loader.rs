//! Interpretation of a decoded stats schema.
//!
//! A schema document looks like:
//!
//! ```text
//! <app_id>
//!   stats
//!     <n>                       one entry per stat or achievement group
//!       name / display / min / max / default / permission / incrementonly
//!       bits                    achievement groups only
//!         <n>
//!           name / permission
//!           display
//!             name / desc / icon / icon_gray / hidden
//! ```

use tracing::{debug, info};

use super::{
    AchievementDescriptor, DisplayAttribute, LiveStats, StatDescriptor, StatFlags, StatKind,
    StatType, StatValue, Subject, classify,
};
use crate::error::{Error, Result};
use crate::keyvalue::KeyValue;
use crate::source::SchemaSource;

/// Achievements and stats defined by one app's schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSchema {
    pub app_id: u32,
    pub achievements: Vec<AchievementDescriptor>,
    pub stats: Vec<StatDescriptor>,
}

impl StatsSchema {
    /// Locate, decode and interpret the schema for `app_id`
    pub fn load<S, L>(source: &S, app_id: u32, live: &L) -> Result<Self>
    where
        S: SchemaSource + ?Sized,
        L: LiveStats + ?Sized,
    {
        let path = source.schema_path(app_id)?;
        let root = KeyValue::load_binary(&path)?;
        Self::from_document(&root, app_id, live)
    }

    /// Interpret an already decoded schema document.
    ///
    /// Fails when the document has no `<app_id>/stats` container.
    pub fn from_document<L>(root: &KeyValue, app_id: u32, live: &L) -> Result<Self>
    where
        L: LiveStats + ?Sized,
    {
        let stats = &root[app_id.to_string().as_str()]["stats"];
        if !stats.is_valid() || !stats.is_container() {
            return Err(Error::StatsNotFound(app_id));
        }

        let mut schema = Self {
            app_id,
            ..Default::default()
        };

        for entry in stats.children().filter(|e| e.is_valid()) {
            let raw_type = classify(entry);

            match StatType::from_raw(raw_type) {
                Some(stat_type) if stat_type.is_achievement() => {
                    schema.push_achievements(entry, live);
                }
                Some(stat_type) => {
                    if let Some(kind) = stat_type.stat_kind() {
                        schema.stats.push(build_stat(entry, kind, live));
                    }
                }
                None => {
                    debug!(
                        "Skipping stats entry {:?} with unrecognized type {}",
                        entry.name(),
                        raw_type
                    );
                }
            }
        }

        info!(
            "Loaded schema for app {}: {} achievements, {} stats",
            app_id,
            schema.achievements.len(),
            schema.stats.len()
        );
        Ok(schema)
    }

    fn push_achievements<L: LiveStats + ?Sized>(&mut self, entry: &KeyValue, live: &L) {
        for bits in entry.children_named("bits") {
            if !bits.is_valid() || !bits.is_container() {
                continue;
            }
            for bit in bits.children() {
                self.achievements.push(build_achievement(bit, live));
            }
        }
    }

    pub fn find_achievement(&self, id: &str) -> Option<&AchievementDescriptor> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn find_stat(&self, id: &str) -> Option<&StatDescriptor> {
        self.stats.iter().find(|s| s.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty() && self.stats.is_empty()
    }
}

fn build_stat<L: LiveStats + ?Sized>(entry: &KeyValue, kind: StatKind, live: &L) -> StatDescriptor {
    let id = entry["name"].as_string("");
    let name = entry["display"]["name"].as_string(&id);

    let (min_value, max_value, default_value, value) = match kind {
        StatKind::Integer => (
            StatValue::Integer(entry["min"].as_integer(i32::MIN)),
            StatValue::Integer(entry["max"].as_integer(i32::MAX)),
            StatValue::Integer(entry["default"].as_integer(0)),
            StatValue::Integer(live.integer_stat(&id).unwrap_or(0)),
        ),
        StatKind::Float | StatKind::AverageRate => (
            StatValue::Float(entry["min"].as_float(f32::MIN)),
            StatValue::Float(entry["max"].as_float(f32::MAX)),
            StatValue::Float(entry["default"].as_float(0.0)),
            StatValue::Float(live.float_stat(&id).unwrap_or(0.0)),
        ),
    };

    let increment_only = entry["incrementonly"].as_boolean(false);
    let permission = entry["permission"].as_integer(0);

    StatDescriptor {
        flags: StatFlags::compute(permission, increment_only, Subject::Stat),
        id,
        name,
        kind,
        min_value,
        max_value,
        default_value,
        value,
        increment_only,
        permission,
    }
}

fn build_achievement<L: LiveStats + ?Sized>(bit: &KeyValue, live: &L) -> AchievementDescriptor {
    let id = bit["name"].as_string("");
    let display = &bit["display"];

    let mut name = live.achievement_display_attribute(&id, DisplayAttribute::Name);
    if name.is_empty() {
        name = display["name"].as_string("");
    }
    let mut description = live.achievement_display_attribute(&id, DisplayAttribute::Desc);
    if description.is_empty() {
        description = display["desc"].as_string("");
    }

    let permission = bit["permission"].as_integer(0);

    AchievementDescriptor {
        name,
        description,
        icon_normal: display["icon"].as_string(""),
        icon_locked: display["icon_gray"].as_string(""),
        hidden: display["hidden"].as_boolean(false),
        permission,
        achieved: live.achievement_state(&id).unwrap_or(false),
        percent: live.achievement_global_percent(&id).unwrap_or(0.0),
        flags: StatFlags::compute(permission, false, Subject::Achievement),
        id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyvalue::DocumentBuilder;
    use crate::schema::{AchievementSnapshot, LiveSnapshot, NoLiveStats};

    const APP_ID: u32 = 480;

    /// Wrap `body` in `<APP_ID>/stats` and decode it
    fn schema_doc(body: impl FnOnce(DocumentBuilder) -> DocumentBuilder) -> KeyValue {
        let builder = DocumentBuilder::new().begin("480").begin("stats");
        let bytes = body(builder).end().end().finish();
        KeyValue::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn test_legacy_integer_stat() {
        let root = schema_doc(|b| {
            b.begin("1")
                .int32("type_int", 1)
                .string("name", "NumGames")
                .int32("min", -5)
                .int32("max", 100)
                .int32("default", 0)
                .end()
        });

        let schema = StatsSchema::from_document(&root, APP_ID, &NoLiveStats).unwrap();
        assert!(schema.achievements.is_empty());
        assert_eq!(schema.stats.len(), 1);

        let stat = &schema.stats[0];
        assert_eq!(stat.id, "NumGames");
        assert_eq!(stat.name, "NumGames");
        assert_eq!(stat.kind, StatKind::Integer);
        assert_eq!(stat.min_value, StatValue::Integer(-5));
        assert_eq!(stat.max_value, StatValue::Integer(100));
        assert_eq!(stat.default_value, StatValue::Integer(0));
        assert_eq!(stat.value, StatValue::Integer(0));
        assert_eq!(stat.flags, StatFlags::empty());
    }

    #[test]
    fn test_stat_bounds_default_to_type_limits() {
        let root = schema_doc(|b| {
            b.begin("1")
                .string("type", "INT")
                .string("name", "Kills")
                .end()
                .begin("2")
                .string("type", "FLOAT")
                .string("name", "Accuracy")
                .end()
        });

        let schema = StatsSchema::from_document(&root, APP_ID, &NoLiveStats).unwrap();
        let kills = schema.find_stat("Kills").unwrap();
        assert_eq!(kills.min_value, StatValue::Integer(i32::MIN));
        assert_eq!(kills.max_value, StatValue::Integer(i32::MAX));

        let accuracy = schema.find_stat("Accuracy").unwrap();
        assert_eq!(accuracy.kind, StatKind::Float);
        assert_eq!(accuracy.min_value, StatValue::Float(f32::MIN));
        assert_eq!(accuracy.max_value, StatValue::Float(f32::MAX));
        assert_eq!(accuracy.default_value, StatValue::Float(0.0));
    }

    #[test]
    fn test_stat_uses_live_values_and_display_name() {
        let root = schema_doc(|b| {
            b.begin("1")
                .string("name", "FeetTraveled")
                .float32("default", 0.0)
                .int32("incrementonly", 1)
                .int32("permission", 2)
                .begin("display")
                .string("name", "Feet Traveled")
                .end()
                .end()
                .begin("2")
                .string("name", "AvgSpeed")
                .float32("window", 20.0)
                .end()
        });
        let live = LiveSnapshot::new()
            .with_float_stat("FeetTraveled", 5321.5)
            .with_float_stat("AvgSpeed", 3.25);

        let schema = StatsSchema::from_document(&root, APP_ID, &live).unwrap();

        let feet = schema.find_stat("FeetTraveled").unwrap();
        assert_eq!(feet.name, "Feet Traveled");
        assert_eq!(feet.kind, StatKind::Float);
        assert_eq!(feet.value, StatValue::Float(5321.5));
        assert!(feet.increment_only);
        assert_eq!(feet.permission, 2);
        assert_eq!(feet.flags, StatFlags::INCREMENT_ONLY | StatFlags::PROTECTED);

        let speed = schema.find_stat("AvgSpeed").unwrap();
        assert_eq!(speed.kind, StatKind::AverageRate);
        assert_eq!(speed.value, StatValue::Float(3.25));
    }

    #[test]
    fn test_integer_stat_ignores_float_live_value() {
        let root = schema_doc(|b| b.begin("1").string("name", "Wins").end());
        let live = LiveSnapshot::new().with_float_stat("Wins", 4.0);

        let schema = StatsSchema::from_document(&root, APP_ID, &live).unwrap();
        assert_eq!(schema.stats[0].value, StatValue::Integer(0));
    }

    #[test]
    fn test_structural_achievement_group() {
        let root = schema_doc(|b| {
            b.begin("1")
                .begin("bits")
                .begin("0")
                .string("name", "ACH_WIN")
                .int32("permission", 3)
                .begin("display")
                .string("name", "Winner")
                .string("desc", "Win one game")
                .string("icon", "win.jpg")
                .string("icon_gray", "win_gray.jpg")
                .int32("hidden", 1)
                .end()
                .end()
                .end()
                .end()
        });

        let schema = StatsSchema::from_document(&root, APP_ID, &NoLiveStats).unwrap();
        assert!(schema.stats.is_empty());
        assert_eq!(schema.achievements.len(), 1);

        let ach = &schema.achievements[0];
        assert_eq!(ach.id, "ACH_WIN");
        assert_eq!(ach.name, "Winner");
        assert_eq!(ach.description, "Win one game");
        assert_eq!(ach.icon_normal, "win.jpg");
        assert_eq!(ach.icon_locked, "win_gray.jpg");
        assert!(ach.hidden);
        assert!(!ach.achieved);
        assert_eq!(ach.percent, 0.0);
        assert_eq!(ach.permission, 3);
        assert_eq!(ach.flags, StatFlags::PROTECTED);
    }

    #[test]
    fn test_live_display_text_preferred_over_schema() {
        let root = schema_doc(|b| {
            b.begin("1")
                .int32("type", 4)
                .begin("bits")
                .begin("0")
                .string("name", "ACH_TRAVEL")
                .begin("display")
                .string("name", "Schema name")
                .string("desc", "Schema desc")
                .end()
                .end()
                .end()
                .end()
        });
        let live = LiveSnapshot::new().with_achievement(
            "ACH_TRAVEL",
            AchievementSnapshot {
                achieved: Some(true),
                percent: Some(12.5),
                name: Some("Localized name".into()),
                desc: Some(String::new()),
            },
        );

        let schema = StatsSchema::from_document(&root, APP_ID, &live).unwrap();
        let ach = schema.find_achievement("ACH_TRAVEL").unwrap();
        assert_eq!(ach.name, "Localized name");
        assert_eq!(ach.description, "Schema desc");
        assert!(ach.achieved);
        assert_eq!(ach.percent, 12.5);
    }

    #[test]
    fn test_every_bits_child_is_processed() {
        let root = schema_doc(|b| {
            b.begin("1")
                .int32("type_int", 5)
                .begin("bits")
                .begin("0")
                .string("name", "A")
                .end()
                .begin("1")
                .string("name", "B")
                .end()
                .end()
                .begin("BITS")
                .begin("0")
                .string("name", "C")
                .end()
                .end()
                .string("bits", "not a container")
                .end()
        });

        let schema = StatsSchema::from_document(&root, APP_ID, &NoLiveStats).unwrap();
        let ids: Vec<_> = schema.achievements.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["A", "B", "C"]);
    }

    #[test]
    fn test_group_achievement_code_yields_achievements() {
        let root = schema_doc(|b| {
            b.begin("1")
                .int32("type_int", 5)
                .begin("bits")
                .begin("0")
                .string("name", "ACH_GROUP")
                .end()
                .end()
                .end()
                .begin("2")
                .int32("type", 5)
                .begin("bits")
                .begin("0")
                .string("name", "ACH_GROUP_TYPE")
                .end()
                .end()
                .end()
        });

        let schema = StatsSchema::from_document(&root, APP_ID, &NoLiveStats).unwrap();
        assert!(schema.stats.is_empty());
        let ids: Vec<_> = schema.achievements.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["ACH_GROUP", "ACH_GROUP_TYPE"]);
    }

    #[test]
    fn test_unrecognized_types_are_skipped() {
        let root = schema_doc(|b| {
            b.begin("1")
                .string("type", "BOGUS")
                .string("name", "Skipped")
                .end()
                .begin("2")
                .int32("type_int", 7)
                .string("name", "AlsoSkipped")
                .end()
                .begin("3")
                .int32("type_int", 1)
                .string("name", "Kept")
                .end()
        });

        let schema = StatsSchema::from_document(&root, APP_ID, &NoLiveStats).unwrap();
        assert_eq!(schema.stats.len(), 1);
        assert_eq!(schema.stats[0].id, "Kept");
    }

    #[test]
    fn test_mixed_conventions_in_one_document() {
        let root = schema_doc(|b| {
            b.begin("1")
                .int32("type_int", 1)
                .string("name", "Legacy")
                .end()
                .begin("2")
                .string("name", "Structural")
                .float32("max", 10.0)
                .end()
                .begin("3")
                .begin("bits")
                .begin("0")
                .string("name", "ACH")
                .end()
                .end()
                .end()
        });

        let schema = StatsSchema::from_document(&root, APP_ID, &NoLiveStats).unwrap();
        assert_eq!(schema.find_stat("Legacy").unwrap().kind, StatKind::Integer);
        assert_eq!(schema.find_stat("Structural").unwrap().kind, StatKind::Float);
        assert!(schema.find_achievement("ACH").is_some());
        assert!(!schema.is_empty());
    }

    #[test]
    fn test_missing_stats_section_fails() {
        let bytes = DocumentBuilder::new()
            .begin("480")
            .string("gamename", "Spacewar")
            .end()
            .finish();
        let root = KeyValue::from_bytes(&bytes).unwrap();

        let err = StatsSchema::from_document(&root, APP_ID, &NoLiveStats).unwrap_err();
        assert!(matches!(err, Error::StatsNotFound(480)));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_wrong_app_id_fails() {
        let root = schema_doc(|b| b);
        let err = StatsSchema::from_document(&root, 730, &NoLiveStats).unwrap_err();
        assert!(matches!(err, Error::StatsNotFound(730)));
    }

    #[test]
    fn test_empty_stats_section_is_empty_schema() {
        let root = schema_doc(|b| b);
        let schema = StatsSchema::from_document(&root, APP_ID, &NoLiveStats).unwrap();
        assert!(schema.is_empty());
        assert_eq!(schema.app_id, APP_ID);
    }

    #[test]
    fn test_load_from_install() {
        let dir = tempfile::tempdir().unwrap();
        let install = crate::source::SteamInstall::new(dir.path());
        std::fs::create_dir_all(install.stats_dir()).unwrap();

        let bytes = DocumentBuilder::new()
            .begin("480")
            .begin("stats")
            .begin("1")
            .string("name", "NumGames")
            .end()
            .end()
            .end()
            .finish();
        std::fs::write(install.stats_dir().join("UserGameStatsSchema_480.bin"), bytes).unwrap();

        let schema = StatsSchema::load(&install, APP_ID, &NoLiveStats).unwrap();
        assert_eq!(schema.stats.len(), 1);

        let err = StatsSchema::load(&install, 730, &NoLiveStats).unwrap_err();
        assert!(matches!(err, Error::DocumentNotFound(_)));
    }
}
