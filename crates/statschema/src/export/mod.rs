//! Export of interpreted schemas

mod json;

pub use json::{
    AchievementDataDocument, AchievementJson, StatJson, export_achievement_data, format_entry,
    generate_achievement_data_json,
};
