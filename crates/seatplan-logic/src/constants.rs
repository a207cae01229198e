//! Input bounds, user-facing messages, and display labels.
//!
//! Messages and labels are Japanese-localized and must match exactly; front
//! ends compare against them.

/// Accepted range for the number of people.
pub const MIN_PEOPLE: i64 = 1;
pub const MAX_PEOPLE: i64 = 100;

/// Accepted range for the number of rows.
pub const MIN_ROWS: i64 = 1;
pub const MAX_ROWS: i64 = 20;

/// Accepted range for the number of columns.
pub const MIN_COLUMNS: i64 = 1;
pub const MAX_COLUMNS: i64 = 20;

/// Values a fresh form starts with.
pub mod defaults {
    pub const PEOPLE: u32 = 30;
    pub const ROWS: u32 = 5;
    pub const COLUMNS: u32 = 6;
}

pub mod messages {
    pub const INVALID_PEOPLE: &str = "人数は1〜100の範囲で入力してください。";
    pub const INVALID_ROWS: &str = "行数は1〜20の範囲で入力してください。";
    pub const INVALID_COLUMNS: &str = "列数は1〜20の範囲で入力してください。";
}

pub mod labels {
    pub const DELETED: &str = "削除済";
    pub const EMPTY: &str = "空席";
    /// Suffix appended to a person's number, e.g. `12番`.
    pub const PERSON_SUFFIX: &str = "番";
    pub const DELETE_MODE_ON: &str = "削除モード: ON";
    pub const DELETE_MODE_OFF: &str = "削除モード: OFF";
    pub const UNASSIGNED_HEADING: &str = "未割り当て";
}
