use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single scheduled attendance check-in window, as returned by the
/// remote attendance API. The window is `session_date` plus the
/// hour/minute fields in 24-hour time; `overtime_minutes_for_late` is the
/// grace period after `end` during which a late check-in still counts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceSession {
    pub id: u64,
    #[schema(example = "2026-03-02", format = "date", value_type = String)]
    pub session_date: NaiveDate,
    pub start_hour: u32,
    pub start_min: u32,
    pub end_hour: u32,
    pub end_min: u32,
    #[serde(default)]
    pub overtime_minutes_for_late: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
}
