use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Subject {
    pub subject_code: String,
    pub subject_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeacherInfo {
    pub first_name: String,
    pub last_name: String,
}

/// One recurring weekly time block of a course. `day_of_week` is
/// Sunday-first, 0..=6, as the attendance API encodes it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseSchedule {
    pub id: u64,
    pub day_of_week: u8,
    pub start_hour: u32,
    pub start_min: u32,
    pub end_hour: u32,
    pub end_min: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub id: u64,
    pub course_code: String,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-06-26", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subject: Option<Subject>,
    #[serde(default)]
    pub teacher: Option<TeacherInfo>,
    // upstream serializes this one in camelCase, unlike the rest
    #[serde(default, rename = "courseSchedules")]
    pub course_schedules: Option<Vec<CourseSchedule>>,
}
