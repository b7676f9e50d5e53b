use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceStatus {
    pub title: String,
    pub acronym: String,
}

/// The student's recorded outcome for one session. Absent entirely when
/// nothing has been recorded yet (the API answers 404 in that case).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResult {
    #[schema(example = "2026-03-02T09:05:12Z", value_type = String)]
    pub record_time: DateTime<Utc>,
    #[serde(default)]
    pub ip_address: Option<String>,
    /// 1 when the teacher recorded on the student's behalf, 0 for
    /// self-recorded via the QR flow.
    pub record_by_teacher: u8,
    #[serde(default, rename = "attendanceStatus")]
    pub attendance_status: Option<AttendanceStatus>,
}
