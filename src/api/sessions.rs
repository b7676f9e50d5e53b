use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::auth::StudentAuth;
use crate::client::ApiClient;
use crate::model::result::SessionResult;
use crate::model::session::AttendanceSession;
use crate::utils::date_time::{
    format_long_date, format_record_time, format_session_date, format_time_display,
};
use crate::utils::session_status::{self, display_color};

#[derive(Serialize, ToSchema)]
pub struct StatusBadge {
    #[schema(example = "Ongoing")]
    pub status: String,
    #[schema(example = "#22c55e")]
    pub color: String,
}

#[derive(Serialize, ToSchema)]
pub struct SessionRow {
    pub id: u64,
    #[schema(example = "Mon 02 Mar 2026")]
    pub date: String,
    #[schema(example = "09:00 - 10:30")]
    pub time: String,
    #[schema(example = "All students")]
    pub kind: String,
    pub description: Option<String>,
    pub status: StatusBadge,
    #[schema(example = "/course/12/session/7")]
    pub detail_href: String,
    #[schema(example = "/course/12/session/7/record")]
    pub take_record_href: String,
}

#[derive(Serialize, ToSchema)]
pub struct SessionListResponse {
    pub data: Vec<SessionRow>,
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
pub struct ResultView {
    #[schema(example = "02 March 2026 09:05:12")]
    pub record_time: String,
    #[schema(example = "Present (P)")]
    pub attendance_result: Option<String>,
    #[schema(example = "You")]
    pub recorded_by: String,
    pub ip_address: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct SessionDetail {
    pub id: u64,
    #[schema(example = "CO-3 ( CS201 - Data Structures )")]
    pub course_line: String,
    #[schema(example = "02 March 2026")]
    pub session_date: String,
    #[schema(example = "09:00")]
    pub start_time: String,
    #[schema(example = "10:30")]
    pub end_time: String,
    pub kind: String,
    pub description: Option<String>,
    pub status: StatusBadge,
    /// Countdown line, present while the session is Ongoing/Overtime.
    #[schema(example = "5 minutes left.")]
    pub time_left: Option<String>,
    /// The student's recorded result, absent until one exists.
    pub result: Option<ResultView>,
}

pub fn status_badge(session: &AttendanceSession, now: NaiveDateTime) -> StatusBadge {
    let status = session_status::resolve(session, now);
    StatusBadge {
        status: status.label().to_string(),
        color: display_color(status).to_string(),
    }
}

fn session_row(course_id: u64, session: &AttendanceSession, now: NaiveDateTime) -> SessionRow {
    SessionRow {
        id: session.id,
        date: format_session_date(session.session_date),
        time: format!(
            "{} - {}",
            format_time_display(session.start_hour, session.start_min),
            format_time_display(session.end_hour, session.end_min)
        ),
        kind: "All students".to_string(),
        description: session.description.clone(),
        status: status_badge(session, now),
        detail_href: format!("/course/{course_id}/session/{}", session.id),
        take_record_href: format!("/course/{course_id}/session/{}/record", session.id),
    }
}

fn result_view(result: &SessionResult) -> ResultView {
    ResultView {
        record_time: format_record_time(result.record_time),
        attendance_result: result
            .attendance_status
            .as_ref()
            .map(|s| format!("{} ({})", s.title, s.acronym)),
        recorded_by: if result.record_by_teacher == 1 {
            "Teacher".to_string()
        } else {
            "You".to_string()
        },
        ip_address: result.ip_address.clone(),
    }
}

/// Session rows for the course's attendance table
#[utoipa::path(
    get,
    path = "/portal/course/{course_id}/session",
    params(("course_id" = u64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Attendance sessions with resolved status", body = SessionListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Attendance service unavailable")
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
pub async fn list_sessions(
    auth: StudentAuth,
    client: web::Data<ApiClient>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let course_id = path.into_inner();
    let sessions = client.list_sessions(&auth.token, course_id).await?;

    let now = Local::now().naive_local();
    let data: Vec<SessionRow> = sessions
        .iter()
        .map(|s| session_row(course_id, s, now))
        .collect();
    let total = data.len();

    Ok(HttpResponse::Ok().json(SessionListResponse { data, total }))
}

/// Session detail: info sheet, live status with countdown, and the
/// student's result when one has been recorded
#[utoipa::path(
    get,
    path = "/portal/course/{course_id}/session/{session_id}",
    params(
        ("course_id" = u64, Path, description = "Course id"),
        ("session_id" = u64, Path, description = "Attendance session id")
    ),
    responses(
        (status = 200, description = "Session detail", body = SessionDetail),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Session not found"),
        (status = 502, description = "Attendance service unavailable")
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
pub async fn session_detail(
    auth: StudentAuth,
    client: web::Data<ApiClient>,
    path: web::Path<(u64, u64)>,
) -> actix_web::Result<impl Responder> {
    let (course_id, session_id) = path.into_inner();

    let course = client.get_course(&auth.token, course_id).await?;
    let session = client.get_session(&auth.token, course_id, session_id).await?;
    let result = client
        .get_session_result(&auth.token, course_id, session_id)
        .await?;

    let course_line = match &course.subject {
        Some(subject) => format!(
            "{} ( {} - {} )",
            course.course_code, subject.subject_code, subject.subject_name
        ),
        None => course.course_code.clone(),
    };

    let now = Local::now().naive_local();
    let detail = SessionDetail {
        id: session.id,
        course_line,
        session_date: format_long_date(session.session_date),
        start_time: format_time_display(session.start_hour, session.start_min),
        end_time: format_time_display(session.end_hour, session.end_min),
        kind: "All students".to_string(),
        description: session.description.clone(),
        status: status_badge(&session, now),
        time_left: session_status::time_left(&session, now),
        result: result.as_ref().map(result_view),
    };

    Ok(HttpResponse::Ok().json(detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::result::AttendanceStatus;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample_session() -> AttendanceSession {
        AttendanceSession {
            id: 7,
            session_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            start_hour: 9,
            start_min: 0,
            end_hour: 10,
            end_min: 30,
            overtime_minutes_for_late: None,
            description: Some("Week 1".into()),
        }
    }

    #[test]
    fn row_carries_display_strings_and_status() {
        let now = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(9, 45, 0)
            .unwrap();
        let row = session_row(12, &sample_session(), now);
        assert_eq!(row.date, "Mon 02 Mar 2026");
        assert_eq!(row.time, "09:00 - 10:30");
        assert_eq!(row.status.status, "Ongoing");
        assert_eq!(row.status.color, "#22c55e");
        assert_eq!(row.detail_href, "/course/12/session/7");
        assert_eq!(row.take_record_href, "/course/12/session/7/record");
    }

    #[test]
    fn result_view_distinguishes_recorder() {
        let result = SessionResult {
            record_time: Utc.with_ymd_and_hms(2026, 3, 2, 9, 5, 12).unwrap(),
            ip_address: Some("203.0.113.7".into()),
            record_by_teacher: 0,
            attendance_status: Some(AttendanceStatus {
                title: "Present".into(),
                acronym: "P".into(),
            }),
        };
        let view = result_view(&result);
        assert_eq!(view.record_time, "02 March 2026 09:05:12");
        assert_eq!(view.attendance_result.as_deref(), Some("Present (P)"));
        assert_eq!(view.recorded_by, "You");

        let by_teacher = SessionResult {
            record_by_teacher: 1,
            ..result
        };
        assert_eq!(result_view(&by_teacher).recorded_by, "Teacher");
    }
}
