use crate::api::courses::{
    CourseCard, CourseDetail, CourseListResponse, DaySchedules, ScheduleBlock, ScheduleGrid,
};
use crate::api::record::RecordOutcome;
use crate::api::sessions::{
    ResultView, SessionDetail, SessionListResponse, SessionRow, StatusBadge,
};
use crate::model::course::{Course, CourseSchedule, Subject, TeacherInfo};
use crate::model::result::{AttendanceStatus, SessionResult};
use crate::model::session::AttendanceSession;
use crate::model::student::Student;
use crate::utils::week_grid::GridPlacement;
use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{OpenApi, openapi};
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Attendance Portal API",
        version = "1.0.0",
        description = r#"
## Student Attendance Portal

Backend-for-frontend serving the student pages of the attendance tracker.
All data lives in the remote attendance API; this service fetches it with
the student's own bearer token and returns display-ready view models.

### 🔹 Key Features
- **Courses**
  - Enrolled-course cards, course info sheet, schedules grouped by weekday
- **Weekly grid**
  - Calendar placements (rows, columns, pixel margins) for each schedule
- **Attendance sessions**
  - Session table with live status badge, detail view with countdown
- **Take attendance**
  - QR-token check-in forwarded to the attendance API

### 🔐 Security
Every endpoint expects the student's **JWT Bearer token** (or the
`student_access_token` cookie). The token is forwarded upstream, never
stored.

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::courses::list_courses,
        crate::api::courses::course_detail,
        crate::api::courses::schedule_grid,

        crate::api::sessions::list_sessions,
        crate::api::sessions::session_detail,

        crate::api::record::take_record,

        crate::api::student::get_me
    ),
    components(
        schemas(
            CourseCard,
            CourseListResponse,
            CourseDetail,
            DaySchedules,
            ScheduleBlock,
            ScheduleGrid,
            GridPlacement,
            StatusBadge,
            SessionRow,
            SessionListResponse,
            SessionDetail,
            ResultView,
            RecordOutcome,
            Course,
            CourseSchedule,
            Subject,
            TeacherInfo,
            AttendanceSession,
            SessionResult,
            AttendanceStatus,
            Student
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Courses", description = "Course listing and detail pages"),
        (name = "Sessions", description = "Attendance session pages and the take-record action"),
        (name = "Student", description = "Student profile"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
