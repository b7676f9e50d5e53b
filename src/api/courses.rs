use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::json;
use tracing::warn;
use utoipa::ToSchema;

use crate::auth::auth::StudentAuth;
use crate::client::ApiClient;
use crate::config::Config;
use crate::model::course::{Course, CourseSchedule};
use crate::utils::date_time::{DAY_NAMES, format_long_date, format_time_display};
use crate::utils::week_grid::{self, GridPlacement};

#[derive(Serialize, ToSchema)]
pub struct CourseCard {
    pub id: u64,
    #[schema(example = "Data Structures")]
    pub title: String,
    #[schema(example = "CS201 - CO-3")]
    pub caption: String,
    #[schema(example = "Doe John")]
    pub teacher_name: Option<String>,
    #[schema(example = "/course/12")]
    pub detail_href: String,
}

#[derive(Serialize, ToSchema)]
pub struct CourseListResponse {
    pub data: Vec<CourseCard>,
    #[schema(example = 3)]
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
pub struct DaySchedules {
    #[schema(example = "Monday")]
    pub day_of_week: String,
    #[schema(example = json!(["08:30 - 10:00"]))]
    pub windows: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CourseDetail {
    pub id: u64,
    #[schema(example = "CO-3 ~ Subject: CS201 - Data Structures")]
    pub course_line: String,
    pub teacher_name: Option<String>,
    #[schema(example = "05 January 2026 ~ 26 June 2026")]
    pub time_range: String,
    pub description: Option<String>,
    pub schedules: Vec<DaySchedules>,
}

#[derive(Serialize, ToSchema)]
pub struct ScheduleBlock {
    pub schedule_id: u64,
    #[schema(example = "Monday")]
    pub day_of_week: String,
    #[schema(example = "08:30 - 10:00")]
    pub time_caption: String,
    pub placement: GridPlacement,
}

#[derive(Serialize, ToSchema)]
pub struct ScheduleGrid {
    pub first_hour: u32,
    pub last_hour: u32,
    #[schema(example = json!(["06:00", "07:00"]))]
    pub hour_labels: Vec<String>,
    pub blocks: Vec<ScheduleBlock>,
}

fn teacher_display_name(course: &Course) -> Option<String> {
    course
        .teacher
        .as_ref()
        .map(|t| format!("{} {}", t.last_name, t.first_name))
}

fn course_card(course: &Course) -> CourseCard {
    let (title, caption) = match &course.subject {
        Some(subject) => (
            subject.subject_name.clone(),
            format!("{} - {}", subject.subject_code, course.course_code),
        ),
        None => (course.course_code.clone(), course.course_code.clone()),
    };

    CourseCard {
        id: course.id,
        title,
        caption,
        teacher_name: teacher_display_name(course),
        detail_href: format!("/course/{}", course.id),
    }
}

fn window_caption(schedule: &CourseSchedule) -> String {
    format!(
        "{} - {}",
        format_time_display(schedule.start_hour, schedule.start_min),
        format_time_display(schedule.end_hour, schedule.end_min)
    )
}

/// Group schedules under Sunday..Saturday headers, dropping empty days,
/// the way the course page lists them.
fn schedules_by_day(schedules: &[CourseSchedule]) -> Vec<DaySchedules> {
    DAY_NAMES
        .iter()
        .enumerate()
        .filter_map(|(idx, day)| {
            let windows: Vec<String> = schedules
                .iter()
                .filter(|s| usize::from(s.day_of_week) == idx)
                .map(window_caption)
                .collect();
            if windows.is_empty() {
                None
            } else {
                Some(DaySchedules {
                    day_of_week: (*day).to_string(),
                    windows,
                })
            }
        })
        .collect()
}

fn course_detail_view(course: &Course) -> CourseDetail {
    let course_line = match &course.subject {
        Some(subject) => format!(
            "{} ~ Subject: {} - {}",
            course.course_code, subject.subject_code, subject.subject_name
        ),
        None => course.course_code.clone(),
    };

    CourseDetail {
        id: course.id,
        course_line,
        teacher_name: teacher_display_name(course),
        time_range: format!(
            "{} ~ {}",
            format_long_date(course.start_date),
            format_long_date(course.end_date)
        ),
        description: course.description.clone(),
        schedules: schedules_by_day(course.course_schedules.as_deref().unwrap_or(&[])),
    }
}

fn grid_view(course: &Course, first_hour: u32, last_hour: u32) -> ScheduleGrid {
    let mut blocks = Vec::new();
    for schedule in course.course_schedules.as_deref().unwrap_or(&[]) {
        match week_grid::place(schedule, first_hour) {
            Some(placement) => blocks.push(ScheduleBlock {
                schedule_id: schedule.id,
                day_of_week: DAY_NAMES
                    .get(usize::from(schedule.day_of_week))
                    .copied()
                    .unwrap_or("")
                    .to_string(),
                time_caption: window_caption(schedule),
                placement,
            }),
            None => {
                warn!(
                    schedule_id = schedule.id,
                    day_of_week = schedule.day_of_week,
                    "Schedule falls outside the displayed grid, skipped"
                );
            }
        }
    }

    ScheduleGrid {
        first_hour,
        last_hour,
        hour_labels: (first_hour..=last_hour)
            .map(|h| format_time_display(h, 0))
            .collect(),
        blocks,
    }
}

/// Course cards for the list page
#[utoipa::path(
    get,
    path = "/portal/course",
    responses(
        (status = 200, description = "Courses the student is enrolled in", body = CourseListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Attendance service unavailable")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn list_courses(
    auth: StudentAuth,
    client: web::Data<ApiClient>,
) -> actix_web::Result<impl Responder> {
    let courses = client.list_courses(&auth.token).await?;
    let data: Vec<CourseCard> = courses.iter().map(course_card).collect();
    let total = data.len();

    Ok(HttpResponse::Ok().json(CourseListResponse { data, total }))
}

/// Course info sheet with schedules grouped by day
#[utoipa::path(
    get,
    path = "/portal/course/{course_id}",
    params(("course_id" = u64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course detail", body = CourseDetail),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Course not found"),
        (status = 502, description = "Attendance service unavailable")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn course_detail(
    auth: StudentAuth,
    client: web::Data<ApiClient>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let course_id = path.into_inner();
    let course = client.get_course(&auth.token, course_id).await?;

    Ok(HttpResponse::Ok().json(course_detail_view(&course)))
}

/// Weekly calendar grid placements for the course schedules
#[utoipa::path(
    get,
    path = "/portal/course/{course_id}/schedule-grid",
    params(("course_id" = u64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Grid placements", body = ScheduleGrid),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Attendance service unavailable")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn schedule_grid(
    auth: StudentAuth,
    client: web::Data<ApiClient>,
    config: web::Data<Config>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let course_id = path.into_inner();
    let course = client.get_course(&auth.token, course_id).await?;

    Ok(HttpResponse::Ok().json(grid_view(
        &course,
        config.grid_first_hour,
        config.grid_last_hour,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::{Subject, TeacherInfo};
    use chrono::NaiveDate;

    fn sample_course() -> Course {
        Course {
            id: 12,
            course_code: "CO-3".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 26).unwrap(),
            description: Some("Weekly lectures".into()),
            subject: Some(Subject {
                subject_code: "CS201".into(),
                subject_name: "Data Structures".into(),
            }),
            teacher: Some(TeacherInfo {
                first_name: "John".into(),
                last_name: "Doe".into(),
            }),
            course_schedules: Some(vec![
                CourseSchedule {
                    id: 1,
                    day_of_week: 1,
                    start_hour: 8,
                    start_min: 30,
                    end_hour: 10,
                    end_min: 0,
                },
                CourseSchedule {
                    id: 2,
                    day_of_week: 4,
                    start_hour: 13,
                    start_min: 0,
                    end_hour: 14,
                    end_min: 30,
                },
                CourseSchedule {
                    id: 3,
                    day_of_week: 1,
                    start_hour: 15,
                    start_min: 0,
                    end_hour: 16,
                    end_min: 0,
                },
            ]),
        }
    }

    #[test]
    fn card_pulls_subject_and_teacher() {
        let card = course_card(&sample_course());
        assert_eq!(card.title, "Data Structures");
        assert_eq!(card.caption, "CS201 - CO-3");
        assert_eq!(card.teacher_name.as_deref(), Some("Doe John"));
        assert_eq!(card.detail_href, "/course/12");
    }

    #[test]
    fn grouping_keeps_day_order_and_drops_empty_days() {
        let course = sample_course();
        let grouped = schedules_by_day(course.course_schedules.as_deref().unwrap());
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].day_of_week, "Monday");
        assert_eq!(grouped[0].windows, vec!["08:30 - 10:00", "15:00 - 16:00"]);
        assert_eq!(grouped[1].day_of_week, "Thursday");
        assert_eq!(grouped[1].windows, vec!["13:00 - 14:30"]);
    }

    #[test]
    fn detail_formats_the_info_sheet() {
        let detail = course_detail_view(&sample_course());
        assert_eq!(detail.course_line, "CO-3 ~ Subject: CS201 - Data Structures");
        assert_eq!(detail.time_range, "05 January 2026 ~ 26 June 2026");
    }

    #[test]
    fn grid_places_every_displayable_schedule() {
        let grid = grid_view(&sample_course(), 6, 22);
        assert_eq!(grid.blocks.len(), 3);
        assert_eq!(grid.blocks[0].placement.column, 3);
        assert_eq!(grid.blocks[0].time_caption, "08:30 - 10:00");
        assert_eq!(grid.hour_labels.first().map(String::as_str), Some("06:00"));
        assert_eq!(grid.hour_labels.last().map(String::as_str), Some("22:00"));
    }

    #[test]
    fn grid_skips_out_of_range_entries() {
        let mut course = sample_course();
        course
            .course_schedules
            .as_mut()
            .unwrap()
            .push(CourseSchedule {
                id: 9,
                day_of_week: 7,
                start_hour: 8,
                start_min: 0,
                end_hour: 9,
                end_min: 0,
            });
        let grid = grid_view(&course, 6, 22);
        assert_eq!(grid.blocks.len(), 3);
    }
}
