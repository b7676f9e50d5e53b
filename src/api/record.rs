use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::api::sessions::ResultView;
use crate::auth::auth::StudentAuth;
use crate::client::ApiClient;
use crate::model::result::SessionResult;
use crate::utils::date_time::format_record_time;

#[derive(Deserialize, IntoParams)]
pub struct RecordQuery {
    /// QR token scanned from the session's code
    pub token: Option<String>,
}

#[derive(serde::Serialize, ToSchema)]
pub struct RecordOutcome {
    #[schema(example = "You have completed this session.")]
    pub message: String,
    pub result: ResultView,
}

/// First value of X-Forwarded-For when present, otherwise the peer
/// address. The upstream stores it alongside the record.
fn client_ip(req: &HttpRequest) -> Option<String> {
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.split(',').next())
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty());

    forwarded.or_else(|| req.peer_addr().map(|addr| addr.ip().to_string()))
}

fn outcome(result: &SessionResult) -> RecordOutcome {
    RecordOutcome {
        message: "You have completed this session.".to_string(),
        result: ResultView {
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
        },
    }
}

/// Take-attendance action behind the QR code
#[utoipa::path(
    post,
    path = "/portal/course/{course_id}/session/{session_id}/record",
    params(
        ("course_id" = u64, Path, description = "Course id"),
        ("session_id" = u64, Path, description = "Attendance session id"),
        RecordQuery
    ),
    responses(
        (status = 200, description = "Presence recorded", body = RecordOutcome),
        (status = 400, description = "Missing token or upstream rejection", body = Object, example = json!({
            "message": "Tokens must be provided."
        })),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Attendance service unavailable")
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
pub async fn take_record(
    auth: StudentAuth,
    client: web::Data<ApiClient>,
    path: web::Path<(u64, u64)>,
    query: web::Query<RecordQuery>,
    req: HttpRequest,
) -> actix_web::Result<impl Responder> {
    let (course_id, session_id) = path.into_inner();

    let qr_token = match query.token.as_deref().filter(|t| !t.is_empty()) {
        Some(t) => t.to_owned(),
        None => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "message": "Tokens must be provided."
            })));
        }
    };

    let ip_addr = match client_ip(&req) {
        Some(ip) => ip,
        None => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "message": "Cannot detect your ip address. Please try again."
            })));
        }
    };

    let result = client
        .record_attendance(&auth.token, &qr_token, &ip_addr)
        .await?;

    info!(course_id, session_id, "Attendance recorded");
    Ok(HttpResponse::Ok().json(outcome(&result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn forwarded_header_wins_over_peer_address() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-for", "203.0.113.7, 10.0.0.1"))
            .peer_addr("192.0.2.1:40000".parse().unwrap())
            .to_http_request();
        assert_eq!(client_ip(&req).as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn falls_back_to_peer_address() {
        let req = TestRequest::default()
            .peer_addr("192.0.2.1:40000".parse().unwrap())
            .to_http_request();
        assert_eq!(client_ip(&req).as_deref(), Some("192.0.2.1"));
    }
}
