use std::fmt;
use std::time::Duration;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use anyhow::anyhow;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error};
use uuid::Uuid;

use crate::config::Config;
use crate::model::course::Course;
use crate::model::result::SessionResult;
use crate::model::session::AttendanceSession;
use crate::model::student::Student;
use crate::utils::course_cache;

/// Failure talking to the remote attendance API, already sorted into the
/// portal-facing outcome.
#[derive(Debug)]
pub enum ClientError {
    /// Upstream rejected the student token.
    Unauthorized,
    /// Upstream 400 with a user-facing message, passed through verbatim.
    Rejected(String),
    NotFound,
    /// Transport failure or an unexpected upstream status.
    Upstream(anyhow::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Unauthorized => write!(f, "Invalid or expired student token"),
            ClientError::Rejected(msg) => write!(f, "{msg}"),
            ClientError::NotFound => write!(f, "Not found"),
            ClientError::Upstream(_) => write!(f, "Attendance service unavailable"),
        }
    }
}

impl ResponseError for ClientError {
    fn status_code(&self) -> StatusCode {
        match self {
            ClientError::Unauthorized => StatusCode::UNAUTHORIZED,
            ClientError::Rejected(_) => StatusCode::BAD_REQUEST,
            ClientError::NotFound => StatusCode::NOT_FOUND,
            ClientError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "message": self.to_string() }))
    }
}

#[derive(Deserialize)]
struct UpstreamMessage {
    message: String,
}

/// Typed client for the remote attendance API. The student's bearer token
/// is forwarded on every call; the portal holds no credentials of its own.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .expect("Failed to build upstream HTTP client");

        Self {
            http,
            base_url: config.api_domain.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, token: &str, path: &str) -> Result<T, ClientError> {
        let request_id = Uuid::new_v4().to_string();
        debug!(%request_id, path, "Upstream GET");

        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(token)
            .header("x-request-id", &request_id)
            .send()
            .await
            .map_err(|e| {
                error!(%request_id, path, error = %e, "Upstream request failed");
                ClientError::Upstream(e.into())
            })?;

        expect_json(response).await
    }

    pub async fn list_courses(&self, token: &str) -> Result<Vec<Course>, ClientError> {
        self.get_json(token, "/student/course").await
    }

    pub async fn get_course(&self, token: &str, course_id: u64) -> Result<Course, ClientError> {
        if let Some(course) = course_cache::get(token, course_id).await {
            return Ok(course);
        }

        let course: Course = self
            .get_json(token, &format!("/student/course/{course_id}"))
            .await?;
        course_cache::store(token, &course).await;
        Ok(course)
    }

    pub async fn list_sessions(
        &self,
        token: &str,
        course_id: u64,
    ) -> Result<Vec<AttendanceSession>, ClientError> {
        self.get_json(token, &format!("/student/course/{course_id}/session"))
            .await
    }

    pub async fn get_session(
        &self,
        token: &str,
        course_id: u64,
        session_id: u64,
    ) -> Result<AttendanceSession, ClientError> {
        self.get_json(
            token,
            &format!("/student/course/{course_id}/session/{session_id}"),
        )
        .await
    }

    /// `Ok(None)` when the student has no record for this session yet.
    pub async fn get_session_result(
        &self,
        token: &str,
        course_id: u64,
        session_id: u64,
    ) -> Result<Option<SessionResult>, ClientError> {
        let path = format!("/student/course/{course_id}/session/{session_id}/result");
        match self.get_json(token, &path).await {
            Ok(result) => Ok(Some(result)),
            Err(ClientError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn get_student_info(&self, token: &str) -> Result<Student, ClientError> {
        self.get_json(token, "/student/get-info").await
    }

    /// Record the student's presence via the QR token flow. The qr-token
    /// travels in its own header, the detected client address in the body,
    /// both exactly as the upstream endpoint expects.
    pub async fn record_attendance(
        &self,
        token: &str,
        qr_token: &str,
        ip_addr: &str,
    ) -> Result<SessionResult, ClientError> {
        let request_id = Uuid::new_v4().to_string();
        debug!(%request_id, "Upstream POST record-attendance-session");

        let response = self
            .http
            .post(format!("{}/student/record-attendance-session", self.base_url))
            .bearer_auth(token)
            .header("qr-token", qr_token)
            .header("x-request-id", &request_id)
            .json(&json!({ "ipAddr": ip_addr }))
            .send()
            .await
            .map_err(|e| {
                error!(%request_id, error = %e, "Upstream request failed");
                ClientError::Upstream(e.into())
            })?;

        expect_json(response).await
    }
}

async fn expect_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| ClientError::Upstream(anyhow!("Malformed upstream payload: {e}")));
    }

    match status {
        reqwest::StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
        reqwest::StatusCode::NOT_FOUND => Err(ClientError::NotFound),
        reqwest::StatusCode::BAD_REQUEST => {
            let message = response
                .json::<UpstreamMessage>()
                .await
                .map(|m| m.message)
                .unwrap_or_else(|_| "Bad request".to_string());
            Err(ClientError::Rejected(message))
        }
        other => Err(ClientError::Upstream(anyhow!(
            "Upstream returned {other}"
        ))),
    }
}
