use actix_web::{HttpResponse, Responder, web};

use crate::auth::auth::StudentAuth;
use crate::client::ApiClient;

/// Signed-in student's profile
#[utoipa::path(
    get,
    path = "/portal/me",
    responses(
        (status = 200, description = "Student profile", body = crate::model::student::Student),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Attendance service unavailable")
    ),
    security(("bearer_auth" = [])),
    tag = "Student"
)]
pub async fn get_me(
    auth: StudentAuth,
    client: web::Data<ApiClient>,
) -> actix_web::Result<impl Responder> {
    let student = client.get_student_info(&auth.token).await?;
    Ok(HttpResponse::Ok().json(student))
}
