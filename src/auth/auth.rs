use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorUnauthorized};
use futures::future::{Ready, ready};

/// The signed-in student's access token, taken from the `Authorization`
/// header or the `student_access_token` cookie the login flow sets.
///
/// The token is opaque here: the portal never decodes or stores it, it is
/// only forwarded to the remote attendance API, which owns validation.
pub struct StudentAuth {
    pub token: String,
}

impl FromRequest for StudentAuth {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let header_token = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::to_owned);

        if let Some(token) = header_token {
            return ready(Ok(StudentAuth { token }));
        }

        if let Some(cookie) = req.cookie("student_access_token") {
            return ready(Ok(StudentAuth {
                token: cookie.value().to_owned(),
            }));
        }

        ready(Err(ErrorUnauthorized("Missing token")))
    }
}
