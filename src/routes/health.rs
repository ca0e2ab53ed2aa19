use actix_web::{get, HttpResponse};

/// Liveness check for the hosting platform. Always a 200 with an empty body; it
/// never touches the email provider.
#[get("/health_check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
