mod contact;
mod handler_response;
mod health;
mod subscribe;

use actix_web::{web, HttpRequest};

use crate::error::SubmissionError;

pub use contact::{contact, CONTACT_SUCCESS};
pub use handler_response::HandlerResponse;
pub use health::health_check;
pub use subscribe::{subscribe, SUBSCRIBE_SUCCESS};

/// Registers the form endpoints. Anything but a POST to them is answered with a 405,
/// and a body that isn't valid JSON with a generic 500.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        tracing::warn!("Rejected an unreadable form payload: {}", err);
        SubmissionError::Unexpected(anyhow::anyhow!("Failed to read the JSON payload: {}", err))
            .into()
    });

    cfg.app_data(json_config)
        .service(health_check)
        .service(
            web::resource("/contact")
                .route(web::post().to(contact))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/subscribe")
                .route(web::post().to(subscribe))
                .default_service(web::to(method_not_allowed)),
        );
}

#[tracing::instrument(name = "Refusing a non-POST request", skip(request), fields(method = %request.method()))]
async fn method_not_allowed(request: HttpRequest) -> Result<&'static str, SubmissionError> {
    Err(SubmissionError::MethodNotAllowed)
}
