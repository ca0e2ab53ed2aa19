use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::domain::{FormKind, ValidationError};
use crate::email_client::DeliveryError;
use crate::routes::HandlerResponse;

/// Write a formatted version of the error and its inner source.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }

    Ok(())
}

/// Everything that can go wrong while handling a form submission.
///
/// The `Debug` output carries the full cause chain and ends up in the logs. What
/// the caller gets back is `public_message`, which never includes provider or
/// internal detail.
#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to deliver the notification email")]
    Delivery {
        form: FormKind,
        #[source]
        source: DeliveryError,
    },
    #[error("An unexpected error occurred")]
    Unexpected(#[from] anyhow::Error),
}

impl SubmissionError {
    /// The message shown to whoever submitted the form.
    pub fn public_message(&self) -> String {
        match self {
            SubmissionError::MethodNotAllowed => "Method not allowed".to_string(),
            SubmissionError::Validation(e) => e.to_string(),
            SubmissionError::Delivery {
                form: FormKind::Contact,
                ..
            } => "Failed to send message. Please try again or email us directly.".to_string(),
            SubmissionError::Delivery {
                form: FormKind::Subscription,
                ..
            } => "Failed to subscribe. Please try again.".to_string(),
            SubmissionError::Unexpected(_) => {
                "An unexpected error occurred. Please try again later.".to_string()
            }
        }
    }
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmissionError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SubmissionError::Validation(_) => StatusCode::BAD_REQUEST,
            SubmissionError::Delivery { .. } | SubmissionError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(HandlerResponse::failure(self.public_message()))
    }
}
