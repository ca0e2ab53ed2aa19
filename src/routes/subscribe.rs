use actix_web::{web, HttpResponse};

use crate::{
    domain::{FormKind, SubscribeForm, SubscriptionSubmission},
    email_client::{EmailDelivery, OutgoingEmail},
    error::SubmissionError,
    render::render_subscription,
    routes::HandlerResponse,
    startup::Recipient,
};

pub const SUBSCRIBE_SUCCESS: &str = "Thanks! We'll be in touch soon.";

/// Lets the team know someone left their address in the hero email capture.
#[tracing::instrument(
    name = "Relaying a new subscriber",
    skip(form, email_client, recipient),
    fields(subscriber_email = tracing::field::Empty)
)]
pub async fn subscribe(
    form: web::Json<SubscribeForm>,
    email_client: web::Data<dyn EmailDelivery>,
    recipient: web::Data<Recipient>,
) -> Result<HttpResponse, SubmissionError> {
    let submission = SubscriptionSubmission::parse(form.into_inner())?;
    tracing::Span::current().record("subscriber_email", tracing::field::display(&submission.email));

    let email = render_subscription(&submission);
    let message_id = email_client
        .send(OutgoingEmail {
            to: &recipient.0,
            reply_to: None,
            subject: &email.subject,
            html: &email.html,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to send subscriber notification: {:?}", e);
            SubmissionError::Delivery {
                form: FormKind::Subscription,
                source: e,
            }
        })?;
    tracing::info!(message_id = %message_id.as_ref(), "Subscriber notification sent");

    Ok(HttpResponse::Ok().json(HandlerResponse::success(SUBSCRIBE_SUCCESS)))
}
