use actix_web::{web, HttpResponse};

use crate::{
    domain::{ContactForm, ContactSubmission, FormKind},
    email_client::{EmailDelivery, OutgoingEmail},
    error::SubmissionError,
    render::render_contact,
    routes::HandlerResponse,
    startup::Recipient,
};

pub const CONTACT_SUCCESS: &str = "Thank you for reaching out! We'll respond within 24 hours.";

/// Relays a detailed inquiry to the team inbox, with the submitter set as reply-to.
#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip(form, email_client, recipient),
    fields(
        submitter_email = tracing::field::Empty,
        submitter_company = tracing::field::Empty
    )
)]
pub async fn contact(
    form: web::Json<ContactForm>,
    email_client: web::Data<dyn EmailDelivery>,
    recipient: web::Data<Recipient>,
) -> Result<HttpResponse, SubmissionError> {
    let submission = ContactSubmission::parse(form.into_inner())?;
    tracing::Span::current()
        .record("submitter_email", tracing::field::display(&submission.email))
        .record("submitter_company", submission.company.as_str());

    let email = render_contact(&submission);
    let message_id = email_client
        .send(OutgoingEmail {
            to: &recipient.0,
            reply_to: Some(&submission.email),
            subject: &email.subject,
            html: &email.html,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to send contact notification: {:?}", e);
            SubmissionError::Delivery {
                form: FormKind::Contact,
                source: e,
            }
        })?;
    tracing::info!(message_id = %message_id.as_ref(), "Contact notification sent");

    Ok(HttpResponse::Ok().json(HandlerResponse::success(CONTACT_SUCCESS)))
}
