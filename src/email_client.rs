use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::EmailAddress;

/// Identifier the provider assigns to an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub String);

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why the provider did not take the message. Only ever logged, never shown to
/// whoever submitted the form.
#[derive(thiserror::Error, Debug)]
pub enum DeliveryError {
    #[error("Failed to reach the email provider")]
    Transport(#[from] reqwest::Error),
    #[error("The email provider rejected the message with status {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("The email provider did not answer within {0:?}")]
    TimedOut(Duration),
    #[error("Invalid email provider url")]
    InvalidUrl(#[from] url::ParseError),
}

/// One message to relay.
#[derive(Debug, Clone)]
pub struct OutgoingEmail<'a> {
    pub to: &'a EmailAddress,
    pub reply_to: Option<&'a EmailAddress>,
    pub subject: &'a str,
    pub html: &'a str,
}

/// Something that can send email on our behalf.
#[async_trait]
pub trait EmailDelivery: Send + Sync {
    /// Sends `email`, returning the provider's id for it on success.
    async fn send(&self, email: OutgoingEmail<'_>) -> Result<MessageId, DeliveryError>;
}

/// An email client backed by the Resend HTTP API.
pub struct EmailClient {
    sender: String,
    http_client: Client,
    base_url: Url,
    authorization_token: Secret<String>,
    timeout: Duration,
}

impl EmailClient {
    /// Creates an email client. Emails will be sent from `sender`, a mailbox such as
    /// `Name <address>`.
    ///
    /// `base_url` is where requests are sent and `authorization_token` authorizes all of
    /// them. A send that takes longer than `timeout` counts as a failure.
    ///
    /// Returns an `Err` if the underlying HTTP client can't be initialized.
    pub fn new(
        base_url: Url,
        sender: String,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            sender,
            http_client,
            base_url,
            authorization_token,
            timeout,
        })
    }
}

#[async_trait]
impl EmailDelivery for EmailClient {
    #[tracing::instrument(name = "Sending email through Resend", skip(self, email), fields(subject = %email.subject))]
    async fn send(&self, email: OutgoingEmail<'_>) -> Result<MessageId, DeliveryError> {
        let url = self.base_url.join("emails")?;
        let body = SendEmailRequest {
            from: &self.sender,
            to: [email.to.as_ref()],
            reply_to: email.reply_to.map(AsRef::as_ref),
            subject: email.subject,
            html: email.html,
        };

        let response = self
            .http_client
            .post(url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected { status, body });
        }

        let accepted: SendEmailResponse = response.json().await.map_err(|e| self.classify(e))?;
        tracing::info!(message_id = %accepted.id.as_ref(), "Email accepted by provider");
        Ok(accepted.id)
    }
}

impl EmailClient {
    fn classify(&self, e: reqwest::Error) -> DeliveryError {
        if e.is_timeout() {
            DeliveryError::TimedOut(self.timeout)
        } else {
            DeliveryError::Transport(e)
        }
    }
}

/// The request body of the Resend `POST /emails` API
#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: MessageId,
}
