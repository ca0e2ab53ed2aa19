//! The browser-side half of the round trip: check the form locally, mark the submit
//! control busy, post the form, then show whatever came back.
//!
//! The page itself sits behind [`FormView`]; a controller only decides what to show
//! and when. Every submission ends with exactly one displayed [`Notice`], including
//! when the server can't be reached at all.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::domain::{ContactForm, ContactSubmission, SubscribeForm, SubscriptionSubmission};
use crate::routes::HandlerResponse;

/// How long the inline notice under the contact form stays up.
pub const INLINE_NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Shown after a successful submission whose answer carried no message.
pub const SUCCESS_FALLBACK: &str = "Thanks! Your submission was received.";

/// Shown when no usable answer came back from the server.
pub const NETWORK_FALLBACK: &str =
    "Something went wrong. Please email us directly at info@linearmarketingsolutions.com.";

/// A request that never produced a usable `HandlerResponse`.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Failed to reach the form endpoint")]
    Network(#[from] reqwest::Error),
    #[error("Invalid form endpoint url")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Rendered next to the form, removed after `dismiss_after`.
    Inline { dismiss_after: Duration },
    /// A blocking alert the user has to acknowledge.
    Alert,
}

/// One message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub presentation: Presentation,
}

/// The parts of a page a form controller drives.
pub trait FormView {
    /// Disables the submit control and shows its loading state, or undoes both.
    fn set_busy(&mut self, busy: bool);

    fn display(&mut self, notice: Notice);

    /// Removes an inline notice once its time is up.
    fn dismiss(&mut self);

    /// Empties the form after a successful submission. The contact form resets every
    /// field; the email capture only has its email field to clear.
    fn clear(&mut self);
}

/// Posts forms to the site's endpoints.
#[derive(Debug, Clone)]
pub struct FormClient {
    http_client: Client,
    base_url: Url,
}

impl FormClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    pub async fn submit_contact(&self, form: &ContactForm) -> Result<HandlerResponse, ClientError> {
        self.post("contact", form).await
    }

    pub async fn submit_subscription(
        &self,
        form: &SubscribeForm,
    ) -> Result<HandlerResponse, ClientError> {
        self.post("subscribe", form).await
    }

    /// Error statuses still carry a `HandlerResponse`, so the status code is not
    /// treated as a failure here; only a missing or unreadable body is.
    async fn post<T: serde::Serialize>(
        &self,
        endpoint: &str,
        form: &T,
    ) -> Result<HandlerResponse, ClientError> {
        let url = self.base_url.join(endpoint)?;
        let response = self.http_client.post(url).json(form).send().await?;
        Ok(response.json().await?)
    }
}

/// Drives the detailed inquiry form. Results are shown inline and fade out.
pub struct ContactFormController {
    client: FormClient,
}

impl ContactFormController {
    pub fn new(client: FormClient) -> Self {
        Self { client }
    }

    /// Handles the form's submit event and returns the notice that was displayed.
    ///
    /// Resolves once the inline notice has been dismissed again, `INLINE_NOTICE_DURATION`
    /// after it was shown.
    #[tracing::instrument(name = "Submitting the contact form", skip(self, form, view))]
    pub async fn on_submit<V: FormView>(&self, form: ContactForm, view: &mut V) -> Notice {
        let presentation = Presentation::Inline {
            dismiss_after: INLINE_NOTICE_DURATION,
        };

        let notice = match ContactSubmission::parse(form.clone()) {
            Err(e) => show(view, error_notice(e.to_string(), presentation)),
            Ok(_) => {
                view.set_busy(true);
                let outcome = self.client.submit_contact(&form).await;
                view.set_busy(false);
                settle(view, outcome, presentation)
            }
        };

        tokio::time::sleep(INLINE_NOTICE_DURATION).await;
        view.dismiss();
        notice
    }
}

/// Drives the single-field email capture. Results are shown as alerts.
pub struct SubscribeFormController {
    client: FormClient,
}

impl SubscribeFormController {
    pub fn new(client: FormClient) -> Self {
        Self { client }
    }

    /// Handles the capture's submit event and returns the notice that was displayed.
    #[tracing::instrument(name = "Submitting the email capture", skip(self, form, view))]
    pub async fn on_submit<V: FormView>(&self, form: SubscribeForm, view: &mut V) -> Notice {
        let presentation = Presentation::Alert;

        if let Err(e) = SubscriptionSubmission::parse(form.clone()) {
            return show(view, error_notice(e.to_string(), presentation));
        }

        view.set_busy(true);
        let outcome = self.client.submit_subscription(&form).await;
        view.set_busy(false);

        settle(view, outcome, presentation)
    }
}

/// Turns whatever the request produced into the one notice the user sees.
fn settle<V: FormView>(
    view: &mut V,
    outcome: Result<HandlerResponse, ClientError>,
    presentation: Presentation,
) -> Notice {
    match outcome {
        Ok(HandlerResponse {
            success: true,
            message,
            ..
        }) => {
            view.clear();
            let notice = Notice {
                kind: NoticeKind::Success,
                text: message.unwrap_or_else(|| SUCCESS_FALLBACK.to_string()),
                presentation,
            };
            show(view, notice)
        }
        Ok(HandlerResponse { error, .. }) => {
            let text = error.unwrap_or_else(|| NETWORK_FALLBACK.to_string());
            show(view, error_notice(text, presentation))
        }
        Err(e) => {
            tracing::warn!("Form submission did not complete: {:?}", e);
            show(view, error_notice(NETWORK_FALLBACK.to_string(), presentation))
        }
    }
}

fn error_notice(text: String, presentation: Presentation) -> Notice {
    Notice {
        kind: NoticeKind::Error,
        text,
        presentation,
    }
}

fn show<V: FormView>(view: &mut V, notice: Notice) -> Notice {
    view.display(notice.clone());
    notice
}
