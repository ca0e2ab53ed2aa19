mod contact_submission;
mod email_address;
mod subscription_submission;
mod validation_error;

pub use contact_submission::{ContactForm, ContactSubmission};
pub use email_address::EmailAddress;
pub use subscription_submission::{SubscribeForm, SubscriptionSubmission};
pub use validation_error::{FormKind, ValidationError};

/// Trims `value` and returns it, or `None` when nothing is left.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
