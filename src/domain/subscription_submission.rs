use serde::{Deserialize, Serialize};

use super::{non_blank, EmailAddress, FormKind, ValidationError};

/// The single-field email capture as it arrives over the wire.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SubscribeForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Someone who asked to hear from us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionSubmission {
    pub email: EmailAddress,
}

impl SubscriptionSubmission {
    /// Fails with `MissingFields` when the email is absent or blank, and with
    /// `InvalidEmail` when it is malformed.
    pub fn parse(form: SubscribeForm) -> Result<Self, ValidationError> {
        let email = non_blank(form.email)
            .ok_or(ValidationError::MissingFields(FormKind::Subscription))?;

        Ok(Self {
            email: EmailAddress::parse(&email)?,
        })
    }
}

impl TryFrom<SubscribeForm> for SubscriptionSubmission {
    type Error = ValidationError;

    fn try_from(form: SubscribeForm) -> Result<Self, Self::Error> {
        Self::parse(form)
    }
}
