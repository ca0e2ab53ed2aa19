use serde::{Deserialize, Serialize};

use super::{non_blank, EmailAddress, FormKind, ValidationError};

/// The detailed inquiry form as it arrives over the wire. Every field is optional
/// here so that a missing key is reported as a missing field rather than a
/// malformed payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContactForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<String>,
}

/// A detailed inquiry that passed validation. All values are trimmed; the optional
/// ones are `None` when they were left blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub company: String,
    pub position: String,
    pub challenges: String,
    pub goals: String,
    pub additional: Option<String>,
}

impl ContactSubmission {
    /// Checks a raw contact form.
    ///
    /// Fails with `MissingFields` if any of name, email, company, position, challenges
    /// or goals is absent or blank, and only then with `InvalidEmail` if the address
    /// is malformed.
    pub fn parse(form: ContactForm) -> Result<Self, ValidationError> {
        let missing = ValidationError::MissingFields(FormKind::Contact);

        let name = non_blank(form.name);
        let email = non_blank(form.email);
        let company = non_blank(form.company);
        let position = non_blank(form.position);
        let challenges = non_blank(form.challenges);
        let goals = non_blank(form.goals);

        match (name, email, company, position, challenges, goals) {
            (
                Some(name),
                Some(email),
                Some(company),
                Some(position),
                Some(challenges),
                Some(goals),
            ) => Ok(Self {
                email: EmailAddress::parse(&email)?,
                name,
                phone: non_blank(form.phone),
                company,
                position,
                challenges,
                goals,
                additional: non_blank(form.additional),
            }),
            _ => Err(missing),
        }
    }
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        Self::parse(form)
    }
}
