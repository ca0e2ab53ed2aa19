/// Which of the site's two forms a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Subscription,
}

impl FormKind {
    fn missing_fields_message(&self) -> &'static str {
        match self {
            FormKind::Contact => "Please fill in all required fields.",
            FormKind::Subscription => "Please enter your email address.",
        }
    }
}

/// Why a submission was rejected before anything was sent. The `Display` text is
/// meant for the person filling in the form.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", .0.missing_fields_message())]
    MissingFields(FormKind),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}
