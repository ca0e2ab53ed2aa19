use std::time::Duration;

use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::{EmailAddress, ValidationError};

/// Where submissions end up when `EMAIL_TO` is not set.
pub const DEFAULT_RECIPIENT: &str = "info@linearmarketingsolutions.com";

/// App-wide configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Settings for talking to the Resend email API.
#[derive(Debug, Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_name: String,
    pub sender_email: String,
    pub recipient: String,
    pub authorization_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    /// The `From` mailbox, e.g. `Linear Marketing Solutions <onboarding@resend.dev>`.
    ///
    /// Returns an error if the configured sender address is malformed.
    pub fn sender(&self) -> Result<String, ValidationError> {
        let email = EmailAddress::parse(&self.sender_email)?;
        Ok(format!("{} <{}>", self.sender_name, email.as_ref()))
    }

    /// The single address every submission is relayed to.
    pub fn recipient(&self) -> Result<EmailAddress, ValidationError> {
        EmailAddress::parse(&self.recipient)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

/// Reads app configuration from `configuration.yaml` in the working directory,
/// layered with environment overrides.
///
/// `APP_`-prefixed variables override any key (`APP_APPLICATION__PORT=8080`).
/// `RESEND_API_KEY` supplies the delivery credential and `EMAIL_TO` the recipient.
///
/// Returns an error if a required value is missing (there is no default for the API
/// key) or if the sources can't be parsed into a `Settings` struct.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .set_default("email_client.recipient", DEFAULT_RECIPIENT)?
        .set_default("email_client.timeout_milliseconds", 10_000_i64)?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option(
            "email_client.authorization_token",
            std::env::var("RESEND_API_KEY").ok(),
        )?
        .set_override_option("email_client.recipient", std::env::var("EMAIL_TO").ok())?
        .build()?
        .try_deserialize()
}
