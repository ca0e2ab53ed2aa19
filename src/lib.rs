pub mod client;
pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod error;
pub mod render;
pub mod routes;
pub mod startup;
pub mod telemetry;
