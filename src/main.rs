use contact_relay::configuration::get_configuration;
use contact_relay::startup::Application;
use contact_relay::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("contact-relay".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    // Missing RESEND_API_KEY fails here, before we accept any traffic.
    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Accepting form submissions");
    application.run_until_stopped().await?;

    Ok(())
}
