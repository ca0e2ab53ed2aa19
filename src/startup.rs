use std::net::TcpListener;
use std::sync::Arc;

use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use url::Url;

use crate::{
    configuration::Settings,
    domain::EmailAddress,
    email_client::{EmailClient, EmailDelivery},
    routes::configure_routes,
};

/// The address every form notification is sent to.
#[derive(Debug, Clone)]
pub struct Recipient(pub EmailAddress);

/// A running application
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Build an HTTP server running our app. The behavior of the app is configured
    /// through the `settings` argument.
    ///
    /// Fails fast if the email client settings are unusable.
    pub async fn build(settings: Settings) -> anyhow::Result<Self> {
        let email_config = settings.email_client;
        let base_url = Url::parse(&email_config.base_url).context("Invalid email base URL")?;
        let sender = email_config
            .sender()
            .context("Invalid sender email address")?;
        let recipient = email_config
            .recipient()
            .context("Invalid recipient email address")?;
        let timeout = email_config.timeout();
        let email_client = EmailClient::new(
            base_url,
            sender,
            email_config.authorization_token,
            timeout,
        )
        .context("Failed to build the email client")?;

        let app_config = settings.application;
        let app_address = format!("{}:{}", &app_config.host, app_config.port);
        let listener = TcpListener::bind(&app_address)
            .with_context(|| format!("Failed to bind to {}", app_address))?;
        let port = listener.local_addr()?.port();

        let server = run(listener, Arc::new(email_client), recipient)?;
        Ok(Self { port, server })
    }

    /// The port that the app is listening on
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Listen and handle requests until we receive a stop signal
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

/// Starts a server, listening on `listener`, running in the background and returns it.
///
/// `email_client` is shared by every worker; any `EmailDelivery` works here.
pub fn run(
    listener: TcpListener,
    email_client: Arc<dyn EmailDelivery>,
    recipient: EmailAddress,
) -> std::io::Result<Server> {
    let email_client: web::Data<dyn EmailDelivery> = web::Data::from(email_client);
    let recipient = web::Data::new(Recipient(recipient));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(configure_routes)
            .app_data(email_client.clone())
            .app_data(recipient.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
