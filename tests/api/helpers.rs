use contact_relay::{
    configuration::{ApplicationSettings, EmailClientSettings, Settings},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use secrecy::Secret;
use wiremock::MockServer;

// Ensure that we only initialize our subscriber once by wrapping in Lazy
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "debug".into();
    let subscriber_name = "test".into();

    // We use an environment variable to decide whether to swallow logs.
    // Need two separate blocks because the generic types on get_subscriber differ
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub const TEAM_INBOX: &str = "team@example.com";

/// Description of an app spun up for integration testing
pub struct TestApp {
    /// Address to send requests to the app
    pub address: String,
    /// Stands in for the Resend API
    pub email_server: MockServer,
    api_client: reqwest::Client,
}

impl TestApp {
    /// POST `body` as JSON to the contact endpoint
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// POST `body` as JSON to the subscribe endpoint
    pub async fn post_subscribe(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/subscribe", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Send an arbitrary method to `endpoint`
    pub async fn request(&self, method: reqwest::Method, endpoint: &str) -> reqwest::Response {
        self.api_client
            .request(method, &format!("{}/{}", &self.address, endpoint))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Send a GET to the health_check API of our app
    pub async fn get_health_check(&self) -> reqwest::Response {
        self.request(reqwest::Method::GET, "health_check").await
    }

    /// The JSON bodies of every request the fake Resend API received
    pub async fn sent_emails(&self) -> Vec<serde_json::Value> {
        self.email_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).expect("Email body was not JSON"))
            .collect()
    }
}

/// A detailed inquiry with every required field filled in.
pub fn valid_contact() -> serde_json::Value {
    serde_json::json!({
        "name": "Ursula Le Guin",
        "email": "ursula_le_guin@gmail.com",
        "phone": "",
        "company": "Earthsea Press",
        "position": "Author",
        "challenges": "Nobody finds us\nNobody stays",
        "goals": "More readers",
        "additional": ""
    })
}

/// Spins up a testing app to write integration tests against.
pub async fn spawn_app() -> TestApp {
    // TRACING will only run the first time this function is called.
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let configuration = Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".into(),
            // Ask the OS for a random port
            port: 0,
        },
        email_client: EmailClientSettings {
            base_url: email_server.uri(),
            sender_name: "Linear Marketing Solutions".into(),
            sender_email: "onboarding@resend.dev".into(),
            recipient: TEAM_INBOX.into(),
            authorization_token: Secret::new("re_test_token".into()),
            timeout_milliseconds: 500,
        },
    };

    let app = Application::build(configuration)
        .await
        .expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", app.port());
    let _ = tokio::spawn(app.run_until_stopped());

    TestApp {
        address,
        email_server,
        api_client: reqwest::Client::new(),
    }
}
