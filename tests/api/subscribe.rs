use crate::helpers::{spawn_app, TEAM_INBOX};
use contact_relay::routes::{HandlerResponse, SUBSCRIBE_SUCCESS};
use wiremock::{
    matchers::{any, method, path},
    Mock, ResponseTemplate,
};

fn resend_accepts() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "b1946ac9-2f5e"}))
}

#[actix_web::test]
async fn subscribe_returns_a_200_for_a_valid_email() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(resend_accepts())
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_subscribe(&serde_json::json!({"email": "user@example.com"}))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: HandlerResponse = response.json().await.unwrap();
    assert_eq!(body, HandlerResponse::success(SUBSCRIBE_SUCCESS));

    let sent = app.sent_emails().await;
    assert_eq!(sent[0]["to"], serde_json::json!([TEAM_INBOX]));
    assert_eq!(sent[0]["subject"], "New Email Subscriber");
    assert!(sent[0].get("reply_to").is_none());
}

#[actix_web::test]
async fn subscribe_returns_a_400_when_the_email_is_missing() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(resend_accepts())
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (serde_json::json!({"email": ""}), "an empty email"),
        (serde_json::json!({}), "no email at all"),
    ];

    for (body, description) in test_cases {
        let response = app.post_subscribe(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with a 400 Bad Request when the payload had {}.",
            description
        );
        let body: HandlerResponse = response.json().await.unwrap();
        assert_eq!(
            body,
            HandlerResponse::failure("Please enter your email address.")
        );
    }
}

#[actix_web::test]
async fn subscribe_returns_a_400_for_an_invalid_email() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(resend_accepts())
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_subscribe(&serde_json::json!({"email": "definitely-not-an-email"}))
        .await;

    assert_eq!(400, response.status().as_u16());
    let body: HandlerResponse = response.json().await.unwrap();
    assert_eq!(
        body,
        HandlerResponse::failure("Please enter a valid email address.")
    );
}

#[actix_web::test]
async fn subscribe_hides_provider_errors_behind_a_generic_500() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal provider trace"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_subscribe(&serde_json::json!({"email": "user@example.com"}))
        .await;

    assert_eq!(500, response.status().as_u16());
    let text = response.text().await.unwrap();
    assert!(!text.contains("internal provider trace"));
    let body: HandlerResponse = serde_json::from_str(&text).unwrap();
    assert_eq!(
        body,
        HandlerResponse::failure("Failed to subscribe. Please try again.")
    );
}

#[actix_web::test]
async fn subscribe_refuses_a_get() {
    let app = spawn_app().await;

    let response = app.request(reqwest::Method::GET, "subscribe").await;

    assert_eq!(405, response.status().as_u16());
    assert!(app.sent_emails().await.is_empty());
}
