//! Tests for the HTTP registration client.

use serde_json::json;
use signup_lib::error::ApiError;
use signup_lib::form::{FormValues, InputEvent};
use signup_lib::messages::MESSAGES;
use signup_lib::{FormConfig, RegistrationApi, RegistrationClient, RegistrationForm, SubmitOutcome};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn valid_values() -> FormValues {
    FormValues {
        username: "abc".to_string(),
        fav_language: "rust".to_string(),
        fav_food: "pizza".to_string(),
        agreement: true,
    }
}

fn client_for(server: &MockServer) -> RegistrationClient {
    RegistrationClient::builder()
        .endpoint(format!("{}/registration", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_posts_record_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/registration"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "username": "abc",
            "favLanguage": "rust",
            "favFood": "pizza",
            "agreement": true,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Success! Welcome, new rust-loving user abc, favorite food pizza!"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).register(&valid_values()).await.unwrap();
    assert_eq!(
        response.message,
        "Success! Welcome, new rust-loving user abc, favorite food pizza!"
    );
}

#[tokio::test]
async fn test_error_status_keeps_body_for_logs() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/registration"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "Username is taken" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .register(&valid_values())
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(422));
    assert!(err.to_string().contains("Username is taken"));
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/registration"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .register(&valid_values())
        .await
        .unwrap_err();
    match err {
        ApiError::Parse { body, .. } => assert_eq!(body.as_deref(), Some("<html>ok</html>")),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let client = RegistrationClient::builder()
        .endpoint("http://127.0.0.1:1/registration")
        .build()
        .unwrap();

    let err = client.register(&valid_values()).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_form_against_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/registration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Welcome!" })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/registration"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let config = FormConfig::default().with_endpoint(format!("{}/registration", server.uri()));
    let form = RegistrationForm::from_config(config).unwrap();

    for _ in 0..2 {
        form.on_change(&InputEvent::text("username", "abc")).unwrap();
        form.on_change(&InputEvent::radio("favLanguage", "rust")).unwrap();
        form.on_change(&InputEvent::select("favFood", "pizza")).unwrap();
        form.on_change(&InputEvent::checkbox("agreement", true)).unwrap();
        form.settle().await;
        form.submit().await;
        form.settle().await;
    }

    assert_eq!(form.success_message(), "Welcome!");
    assert_eq!(form.failure_message(), MESSAGES.registration_failed);
    assert_eq!(form.values(), FormValues::default());
    assert!(form.is_disabled());
    assert_eq!(form.submit().await, SubmitOutcome::Blocked);
}
