mod common;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use contact_relay::client::{ContactForm, ContactTransport, HttpTransport, SubmitError};
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct FakeRelay {
    status: StatusCode,
    body: &'static str,
    seen: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
}

async fn contact(
    State(relay): State<FakeRelay>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    relay.seen.lock().unwrap().push((headers, json));

    (
        relay.status,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        relay.body,
    )
}

async fn spawn_relay(status: StatusCode, body: &'static str) -> (HttpTransport, FakeRelay) {
    let relay = FakeRelay {
        status,
        body,
        seen: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/api/contact", post(contact))
        .with_state(relay.clone());
    let site = common::spawn_http(app).await;

    (HttpTransport::for_site(&site).unwrap(), relay)
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set("name", "Ana");
    form.set("email", "ana@example.com");
    form.set("message", "Hola");
    form
}

#[tokio::test]
async fn test_transport_success() {
    let (transport, relay) = spawn_relay(StatusCode::OK, r#"{"ok":true,"id":"abc"}"#).await;

    let reply = transport.submit(&filled_form().payload()).await.unwrap();

    assert_eq!(reply.id.as_deref(), Some("abc"));

    let seen = relay.seen.lock().unwrap();
    let (headers, body) = &seen[0];
    assert_eq!(headers.get(header::ACCEPT).unwrap(), "application/json");
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["phone"], "");
    assert_eq!(body["company"], "");
}

#[tokio::test]
async fn test_transport_error_status() {
    let (transport, _relay) = spawn_relay(
        StatusCode::BAD_REQUEST,
        r#"{"ok":false,"error":"Email inválido"}"#,
    )
    .await;

    let err = transport.submit(&filled_form().payload()).await.unwrap_err();

    match err {
        SubmitError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Email inválido");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_ok_false_with_success_status() {
    let (transport, _relay) = spawn_relay(StatusCode::OK, r#"{"ok":false}"#).await;

    let err = transport.submit(&filled_form().payload()).await.unwrap_err();

    assert!(matches!(err, SubmitError::NotConfirmed(_)));
}

#[tokio::test]
async fn test_transport_missing_ok_flag() {
    let (transport, _relay) = spawn_relay(StatusCode::OK, r#"{"id":"abc"}"#).await;

    let err = transport.submit(&filled_form().payload()).await.unwrap_err();

    assert!(matches!(err, SubmitError::NotConfirmed(_)));
}

#[tokio::test]
async fn test_transport_malformed_json() {
    let (transport, _relay) = spawn_relay(StatusCode::OK, "<html>oops</html>").await;

    let err = transport.submit(&filled_form().payload()).await.unwrap_err();

    assert!(matches!(err, SubmitError::NotConfirmed(_)));
}

#[tokio::test]
async fn test_transport_unreachable() {
    let site = common::closed_port_url().await;
    let transport = HttpTransport::for_site(&site).unwrap();

    let err = transport.submit(&filled_form().payload()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Network(_)));
}
