//! End-to-end dispatch tests against a mock HTTP server.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, missing_docs)]

use std::sync::Arc;

use console_application::{CsrfClient, DispatchError, RequestDispatcher};
use console_domain::{ClientSettings, CredentialSlots, HttpMethod, MultipartForm};
use console_infrastructure::{CookieHeaderReader, MemoryCredentialStore, ReqwestTransport};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn settings(server: &MockServer) -> ClientSettings {
    ClientSettings::default()
        .with_base_url(&server.uri())
        .expect("mock server URI is absolute")
}

fn dispatcher(server: &MockServer, store: &MemoryCredentialStore) -> RequestDispatcher {
    let transport = ReqwestTransport::new(settings(server)).expect("transport");
    RequestDispatcher::new(Arc::new(transport), Arc::new(store.clone()))
}

async fn single_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

fn header_value<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn admin_token_is_sent_over_user_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/members"))
        .and(header("Authorization", "Bearer admin-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryCredentialStore::with_slots(CredentialSlots::new(
        Some("admin-jwt".to_string()),
        Some("user-jwt".to_string()),
    ));
    let response = dispatcher(&server, &store)
        .dispatch_json(HttpMethod::Get, "/api/admin/members", Value::Null)
        .await
        .unwrap();

    assert_eq!(response.body, json!({"results": []}));
}

#[tokio::test]
async fn unauthenticated_request_has_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    dispatcher(&server, &MemoryCredentialStore::new())
        .dispatch_json(HttpMethod::Get, "/api/notices", Value::Null)
        .await
        .unwrap();

    let request = single_request(&server).await;
    assert_eq!(header_value(&request, "authorization"), None);
}

#[tokio::test]
async fn get_sends_mapping_as_query_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/boards"))
        .and(query_param("a", "1"))
        .and(query_param("b", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0})))
        .expect(1)
        .mount(&server)
        .await;

    dispatcher(&server, &MemoryCredentialStore::new())
        .dispatch_json(HttpMethod::Get, "/api/boards", json!({"a": 1, "b": 2}))
        .await
        .unwrap();

    let request = single_request(&server).await;
    assert!(request.body.is_empty());
    assert_eq!(header_value(&request, "content-type"), Some("application/json"));
}

#[tokio::test]
async fn post_sends_json_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/boards"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"a": 1, "b": 2})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 11})))
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryCredentialStore::new();
    store.set_user_token(Some("user-jwt".to_string()));
    let response = dispatcher(&server, &store)
        .dispatch_json(HttpMethod::Post, "/api/boards", json!({"a": 1, "b": 2}))
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 201);
    assert_eq!(response.body, json!({"id": 11}));
    let request = single_request(&server).await;
    assert_eq!(request.body, br#"{"a":1,"b":2}"#.to_vec());
}

#[tokio::test]
async fn multipart_keeps_boundary_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/notices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let store = MemoryCredentialStore::new();
    store.set_admin_token(Some("admin-jwt".to_string()));
    let form = MultipartForm::new()
        .text("title", "Maintenance")
        .file("attachment", "notice.txt", b"downtime at 2am".to_vec());

    dispatcher(&server, &store)
        .dispatch_multipart(HttpMethod::Post, "/api/notices", form)
        .await
        .unwrap();

    let request = single_request(&server).await;
    let content_type = header_value(&request, "content-type").unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    assert_eq!(header_value(&request, "authorization"), Some("Bearer admin-jwt"));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"title\""));
    assert!(body.contains("Maintenance"));
    assert!(body.contains("filename=\"notice.txt\""));
    assert!(!body.starts_with('{'));
}

#[tokio::test]
async fn multipart_from_mapping_preserves_order() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let fields = json!({"zeta": "last-alphabetically", "alpha": 1});
    let response = dispatcher(&server, &MemoryCredentialStore::new())
        .dispatch_multipart(
            HttpMethod::Put,
            "/api/profile",
            fields.as_object().unwrap().clone(),
        )
        .await
        .unwrap();

    assert_eq!(response.body, Value::Null);
    let request = single_request(&server).await;
    let body = String::from_utf8_lossy(&request.body);
    let zeta = body.find("name=\"zeta\"").unwrap();
    let alpha = body.find("name=\"alpha\"").unwrap();
    assert!(zeta < alpha);
}

#[tokio::test]
async fn error_status_rejects_with_server_payload() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/boards/9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "reason": "Resource Not Found",
            "message": "board 9 does not exist",
            "data": null
        })))
        .mount(&server)
        .await;

    let error = dispatcher(&server, &MemoryCredentialStore::new())
        .dispatch_json(HttpMethod::Delete, "/api/boards/9", json!({}))
        .await
        .unwrap_err();

    assert_eq!(error.status().map(|s| s.as_u16()), Some(404));
    let body = error.server_error().expect("error envelope");
    assert_eq!(body.reason, "Resource Not Found");
    assert_eq!(body.message, "board 9 does not exist");
}

#[tokio::test]
async fn malformed_json_response_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("{truncated", "application/json"),
        )
        .mount(&server)
        .await;

    let error = dispatcher(&server, &MemoryCredentialStore::new())
        .dispatch_json(HttpMethod::Get, "/api/boards", Value::Null)
        .await
        .unwrap_err();

    assert!(matches!(error, DispatchError::Serialization(_)));
}

#[tokio::test]
async fn connection_failure_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let settings = ClientSettings::default()
        .with_base_url(&format!("http://127.0.0.1:{port}/"))
        .unwrap();
    let transport = ReqwestTransport::new(settings).unwrap();
    let dispatcher =
        RequestDispatcher::new(Arc::new(transport), Arc::new(CredentialSlots::default()));
    let error = dispatcher
        .dispatch_json(HttpMethod::Get, "/api/boards", Value::Null)
        .await
        .unwrap_err();

    assert!(error.is_network());
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn spawned_requests_settle_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/boards"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"page": 1})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/boards"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dispatcher = dispatcher(&server, &MemoryCredentialStore::new());
    let first = dispatcher.spawn_json(HttpMethod::Get, "/api/boards", json!({"page": 1}));
    let second = dispatcher.spawn_json(HttpMethod::Get, "/api/boards", json!({"page": 2}));

    let (first, second) = tokio::join!(first, second);
    assert_eq!(first.unwrap().body, json!({"page": 1}));
    assert_eq!(second.unwrap_err().status().map(|s| s.as_u16()), Some(500));
}

#[tokio::test]
async fn csrf_client_sends_cookie_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("X-CSRFToken", "tok3n"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"email": "ops@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt"})))
        .expect(1)
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(settings(&server)).unwrap();
    let cookies = CookieHeaderReader::parse("sessionid=s1; csrftoken=tok3n");
    let client = CsrfClient::new(Arc::new(transport), Arc::new(cookies), &settings(&server));

    let response = client
        .post(
            "/auth/login",
            &json!({"email": "ops@example.com", "password": "pw"}),
        )
        .await
        .unwrap();

    assert_eq!(response.body["token"], "jwt");
    let request = single_request(&server).await;
    assert_eq!(header_value(&request, "authorization"), None);
}
