//! Integration tests for the Taquilla API client.
//!
//! Runs the full client against a local mock HTTP server, verifying the
//! request executor's parsing/error contract and the purchase-history
//! endpoint discovery scan, including exact call counts.

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use taquilla_client::{ClientConfig, RequestOptions, TaquillaClient, config::EndpointOverrides};

fn client_for(server: &ServerGuard) -> TaquillaClient {
    let config = ClientConfig { base_url: server.url(), endpoints: EndpointOverrides::default() };
    TaquillaClient::new(config).expect("mock server URL is a valid base")
}

#[tokio::test]
async fn get_events_returns_parsed_body_unchanged() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/events")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"name":"Concierto"},{"id":2,"name":"Teatro"}]"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let events = client.get_events().await.unwrap();

    assert_eq!(events, json!([{"id":1,"name":"Concierto"},{"id":2,"name":"Teatro"}]));
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_success_body_returns_empty_object() {
    let mut server = Server::new_async().await;
    let _mock = server.mock("GET", "/events").with_status(200).create_async().await;

    let client = client_for(&server);
    let result = client.get_events().await.unwrap();

    assert_eq!(result, json!({}));
}

#[tokio::test]
async fn null_success_body_returns_empty_object() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/events")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("null")
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.get_events().await.unwrap();

    assert_eq!(result, json!({}));
}

#[tokio::test]
async fn non_json_success_body_returns_empty_object() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/events")
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.get_events().await.unwrap();

    assert_eq!(result, json!({}));
}

#[tokio::test]
async fn error_status_surfaces_as_api_error_with_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/events/42")
        .with_status(500)
        .with_body("internal blowup, not json")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get_event("42").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.body().is_none());
    assert_eq!(err.to_string(), "API error 500");
}

#[tokio::test]
async fn error_status_carries_parsed_error_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/reservations")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"seat already taken"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.create_reservation(&json!({"seat": "A1"})).await.unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(err.body().unwrap()["message"], "seat already taken");
}

#[tokio::test]
async fn every_request_sends_json_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/events")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    client.get_events().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn caller_headers_win_over_defaults() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/events")
        .match_header("content-type", "application/vnd.taquilla+json")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut options = RequestOptions::get();
    options.headers.insert(
        reqwest::header::CONTENT_TYPE,
        reqwest::header::HeaderValue::from_static("application/vnd.taquilla+json"),
    );
    client.request("/events", options).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn session_cookie_rides_along_with_later_requests() {
    let mut server = Server::new_async().await;
    let _login = server
        .mock("GET", "/events")
        .with_status(200)
        .with_header("set-cookie", "session=abc123; Path=/")
        .with_body("[]")
        .create_async()
        .await;
    let authed = server
        .mock("GET", "/events/42")
        .match_header("cookie", "session=abc123")
        .with_status(200)
        .with_body(r#"{"id":42}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    client.get_events().await.unwrap();
    let event = client.get_event("42").await.unwrap();

    assert_eq!(event, json!({"id": 42}));
    authed.assert_async().await;
}

#[tokio::test]
async fn get_event_is_idempotent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/events/42")
        .with_status(200)
        .with_body(r#"{"id":42,"name":"Opera"}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let first = client.get_event("42").await.unwrap();
    let second = client.get_event("42").await.unwrap();

    assert_eq!(first, second);
    mock.assert_async().await;
}

#[tokio::test]
async fn create_reservation_serializes_payload_once() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/reservations")
        .match_body(Matcher::Json(json!({"seat": "A1"})))
        .with_status(201)
        .with_body(r#"{"id":"res-1","seat":"A1","status":"held"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let reservation = client.create_reservation(&json!({"seat": "A1"})).await.unwrap();

    assert_eq!(reservation, json!({"id":"res-1","seat":"A1","status":"held"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn checkout_posts_payload_and_returns_result() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/checkout")
        .match_body(Matcher::Json(json!({"reservation_id": "res-1", "card": "tok_visa"})))
        .with_status(200)
        .with_body(r#"{"order_id":"ord-9","status":"paid"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client
        .checkout(&json!({"reservation_id": "res-1", "card": "tok_visa"}))
        .await
        .unwrap();

    assert_eq!(result["status"], "paid");
    mock.assert_async().await;
}

#[tokio::test]
async fn purchases_first_candidate_short_circuits() {
    let mut server = Server::new_async().await;
    let hit = server
        .mock("GET", "/purchases")
        .with_status(200)
        .with_body(r#"[{"id":1}]"#)
        .expect(1)
        .create_async()
        .await;
    let never = server.mock("GET", "/purchase").expect(0).create_async().await;

    let client = client_for(&server);
    let purchases = client.get_purchases().await.unwrap();

    assert_eq!(purchases, json!([{"id": 1}]));
    hit.assert_async().await;
    never.assert_async().await;
}

#[tokio::test]
async fn purchases_skips_404_and_uses_next_candidate() {
    let mut server = Server::new_async().await;
    let miss = server.mock("GET", "/purchases").with_status(404).expect(1).create_async().await;
    let hit = server
        .mock("GET", "/purchase")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;
    let never = server.mock("GET", "/orders").expect(0).create_async().await;

    let client = client_for(&server);
    let purchases = client.get_purchases().await.unwrap();

    assert_eq!(purchases, json!([]));
    miss.assert_async().await;
    hit.assert_async().await;
    never.assert_async().await;
}

#[tokio::test]
async fn purchases_non_404_error_aborts_scan() {
    let mut server = Server::new_async().await;
    let denied = server
        .mock("GET", "/purchases")
        .with_status(401)
        .with_body(r#"{"message":"no session"}"#)
        .expect(1)
        .create_async()
        .await;
    let never = server.mock("GET", "/purchase").expect(0).create_async().await;

    let client = client_for(&server);
    let err = client.get_purchases().await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.body().unwrap()["message"], "no session");
    denied.assert_async().await;
    never.assert_async().await;
}

#[tokio::test]
async fn purchases_exhaustion_returns_empty_list_without_error() {
    let mut server = Server::new_async().await;
    let candidates = [
        "/purchases",
        "/purchase",
        "/orders",
        "/sales",
        "/transactions",
        "/users/me/purchases",
    ];
    let mut mocks = Vec::new();
    for path in candidates {
        mocks.push(server.mock("GET", path).with_status(404).expect(1).create_async().await);
    }

    let client = client_for(&server);
    let purchases = client.get_purchases().await.unwrap();

    assert_eq!(purchases, json!([]));
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn purchases_honors_configured_candidate_override() {
    let mut server = Server::new_async().await;
    let hit = server
        .mock("GET", "/history")
        .with_status(200)
        .with_body(r#"[{"id":"p-1"}]"#)
        .expect(1)
        .create_async()
        .await;
    let never = server.mock("GET", "/purchases").expect(0).create_async().await;

    let config = ClientConfig {
        base_url: server.url(),
        endpoints: EndpointOverrides {
            purchases: Some(vec!["/history".to_owned()]),
            ..Default::default()
        },
    };
    let client = TaquillaClient::new(config).unwrap();
    let purchases = client.get_purchases().await.unwrap();

    assert_eq!(purchases, json!([{"id": "p-1"}]));
    hit.assert_async().await;
    never.assert_async().await;
}

#[tokio::test]
async fn base_url_trailing_slash_does_not_double_separator() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/events")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let config = ClientConfig {
        base_url: format!("{}/", server.url()),
        endpoints: EndpointOverrides::default(),
    };
    let client = TaquillaClient::new(config).unwrap();
    client.get_events().await.unwrap();

    mock.assert_async().await;
}
