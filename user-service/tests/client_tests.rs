//! Tests for the random user client and the one-time load.
//!
//! These run against a mock server so no network access is needed.

use std::io;
use std::sync::{Arc, Mutex};

use user_service::{
    load_users, Action, ClientConfig, LoadState, RandomUserClient, ServiceError, UserSource,
    ViewState,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_json(email: &str, first: &str, country: &str) -> serde_json::Value {
    serde_json::json!({
        "gender": "male",
        "name": { "title": "Mr", "first": first, "last": "Tester" },
        "location": { "city": "Somewhere", "country": country },
        "email": email,
        "picture": {
            "large": format!("https://img.example/{first}.jpg"),
            "thumbnail": format!("https://img.example/thumb/{first}.jpg")
        }
    })
}

async fn client_for(server: &MockServer, results: usize) -> RandomUserClient {
    RandomUserClient::new(ClientConfig::new(format!("{}/api", server.uri()), results)).unwrap()
}

// =============================================================================
// Log capture
// =============================================================================

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_errors() -> (CapturedLog, tracing::subscriber::DefaultGuard) {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::ERROR)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (log, guard)
}

// =============================================================================
// Fetch
// =============================================================================

mod fetch {
    use super::*;

    #[tokio::test]
    async fn test_requests_configured_result_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .and(query_param("results", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    user_json("a@x", "Ana", "Peru"),
                    user_json("b@x", "Beto", "Chile"),
                ],
                "info": { "results": 2, "page": 1 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let users = client_for(&server, 2).await.fetch_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "a@x");
        assert_eq!(users[0].country(), "Peru");
        assert_eq!(users[1].picture.thumbnail, "https://img.example/thumb/Beto.jpg");
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server, 100).await.fetch_users().await;
        assert!(matches!(result, Err(ServiceError::Decode(_))));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = client_for(&server, 100).await.fetch_users().await;
        match result {
            Err(ServiceError::Status { status }) => assert_eq!(status, 503),
            other => panic!("Expected Status error, got {:?}", other.map(|u| u.len())),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_request_error() {
        // Nothing listens on port 9 (discard) on test machines
        let client = RandomUserClient::new(ClientConfig::new("http://127.0.0.1:9/api", 1)).unwrap();
        let result = client.fetch_users().await;
        assert!(matches!(result, Err(ServiceError::Request(_))));
    }
}

// =============================================================================
// Load
// =============================================================================

mod load {
    use super::*;

    #[tokio::test]
    async fn test_successful_load_populates_state() {
        let server = MockServer::start().await;
        let results: Vec<_> = (0..100)
            .map(|i| user_json(&format!("user{i}@x"), &format!("User{i}"), "Norway"))
            .collect();
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": results })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, 100).await;
        let action = load_users(&client).await;
        let state = ViewState::new().reduce(Action::LoadStarted).reduce(action);

        assert_eq!(state.load, LoadState::Loaded);
        assert_eq!(state.users.len(), 100);
        assert_eq!(state.original_len(), 100);
        assert_eq!(state.original.as_deref(), Some(&*state.users));
    }

    #[tokio::test]
    async fn test_failed_load_logs_once_and_stays_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, 100).await;
        let (log, _guard) = capture_errors();

        let action = load_users(&client).await;
        assert!(matches!(action, Action::LoadFailed(_)));

        let state = ViewState::new().reduce(Action::LoadStarted).reduce(action);
        assert!(matches!(state.load, LoadState::Failed(_)));
        assert!(state.users.is_empty());

        let lines = log.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Failed to load users"));
    }
}
