//! Waitlist submission backends
//!
//! The endpoint contract is `POST {url}` with a JSON body `{"name"?: string, "email": string}`
//! and `Content-Type: application/json`. Any 2xx status is success; the body is not read.
//! Without a configured endpoint the demo backend waits a moment and succeeds.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::DEFAULT_FAILURE_MESSAGE;
use super::timer::sleep;
use crate::core::config::SiteConfig;

/// Artificial latency of the demo backend
pub const DEMO_DELAY: Duration = Duration::from_millis(1500);

/// Upper bound for a real request (native client only; browsers apply their own)
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Request body sent to the waitlist endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
}

/// Submission failure types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("waitlist endpoint responded with HTTP {0}")]
    Status(u16),

    #[error("waitlist request failed: {0}")]
    Network(String),

    #[error("waitlist request timed out")]
    Timeout,

    #[error("could not build waitlist request: {0}")]
    InvalidRequest(String),
}

impl SubmissionError {
    /// Text shown to the visitor. Transport details stay in the logs.
    pub fn user_message(&self) -> String {
        DEFAULT_FAILURE_MESSAGE.to_string()
    }
}

/// Something that can deliver a waitlist entry
#[allow(async_fn_in_trait)]
pub trait WaitlistTransport {
    async fn submit(&self, entry: &WaitlistEntry) -> Result<(), SubmissionError>;
}

/// Backend used when no endpoint is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoTransport {
    pub delay: Duration,
}

impl Default for DemoTransport {
    fn default() -> Self {
        Self { delay: DEMO_DELAY }
    }
}

impl WaitlistTransport for DemoTransport {
    async fn submit(&self, entry: &WaitlistEntry) -> Result<(), SubmissionError> {
        waitlist_log!(
            info,
            "Demo mode: simulating waitlist signup (named={})",
            entry.name.is_some()
        );
        sleep(self.delay).await;
        Ok(())
    }
}

/// Backend posting to a real endpoint
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    /// Build failure is kept and reported by every submit
    #[cfg(feature = "ssr")]
    client: Result<reqwest::Client, String>,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            #[cfg(feature = "ssr")]
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .map_err(|e| {
                    waitlist_log!(warn, "Failed to build waitlist HTTP client: {}", e);
                    e.to_string()
                }),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(feature = "ssr")]
impl WaitlistTransport for HttpTransport {
    async fn submit(&self, entry: &WaitlistEntry) -> Result<(), SubmissionError> {
        let client = self
            .client
            .as_ref()
            .map_err(|e| SubmissionError::InvalidRequest(e.clone()))?;

        let response = client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(entry)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SubmissionError::Timeout
                } else if e.is_builder() {
                    SubmissionError::InvalidRequest(e.to_string())
                } else {
                    SubmissionError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        waitlist_log!(info, "Waitlist endpoint response status: {}", status);

        if status.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::Status(status.as_u16()))
        }
    }
}

#[cfg(all(feature = "hydrate", not(feature = "ssr")))]
impl WaitlistTransport for HttpTransport {
    async fn submit(&self, entry: &WaitlistEntry) -> Result<(), SubmissionError> {
        use gloo_net::http::Request;

        let request = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(entry)
            .map_err(|e| SubmissionError::InvalidRequest(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SubmissionError::Status(response.status()))
        }
    }
}

#[cfg(not(any(feature = "ssr", feature = "hydrate")))]
impl WaitlistTransport for HttpTransport {
    async fn submit(&self, _entry: &WaitlistEntry) -> Result<(), SubmissionError> {
        Err(SubmissionError::Network(
            "no HTTP client compiled into this build".to_string(),
        ))
    }
}

/// Backend selected from the site configuration
#[derive(Debug, Clone)]
pub enum Transport {
    Demo(DemoTransport),
    Http(HttpTransport),
}

impl Transport {
    pub fn from_config(config: &SiteConfig) -> Self {
        match &config.waitlist_api_url {
            Some(endpoint) => Transport::Http(HttpTransport::new(endpoint.clone())),
            None => Transport::Demo(DemoTransport::default()),
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Transport::Demo(_))
    }
}

impl WaitlistTransport for Transport {
    async fn submit(&self, entry: &WaitlistEntry) -> Result<(), SubmissionError> {
        match self {
            Transport::Demo(demo) => demo.submit(entry).await,
            Transport::Http(http) => http.submit(entry).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: Option<&str>) -> WaitlistEntry {
        WaitlistEntry {
            name: name.map(str::to_string),
            email: "jane@example.com".to_string(),
        }
    }

    #[test]
    fn test_entry_json_shape() {
        let json = serde_json::to_value(entry(Some("Jane"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Jane", "email": "jane@example.com" })
        );

        let json = serde_json::to_value(entry(None)).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "jane@example.com" }));
    }

    #[test]
    fn test_every_failure_shows_default_message() {
        for error in [
            SubmissionError::Status(500),
            SubmissionError::Network("connection refused".to_string()),
            SubmissionError::Timeout,
            SubmissionError::InvalidRequest("bad url".to_string()),
        ] {
            assert_eq!(error.user_message(), DEFAULT_FAILURE_MESSAGE);
        }
        assert_eq!(
            SubmissionError::Status(503).to_string(),
            "waitlist endpoint responded with HTTP 503"
        );
    }

    #[test]
    fn test_transport_from_config() {
        let demo = Transport::from_config(&SiteConfig::default());
        assert!(demo.is_demo());

        let config = SiteConfig {
            waitlist_api_url: Some("https://api.intmoney.com/waitlist".to_string()),
            ..SiteConfig::default()
        };
        match Transport::from_config(&config) {
            Transport::Http(http) => {
                assert_eq!(http.endpoint(), "https://api.intmoney.com/waitlist")
            }
            Transport::Demo(_) => panic!("expected HTTP transport"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_transport_waits_then_succeeds() {
        let start = tokio::time::Instant::now();
        let result = DemoTransport::default().submit(&entry(None)).await;

        assert_eq!(result, Ok(()));
        assert!(start.elapsed() >= DEMO_DELAY);
        assert!(start.elapsed() < DEMO_DELAY + Duration::from_millis(100));
    }

    #[cfg(feature = "ssr")]
    mod http {
        use super::*;
        use axum::Router;
        use axum::http::{HeaderMap, StatusCode, header::CONTENT_TYPE};
        use axum::routing::post;
        use std::sync::{Arc, Mutex};

        type Received = Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>;

        /// Spawn a local endpoint answering every POST with `status`
        async fn spawn_endpoint(status: StatusCode) -> (String, Received) {
            let received: Received = Arc::new(Mutex::new(Vec::new()));
            let sink = received.clone();

            let app = Router::new().route(
                "/waitlist",
                post(move |headers: HeaderMap, body: String| {
                    let sink = sink.clone();
                    async move {
                        let content_type = headers
                            .get(CONTENT_TYPE)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        let json = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
                        sink.lock().unwrap().push((content_type, json));
                        status
                    }
                }),
            );

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            (format!("http://{}/waitlist", addr), received)
        }

        #[tokio::test]
        async fn test_created_is_success() {
            let (url, received) = spawn_endpoint(StatusCode::CREATED).await;

            let result = HttpTransport::new(url).submit(&entry(Some("Jane"))).await;
            assert_eq!(result, Ok(()));

            let received = received.lock().unwrap();
            assert_eq!(received.len(), 1);
            assert_eq!(received[0].0.as_deref(), Some("application/json"));
            assert_eq!(
                received[0].1,
                serde_json::json!({ "name": "Jane", "email": "jane@example.com" })
            );
        }

        #[tokio::test]
        async fn test_server_error_is_failure() {
            let (url, _received) = spawn_endpoint(StatusCode::INTERNAL_SERVER_ERROR).await;

            let result = HttpTransport::new(url).submit(&entry(None)).await;
            assert_eq!(result, Err(SubmissionError::Status(500)));
        }

        #[tokio::test]
        async fn test_client_error_is_failure() {
            let (url, _received) = spawn_endpoint(StatusCode::CONFLICT).await;

            let result = HttpTransport::new(url).submit(&entry(None)).await;
            assert_eq!(result, Err(SubmissionError::Status(409)));
        }

        #[tokio::test]
        async fn test_client_build_failure_is_reported() {
            let transport = HttpTransport {
                endpoint: "http://127.0.0.1:9/waitlist".to_string(),
                client: Err("TLS backend cannot be initialized".to_string()),
            };

            let result = transport.submit(&entry(None)).await;
            assert_eq!(
                result,
                Err(SubmissionError::InvalidRequest(
                    "TLS backend cannot be initialized".to_string()
                ))
            );
            assert_eq!(
                result.unwrap_err().user_message(),
                DEFAULT_FAILURE_MESSAGE
            );
        }

        #[tokio::test]
        async fn test_new_transport_builds_client() {
            let transport = HttpTransport::new("https://api.intmoney.com/waitlist");
            assert!(transport.client.is_ok());
        }

        #[tokio::test]
        async fn test_unreachable_endpoint_is_network_error() {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);

            let result = HttpTransport::new(format!("http://{}/waitlist", addr))
                .submit(&entry(None))
                .await;
            assert!(matches!(result, Err(SubmissionError::Network(_))));
        }
    }
}
