//! The process-wide HTTP client.
//!
//! Built once in `main` and cloned into each collaborator (clones share one
//! connection pool). Every request inherits the fixed timeout and User-Agent.

use crate::config::Settings;
use reqwest::{Client, ClientBuilder};

/// Build the shared HTTP client from settings.
///
/// # Errors
///
/// Returns the underlying `reqwest` error if the TLS backend can't be initialized.
pub fn build_client(settings: &Settings) -> Result<Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(settings.request_timeout())
        .user_agent(settings.user_agent.as_str())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_client_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", "Mozilla/5.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let client = build_client(&Settings::default()).unwrap();
        let resp = client.get(server.uri()).send().await.unwrap();
        assert_eq!(resp.status(), 200);
    }
}
