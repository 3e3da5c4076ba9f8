use crate::models::RecommendationsResponse;
use crate::swipe::{FormMethod, Navigation};
use reqwest::{redirect, Client, Method, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the matching server
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),
}

/// Result of performing a browser navigation over HTTP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub status: StatusCode,
    /// Redirect target, when the server answered with one
    pub location: Option<String>,
}

/// HTTP client for the matching server, used by the swipe front end
///
/// Redirects are not followed so callers can see where the server would
/// send the browser next.
pub struct RecommendationsClient {
    base_url: String,
    client: Client,
}

impl RecommendationsClient {
    /// Create a new client for the server at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a server-relative path against the base URL
    pub fn resolve(&self, target: &str) -> String {
        if target.starts_with("http://") || target.starts_with("https://") {
            return target.to_string();
        }

        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            target.trim_start_matches('/')
        )
    }

    /// Fetch the recommendation batch for the current viewer
    pub async fn fetch_recommendations(&self) -> Result<RecommendationsResponse, ClientError> {
        let url = self.resolve("/api/recommendations");

        tracing::debug!("Fetching recommendations from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::ApiError(format!(
                "Failed to fetch recommendations: {}",
                response.status()
            )));
        }

        let batch: RecommendationsResponse = response.json().await?;

        tracing::debug!(
            "Fetched {} recommendations ({} viewer interests)",
            batch.users.len(),
            batch.current_user_interests.len()
        );

        Ok(batch)
    }

    /// Perform a navigation the swipe session asked the browser for
    pub async fn execute(&self, navigation: &Navigation) -> Result<NavigationOutcome, ClientError> {
        let (method, target) = match navigation {
            Navigation::Visit { url } => (Method::GET, url.as_str()),
            Navigation::SubmitForm { method, action } => (
                match method {
                    FormMethod::Get => Method::GET,
                    FormMethod::Post => Method::POST,
                },
                action.as_str(),
            ),
        };

        let url = self.resolve(target);
        tracing::debug!("Navigating: {} {}", method, url);

        let response = self.client.request(method, &url).send().await?;
        let status = response.status();

        if !status.is_success() && !status.is_redirection() {
            return Err(ClientError::ApiError(format!(
                "Navigation to {} failed: {}",
                url, status
            )));
        }

        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(NavigationOutcome { status, location })
    }
}
