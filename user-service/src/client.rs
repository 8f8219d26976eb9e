// User Source
// Fetches the one-off batch of synthetic users

use crate::error::{ServiceError, ServiceResult};
use crate::models::{User, UsersResponse};
use crate::state::Action;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info};

pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api";
pub const DEFAULT_RESULTS: usize = 100;

/// Anything that can produce the initial user batch
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> ServiceResult<Vec<User>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API, without query string
    pub endpoint: String,
    /// Value of the `results` query parameter
    pub results: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results: DEFAULT_RESULTS,
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>, results: usize) -> Self {
        Self {
            endpoint: endpoint.into(),
            results,
        }
    }
}

/// HTTP client for the randomuser.me API.
///
/// No timeout and no retry: a request that never completes leaves the
/// listing empty.
pub struct RandomUserClient {
    http: Client,
    config: ClientConfig,
}

impl RandomUserClient {
    pub fn new(config: ClientConfig) -> ServiceResult<Self> {
        let endpoint = config.endpoint.trim_end_matches('/').to_string();
        if endpoint.is_empty() {
            return Err(ServiceError::InvalidEndpoint(
                "endpoint cannot be empty".to_string(),
            ));
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ServiceError::InvalidEndpoint(format!(
                "'{}' must start with http:// or https://",
                endpoint
            )));
        }

        let http = Client::builder()
            .user_agent(format!("userdeck/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: ClientConfig {
                endpoint,
                results: config.results,
            },
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl UserSource for RandomUserClient {
    async fn fetch_users(&self) -> ServiceResult<Vec<User>> {
        debug!(
            endpoint = %self.config.endpoint,
            results = self.config.results,
            "Requesting user batch"
        );

        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[("results", self.config.results)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: UsersResponse =
            serde_json::from_str(&body).map_err(|e| ServiceError::Decode(e.to_string()))?;
        Ok(parsed.results)
    }
}

/// Run the load once and turn its outcome into the action to reduce.
///
/// Failures are logged here and nowhere else.
pub async fn load_users<S>(source: &S) -> Action
where
    S: UserSource + ?Sized,
{
    match source.fetch_users().await {
        Ok(users) => {
            info!(count = users.len(), "Loaded users");
            Action::LoadSucceeded(users)
        }
        Err(e) => {
            error!(error = %e, "Failed to load users");
            Action::LoadFailed(e.to_string())
        }
    }
}
