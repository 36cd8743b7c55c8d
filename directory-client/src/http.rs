//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{Employee, EmployeeUpdate};

/// Error response body produced by the server
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    pub error: String,
}

/// Directory API surface
///
/// A trait so the table state machines can be driven by a scripted
/// implementation in tests.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Fetch one page of employees. An empty vec means the collection is
    /// exhausted at that page.
    async fn fetch_page(&self, page: u32) -> ClientResult<Vec<Employee>>;

    /// Replace the mutable fields of one employee, returning the canonical
    /// stored record.
    async fn update_employee(&self, id: i64, update: &EmployeeUpdate) -> ClientResult<Employee>;
}

/// HTTP client for making network requests to the directory server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self.client.put(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            // The server sends {"error": "..."}; fall back to the raw body
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or(text);
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Server(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl DirectoryApi for HttpClient {
    async fn fetch_page(&self, page: u32) -> ClientResult<Vec<Employee>> {
        self.get(&format!("users?start={page}")).await
    }

    async fn update_employee(&self, id: i64, update: &EmployeeUpdate) -> ClientResult<Employee> {
        self.put(&format!("users/{id}"), update).await
    }
}
