use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tabulex_model::user::AuthToken;
use tokio::sync::RwLock;

use crate::api_types::ApiResponse;
use crate::error::ApiError;

/// API client with authentication support
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token_store: Arc<RwLock<Option<AuthToken>>>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            // In development, don't follow redirects to avoid HTTP->HTTPS issues
            .redirect(if cfg!(debug_assertions) {
                reqwest::redirect::Policy::none()
            } else {
                reqwest::redirect::Policy::default()
            })
            .build()
            .expect("Failed to create HTTP client");

        log::info!("[ApiClient] Creating new API client with base URL: {}", base_url);

        Self {
            client,
            base_url,
            token_store: Arc::new(RwLock::new(None)),
        }
    }

    /// Build an API URL
    pub fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/api/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Set the authentication token
    pub async fn set_token(&self, token: Option<AuthToken>) {
        *self.token_store.write().await = token;
    }

    /// Get the current authentication token
    pub async fn get_token(&self) -> Option<AuthToken> {
        self.token_store.read().await.clone()
    }

    /// Build a request with authentication headers
    async fn build_request(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.token_store.read().await.as_ref() {
            builder.header("Authorization", format!("Bearer {}", token.access_token))
        } else {
            builder
        }
    }

    /// Execute a request and handle common errors
    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;

        match response.status() {
            StatusCode::OK => {
                let api_response: ApiResponse<T> = response
                    .json()
                    .await
                    .map_err(|e| ApiError::Decode(e.to_string()))?;
                match api_response.data {
                    Some(data) => Ok(data),
                    None => Err(ApiError::EmptyResponse),
                }
            }
            StatusCode::UNAUTHORIZED => {
                // Token might be expired, clear it
                self.set_token(None).await;
                Err(ApiError::Unauthorized)
            }
            status => {
                let message = Self::extract_error_message(response).await;
                Err(ApiError::Status {
                    code: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// Prefer the envelope's message field, fall back to the raw body.
    async fn extract_error_message(response: reqwest::Response) -> String {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or(body)
    }

    /// GET a payload from `path` with query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] GET {} params {:?}", url, params);
        let request = self
            .build_request(self.client.get(&url).query(params))
            .await;
        self.execute_request(request).await
    }

    /// POST a JSON body to `path`
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] POST {}", url);
        let request = self.build_request(self.client.post(&url).json(body)).await;
        self.execute_request(request).await
    }

    /// POST without expecting a payload back (logout and friends)
    pub async fn post_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.build_url(path);
        let request = self.build_request(self.client.post(&url).json(body)).await;
        let response = request.send().await?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            StatusCode::UNAUTHORIZED => {
                self.set_token(None).await;
                Err(ApiError::Unauthorized)
            }
            status => {
                let message = Self::extract_error_message(response).await;
                Err(ApiError::Status {
                    code: status.as_u16(),
                    message,
                })
            }
        }
    }
}
