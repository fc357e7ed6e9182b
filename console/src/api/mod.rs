//! Typed REST client for the inventory backend
//!
//! One [`ApiClient`] wraps all endpoint groups; the workflow controllers
//! depend on the narrower [`StorageApi`], [`MaterialsApi`], [`ReportsApi`]
//! and [`ReferenceApi`] traits so they can run against in-memory fakes in
//! tests. No retries and no client-side timeouts: a failed request surfaces
//! one error and leaves the calling form untouched for manual retry.

mod materials;
mod reference;
mod reports;
mod storage;

pub use materials::{MaterialsApi, StockAdjustment};
pub use reference::{load_incidents_or_empty, load_users_or_empty, ReferenceApi};
pub use reports::ReportsApi;
pub use storage::StorageApi;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{extract_api_message, AppError, AppResult};

/// An in-memory file attachment for multipart uploads
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    fn into_part(self) -> AppResult<reqwest::multipart::Part> {
        let part = reqwest::multipart::Part::bytes(self.bytes)
            .file_name(self.filename)
            .mime_str(&self.content_type)
            .map_err(|e| AppError::Validation(format!("invalid content type: {}", e)))?;
        Ok(part)
    }
}

/// REST client for the inventory backend
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_base_url(config.base_url.clone(), config.token.clone())
    }

    /// Create a client against an explicit base URL (for testing)
    pub fn with_base_url(base_url: String, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Token {}", token)),
            None => builder,
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, response.text().await.unwrap_or_default()));
        }
        Ok(response.json().await?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        self.send_json(self.request(Method::GET, path).query(query))
            .await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        self.send_json(self.request(Method::PUT, path).json(body))
            .await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> AppResult<T> {
        self.send_json(self.request(Method::POST, path).multipart(form))
            .await
    }

    pub(crate) async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> AppResult<T> {
        self.send_json(self.request(Method::PUT, path).multipart(form))
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> AppResult<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status, response.text().await.unwrap_or_default()));
        }
        Ok(())
    }
}

fn api_error(status: StatusCode, body: String) -> AppError {
    AppError::Api {
        status: status.as_u16(),
        message: extract_api_message(&body),
    }
}
