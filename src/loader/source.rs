use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Url};

use crate::schema::{decode, ElementNode};

use super::error::LoaderError;
use super::screen_config::ScreenConfig;

/// Something that yields the raw bytes of a document.
pub trait DocumentSource: Send + Sync {
    /// Short description for logs.
    fn describe(&self) -> String;

    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, LoaderError>> + Send;
}

/// A document given in full up front.
#[derive(Debug, Clone)]
pub struct LiteralSource {
    bytes: Vec<u8>,
}

impl LiteralSource {
    pub fn new(document: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: document.into(),
        }
    }
}

impl DocumentSource for LiteralSource {
    fn describe(&self) -> String {
        format!("literal ({} bytes)", self.bytes.len())
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoaderError> {
        if self.bytes.is_empty() {
            return Err(LoaderError::EmptyBody);
        }
        Ok(self.bytes.clone())
    }
}

/// A document read from disk on every fetch.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoaderError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoaderError::ReadError {
                path: self.path.clone(),
                source: e,
            })?;
        if bytes.is_empty() {
            return Err(LoaderError::EmptyBody);
        }
        Ok(bytes)
    }
}

/// A document fetched over HTTP as described by a [`ScreenConfig`].
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    config: ScreenConfig,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(config: ScreenConfig, timeout: Duration) -> Result<Self, LoaderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LoaderError::Client)?;
        Ok(Self {
            client,
            config,
            timeout,
        })
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    fn request_error(&self, url: &Url, err: reqwest::Error) -> LoaderError {
        if err.is_timeout() {
            LoaderError::Timeout {
                url: url.to_string(),
                seconds: self.timeout.as_secs(),
            }
        } else {
            LoaderError::Network {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

impl DocumentSource for HttpSource {
    fn describe(&self) -> String {
        match self.config.request_url() {
            Ok(url) => url.to_string(),
            Err(_) => self.config.endpoint.clone(),
        }
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoaderError> {
        let url = self.config.request_url()?;
        let mut request = self.client.get(url.clone());
        if let Some(credentials) = &self.config.credentials {
            request = request.header(AUTHORIZATION, credentials.basic_auth_header());
        }

        tracing::debug!(url = %url, auth = self.config.credentials.is_some(), "Fetching document");
        let response = request
            .send()
            .await
            .map_err(|e| self.request_error(&url, e))?;

        let status = response.status().as_u16();
        if let Some(err) = LoaderError::from_status(status) {
            tracing::warn!(url = %url, status, "Document request rejected");
            return Err(err);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.request_error(&url, e))?;
        if body.is_empty() {
            return Err(LoaderError::EmptyBody);
        }
        Ok(body.to_vec())
    }
}

/// Fetch and decode a document.
pub async fn load_document<S: DocumentSource>(source: &S) -> Result<ElementNode, LoaderError> {
    let bytes = source.fetch().await?;
    let document = decode(&bytes)?;
    tracing::info!(
        source = %source.describe(),
        nodes = document.node_count(),
        "Loaded document"
    );
    Ok(document)
}
