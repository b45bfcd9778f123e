use std::collections::BTreeMap;

use reqwest::Url;

use crate::config::{Credentials, LoaderSettings};

use super::error::LoaderError;

/// Storage API the predefined configurations point at.
pub const DEFAULT_ENDPOINT: &str = "https://alfa-itmo.ru/server/v1/storage/";

/// How a screen is shown when navigated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationType {
    #[default]
    Push,
    Present,
}

/// Where a screen's document comes from and how the screen is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    pub endpoint: String,
    /// Appended to `endpoint` as the last path segment.
    pub storage_key: Option<String>,
    /// Sent as query pairs.
    pub parameters: BTreeMap<String, String>,
    pub navigation_title: Option<String>,
    pub navigation_type: NavigationType,
    pub credentials: Option<Credentials>,
}

impl ScreenConfig {
    /// Document stored under `key` on the default storage endpoint.
    pub fn storage(key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            storage_key: Some(key.into()),
            parameters: BTreeMap::new(),
            navigation_title: None,
            navigation_type: NavigationType::Push,
            credentials: None,
        }
    }

    /// Document served directly by `endpoint`.
    pub fn custom(endpoint: impl Into<String>, parameters: BTreeMap<String, String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            storage_key: None,
            parameters,
            navigation_title: None,
            navigation_type: NavigationType::Push,
            credentials: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.navigation_title = Some(title.into());
        self
    }

    pub fn with_navigation_type(mut self, navigation_type: NavigationType) -> Self {
        self.navigation_type = navigation_type;
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Point a storage config at the configured endpoint and attach the
    /// configured credentials, unless the config already carries its own.
    pub fn with_settings(mut self, settings: &LoaderSettings) -> Self {
        if self.storage_key.is_some() {
            self.endpoint = settings.endpoint.clone();
        }
        if self.credentials.is_none() {
            self.credentials = settings.credentials();
        }
        self
    }

    /// Endpoint, plus `/storage_key` without doubling the slash, plus the
    /// parameters as query pairs.
    pub fn request_url(&self) -> Result<Url, LoaderError> {
        let mut raw = self.endpoint.trim().to_string();
        if let Some(key) = &self.storage_key {
            if !raw.ends_with('/') {
                raw.push('/');
            }
            raw.push_str(key);
        }

        let mut url = Url::parse(&raw).map_err(|e| LoaderError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !self.parameters.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.parameters);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_is_appended_once() {
        let url = ScreenConfig::storage("complex_content").request_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://alfa-itmo.ru/server/v1/storage/complex_content"
        );

        let mut config = ScreenConfig::storage("settings");
        config.endpoint = "https://example.com/api".to_string();
        assert_eq!(
            config.request_url().unwrap().as_str(),
            "https://example.com/api/settings"
        );
    }

    #[test]
    fn parameters_become_query_pairs() {
        let mut params = BTreeMap::new();
        params.insert("itemId".to_string(), "12345".to_string());
        params.insert("lang".to_string(), "en".to_string());
        let url = ScreenConfig::custom("https://example.com/screen", params)
            .request_url()
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/screen?itemId=12345&lang=en");
    }

    #[test]
    fn invalid_endpoint_is_reported() {
        let err = ScreenConfig::custom("details", BTreeMap::new())
            .request_url()
            .unwrap_err();
        assert!(matches!(err, LoaderError::InvalidUrl { .. }));
    }

    #[test]
    fn settings_fill_endpoint_and_credentials() {
        let settings = LoaderSettings {
            endpoint: "http://localhost:9000/storage".to_string(),
            username: Some("u".to_string()),
            password: Some("p".to_string()),
            ..LoaderSettings::default()
        };
        let config = ScreenConfig::storage("home").with_settings(&settings);
        assert_eq!(config.endpoint, "http://localhost:9000/storage");
        assert_eq!(config.credentials, Some(Credentials::new("u", "p")));

        let custom = ScreenConfig::custom("https://other.example", BTreeMap::new())
            .with_settings(&settings);
        assert_eq!(custom.endpoint, "https://other.example");
    }
}
