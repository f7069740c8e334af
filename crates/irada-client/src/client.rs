// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Low-level HTTP plumbing for the blogs API.
//!
//! [`ApiClient`] owns the authenticated `reqwest` client, builds endpoint
//! URLs, and maps responses onto the [`IradaError`] taxonomy. It performs no
//! retries.

use std::time::Duration;

use irada_config::{ApiConfig, AuthScheme};
use irada_core::{IradaError, PageQuery};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::ApiErrorBody;

/// Authenticated HTTP client bound to one API endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    blogs_path: String,
    messages_path: String,
}

impl ApiClient {
    /// Builds a client from the `[api]` configuration section.
    ///
    /// Fails with [`IradaError::Config`] when the key is missing or blank,
    /// when the key or header name is not a valid header, or when the
    /// endpoint is not a valid base URL. No request is sent.
    pub fn new(config: &ApiConfig) -> Result<Self, IradaError> {
        let key = config
            .key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                IradaError::Config("api.key is required (set IRADA_API_KEY)".to_string())
            })?;

        let mut headers = HeaderMap::new();
        match config.auth {
            AuthScheme::Bearer => {
                headers.insert(AUTHORIZATION, sensitive_value(&format!("Bearer {key}"))?);
            }
            AuthScheme::ApiKey => {
                let name = HeaderName::from_bytes(config.key_header.trim().as_bytes()).map_err(
                    |e| IradaError::Config(format!("invalid api.key_header: {e}")),
                )?;
                headers.insert(name, sensitive_value(key)?);
            }
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| IradaError::Config(format!("failed to build HTTP client: {e}")))?;

        let base_url = Url::parse(config.endpoint.trim()).map_err(|e| {
            IradaError::Config(format!("invalid api.endpoint `{}`: {e}", config.endpoint))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(IradaError::Config(format!(
                "api.endpoint `{}` cannot be used as a base URL",
                config.endpoint
            )));
        }

        Ok(Self {
            client,
            base_url,
            blogs_path: config.blogs_path.clone(),
            messages_path: config.messages_path.clone(),
        })
    }

    /// Returns the endpoint this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the list endpoint with the query's parameters applied.
    pub fn list_url(&self, query: &PageQuery) -> Url {
        let mut url = self.endpoint_url(&self.blogs_path);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &query.page.to_string());
            if let Some(category) = &query.category {
                pairs.append_pair("category", category);
            }
            if !query.tags_any.is_empty() {
                pairs.append_pair("tags", &query.tags_any.join(","));
            }
            if let Some(limit) = query.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            if query.featured {
                pairs.append_pair("featured", "true");
            }
        }
        url
    }

    /// URL of a single item, with the slug percent-encoded as one path segment.
    pub fn item_url(&self, slug: &str) -> Url {
        let mut url = self.endpoint_url(&self.blogs_path);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(slug);
        }
        url
    }

    /// URL of the contact message endpoint.
    pub fn messages_url(&self) -> Url {
        self.endpoint_url(&self.messages_path)
    }

    fn endpoint_url(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url
    }

    /// GETs `url` and decodes the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        resource: &str,
    ) -> Result<T, IradaError> {
        self.execute(self.client.get(url), resource).await
    }

    /// POSTs `body` as JSON to `url` and decodes the JSON reply.
    pub async fn post_json<B, T>(&self, url: Url, body: &B, resource: &str) -> Result<T, IradaError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.client.post(url).json(body), resource)
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        resource: &str,
    ) -> Result<T, IradaError> {
        let response = request
            .send()
            .await
            .map_err(|e| IradaError::transport(format!("request for {resource} failed: {e}"), e))?;

        let status = response.status();
        debug!(status = %status, resource, "response received");

        let body = response.text().await.map_err(|e| {
            IradaError::transport(format!("failed to read response for {resource}: {e}"), e)
        })?;

        if status == StatusCode::NOT_FOUND {
            return Err(IradaError::not_found(resource));
        }

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(ApiErrorBody::text)
                .unwrap_or(body);
            return Err(IradaError::Server {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| IradaError::Server {
            status: status.as_u16(),
            message: format!("malformed response body for {resource}: {e}"),
        })
    }
}

fn sensitive_value(value: &str) -> Result<HeaderValue, IradaError> {
    let mut header = HeaderValue::from_str(value)
        .map_err(|e| IradaError::Config(format!("invalid API key header value: {e}")))?;
    header.set_sensitive(true);
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str) -> ApiConfig {
        ApiConfig {
            endpoint: endpoint.to_string(),
            key: Some("test-key".into()),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let mut cfg = config("https://api.example.com");
        cfg.key = None;
        assert!(matches!(ApiClient::new(&cfg), Err(IradaError::Config(_))));
        cfg.key = Some("   ".into());
        assert!(matches!(ApiClient::new(&cfg), Err(IradaError::Config(_))));
    }

    #[test]
    fn bad_endpoint_is_a_configuration_error() {
        let err = ApiClient::new(&config("not a url")).unwrap_err();
        assert!(err.to_string().contains("api.endpoint"), "got: {err}");
    }

    #[test]
    fn list_url_carries_only_set_parameters() {
        let client = ApiClient::new(&config("https://api.example.com")).unwrap();
        let url = client.list_url(&PageQuery::first().at_page(2));
        assert_eq!(url.as_str(), "https://api.example.com/api/blogs?page=2");

        let url = client.list_url(
            &PageQuery::first()
                .with_category("Dev Ops")
                .with_tags_any(["ai", "rust"])
                .with_limit(20),
        );
        assert_eq!(
            url.as_str(),
            "https://api.example.com/api/blogs?page=1&category=Dev+Ops&tags=ai%2Crust&limit=20"
        );

        let url = client.list_url(&PageQuery::featured());
        assert!(url.as_str().ends_with("featured=true"));
    }

    #[test]
    fn endpoint_prefix_path_is_preserved() {
        let client = ApiClient::new(&config("https://example.com/v2/")).unwrap();
        assert_eq!(
            client.messages_url().as_str(),
            "https://example.com/v2/api/messages"
        );
    }

    #[test]
    fn item_url_encodes_slug_as_one_segment() {
        let client = ApiClient::new(&config("https://api.example.com")).unwrap();
        assert_eq!(
            client.item_url("hello world/../x").as_str(),
            "https://api.example.com/api/blogs/hello%20world%2F..%2Fx"
        );
    }
}
