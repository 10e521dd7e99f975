//! Gitea client implementation

use crate::util::normalize_base_url;
use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Path prefix of the Gitea REST API
pub const API_PATH: &str = "/api/v1";

/// Items requested per page on paginated listings
pub const PAGE_SIZE: u32 = 50;

/// Response header carrying the total size of a paginated listing
const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Default User-Agent header for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("edison/", env!("CARGO_PKG_VERSION"));

/// Gitea API client for making token-authenticated requests
pub struct GiteaClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) token: String,
}

impl GiteaClient {
    /// Create a new Gitea client
    ///
    /// # Arguments
    /// * `uri` - Server URI, e.g. `http://192.168.7.2:3029`
    /// * `token` - Personal access token sent as `Authorization: token <token>`,
    ///   surrounding whitespace removed
    ///
    /// # Errors
    /// Returns an error if the URI is invalid or the HTTP client cannot be built
    pub fn new(uri: &str, token: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(uri)?;
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            token: token.into().trim().to_string(),
        })
    }

    /// Base URL of the server, without the API prefix
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the client has a token configured
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Full URL of an API path such as `/user/repos`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PATH, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.api_url(path);
        tracing::debug!("gitea request {} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header("Accept", "application/json");

        if self.is_authenticated() {
            request = request.header("Authorization", format!("token {}", self.token));
        }

        request
    }

    /// GET a path and deserialize the JSON body
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .with_context(|| format!("Failed to connect to {} while fetching {}", self.base_url, what))?;

        parse_response(response, what).await
    }

    /// GET every page of a paginated listing
    ///
    /// Pages are requested with `page` and `limit` query parameters. The
    /// server may cap `limit` below [`PAGE_SIZE`] (`[api] MAX_RESPONSE_ITEMS`),
    /// so a short page does not mean the end: paging stops once the
    /// `X-Total-Count` header is reached or an empty page comes back.
    pub(crate) async fn get_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        what: &str,
    ) -> Result<Vec<T>> {
        let separator = if path.contains('?') { '&' } else { '?' };
        let mut items = Vec::new();
        let mut page = 1u32;

        loop {
            let page_path = format!("{path}{separator}page={page}&limit={PAGE_SIZE}");
            let (batch, total) = self.get_page::<T>(&page_path, what).await?;
            if batch.is_empty() {
                break;
            }
            items.extend(batch);

            if total.is_some_and(|total| items.len() >= total) {
                break;
            }

            page += 1;
        }

        tracing::debug!(count = items.len(), pages = page, "fetched {}", what);
        Ok(items)
    }

    /// GET one page of a listing along with the server's total count, if sent
    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        what: &str,
    ) -> Result<(Vec<T>, Option<usize>)> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .with_context(|| format!("Failed to connect to {} while fetching {}", self.base_url, what))?;

        let total = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<usize>().ok());

        let batch = parse_response(response, what).await?;
        Ok((batch, total))
    }
}

/// Turn a response into a typed body, or an error carrying status and body
pub(crate) async fn parse_response<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let reason = match status.as_u16() {
            401 => "authentication failed, check the configured token",
            403 => "access forbidden, check the token's scopes",
            404 => "not found",
            _ => status.canonical_reason().unwrap_or("Unknown error"),
        };
        let body = response.text().await.unwrap_or_default();
        return Err(anyhow!(
            "Failed to fetch {} ({} {}): {}",
            what,
            status.as_u16(),
            reason,
            body.trim()
        ));
    }

    response
        .json::<T>()
        .await
        .with_context(|| format!("Failed to parse Gitea response for {what}"))
}
