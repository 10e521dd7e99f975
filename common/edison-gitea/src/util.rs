//! Utility functions for Gitea operations

use anyhow::{Context, Result, bail};
use reqwest::Url;

/// Normalize a configured Gitea server URI into a base URL
///
/// Accepts the server root with or without a trailing slash, and tolerates a
/// URI that already ends in the `/api/v1` prefix.
///
/// # Arguments
/// * `uri` - The server URI as written in the configuration file
///
/// # Returns
/// The base URL without a trailing slash, e.g. `http://192.168.7.2:3029`
///
/// # Errors
/// Returns an error if the URI is empty, unparsable, or not http(s)
pub fn normalize_base_url(uri: &str) -> Result<String> {
    let trimmed = uri.trim();
    if trimmed.is_empty() {
        bail!("Gitea server URI is empty");
    }

    let url = Url::parse(trimmed).with_context(|| format!("Invalid Gitea server URI: {trimmed}"))?;

    match url.scheme() {
        "http" | "https" => {}
        other => bail!("Unsupported scheme '{}' in Gitea server URI: {}", other, trimmed),
    }

    if url.host_str().is_none() {
        bail!("Gitea server URI has no host: {}", trimmed);
    }

    let base = url.as_str().trim_end_matches('/');
    let base = base.strip_suffix(crate::client::API_PATH).unwrap_or(base);

    Ok(base.trim_end_matches('/').to_string())
}
