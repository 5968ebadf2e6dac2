//! HTTP GET for the query cache.
//! Uses reqwest on server (with connection pooling), gloo-net on client.
//! Caching lives in [`crate::query`], not here.

use serde::de::DeserializeOwned;

use crate::query::QueryError;

#[cfg(feature = "ssr")]
mod ssr {
    use super::*;
    use std::sync::OnceLock;
    use std::time::Duration;

    /// Shared HTTP client for connection pooling
    static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

    const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    fn get_client() -> Result<&'static reqwest::Client, QueryError> {
        if let Some(client) = HTTP_CLIENT.get() {
            return Ok(client);
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(5)
            .build()
            .map_err(|e| QueryError::Fetch(format!("failed to create HTTP client: {e}")))?;
        Ok(HTTP_CLIENT.get_or_init(|| client))
    }

    pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, QueryError> {
        let response = get_client()?
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url, error = %e, "HTTP request failed");
                QueryError::Fetch(e.to_string())
            })?;

        if !response.status().is_success() {
            tracing::warn!(url, status = %response.status(), "HTTP error");
            return Err(QueryError::Fetch(format!("HTTP {}", response.status())));
        }

        response.json().await.map_err(|e| {
            tracing::warn!(url, error = %e, "JSON parse error");
            QueryError::Decode(e.to_string())
        })
    }
}

#[cfg(feature = "ssr")]
pub use ssr::*;

#[cfg(all(feature = "hydrate", not(feature = "ssr")))]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, QueryError> {
    let response = gloo_net::http::Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| {
            leptos::logging::warn!("HTTP request failed for {}: {}", url, e);
            QueryError::Fetch(e.to_string())
        })?;

    if !response.ok() {
        leptos::logging::warn!("HTTP error for {}: {}", url, response.status());
        return Err(QueryError::Fetch(format!("HTTP {}", response.status())));
    }

    response.json().await.map_err(|e| QueryError::Decode(e.to_string()))
}

// Fallback for when neither feature is enabled (cargo check, unit tests)
#[cfg(not(any(feature = "ssr", feature = "hydrate")))]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, QueryError> {
    Err(QueryError::Fetch(format!("no HTTP backend compiled in for {url}")))
}
