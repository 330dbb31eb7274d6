use crate::catalog::domain::{Catalog, Category};
use crate::catalog::services::{CatalogFormat, CatalogParser};
use crate::ports::outbound::CatalogSource;
use crate::shared::error::BuildError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const MAX_ATTEMPTS: u32 = 3;

/// HttpCatalogClient adapter for catalogs served over HTTP
///
/// Fetches `GET {base_url}/{category}.json`. Transport errors and server
/// errors are retried with a linear back-off; a 4xx answer is final.
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
    max_attempts: u32,
}

enum FetchError {
    /// Worth another attempt
    Transient(anyhow::Error),
    Permanent(anyhow::Error),
}

impl HttpCatalogClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Self::validate_base_url(base_url)?;
        let user_agent = format!("pc-builder/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            max_attempts: MAX_ATTEMPTS,
        })
    }

    /// Accepts only http(s) URLs without query or fragment; strips trailing `/`
    fn validate_base_url(base_url: &str) -> Result<String> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let invalid = |reason: &str| BuildError::Validation {
            message: format!("Invalid catalog URL '{}': {}", base_url, reason),
        };

        if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
            return Err(invalid("must start with http:// or https://").into());
        }
        if trimmed.contains('?') || trimmed.contains('#') {
            return Err(invalid("query strings and fragments are not allowed").into());
        }
        if trimmed.split("://").nth(1).is_none_or(str::is_empty) {
            return Err(invalid("missing host").into());
        }
        Ok(trimmed.to_string())
    }

    pub fn catalog_url(&self, category: Category) -> String {
        format!(
            "{}/{}.{}",
            self.base_url,
            urlencoding::encode(category.key()),
            CatalogFormat::Json.extension()
        )
    }

    async fn fetch_with_retry(&self, category: Category) -> Result<String> {
        let url = self.catalog_url(category);
        let mut attempt = 1;
        loop {
            match self.fetch_once(&url).await {
                Ok(body) => return Ok(body),
                Err(FetchError::Permanent(e)) => return Err(e),
                Err(FetchError::Transient(e)) if attempt >= self.max_attempts => return Err(e),
                Err(FetchError::Transient(e)) => {
                    tracing::debug!(%url, attempt, error = %e, "catalog fetch failed, retrying");
                    tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> std::result::Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transient(e.into()))?;

        let status = response.status();
        if status.is_client_error() {
            return Err(FetchError::Permanent(anyhow::anyhow!(
                "Catalog server returned status code {} for {}",
                status,
                url
            )));
        }
        if !status.is_success() {
            return Err(FetchError::Transient(anyhow::anyhow!(
                "Catalog server returned status code {} for {}",
                status,
                url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transient(e.into()))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn load_catalog(&self, category: Category) -> Result<Catalog> {
        let body = self.fetch_with_retry(category).await?;
        let catalog = CatalogParser::parse(category, &body, CatalogFormat::Json)?;
        tracing::debug!(
            category = %category,
            records = catalog.len(),
            "catalog loaded from {}",
            self.base_url
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("catalog server {}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_url() {
        let client = HttpCatalogClient::new("https://parts.example.com/v1/").unwrap();
        assert_eq!(
            client.catalog_url(Category::Psu),
            "https://parts.example.com/v1/psu.json"
        );
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = HttpCatalogClient::new("ftp://parts.example.com").err().unwrap();
        assert!(err.to_string().contains("must start with http"));
    }

    #[test]
    fn test_rejects_query_string() {
        let err = HttpCatalogClient::new("https://parts.example.com/?token=1")
            .err()
            .unwrap();
        assert!(err.to_string().contains("query strings"));
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!(HttpCatalogClient::new("https://").is_err());
    }

    #[test]
    fn test_describe_names_server() {
        let client = HttpCatalogClient::new("http://localhost:8080").unwrap();
        assert_eq!(client.describe(), "catalog server http://localhost:8080");
    }
}
