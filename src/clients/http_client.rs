//! HTTP client for the remote product API.

use crate::catalog::CatalogError;
use crate::clients::ProductSource;
use crate::model::{ProductsEnvelope, RawProduct};
use crate::runtime::StorefrontConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// [`ProductSource`] backed by `GET {api_url}/products`.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: Client,
    api_url: String,
}

impl HttpProductSource {
    /// Builds the client. The request timeout is the only bound on a hanging fetch.
    pub fn new(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CatalogError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.api_url)
    }

    /// Decodes the envelope and enforces the `success`/`products` contract.
    fn unwrap_envelope(envelope: ProductsEnvelope) -> Result<Vec<RawProduct>, CatalogError> {
        if !envelope.success {
            return Err(CatalogError::Rejected(envelope.message));
        }
        envelope.products.ok_or_else(|| {
            CatalogError::MalformedResponse("response has no `products` field".to_string())
        })
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    #[instrument(skip(self))]
    async fn fetch_products(&self, limit: Option<usize>) -> Result<Vec<RawProduct>, CatalogError> {
        let url = self.products_url();
        debug!(%url, "Sending request");
        let mut request = self.client.get(&url);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Product source returned an error status");
            return Err(CatalogError::Transport(format!("unexpected status {status}")));
        }

        let body = response.text().await?;
        let envelope: ProductsEnvelope = serde_json::from_str(&body)
            .map_err(|e| CatalogError::MalformedResponse(e.to_string()))?;
        let products = Self::unwrap_envelope(envelope)?;

        info!(count = products.len(), "Fetched products");
        Ok(products)
    }
}
