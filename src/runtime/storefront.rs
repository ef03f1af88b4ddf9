use std::sync::Arc;

use tracing::info;

use crate::catalog::{CatalogError, Normalizer};
use crate::clients::{HttpProductSource, ProductSource};
use crate::pages::{CatalogPage, PageKind};
use crate::runtime::StorefrontConfig;

/// The runtime orchestrator for the storefront's catalog pages.
///
/// `Storefront` is responsible for:
/// - **Dependency Wiring**: building one [`ProductSource`] and one [`Normalizer`] and handing
///   them to every page, instead of each page reaching for a global client
/// - **Configuration**: turning [`StorefrontConfig`] into per-page options
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::new(StorefrontConfig::from_env()?)?;
///
/// let home = storefront.page(PageKind::Home);
/// let state = home.activate().await;
/// ```
pub struct Storefront {
    config: StorefrontConfig,
    source: Arc<dyn ProductSource>,
    normalizer: Normalizer,
}

impl Storefront {
    /// Creates a storefront backed by the HTTP product API.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        let source = HttpProductSource::new(&config)?;
        info!(api_url = %config.api_url, "Storefront configured");
        Ok(Self::with_source(config, Arc::new(source)))
    }

    /// Creates a storefront around an injected product source.
    pub fn with_source(config: StorefrontConfig, source: Arc<dyn ProductSource>) -> Self {
        let normalizer = Normalizer::new(config.image_base_url.clone());
        Self {
            config,
            source,
            normalizer,
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// A fresh page sharing this storefront's source and normalizer.
    pub fn page(&self, kind: PageKind) -> CatalogPage {
        CatalogPage::new(
            kind,
            self.source.clone(),
            self.normalizer.clone(),
            self.config.page_options(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RankedView;
    use crate::clients::mock::MockProductSource;
    use crate::model::RawProduct;
    use serde_json::json;

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = StorefrontConfig {
            api_url: "not a url".into(),
            ..Default::default()
        };
        assert!(matches!(Storefront::new(config), Err(CatalogError::Config(_))));
    }

    #[tokio::test]
    async fn test_pages_share_the_injected_source() {
        let mock = Arc::new(MockProductSource::new());
        let raws: Vec<RawProduct> =
            serde_json::from_value(json!([{ "id": 1, "image": "/img/1.png" }])).unwrap();
        mock.expect_fetch(Some(10)).return_ok(raws.clone());
        mock.expect_fetch(Some(10)).return_ok(raws);

        let config = StorefrontConfig {
            image_base_url: "https://shop.example.com/".into(),
            fetch_limit: Some(10),
            ..Default::default()
        };
        let storefront = Storefront::with_source(config, mock.clone());

        let home = storefront.page(PageKind::Home).activate().await;
        let arrivals = storefront.page(PageKind::NewArrivals).activate().await;

        let image = &home.list(RankedView::BestSellers).unwrap()[0].image;
        assert_eq!(image, "https://shop.example.com/img/1.png");
        assert_eq!(arrivals.list(RankedView::NewArrivals).map(|l| l.len()), Some(1));
        assert_eq!(mock.calls(), 2);
        mock.verify();
    }
}
