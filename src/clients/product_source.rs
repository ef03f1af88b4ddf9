//! # ProductSource Trait
//!
//! The one contract the pipeline consumes from the remote product API: fetch the whole
//! collection, optionally limited. Pages hold an `Arc<dyn ProductSource>` so the real HTTP
//! client and the test mock are interchangeable.
use crate::catalog::CatalogError;
use crate::model::RawProduct;
use async_trait::async_trait;

/// Source of raw product records.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use storefront_catalog::catalog::CatalogError;
/// use storefront_catalog::clients::ProductSource;
/// use storefront_catalog::model::{RawId, RawProduct};
///
/// struct FixedSource;
///
/// #[async_trait]
/// impl ProductSource for FixedSource {
///     async fn fetch_products(&self, limit: Option<usize>) -> Result<Vec<RawProduct>, CatalogError> {
///         let all = vec![RawProduct::with_id(RawId::Int(1)), RawProduct::with_id(RawId::Int(2))];
///         Ok(all.into_iter().take(limit.unwrap_or(usize::MAX)).collect())
///     }
/// }
/// ```
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetches the product collection once.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Transport`] when the request fails or times out
    /// - [`CatalogError::MalformedResponse`] when the body lacks the collection
    /// - [`CatalogError::Rejected`] when the API reports `success: false`
    async fn fetch_products(&self, limit: Option<usize>) -> Result<Vec<RawProduct>, CatalogError>;
}
