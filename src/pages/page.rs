//! # Catalog Pages
//!
//! A [`CatalogPage`] runs the pipeline for one storefront page: fetch the collection once,
//! normalize it, derive the page's ranked views, publish a [`PageState`].
//!
//! ## Concurrency
//!
//! Every activation issues its own fetch. Nothing is deduplicated or cancelled: if a page is
//! activated again while an earlier fetch is still in flight, both publish when they finish
//! and whichever finishes last decides the final state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{info, instrument, warn};

use super::{PageState, RankedList};
use crate::catalog::{CatalogError, Normalizer, RankedView};
use crate::clients::ProductSource;

/// The storefront pages backed by the product collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Home,
    BestSellers,
    NewArrivals,
    Catalog,
}

impl PageKind {
    /// Views derived for this page, in display order.
    pub fn views(&self) -> &'static [RankedView] {
        match self {
            PageKind::Home => &[
                RankedView::BestSellers,
                RankedView::Recommended,
                RankedView::LatestAdditions,
            ],
            PageKind::BestSellers => &[RankedView::BestSellers],
            PageKind::NewArrivals => &[RankedView::NewArrivals],
            PageKind::Catalog => &[RankedView::Catalog],
        }
    }
}

/// Per-page settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    /// Passed through to the product source as the result-count limit.
    pub fetch_limit: Option<usize>,
    /// Shown to the user whenever the page lands in the error state.
    pub error_message: String,
}

pub struct CatalogPage {
    kind: PageKind,
    source: Arc<dyn ProductSource>,
    normalizer: Normalizer,
    options: PageOptions,
    state: watch::Sender<PageState>,
}

impl CatalogPage {
    pub fn new(
        kind: PageKind,
        source: Arc<dyn ProductSource>,
        normalizer: Normalizer,
        options: PageOptions,
    ) -> Self {
        let (state, _) = watch::channel(PageState::Loading);
        Self {
            kind,
            source,
            normalizer,
            options,
            state,
        }
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PageState {
        self.state.borrow().clone()
    }

    /// Change feed for the presentation layer.
    pub fn subscribe(&self) -> watch::Receiver<PageState> {
        self.state.subscribe()
    }

    /// Loads the page: `Loading`, then one fetch, then `Populated` or `Error`.
    #[instrument(skip(self), fields(page = ?self.kind))]
    pub async fn activate(&self) -> PageState {
        self.state.send_replace(PageState::Loading);

        let next = match self.load().await {
            Ok(lists) => {
                info!(views = lists.len(), "Page populated");
                PageState::Populated { lists }
            }
            Err(e) => {
                warn!(error = %e, "Page failed to load");
                PageState::Error {
                    message: self.options.error_message.clone(),
                }
            }
        };

        self.state.send_replace(next.clone());
        next
    }

    /// User-initiated retry: a full re-fetch, no backoff.
    pub async fn retry(&self) -> PageState {
        info!(page = ?self.kind, "Retrying page load");
        self.activate().await
    }

    async fn load(&self) -> Result<Vec<RankedList>, CatalogError> {
        let raws = self.source.fetch_products(self.options.fetch_limit).await?;
        let products = self.normalizer.normalize_all(raws);

        Ok(self
            .kind
            .views()
            .iter()
            .map(|view| RankedList {
                view: *view,
                products: view.rank(&products),
            })
            .collect())
    }
}
