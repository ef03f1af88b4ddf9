//! # Storefront Catalog
//!
//! > **Product retrieval and ranking for storefront pages.**
//!
//! Every catalog page of the storefront (home, best sellers, new arrivals, full catalog)
//! does the same thing: fetch the product collection once, clean up the loosely typed
//! records, derive a few ranked views and show loading, error or the lists. This crate is that
//! pipeline, written once and shared by every page.
//!
//! ## Architecture Notes
//!
//! ### 1. One Typed Boundary
//! The API's records are untyped (ids as numbers *or* strings, counters as `false`, images
//! as relative paths). [`model::RawProduct`] accepts all of it, and the
//! [`Normalizer`](catalog::Normalizer) is the single place that turns it into a canonical
//! [`Product`](model::Product). Nothing downstream re-checks fields.
//!
//! ### 2. Stable Ranking
//! The [`ranker`](catalog::ranker) rules sort with the standard library's stable sort, so
//! products with equal sales counts (or equal timestamps) keep their API order.
//!
//! ### 3. Injected Clients
//! Pages receive an `Arc<dyn ProductSource>` instead of reaching for a global API client.
//! Production wiring lives in [`Storefront`](runtime::Storefront); tests use
//! [`MockProductSource`](clients::mock::MockProductSource).
//!
//! ### 4. Observability
//! `tracing` spans wrap each activation and fetch. See [`runtime::tracing`].
//!
//! ## Module Tour
//!
//! - [`model`]: raw wire DTOs and the canonical product
//! - [`catalog`]: normalizer, ranker, errors
//! - [`clients`]: the [`ProductSource`](clients::ProductSource) seam, HTTP client, mock
//! - [`pages`]: page state machine (loading / error / populated)
//! - [`runtime`]: configuration, wiring, tracing setup
//!
//! ## Running the CLI
//!
//! ```bash
//! STOREFRONT_API_URL=http://localhost:5000/api RUST_LOG=info cargo run -- home
//! ```

pub mod catalog;
pub mod clients;
pub mod model;
pub mod pages;
pub mod runtime;
