//! The catalog pipeline: one shared [`Normalizer`] and the [`ranker`] rules used by every page.
//!
//! # Main Components
//!
//! - [`Normalizer`] - Raw wire record → canonical [`Product`](crate::model::Product)
//! - [`RankedView`] - Named, capped derivation rules (best sellers, recommended, ...)
//! - [`CatalogError`] - Every failure the pipeline can report

pub mod error;
pub mod normalizer;
pub mod ranker;

pub use error::*;
pub use normalizer::Normalizer;
pub use ranker::RankedView;
