//! Runtime orchestration and configuration.
//!
//! This module contains the infrastructure for running the catalog pages:
//!
//! - **Configuration**: [`StorefrontConfig`] with environment overrides
//! - **Wiring**: [`Storefront`] builds the shared product source and normalizer
//! - **Observability setup**: [`setup_tracing`]

pub mod config;
pub mod storefront;
pub mod tracing;

pub use config::*;
pub use storefront::*;
pub use self::tracing::setup_tracing;
