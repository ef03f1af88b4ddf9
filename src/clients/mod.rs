//! Clients for the remote product API, behind the [`ProductSource`] seam.

pub mod http_client;
pub mod mock;
pub mod product_source;

pub use http_client::*;
pub use product_source::*;
