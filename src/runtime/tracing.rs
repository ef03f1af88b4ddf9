//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Fetches**: URL, limit, record count, error statuses
//! - **Normalization**: dropped records (missing id, duplicate id) at `warn`
//! - **Pages**: activation span per page kind, populated/error outcome
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run -- home
//!
//! # Show dropped records and per-request details
//! RUST_LOG=debug cargo run -- best-sellers
//!
//! # Filter to specific modules
//! RUST_LOG=storefront_catalog::catalog=debug cargo run -- catalog
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO activate:fetch_products: Fetched products count=24 page=Home
//! INFO activate: Page populated views=3 page=Home
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}
