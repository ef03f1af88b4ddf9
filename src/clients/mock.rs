//! # Mock Product Source
//!
//! Utilities for testing pages without a live product API.
//!
//! Queue up expectations with [`MockProductSource::expect_fetch`], hand the mock to a page,
//! then call [`MockProductSource::verify`] to make sure every expected fetch happened.

use crate::catalog::CatalogError;
use crate::clients::ProductSource;
use crate::model::RawProduct;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected `fetch_products` call and the canned answer for it.
struct Expectation {
    limit: Option<usize>,
    delay: Option<Duration>,
    response: Result<Vec<RawProduct>, CatalogError>,
}

/// A mock product source with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mock = Arc::new(MockProductSource::new());
/// mock.expect_fetch(None).return_ok(vec![RawProduct::with_id(RawId::Int(1))]);
///
/// let page = CatalogPage::new(PageKind::Home, mock.clone(), normalizer, options);
/// page.activate().await;
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Default)]
pub struct MockProductSource {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: AtomicUsize,
}

impl MockProductSource {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `fetch_products` call with the given limit.
    pub fn expect_fetch(&self, limit: Option<usize>) -> FetchExpectationBuilder {
        FetchExpectationBuilder {
            limit,
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Number of fetches served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl ProductSource for MockProductSource {
    async fn fetch_products(&self, limit: Option<usize>) -> Result<Vec<RawProduct>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let expectation = self.expectations.lock().unwrap().pop_front();

        match expectation {
            Some(expectation) => {
                assert_eq!(expectation.limit, limit, "fetch_products called with unexpected limit");
                if let Some(delay) = expectation.delay {
                    tokio::time::sleep(delay).await;
                }
                expectation.response
            }
            None => panic!("Unexpected fetch_products call"),
        }
    }
}

/// Builder for `fetch_products` expectations.
pub struct FetchExpectationBuilder {
    limit: Option<usize>,
    delay: Option<Duration>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl FetchExpectationBuilder {
    /// Holds the answer back for `delay`, simulating a slow network.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, products: Vec<RawProduct>) {
        self.push(Ok(products));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: CatalogError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<RawProduct>, CatalogError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            limit: self.limit,
            delay: self.delay,
            response,
        });
    }
}
