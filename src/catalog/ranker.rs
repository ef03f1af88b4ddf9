//! # Ranker
//!
//! Pure derivation rules that turn the normalized collection into capped, ordered views.
//!
//! | View | Rule | Cap |
//! |---|---|---|
//! | [`BestSellers`](RankedView::BestSellers) | `sales_count` descending | 8 |
//! | [`Recommended`](RankedView::Recommended) | `sales_count >= 5 && rating >= 4`, then `sales_count` descending | 8 |
//! | [`LatestAdditions`](RankedView::LatestAdditions) | `created_at` descending, undated last | 4 |
//! | [`NewArrivals`](RankedView::NewArrivals) | same ordering as latest additions | 8 |
//! | [`Catalog`](RankedView::Catalog) | input order | none |
//!
//! Equal keys keep their input order: `slice::sort_by` is stable, and that stability is
//! part of the observable output.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::model::Product;

pub const BEST_SELLERS_CAP: usize = 8;
pub const RECOMMENDED_CAP: usize = 8;
pub const LATEST_ADDITIONS_CAP: usize = 4;
pub const NEW_ARRIVALS_CAP: usize = 8;

pub const RECOMMENDED_MIN_SALES: u64 = 5;
pub const RECOMMENDED_MIN_RATING: f64 = 4.0;

/// A named derivation rule over the product collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankedView {
    BestSellers,
    Recommended,
    LatestAdditions,
    NewArrivals,
    Catalog,
}

impl RankedView {
    /// Maximum number of products the view yields; `None` for uncapped views.
    pub fn cap(&self) -> Option<usize> {
        match self {
            RankedView::BestSellers => Some(BEST_SELLERS_CAP),
            RankedView::Recommended => Some(RECOMMENDED_CAP),
            RankedView::LatestAdditions => Some(LATEST_ADDITIONS_CAP),
            RankedView::NewArrivals => Some(NEW_ARRIVALS_CAP),
            RankedView::Catalog => None,
        }
    }

    /// Applies this view's rule to `products`. The input is left untouched.
    pub fn rank(&self, products: &[Product]) -> Vec<Product> {
        match self {
            RankedView::BestSellers => best_sellers(products),
            RankedView::Recommended => recommended(products),
            RankedView::LatestAdditions => latest_additions(products),
            RankedView::NewArrivals => new_arrivals(products),
            RankedView::Catalog => products.to_vec(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RankedView::BestSellers => "best sellers",
            RankedView::Recommended => "recommended",
            RankedView::LatestAdditions => "latest additions",
            RankedView::NewArrivals => "new arrivals",
            RankedView::Catalog => "catalog",
        }
    }
}

pub fn best_sellers(products: &[Product]) -> Vec<Product> {
    by_sales(products.iter(), BEST_SELLERS_CAP)
}

pub fn recommended(products: &[Product]) -> Vec<Product> {
    let eligible = products.iter().filter(|p| {
        p.sales_count >= RECOMMENDED_MIN_SALES && p.rating >= RECOMMENDED_MIN_RATING
    });
    by_sales(eligible, RECOMMENDED_CAP)
}

pub fn latest_additions(products: &[Product]) -> Vec<Product> {
    by_recency(products, LATEST_ADDITIONS_CAP)
}

pub fn new_arrivals(products: &[Product]) -> Vec<Product> {
    by_recency(products, NEW_ARRIVALS_CAP)
}

fn by_sales<'a>(products: impl Iterator<Item = &'a Product>, cap: usize) -> Vec<Product> {
    let mut ranked: Vec<&Product> = products.collect();
    ranked.sort_by_key(|p| Reverse(p.sales_count));
    ranked.into_iter().take(cap).cloned().collect()
}

fn by_recency(products: &[Product], cap: usize) -> Vec<Product> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    // `None` orders below every timestamp, pre-1970 ones included.
    ranked.sort_by_key(|p| Reverse(p.created_at));
    ranked.into_iter().take(cap).cloned().collect()
}
