//! Canonical product record handed to the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// The remote API hands out either numeric or textual ids, so both are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Numeric(i64),
    Text(String),
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self::Numeric(id.into())
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductId::Numeric(id) => write!(f, "{}", id),
            ProductId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// Display language of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "ar")]
    Arabic,
    #[default]
    #[serde(rename = "en")]
    English,
}

/// Represents a normalized product in the storefront catalog.
///
/// # Catalog Pipeline
/// Instances are produced by the [`Normalizer`](crate::catalog::Normalizer), which is the
/// single boundary between untyped wire data ([`RawProduct`](crate::model::RawProduct)) and this
/// canonical shape. Every optional field has already been defaulted and the image reference
/// is either an absolute URL or an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
    pub price: f64,
    pub old_price: Option<f64>,
    pub stock: u64,
    pub image: String,
    pub rating: f64,
    pub reviews_count: u64,
    pub sales_count: u64,
    pub flavor: Vec<String>,
    pub weight: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Creates a Product with every optional field at its default.
    ///
    /// # Arguments
    /// * `id` - Unique identifier assigned by the remote API
    /// * `name` - Default (non-localized) product name
    /// * `price` - Product price
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            name_ar: name.clone(),
            name,
            description: String::new(),
            description_ar: String::new(),
            price,
            old_price: None,
            stock: 0,
            image: String::new(),
            rating: 0.0,
            reviews_count: 0,
            sales_count: 0,
            flavor: Vec::new(),
            weight: None,
            created_at: None,
        }
    }

    pub fn with_sales(mut self, sales_count: u64) -> Self {
        self.sales_count = sales_count;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Name in the requested locale.
    pub fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Arabic => &self.name_ar,
            Locale::English => &self.name,
        }
    }

    /// Description in the requested locale.
    pub fn display_description(&self, locale: Locale) -> &str {
        match locale {
            Locale::Arabic => &self.description_ar,
            Locale::English => &self.description,
        }
    }

    /// Whole-percent markdown from `old_price`, if the product is actually discounted.
    pub fn discount_percent(&self) -> Option<u8> {
        let old = self.old_price?;
        if self.price <= 0.0 || old <= self.price {
            return None;
        }
        Some((((old - self.price) / old) * 100.0).round() as u8)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Creation time in epoch milliseconds, 0 when unknown.
    pub fn created_at_millis(&self) -> i64 {
        self.created_at.map(|ts| ts.timestamp_millis()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_uses_locale() {
        let mut product = Product::new(1, "Whey Protein", 40.0);
        product.name_ar = "بروتين مصل اللبن".to_string();

        assert_eq!(product.display_name(Locale::English), "Whey Protein");
        assert_eq!(product.display_name(Locale::Arabic), "بروتين مصل اللبن");
    }

    #[test]
    fn test_discount_percent() {
        let mut product = Product::new(1, "Creatine", 75.0);
        assert_eq!(product.discount_percent(), None);

        product.old_price = Some(100.0);
        assert_eq!(product.discount_percent(), Some(25));

        product.old_price = Some(50.0);
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::from(42).to_string(), "42");
        assert_eq!(ProductId::from("sku-7").to_string(), "sku-7");
    }

    #[test]
    fn test_missing_timestamp_is_epoch() {
        let product = Product::new(1, "Shaker", 5.0);
        assert_eq!(product.created_at_millis(), 0);
    }
}
