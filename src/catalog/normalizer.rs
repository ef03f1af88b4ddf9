//! # Normalizer
//!
//! Converts [`RawProduct`] wire records into canonical [`Product`]s. This is the only place
//! untyped input becomes typed data; everything downstream (ranking, pages, presentation)
//! can rely on the invariants below.
//!
//! - `image` is an absolute URL or an empty string, never a partial path.
//! - Counters (`rating`, `sales_count`, `reviews_count`, `stock`) and `price` default to 0.
//! - Arabic name/description fall back to the default text.
//! - `flavor` is a list of trimmed, non-empty tokens.
//! - A record without an id is rejected with [`CatalogError::MalformedRecord`].

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::CatalogError;
use crate::model::{Product, ProductId, RawFlavor, RawId, RawProduct, RawScalar, RawTimestamp};

const NETWORK_SCHEMES: [&str; 2] = ["http://", "https://"];
const MAX_RATING: f64 = 5.0;

/// Shared record normalizer, configured with the base URL for relative image paths.
#[derive(Debug, Clone)]
pub struct Normalizer {
    image_base_url: String,
}

impl Normalizer {
    /// Creates a normalizer. A trailing `/` on the base URL is dropped so that joining it
    /// with a rooted path never doubles the separator.
    pub fn new(image_base_url: impl Into<String>) -> Self {
        let image_base_url = image_base_url.into().trim_end_matches('/').to_string();
        Self { image_base_url }
    }

    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    /// Resolves a raw image reference.
    ///
    /// Absent or blank → `""`; already absolute → unchanged; rooted (`/..`) → base URL
    /// prefixed; anything else passes through untouched.
    pub fn resolve_image(&self, raw: Option<&str>) -> String {
        let Some(image) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return String::new();
        };
        if NETWORK_SCHEMES.iter().any(|scheme| image.starts_with(scheme)) {
            return image.to_string();
        }
        if image.starts_with('/') {
            return format!("{}{}", self.image_base_url, image);
        }
        image.to_string()
    }

    /// Normalizes a single raw record.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedRecord`] if the record has no usable id. A fractional
    /// numeric id such as `2.5` is not usable.
    pub fn normalize(&self, raw: RawProduct) -> Result<Product, CatalogError> {
        let id = match raw.id {
            Some(RawId::Int(id)) => ProductId::Numeric(id),
            Some(RawId::Float(id)) if id.is_finite() && id.fract() == 0.0 => ProductId::Numeric(id as i64),
            Some(RawId::Text(ref id)) if !id.trim().is_empty() => ProductId::Text(id.trim().to_string()),
            _ => {
                return Err(CatalogError::MalformedRecord(format!(
                    "record without id (name: {:?})",
                    raw.name.as_deref().unwrap_or_default()
                )))
            }
        };

        let name = non_empty(raw.name).unwrap_or_default();
        let description = non_empty(raw.description).unwrap_or_default();
        let name_ar = non_empty(raw.name_ar).unwrap_or_else(|| name.clone());
        let description_ar = non_empty(raw.description_ar).unwrap_or_else(|| description.clone());

        Ok(Product {
            id,
            image: self.resolve_image(raw.image.as_deref()),
            price: number_or_zero(raw.price.as_ref()).max(0.0),
            old_price: raw
                .old_price
                .as_ref()
                .and_then(RawScalar::as_f64)
                .filter(|p| *p > 0.0),
            stock: count_or_zero(raw.stock.as_ref()),
            rating: number_or_zero(raw.rating.as_ref()).clamp(0.0, MAX_RATING),
            reviews_count: count_or_zero(raw.reviews_count.as_ref()),
            sales_count: count_or_zero(raw.sales_count.as_ref()),
            flavor: split_flavor(raw.flavor),
            weight: raw.weight.as_ref().and_then(RawScalar::as_text),
            created_at: raw.created_at.as_ref().and_then(parse_timestamp),
            name,
            name_ar,
            description,
            description_ar,
        })
    }

    /// Normalizes a whole collection.
    ///
    /// Records rejected by [`normalize`](Self::normalize) are dropped, and a repeated id keeps
    /// only its first occurrence, so the output always has unique keys.
    pub fn normalize_all(&self, raws: Vec<RawProduct>) -> Vec<Product> {
        let total = raws.len();
        let mut seen = HashSet::with_capacity(total);
        let mut products = Vec::with_capacity(total);

        for raw in raws {
            match self.normalize(raw) {
                Ok(product) => {
                    if seen.insert(product.id.clone()) {
                        products.push(product);
                    } else {
                        warn!(product_id = %product.id, "Dropping duplicate product record");
                    }
                }
                Err(e) => warn!(error = %e, "Dropping product record"),
            }
        }

        debug!(total, kept = products.len(), "Normalized product collection");
        products
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn number_or_zero(value: Option<&RawScalar>) -> f64 {
    value.and_then(RawScalar::as_f64).unwrap_or(0.0)
}

fn count_or_zero(value: Option<&RawScalar>) -> u64 {
    let n = number_or_zero(value);
    if n <= 0.0 {
        0
    } else {
        n.trunc() as u64
    }
}

fn split_flavor(flavor: Option<RawFlavor>) -> Vec<String> {
    let tokens: Vec<String> = match flavor {
        Some(RawFlavor::Text(text)) => text.split(',').map(str::to_string).collect(),
        Some(RawFlavor::List(list)) => list,
        None => return Vec::new(),
    };
    tokens
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn parse_timestamp(raw: &RawTimestamp) -> Option<DateTime<Utc>> {
    match raw {
        RawTimestamp::Millis(ms) => DateTime::from_timestamp_millis(*ms),
        RawTimestamp::FloatMillis(ms) => ms
            .is_finite()
            .then(|| ms.trunc() as i64)
            .and_then(DateTime::from_timestamp_millis),
        RawTimestamp::Text(text) => DateTime::parse_from_rfc3339(text.trim())
            .ok()
            .map(|ts| ts.with_timezone(&Utc)),
    }
}
