//! Wire-level DTOs as the remote product API sends them.
//!
//! The API is loosely typed: ids may be numbers or strings, counters may arrive as numbers,
//! numeric strings, `false` or `null`, and single records are sometimes plain wrong. These
//! types accept all of that without judging it;
//! turning them into a [`Product`](crate::model::Product) is the job of the
//! [`Normalizer`](crate::catalog::Normalizer).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Identity field of a raw record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    /// Numeric ids serialized as floats (`2.0`); only whole numbers are usable.
    Float(f64),
    Text(String),
}

/// A loosely typed scalar used for numeric wire fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl RawScalar {
    /// Numeric reading of the scalar; booleans and non-numeric text yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawScalar::Number(n) if n.is_finite() => Some(*n),
            RawScalar::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Textual reading of the scalar; empty text and booleans yield `None`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawScalar::Number(n) if n.is_finite() => Some(n.to_string()),
            RawScalar::Text(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }
}

/// Variant list: either `"Chocolate, Vanilla"` or `["Chocolate", "Vanilla"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFlavor {
    List(Vec<String>),
    Text(String),
}

/// Creation timestamp: RFC 3339 text or Unix epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Millis(i64),
    /// Epoch milliseconds sent as a float (`1.7e12`).
    FloatMillis(f64),
    Text(String),
}

/// A product record exactly as received. Every field may be missing.
///
/// Decoding never fails: a field of an unexpected type is treated as absent, and a value
/// that is not a JSON object at all becomes an empty record (which the normalizer then
/// rejects for its missing id). One bad record can therefore never sink the collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawProduct {
    pub id: Option<RawId>,
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub price: Option<RawScalar>,
    pub old_price: Option<RawScalar>,
    pub stock: Option<RawScalar>,
    pub image: Option<String>,
    pub rating: Option<RawScalar>,
    pub reviews_count: Option<RawScalar>,
    pub sales_count: Option<RawScalar>,
    pub flavor: Option<RawFlavor>,
    pub weight: Option<RawScalar>,
    pub created_at: Option<RawTimestamp>,
}

impl RawProduct {
    /// Starts a raw record carrying only an id; handy for fixtures.
    pub fn with_id(id: RawId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    /// Reads a record out of an arbitrary JSON value, field by field.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };
        let fields = Fields(map);

        Self {
            id: fields.get(&["id"]),
            name: fields.text(&["name"]),
            name_ar: fields.text(&["name_ar", "nameAr"]),
            description: fields.text(&["description"]),
            description_ar: fields.text(&["description_ar", "descriptionAr"]),
            price: fields.get(&["price"]),
            old_price: fields.get(&["old_price", "oldPrice"]),
            stock: fields.get(&["stock"]),
            image: fields.get(&["image"]),
            rating: fields.get(&["rating"]),
            reviews_count: fields.get(&["reviews_count", "reviewsCount"]),
            sales_count: fields.get(&["sales_count", "salesCount"]),
            flavor: fields.flavor(&["flavor"]),
            weight: fields.get(&["weight"]),
            created_at: fields.get(&["created_at", "createdAt"]),
        }
    }
}

impl<'de> Deserialize<'de> for RawProduct {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Lenient accessors over a record's JSON object.
struct Fields<'a>(&'a Map<String, Value>);

impl Fields<'_> {
    /// First non-null value under any of `keys`, if it has the expected shape.
    fn lookup(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| !value.is_null())
    }

    fn get<T: DeserializeOwned>(&self, keys: &[&str]) -> Option<T> {
        self.lookup(keys).and_then(|value| T::deserialize(value).ok())
    }

    /// Strings as-is; numbers rendered as text.
    fn text(&self, keys: &[&str]) -> Option<String> {
        match self.lookup(keys)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Flavor text, or the usable string/number entries of a flavor list.
    fn flavor(&self, keys: &[&str]) -> Option<RawFlavor> {
        match self.lookup(keys)? {
            Value::String(s) => Some(RawFlavor::Text(s.clone())),
            Value::Array(items) => Some(RawFlavor::List(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
            )),
            _ => None,
        }
    }
}

/// Response body of the product listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductsEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub products: Option<Vec<RawProduct>>,
    #[serde(default)]
    pub message: Option<String>,
}
