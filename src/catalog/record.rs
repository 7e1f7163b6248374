//! # Catalog Records
//!
//! A record is a flat JSON object keyed by field name. Values are scalars
//! (strings and numbers); nothing in the catalog nests.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Key field of every record
pub const ID_FIELD: &str = "ID";
pub const NAME_FIELD: &str = "Name";
pub const DESCRIPTION_FIELD: &str = "Description";
pub const PRICE_FIELD: &str = "Price";
pub const CATEGORY_FIELD: &str = "Category";

/// A single catalog entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Set a field value, replacing any previous one
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.0.insert(field.into(), value);
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// The record key, if present and integral
    pub fn id(&self) -> Option<i64> {
        self.get(ID_FIELD).and_then(Value::as_i64)
    }

    /// A numeric field as `f64`
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }

    /// A string field
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Field names in map order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Typed view of the product entity used to seed the default catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}

impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
        }
    }
}

impl From<Product> for Record {
    fn from(product: Product) -> Self {
        let mut record = Record::new();
        record.insert(ID_FIELD, json!(product.id));
        record.insert(NAME_FIELD, json!(product.name));
        record.insert(DESCRIPTION_FIELD, json!(product.description));
        record.insert(PRICE_FIELD, json!(product.price));
        record.insert(CATEGORY_FIELD, json!(product.category));
        record
    }
}
