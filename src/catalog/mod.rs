//! # Product Catalog
//!
//! The record collection served by the OData endpoints. A catalog is built
//! once at startup, either from the built-in sample set or from a JSON file,
//! and is never mutated afterwards. Handlers share it read-only.

mod errors;
mod record;

pub use errors::{CatalogError, CatalogResult};
pub use record::{
    Product, Record, CATEGORY_FIELD, DESCRIPTION_FIELD, ID_FIELD, NAME_FIELD, PRICE_FIELD,
};

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

/// The five products served when no data file is configured
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", "High performance laptop", 1299.99, "Electronics"),
        Product::new(2, "Mouse", "Wireless mouse", 29.99, "Electronics"),
        Product::new(3, "Keyboard", "Mechanical keyboard", 89.99, "Electronics"),
        Product::new(4, "Monitor", "27 inch 4K monitor", 399.99, "Electronics"),
        Product::new(5, "Desk", "Standing desk", 499.99, "Furniture"),
    ]
}

/// Immutable, ordered record collection
///
/// Every record carries a unique integer `ID`.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Catalog holding [`sample_products`]
    pub fn sample() -> Self {
        Self {
            records: sample_products().into_iter().map(Record::from).collect(),
        }
    }

    /// Build a catalog, checking that every record has a unique integer `ID`
    pub fn from_records(records: Vec<Record>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let id = record.id().ok_or(CatalogError::MissingId { index })?;
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId(id));
            }
        }

        Ok(Self { records })
    }

    /// Load a catalog from a JSON file holding an array of objects
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&content)?;
        info!(path = %path.display(), records = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Parse a catalog from JSON text
    pub fn parse(content: &str) -> CatalogResult<Self> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Array(entries) = value else {
            return Err(CatalogError::NotAnArray);
        };

        let records = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Object(map) => Ok(Record::from(map)),
                _ => Err(CatalogError::NotAnObject { index }),
            })
            .collect::<CatalogResult<Vec<_>>>()?;

        Self::from_records(records)
    }

    /// All records in source order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Point lookup by key
    ///
    /// Linear scan of the full collection; no query options apply.
    pub fn find_by_id(&self, id: i64) -> Option<&Record> {
        let found = self.records.iter().find(|r| r.id() == Some(id));
        debug!(id, found = found.is_some(), "point lookup");
        found
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 5);

        let ids: Vec<_> = catalog.records().iter().filter_map(Record::id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::sample();

        let keyboard = catalog.find_by_id(3).unwrap();
        assert_eq!(keyboard.text(NAME_FIELD), Some("Keyboard"));
        assert!(catalog.find_by_id(99).is_none());
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::parse(
            r#"[{"ID": 10, "Name": "Chair", "Price": 120.0}, {"ID": 11, "Name": "Lamp"}]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_by_id(11).unwrap().text(NAME_FIELD), Some("Lamp"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::parse(r#"[{"ID": 1}, {"ID": 2}, {"ID": 1}]"#);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_missing_id_rejected() {
        let result = Catalog::parse(r#"[{"ID": 1}, {"Name": "No key"}]"#);
        assert!(matches!(result, Err(CatalogError::MissingId { index: 1 })));

        let result = Catalog::parse(r#"[{"ID": "1"}]"#);
        assert!(matches!(result, Err(CatalogError::MissingId { index: 0 })));
    }

    #[test]
    fn test_non_array_rejected() {
        let result = Catalog::parse(r#"{"ID": 1}"#);
        assert!(matches!(result, Err(CatalogError::NotAnArray)));

        let result = Catalog::parse(r#"[{"ID": 1}, 42]"#);
        assert!(matches!(result, Err(CatalogError::NotAnObject { index: 1 })));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(Catalog::parse("[{"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let data = json!([
            {"ID": 1, "Name": "Sofa", "Category": "Furniture", "Price": 899.0}
        ]);
        write!(file, "{}", data).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].number(PRICE_FIELD), Some(899.0));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
