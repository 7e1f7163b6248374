//! # Response Envelopes
//!
//! OData JSON payload shapes. Every response carries an `@odata.context`
//! URL pointing into the service's `$metadata` document.

use serde::Serialize;

use crate::catalog::Record;

/// Annotation key for the context URL
pub const CONTEXT_KEY: &str = "@odata.context";

/// Builds context URLs for one entity set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextUrl {
    service_root: String,
    entity_set: String,
}

impl ContextUrl {
    pub fn new(service_root: impl Into<String>, entity_set: impl Into<String>) -> Self {
        Self {
            service_root: service_root.into(),
            entity_set: entity_set.into(),
        }
    }

    /// `<root>/$metadata#<Set>`
    pub fn collection(&self) -> String {
        format!("{}/$metadata#{}", self.service_root, self.entity_set)
    }

    /// `<root>/$metadata#<Set>/$entity`
    pub fn entity(&self) -> String {
        format!("{}/$entity", self.collection())
    }
}

/// Collection response
#[derive(Debug, Clone, Serialize)]
pub struct CollectionResponse {
    #[serde(rename = "@odata.context")]
    pub context: String,
    pub value: Vec<Record>,
}

impl CollectionResponse {
    pub fn new(context: &ContextUrl, value: Vec<Record>) -> Self {
        Self {
            context: context.collection(),
            value,
        }
    }
}

/// Single entity response; record fields sit beside the context annotation
#[derive(Debug, Clone, Serialize)]
pub struct EntityResponse {
    #[serde(rename = "@odata.context")]
    pub context: String,
    #[serde(flatten)]
    pub record: Record,
}

impl EntityResponse {
    pub fn new(context: &ContextUrl, record: Record) -> Self {
        Self {
            context: context.entity(),
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use serde_json::json;

    fn context() -> ContextUrl {
        ContextUrl::new("/odata/v4", "Products")
    }

    #[test]
    fn test_context_urls() {
        assert_eq!(context().collection(), "/odata/v4/$metadata#Products");
        assert_eq!(context().entity(), "/odata/v4/$metadata#Products/$entity");
    }

    #[test]
    fn test_collection_response_serialization() {
        let response = CollectionResponse::new(&context(), Vec::new());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            json!({"@odata.context": "/odata/v4/$metadata#Products", "value": []})
        );
    }

    #[test]
    fn test_entity_response_merges_fields() {
        let catalog = Catalog::sample();
        let record = catalog.find_by_id(3).unwrap().clone();
        let response = EntityResponse::new(&context(), record);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json[CONTEXT_KEY], "/odata/v4/$metadata#Products/$entity");
        assert_eq!(json["ID"], 3);
        assert_eq!(json["Name"], "Keyboard");
        assert_eq!(json["Price"], 89.99);
        assert!(json.get("record").is_none());
    }
}
