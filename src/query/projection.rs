//! `$select` projection

use crate::catalog::Record;

/// Ordered list of fields to keep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    fields: Vec<String>,
}

impl Projection {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma-separated field list, trimming each name
    pub fn parse(select: &str) -> Self {
        Self::new(
            select
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty()),
        )
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Copy the requested fields that exist on `record`
    ///
    /// Unknown names are dropped without a placeholder. Requesting a field
    /// twice still yields it once.
    pub fn apply(&self, record: &Record) -> Record {
        let mut projected = Record::new();
        for field in &self.fields {
            if let Some(value) = record.get(field) {
                projected.insert(field.as_str(), value.clone());
            }
        }
        projected
    }
}
