//! # Query Engine
//!
//! Single pass over a borrowed record slice: filter, then project, then
//! window. The engine holds no state and never fails.

use tracing::debug;

use crate::catalog::Record;

use super::filter::FilterExpr;
use super::parser::QueryOptions;
use super::projection::Projection;

/// Evaluate `options` against `records`
///
/// Source order is preserved throughout.
pub fn execute(records: &[Record], options: &QueryOptions) -> Vec<Record> {
    let filtered = apply_filter(records, options.filter.as_ref());
    let matched = filtered.len();

    let projected = apply_projection(filtered, options.select.as_ref());
    let result = options.window.apply(projected);

    debug!(
        scanned = records.len(),
        matched,
        returned = result.len(),
        clauses = options.filter.as_ref().map_or(0, |f| f.clauses().len()),
        "query executed"
    );

    result
}

fn apply_filter(records: &[Record], filter: Option<&FilterExpr>) -> Vec<Record> {
    match filter {
        None => records.to_vec(),
        Some(filter) => records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect(),
    }
}

fn apply_projection(records: Vec<Record>, select: Option<&Projection>) -> Vec<Record> {
    match select {
        None => records,
        Some(projection) => records.iter().map(|r| projection.apply(r)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, NAME_FIELD};

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().filter_map(|r| r.text(NAME_FIELD)).collect()
    }

    #[test]
    fn test_no_options_returns_everything() {
        let catalog = Catalog::sample();
        let result = execute(catalog.records(), &QueryOptions::default());
        assert_eq!(result, catalog.records());
    }

    #[test]
    fn test_filter_price() {
        let catalog = Catalog::sample();
        let options = QueryOptions::default().with_filter("Price gt 100");

        let result = execute(catalog.records(), &options);
        assert_eq!(names(&result), vec!["Laptop", "Monitor", "Desk"]);
    }

    #[test]
    fn test_filter_both_clauses() {
        let catalog = Catalog::sample();
        let options = QueryOptions::default()
            .with_filter("Price gt 100 and Category eq 'Electronics'");

        let result = execute(catalog.records(), &options);
        assert_eq!(names(&result), vec!["Laptop", "Monitor"]);
    }

    #[test]
    fn test_pagination_after_projection() {
        let catalog = Catalog::sample();
        let options = QueryOptions::default()
            .with_select("Name")
            .with_top(4)
            .with_skip(2);

        let result = execute(catalog.records(), &options);
        assert_eq!(names(&result), vec!["Keyboard", "Monitor"]);
        assert!(result.iter().all(|r| r.len() == 1));
    }
}
