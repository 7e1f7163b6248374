//! odata-catalog - An in-memory product catalog served over a subset of OData v4
//!
//! The catalog is loaded once and shared read-only. Collection requests run
//! through the query engine (`$filter`, `$select`, `$top`, `$skip`) and are
//! returned in OData JSON envelopes.

pub mod catalog;
pub mod cli;
pub mod observability;
pub mod query;
pub mod service;
