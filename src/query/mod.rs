//! # OData Query Processing
//!
//! Implements the `$filter`, `$select`, `$top` and `$skip` system query
//! options over an in-memory record slice, plus the JSON envelopes the
//! results are returned in.
//!
//! Processing order is fixed: filter, project, then window (`$top` before
//! `$skip`, see [`Window`]).

pub mod engine;
pub mod filter;
pub mod pagination;
pub mod parser;
pub mod projection;
pub mod response;

pub use engine::execute;
pub use filter::{FilterClause, FilterExpr};
pub use pagination::Window;
pub use parser::{parse_int_prefix, QueryOptions};
pub use projection::Projection;
pub use response::{CollectionResponse, ContextUrl, EntityResponse, CONTEXT_KEY};
