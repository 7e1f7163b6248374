//! # OData HTTP Service
//!
//! Publishes the catalog as an OData v4 entity set.
//!
//! # Endpoints
//!
//! - `/` - Health check
//! - `<root>/` - Service document
//! - `<root>/$metadata` - CSDL metadata (XML)
//! - `<root>/<Set>` - Collection with `$filter`, `$select`, `$top`, `$skip`
//! - `<root>/<Set>/:id` - Single entity by key

pub mod config;
pub mod errors;
pub mod metadata;
pub mod routes;
pub mod server;

pub use config::{ConfigError, ServiceConfig};
pub use errors::{ErrorResponse, ServiceError, ServiceResult};
pub use server::HttpServer;
