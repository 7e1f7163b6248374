//! CLI command implementations
//!
//! Both commands resolve configuration the same way: the config file (or
//! defaults when it does not exist), then the catalog named by `data_file`
//! (or the sample catalog).

use std::collections::HashMap;
use std::env;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::catalog::Catalog;
use crate::query::parser::{FILTER_OPTION, SELECT_OPTION, SKIP_OPTION, TOP_OPTION};
use crate::query::{execute, parse_int_prefix, CollectionResponse, EntityResponse, QueryOptions};
use crate::service::{HttpServer, ServiceConfig, ServiceError};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Environment variable overriding the configured port
pub const PORT_ENV: &str = "PORT";

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Query {
            config,
            filter,
            select,
            top,
            skip,
            id,
        } => {
            let params: HashMap<String, String> = [
                (FILTER_OPTION, filter),
                (SELECT_OPTION, select),
                (TOP_OPTION, top),
                (SKIP_OPTION, skip),
            ]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
            .collect();

            query(&config, &params, id.as_deref())
        }
    }
}

/// Start the HTTP service and block until it exits
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = ServiceConfig::load_or_default(config_path)?;

    let env_port = env::var(PORT_ENV).ok();
    if let Some(port) = resolve_port(port, env_port.as_deref())? {
        config.port = port;
    }
    config.validate()?;

    let catalog = load_catalog(&config)?;
    info!(records = catalog.len(), "catalog ready");

    let server = HttpServer::with_config(config, catalog);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Run one query and print the response envelope
pub fn query(
    config_path: &Path,
    params: &HashMap<String, String>,
    id: Option<&str>,
) -> CliResult<()> {
    let config = ServiceConfig::load_or_default(config_path)?;
    let catalog = load_catalog(&config)?;

    let response = run_query(&config, &catalog, params, id)?;
    write_json(&response)
}

/// Evaluate a collection query, or a key lookup when `id` is given
pub fn run_query(
    config: &ServiceConfig,
    catalog: &Catalog,
    params: &HashMap<String, String>,
    id: Option<&str>,
) -> CliResult<Value> {
    let context = config.context_url();

    let response = match id {
        Some(id) => {
            let record = parse_int_prefix(id)
                .and_then(|key| catalog.find_by_id(key))
                .ok_or_else(|| {
                    let err = ServiceError::not_found(config.entity_type.as_str());
                    CliError::not_found(err.to_string())
                })?;
            serde_json::to_value(EntityResponse::new(&context, record.clone()))?
        }
        None => {
            let options = QueryOptions::parse(params);
            let value = execute(catalog.records(), &options);
            serde_json::to_value(CollectionResponse::new(&context, value))?
        }
    };

    Ok(response)
}

/// Catalog from `data_file`, or the sample catalog
fn load_catalog(config: &ServiceConfig) -> CliResult<Catalog> {
    match &config.data_file {
        Some(path) => Ok(Catalog::load(path)?),
        None => Ok(Catalog::sample()),
    }
}

/// Port precedence: `--port`, then `PORT`, then the config file
fn resolve_port(flag: Option<u16>, env_port: Option<&str>) -> CliResult<Option<u16>> {
    if flag.is_some() {
        return Ok(flag);
    }

    match env_port {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            CliError::config_error(format!("Invalid {} value: '{}'", PORT_ENV, raw))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use serde_json::json;
    use std::io::Write;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_port_precedence() {
        assert_eq!(resolve_port(Some(8080), Some("9090")).unwrap(), Some(8080));
        assert_eq!(resolve_port(None, Some(" 9090 ")).unwrap(), Some(9090));
        assert_eq!(resolve_port(None, None).unwrap(), None);

        let err = resolve_port(None, Some("http")).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_run_query_collection() {
        let config = ServiceConfig::default();
        let catalog = Catalog::sample();

        let response = run_query(
            &config,
            &catalog,
            &params(&[("$filter", "Category eq 'Furniture'"), ("$select", "Name")]),
            None,
        )
        .unwrap();

        assert_eq!(
            response,
            json!({
                "@odata.context": "/odata/v4/$metadata#Products",
                "value": [{"Name": "Desk"}]
            })
        );
    }

    #[test]
    fn test_run_query_by_id() {
        let config = ServiceConfig::default();
        let catalog = Catalog::sample();

        let response = run_query(&config, &catalog, &HashMap::new(), Some("2")).unwrap();
        assert_eq!(response["@odata.context"], "/odata/v4/$metadata#Products/$entity");
        assert_eq!(response["Name"], "Mouse");

        let err = run_query(&config, &catalog, &HashMap::new(), Some("abc")).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::NotFound);
        assert_eq!(err.message(), "Product not found");
    }

    #[test]
    fn test_load_catalog_from_data_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"ID": 42, "Name": "Bookshelf", "Category": "Furniture"}}]"#).unwrap();

        let config = ServiceConfig {
            data_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let catalog = load_catalog(&config).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find_by_id(42).is_some());
    }

    #[test]
    fn test_load_catalog_rejects_bad_data_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"ID": 1}}, {{"ID": 1}}]"#).unwrap();

        let config = ServiceConfig {
            data_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let err = load_catalog(&config).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::CatalogError);
    }
}
