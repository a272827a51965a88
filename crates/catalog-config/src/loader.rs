//! Configuration loader with layered sources.

use crate::AppConfig;
use catalog_core::CatalogError;
use config::{Config, ConfigError, Environment, File, Map};
use std::path::Path;
use tracing::{debug, info};

/// Directory searched by [`load_default`].
pub const DEFAULT_CONFIG_DIR: &str = "./config";

/// Loads configuration from `./config`.
pub fn load_default() -> Result<AppConfig, CatalogError> {
    load(DEFAULT_CONFIG_DIR)
}

/// Loads configuration from the specified directory.
///
/// Sources are layered in order:
/// 1. `default.toml` - Default values
/// 2. `{environment}.toml` - Environment-specific overrides
/// 3. `local.toml` - Local overrides
/// 4. Environment variables shaped `CATALOG_<SECTION>__<KEY>`
pub fn load(config_dir: impl AsRef<Path>) -> Result<AppConfig, CatalogError> {
    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file found or error loading it: {}", e);
    }
    load_with_env(config_dir.as_ref(), None)
}

/// `env` replaces the process environment as the variable source when set.
fn load_with_env(
    config_dir: &Path,
    env: Option<Map<String, String>>,
) -> Result<AppConfig, CatalogError> {
    let environment =
        std::env::var("CATALOG_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    info!("Loading configuration for environment: {}", environment);

    let mut builder = Config::builder();

    for name in ["default", environment.as_str(), "local"] {
        let path = config_dir.join(format!("{}.toml", name));
        if path.exists() {
            debug!("Loading config from: {}", path.display());
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("CATALOG")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env),
    );

    let config = builder.build().map_err(config_error_to_catalog_error)?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(config_error_to_catalog_error)?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validates the configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), CatalogError> {
    let store = &config.document_store;

    url::Url::parse(&store.url).map_err(|e| {
        CatalogError::Configuration(format!("Invalid document store URL '{}': {}", store.url, e))
    })?;

    if store.default_index.trim().is_empty() {
        return Err(CatalogError::Configuration(
            "Document store default index is required".to_string(),
        ));
    }

    if config.redis.enabled && (config.redis.host.is_empty() || config.redis.port == 0) {
        return Err(CatalogError::Configuration(
            "Redis host and port are required when Redis is enabled".to_string(),
        ));
    }

    let telemetry = &config.observability.telemetry;

    if !(0.0..=1.0).contains(&telemetry.sampling_ratio) {
        return Err(CatalogError::Configuration(format!(
            "Telemetry sampling ratio must be between 0.0 and 1.0, got {}",
            telemetry.sampling_ratio
        )));
    }

    if let Some(endpoint) = &telemetry.otlp_endpoint {
        url::Url::parse(endpoint).map_err(|e| {
            CatalogError::Configuration(format!("Invalid OTLP endpoint '{}': {}", endpoint, e))
        })?;
    }

    Ok(())
}

fn config_error_to_catalog_error(err: ConfigError) -> CatalogError {
    CatalogError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ConflictPolicy;
    use std::fs;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_server_address() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_document_store_url_rejected() {
        let mut config = AppConfig::default();
        config.document_store.url = "not a url".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(CatalogError::Configuration(_))
        ));
    }

    #[test]
    fn test_blank_index_rejected() {
        let mut config = AppConfig::default();
        config.document_store.default_index = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_redis_port_ignored_when_disabled() {
        let mut config = AppConfig::default();
        config.redis.port = 0;
        assert!(validate_config(&config).is_err());
        config.redis.enabled = false;
        assert!(validate_config(&config).is_ok());
    }

    fn write_default(dir: &Path, contents: &str) {
        fs::write(dir.join("default.toml"), contents).unwrap();
    }

    fn env(vars: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_telemetry_settings_validated() {
        let mut config = AppConfig::default();
        config.observability.telemetry.sampling_ratio = 1.5;
        assert!(validate_config(&config).is_err());

        config.observability.telemetry.sampling_ratio = 0.25;
        config.observability.telemetry.otlp_endpoint = Some("otel collector".to_string());
        assert!(validate_config(&config).is_err());

        config.observability.telemetry.otlp_endpoint = Some("http://collector:4317".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_loads_telemetry_section() {
        let dir = tempfile::tempdir().unwrap();
        write_default(
            dir.path(),
            r#"
[observability.telemetry]
enabled = true
otlp_endpoint = "http://otel-collector:4317"
sampling_ratio = 0.5
"#,
        );

        let config = load_with_env(dir.path(), env(&[])).unwrap();
        let telemetry = &config.observability.telemetry;

        assert!(telemetry.enabled);
        assert_eq!(telemetry.otlp_endpoint.as_deref(), Some("http://otel-collector:4317"));
        assert_eq!(telemetry.service_name, "catalog");
        assert!((telemetry.sampling_ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_loads_default_toml() {
        let dir = tempfile::tempdir().unwrap();
        write_default(
            dir.path(),
            r#"
[document_store]
url = "http://search:9200"
default_index = "catalog-products"
update_conflicts = "abort"

[redis]
host = "cache"
port = 6390
"#,
        );

        let config = load_with_env(dir.path(), env(&[])).unwrap();

        assert_eq!(config.document_store.url, "http://search:9200");
        assert_eq!(config.document_store.default_index, "catalog-products");
        assert_eq!(config.document_store.update_conflicts, ConflictPolicy::Abort);
        assert_eq!(config.redis.url(), "redis://cache:6390");
    }

    #[test]
    fn test_section_env_vars_override_file() {
        let dir = tempfile::tempdir().unwrap();
        write_default(dir.path(), "[redis]\nhost = \"localhost\"\n\n[server]\nport = 9000\n");

        let config = load_with_env(
            dir.path(),
            env(&[
                ("CATALOG_REDIS__HOST", "redis-primary"),
                ("CATALOG_SERVER__PORT", "9100"),
                ("CATALOG_DOCUMENT_STORE__DEFAULT_INDEX", "products-v2"),
            ]),
        )
        .unwrap();

        assert_eq!(config.redis.host, "redis-primary");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.document_store.default_index, "products-v2");
    }

    #[test]
    fn test_unprefixed_env_vars_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_default(dir.path(), "[redis]\nhost = \"localhost\"\n");

        let config =
            load_with_env(dir.path(), env(&[("REDIS__HOST", "elsewhere")])).unwrap();

        assert_eq!(config.redis.host, "localhost");
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_with_env(
            dir.path(),
            env(&[("CATALOG_DOCUMENT_STORE__URL", "not a url")]),
        );

        assert!(matches!(result, Err(CatalogError::Configuration(_))));
    }
}
