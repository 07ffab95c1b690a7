use std::env;
use std::path::PathBuf;

use crate::error::CatalogError;
use crate::services::catalog_service::Catalog;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| PORT.to_string())
            .parse()
            .unwrap_or_else(|_| {
                log::warn!("PORT is not a valid port number, using {}", PORT);
                PORT
            });
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let catalog_path = env::var("CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            environment,
            catalog_path,
        }
    }

    /// The configured catalog file, or the built-in tables when none is set.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => {
                log::info!("Loading catalog from {}", path.display());
                Catalog::from_path(path)
            }
            None => {
                log::info!("Using built-in catalog");
                Ok(Catalog::builtin())
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            environment: "development".to_string(),
            catalog_path: None,
        }
    }
}
