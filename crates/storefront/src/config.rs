//! Runtime configuration.
//!
//! Every setting comes from a command line flag, falls back to an environment
//! variable, then to a built-in default:
//!
//! | Setting | Flag | Environment | Default |
//! |---------|------|-------------|---------|
//! | Catalog base URL | `--catalog-url` | `STOREFRONT_CATALOG_URL` | `https://fakestoreapi.com` |
//! | Data directory | `--data-dir` | `STOREFRONT_DATA_DIR` | platform data dir + `storefront` |

use clap::Args;
use std::path::PathBuf;

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com";

/// Used when the platform reports no data directory.
pub const FALLBACK_DATA_DIR: &str = ".storefront";

#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Base URL of the product catalog API
    #[arg(
        long,
        global = true,
        env = "STOREFRONT_CATALOG_URL",
        default_value = DEFAULT_CATALOG_URL
    )]
    pub catalog_url: String,

    /// Directory the cart and wishlist are stored in
    #[arg(long, global = true, env = "STOREFRONT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub catalog_url: String,
    pub data_dir: PathBuf,
}

impl StorefrontConfig {
    pub fn new(catalog_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            data_dir: data_dir.into(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL, default_data_dir())
    }
}

impl From<ConfigArgs> for StorefrontConfig {
    fn from(args: ConfigArgs) -> Self {
        Self {
            catalog_url: args.catalog_url,
            data_dir: args.data_dir.unwrap_or_else(default_data_dir),
        }
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("storefront"))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}
