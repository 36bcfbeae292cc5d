//! Runtime configuration (flags, falling back to `STOREFRONT_*` variables).

use clap::Args;

use storefront_catalog::SyntheticCatalog;
use storefront_observability::LogFormat;

/// Largest generated catalog accepted.
pub const MAX_CATALOG_SIZE: usize = 1_000_000;

#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Number of generated catalog products
    #[arg(long, global = true, env = "STOREFRONT_CATALOG_SIZE", default_value_t = SyntheticCatalog::default().size)]
    pub catalog_size: usize,

    /// Seed for generated prices, ratings and review counts
    #[arg(long, global = true, env = "STOREFRONT_CATALOG_SEED", default_value_t = SyntheticCatalog::default().seed)]
    pub catalog_seed: u64,

    /// Log output format: json or pretty
    #[arg(long, global = true, env = "STOREFRONT_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog: SyntheticCatalog,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_args(args: &ConfigArgs) -> anyhow::Result<Self> {
        anyhow::ensure!(
            args.catalog_size <= MAX_CATALOG_SIZE,
            "catalog size {} exceeds the maximum of {MAX_CATALOG_SIZE}",
            args.catalog_size
        );

        Ok(Self {
            catalog: SyntheticCatalog {
                size: args.catalog_size,
                seed: args.catalog_seed,
            },
            log_format: args.log_format,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: SyntheticCatalog::default(),
            log_format: LogFormat::default(),
        }
    }
}
