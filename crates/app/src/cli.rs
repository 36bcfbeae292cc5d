use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use storefront_catalog::{Brand, Category};
use storefront_core::Money;
use storefront_listing::{SortKey, ViewMode};

use crate::config::ConfigArgs;

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront listing, cart and checkout logic", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render one product listing page
    List(ListArgs),

    /// Show the category and brand filter options
    Facets,

    /// Show the sample product detail page, optionally adding it to the cart
    Detail(DetailArgs),

    /// Show the sample cart with its order summary
    Cart,

    /// Place an order for the sample cart from a checkout form (JSON file)
    Checkout {
        /// Path to the checkout form JSON
        form: PathBuf,

        /// Date used for card expiry checks (default: today, UTC)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct DetailArgs {
    /// Colour id to select (default: first available)
    #[arg(long)]
    pub color: Option<String>,

    /// Variant id to select (default: first available)
    #[arg(long)]
    pub variant: Option<String>,

    /// Image id the gallery opens on
    #[arg(long)]
    pub image: Option<String>,

    /// Add this many to the sample cart and show the cart instead
    #[arg(long)]
    pub add: Option<u32>,
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Category to include (repeatable; none = all)
    #[arg(long = "category")]
    pub categories: Vec<Category>,

    /// Brand to include (repeatable; none = all)
    #[arg(long = "brand")]
    pub brands: Vec<Brand>,

    /// Lowest price, e.g. 40 or 39.99
    #[arg(long, default_value = "0")]
    pub min: Money,

    /// Highest price
    #[arg(long, default_value = "250")]
    pub max: Money,

    /// relevant, price-asc, price-desc, name-asc or rating-desc
    #[arg(long, default_value = "relevant")]
    pub sort: SortKey,

    /// Page to show (clamped to the available pages)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// grid or list
    #[arg(long, default_value = "grid")]
    pub view: ViewMode,
}
