//! # Storefront CLI
//!
//! One command per storefront page or button:
//!
//! ```bash
//! storefront products --search backpack --sort price-low --max-price 200
//! storefront product 1
//! storefront cart add 1 --quantity 2
//! storefront wishlist toggle 3
//! storefront wishlist move-to-cart 3
//! ```
//!
//! The cart and wishlist are kept under `--data-dir` and survive between runs.

use clap::{Parser, Subcommand};
use std::sync::Arc;
use store_framework::tracing::setup_tracing;
use store_framework::{Change, FileStorage};
use storefront::catalog::HttpCatalog;
use storefront::config::{ConfigArgs, StorefrontConfig};
use storefront::lifecycle::{StorefrontError, StorefrontSystem};
use storefront::model::{FilterCriteria, PriceRange, ProductId, SortMode};
use storefront::view;
use tracing::{info, Instrument};

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the product catalog and manage your cart and wishlist")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Only products whose title or description contains this text
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only this category ("all" for every category)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// newest, price-low, price-high or rating
        #[arg(long, default_value_t = SortMode::Newest)]
        sort: SortMode,

        #[arg(long, default_value_t = PriceRange::DEFAULT_MIN)]
        min_price: f64,

        #[arg(long, default_value_t = PriceRange::DEFAULT_MAX)]
        max_price: f64,
    },

    /// Show one product
    Product { id: u64 },

    /// List the catalog's categories
    Categories,

    /// Show or change the cart
    #[command(subcommand)]
    Cart(CartCommand),

    /// Show or change the wishlist
    #[command(subcommand)]
    Wishlist(WishlistCommand),
}

#[derive(Debug, Subcommand)]
enum CartCommand {
    Show,
    /// Add a product, or more of one already in the cart
    Add {
        id: u64,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a product in the cart
    Update { id: u64, quantity: u32 },
    Remove { id: u64 },
    Clear,
}

#[derive(Debug, Subcommand)]
enum WishlistCommand {
    Show,
    Add { id: u64 },
    Remove { id: u64 },
    /// Add when absent, remove when present
    Toggle { id: u64 },
    Clear,
    /// Put one unit of a saved product into the cart
    MoveToCart { id: u64 },
}

const NOTHING_CHANGED: &str = "Nothing changed.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let cli = Cli::parse();
    let config = StorefrontConfig::from(cli.config);
    info!(catalog = %config.catalog_url, data_dir = %config.data_dir.display(), "Starting storefront");

    let system = StorefrontSystem::start(
        Arc::new(HttpCatalog::new(config.catalog_url)),
        Arc::new(FileStorage::new(config.data_dir)),
    );

    let span = tracing::info_span!("command");
    let output = run(&system, cli.command).instrument(span).await;

    // Stop the stores before reporting, whatever the command did
    system.shutdown().await?;
    println!("{}", output?);
    Ok(())
}

async fn run(system: &StorefrontSystem, command: Commands) -> Result<String, StorefrontError> {
    match command {
        Commands::Products {
            search,
            category,
            sort,
            min_price,
            max_price,
        } => {
            let criteria = FilterCriteria::default()
                .with_search(search)
                .with_category(category.as_str())
                .with_sort(sort)
                .with_price_range(min_price, max_price);
            Ok(view::render_product_grid(&system.browse(&criteria).await))
        }
        Commands::Product { id } => {
            let detail = system.product_detail(ProductId(id)).await?;
            Ok(view::render_product_detail(detail.as_ref()))
        }
        Commands::Categories => Ok(view::render_categories(&system.categories().await)),
        Commands::Cart(command) => run_cart(system, command).await,
        Commands::Wishlist(command) => run_wishlist(system, command).await,
    }
}

async fn run_cart(system: &StorefrontSystem, command: CartCommand) -> Result<String, StorefrontError> {
    let change = match command {
        CartCommand::Show => Change::Applied,
        CartCommand::Add { id, quantity } => {
            let Some(product) = system.catalog.get_product(ProductId(id)).await else {
                return Ok(view::PRODUCT_NOT_FOUND.to_string());
            };
            system.cart.add_to_cart(product, quantity).await?
        }
        CartCommand::Update { id, quantity } => {
            system.cart.update_quantity(ProductId(id), quantity).await?
        }
        CartCommand::Remove { id } => system.cart.remove_from_cart(ProductId(id)).await?,
        CartCommand::Clear => system.cart.clear_cart().await?,
    };

    if !change.is_applied() {
        return Ok(NOTHING_CHANGED.to_string());
    }
    Ok(view::render_cart(&system.cart.items().await?))
}

async fn run_wishlist(
    system: &StorefrontSystem,
    command: WishlistCommand,
) -> Result<String, StorefrontError> {
    let change = match command {
        WishlistCommand::Show => Change::Applied,
        WishlistCommand::Add { id } => {
            let Some(product) = system.catalog.get_product(ProductId(id)).await else {
                return Ok(view::PRODUCT_NOT_FOUND.to_string());
            };
            system.wishlist.add_to_wishlist(product).await?
        }
        WishlistCommand::Remove { id } => {
            system.wishlist.remove_from_wishlist(ProductId(id)).await?
        }
        WishlistCommand::Toggle { id } => {
            let Some(product) = system.catalog.get_product(ProductId(id)).await else {
                return Ok(view::PRODUCT_NOT_FOUND.to_string());
            };
            system.wishlist.toggle_wishlist(product).await?;
            Change::Applied
        }
        WishlistCommand::Clear => system.wishlist.clear_wishlist().await?,
        WishlistCommand::MoveToCart { id } => {
            let change = system.add_wishlist_item_to_cart(ProductId(id)).await?;
            if !change.is_applied() {
                return Ok(NOTHING_CHANGED.to_string());
            }
            return Ok(view::render_cart(&system.cart.items().await?));
        }
    };

    if !change.is_applied() {
        return Ok(NOTHING_CHANGED.to_string());
    }
    Ok(view::render_wishlist(&system.wishlist.items().await?))
}
