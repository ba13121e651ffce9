use anyhow::{Context, Result, anyhow, bail};
use basket::BasketStore;
use catalogue::{Catalogue, ItemSource, JsonFileSource, ProductId};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pipeline::{PAGE_SIZE_OPTIONS, PriceRange, Query, SortDirection};
use session::{JsonFileStorage, Session, TokenPair};
use std::path::{Path, PathBuf};
use std::time::Instant;

mod output;

/// Product Catalogue - browse, filter and collect products from the terminal
#[derive(Parser)]
#[command(name = "catalogue")]
#[command(about = "Browse a product catalogue and keep a shopping basket", long_about = None)]
struct Cli {
    /// Path to the catalogue JSON file (`{"products": [...]}` or a bare array)
    #[arg(short, long, default_value = "data/products.json")]
    catalogue: PathBuf,

    /// Path to the session state file (tokens, guest flag, basket)
    #[arg(short, long, default_value = ".catalogue/state.json")]
    state: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the token pair returned by the login endpoint
    Login {
        #[arg(long)]
        token: String,

        #[arg(long)]
        refresh_token: String,
    },

    /// Continue without credentials
    Guest,

    /// Forget tokens and guest mode
    Logout,

    /// List one page of products
    List(ListArgs),

    /// Show the full details of a product
    Show {
        #[arg(long)]
        id: ProductId,
    },

    /// Show the filter choices: categories, price presets, page sizes
    Options,

    /// Manage the shopping basket
    #[command(subcommand)]
    Basket(BasketCommands),
}

#[derive(Args)]
struct ListArgs {
    /// Only products in this category (case-insensitive)
    #[arg(long)]
    category: Option<String>,

    /// Price preset such as `10-50` or `100-`
    #[arg(long, value_parser = parse_price_range)]
    price: Option<PriceRange>,

    /// Only products whose title contains this text (case-insensitive)
    #[arg(long)]
    title: Option<String>,

    /// Sort by price
    #[arg(long, value_enum, conflicts_with = "sort_title")]
    sort_price: Option<SortArg>,

    /// Sort by title
    #[arg(long, value_enum)]
    sort_title: Option<SortArg>,

    /// Page number, starting at 1
    #[arg(long, default_value = "1")]
    page: usize,

    /// Products per page (10, 20, 50 or 100)
    #[arg(long, default_value = "20", value_parser = parse_page_size)]
    page_size: usize,

    /// Print the page as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum BasketCommands {
    /// Put a product in the basket
    Add {
        #[arg(long)]
        id: ProductId,
    },

    /// Take a product out of the basket
    Remove {
        #[arg(long)]
        id: ProductId,
    },

    /// Show the basket contents
    List,

    /// Empty the basket
    Clear,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortDirection {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortDirection::Ascending,
            SortArg::Desc => SortDirection::Descending,
        }
    }
}

fn parse_price_range(s: &str) -> Result<PriceRange, String> {
    Ok(PriceRange::parse_lenient(s))
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{e}"))?;
    if PAGE_SIZE_OPTIONS.contains(&size) {
        Ok(size)
    } else {
        Err(format!("page size must be one of {:?}", PAGE_SIZE_OPTIONS))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut storage = JsonFileStorage::open(&cli.state)
        .with_context(|| format!("Failed to open session state {}", cli.state.display()))?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Login {
            token,
            refresh_token,
        } => {
            Session::new(&mut storage)
                .login(&TokenPair::new(token, refresh_token))
                .context("Failed to store tokens")?;
            output::print_status("Logged in as User");
        }
        Commands::Guest => {
            Session::new(&mut storage)
                .continue_as_guest()
                .context("Failed to store guest flag")?;
            output::print_status("Logged in as Guest");
        }
        Commands::Logout => {
            Session::new(&mut storage)
                .logout()
                .context("Failed to clear session")?;
            output::print_status("Logged out");
        }
        Commands::List(args) => handle_list(&cli.catalogue, &mut storage, args).await?,
        Commands::Show { id } => handle_show(&cli.catalogue, &mut storage, id).await?,
        Commands::Options => handle_options(&cli.catalogue).await?,
        Commands::Basket(command) => handle_basket(&cli.catalogue, &mut storage, command).await?,
    }

    Ok(())
}

/// Refuse to show the catalogue to a signed-out user
fn require_session(storage: &mut JsonFileStorage) -> Result<bool> {
    let session = Session::new(storage);
    if !session.is_authenticated() {
        bail!("Not signed in. Run `catalogue login` or `catalogue guest` first.");
    }
    Ok(session.is_guest())
}

/// Fetch the catalogue once for this invocation
async fn fetch_catalogue(path: &Path) -> Result<Catalogue> {
    let start = Instant::now();
    let products = match JsonFileSource::new(path).fetch_items().await {
        Ok(products) => products,
        Err(e) => {
            output::print_error("Failed to fetch products");
            return Err(e).context("Failed to fetch products");
        }
    };
    tracing::debug!("Fetched {} products in {:?}", products.len(), start.elapsed());

    Catalogue::from_products(products).context("Catalogue failed validation")
}

/// Handle the 'list' command
async fn handle_list(
    catalogue_path: &Path,
    storage: &mut JsonFileStorage,
    args: ListArgs,
) -> Result<()> {
    let is_guest = require_session(storage)?;
    let catalogue = fetch_catalogue(catalogue_path).await?;

    let mut query = Query::new()
        .with_category(args.category.as_deref())
        .with_price_range(args.price)
        .with_title(args.title.as_deref())
        .with_page_size(args.page_size);
    if let Some(direction) = args.sort_price {
        query = query.with_price_sort(direction.into());
    }
    if let Some(direction) = args.sort_title {
        query = query.with_title_sort(direction.into());
    }
    let query = query.with_page(args.page);

    let page = pipeline::apply(catalogue.products(), &query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    let store = BasketStore::load(storage);
    output::print_page(&page, store.basket(), is_guest);
    Ok(())
}

/// Handle the 'show' command
async fn handle_show(
    catalogue_path: &Path,
    storage: &mut JsonFileStorage,
    id: ProductId,
) -> Result<()> {
    require_session(storage)?;
    let catalogue = fetch_catalogue(catalogue_path).await?;

    let product = catalogue
        .get(id)
        .ok_or_else(|| anyhow!("Product {} not found", id))?;

    let in_basket = BasketStore::load(storage).contains(product);
    output::print_details(product, in_basket);
    Ok(())
}

/// Handle the 'options' command
async fn handle_options(catalogue_path: &Path) -> Result<()> {
    // The stock choices are always available; loaded categories are a bonus
    let loaded = match fetch_catalogue(catalogue_path).await {
        Ok(catalogue) => catalogue.categories(),
        Err(e) => {
            tracing::warn!("Showing default options only: {:#}", e);
            Vec::new()
        }
    };
    output::print_options(&loaded);
    Ok(())
}

/// Handle the 'basket' commands
async fn handle_basket(
    catalogue_path: &Path,
    storage: &mut JsonFileStorage,
    command: BasketCommands,
) -> Result<()> {
    require_session(storage)?;
    let mut store = BasketStore::load(storage);

    match command {
        BasketCommands::Add { id } => {
            let catalogue = fetch_catalogue(catalogue_path).await?;
            let product = catalogue
                .get(id)
                .ok_or_else(|| anyhow!("Product {} not found", id))?;
            if store.add(product).context("Failed to save basket")? {
                output::print_status(&format!("Added {} to basket", product.title));
            } else {
                output::print_status(&format!("{} is already in the basket", product.title));
            }
        }
        BasketCommands::Remove { id } => {
            let entry = store
                .basket()
                .iter()
                .find(|entry| entry.id == id)
                .cloned()
                .ok_or_else(|| anyhow!("Product {} is not in the basket", id))?;
            store.remove(&entry).context("Failed to save basket")?;
            output::print_status(&format!("Removed {} from basket", entry.title));
        }
        BasketCommands::List => output::print_basket(store.basket()),
        BasketCommands::Clear => {
            store.clear().context("Failed to save basket")?;
            output::print_status("Basket emptied");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_args_parse() {
        let cli = Cli::try_parse_from([
            "catalogue",
            "list",
            "--category",
            "beauty",
            "--price",
            "10-50",
            "--sort-price",
            "desc",
            "--page-size",
            "50",
        ])
        .unwrap();

        let Commands::List(args) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.category.as_deref(), Some("beauty"));
        assert_eq!(args.price, Some(PriceRange::new(10.0, Some(50.0))));
        assert_eq!(args.page_size, 50);
        assert!(matches!(args.sort_price, Some(SortArg::Desc)));
    }

    #[test]
    fn test_both_sorts_are_rejected() {
        let result = Cli::try_parse_from([
            "catalogue",
            "list",
            "--sort-price",
            "asc",
            "--sort-title",
            "asc",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_size_must_be_offered() {
        assert!(parse_page_size("20").is_ok());
        assert!(parse_page_size("25").is_err());
        assert!(parse_page_size("many").is_err());
    }

    #[test]
    fn test_unparsable_price_is_accepted_and_matches_nothing() {
        let range = parse_price_range("cheap").unwrap();
        assert!(!range.contains(5.0));
    }
}
