use anyhow::{Context, Result};
use clap::Parser;
use property_finder::catalog::{CatalogSource, JsonFileCatalog, MockCatalog};
use property_finder::models::{ListingKind, PropertyCategory};
use property_finder::query::{
    execute, parse_filter, Favorites, PricePreset, QuerySpec, SearchProfile, SortKey,
};
use property_finder::report::{render_page, QuerySnapshot};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "property-finder")]
#[command(about = "Search, sort and page through the brokerage's property listings")]
#[command(version)]
struct Args {
    /// JSON catalog file (defaults to the built-in demo listings)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Simulated latency for the demo catalog, in milliseconds
    #[arg(long, default_value_t = 0)]
    latency_ms: u64,

    /// Page whose defaults to start from: listings or search
    #[arg(long, default_value = "listings")]
    profile: SearchProfile,

    /// Text to look for in title, location and description
    #[arg(short, long)]
    search: Option<String>,

    /// for-sale, for-rent or any
    #[arg(long)]
    kind: Option<String>,

    /// house, apartment, condo, villa, commercial or any
    #[arg(long)]
    category: Option<String>,

    #[arg(long)]
    city: Option<String>,

    /// Named price range, e.g. under-500k or rent-2k-5k
    #[arg(long, conflicts_with_all = ["min_price", "max_price"])]
    price_preset: Option<String>,

    #[arg(long)]
    min_price: Option<u64>,

    #[arg(long)]
    max_price: Option<u64>,

    #[arg(long)]
    min_beds: Option<u32>,

    #[arg(long)]
    min_baths: Option<f32>,

    /// Minimum floor area in square feet
    #[arg(long)]
    min_area: Option<u32>,

    /// featured, price-asc, price-desc, newest, oldest, area-asc or area-desc
    #[arg(long)]
    sort: Option<SortKey>,

    #[arg(short, long, default_value_t = 1)]
    page: usize,

    #[arg(long)]
    page_size: Option<usize>,

    /// Mark a listing id as a favorite (repeatable)
    #[arg(long = "favorite")]
    favorites: Vec<String>,

    /// Write the query and result page as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn build_spec(args: &Args) -> Result<QuerySpec> {
    let mut spec = QuerySpec::for_profile(args.profile);

    if let Some(size) = args.page_size {
        spec = spec.with_page_size(size)?;
    }
    if let Some(text) = &args.search {
        spec = spec.with_search_text(text.as_str());
    }
    if let Some(kind) = &args.kind {
        spec = spec.with_listing_kind(parse_filter::<ListingKind>(kind)?);
    }
    if let Some(category) = &args.category {
        spec = spec.with_category(parse_filter::<PropertyCategory>(category)?);
    }
    if args.city.is_some() {
        spec = spec.with_city(args.city.clone());
    }

    if let Some(slug) = &args.price_preset {
        spec = spec.with_price_preset(PricePreset::from_slug(slug)?);
    } else if args.min_price.is_some() || args.max_price.is_some() {
        spec = spec.with_price_range(args.min_price.unwrap_or(0), args.max_price);
    }

    if let Some(beds) = args.min_beds {
        spec = spec.with_min_bedrooms(beds);
    }
    if let Some(baths) = args.min_baths {
        spec = spec.with_min_bathrooms(baths);
    }
    if let Some(area) = args.min_area {
        spec = spec.with_min_area(area);
    }
    if let Some(sort) = args.sort {
        spec = spec.with_sort(sort);
    }

    // Page last: every other change sends the spec back to page 1
    Ok(spec.with_page(args.page))
}

/// Repeating an id on the command line keeps it marked
fn collect_favorites(ids: &[String]) -> Favorites {
    let mut favorites = Favorites::new();
    for id in ids {
        if !favorites.contains(id) {
            favorites.toggle(id);
        }
    }
    favorites
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG wins over the default level
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let spec = build_spec(&args).context("Invalid query")?;

    let source: Box<dyn CatalogSource> = match &args.catalog {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None if args.latency_ms > 0 => {
            let latency = Duration::from_millis(args.latency_ms);
            Box::new(MockCatalog::with_latency(latency))
        }
        None => Box::new(MockCatalog::new()),
    };

    info!("Loading catalog from {} source", source.source_name());
    let catalog = source.load().await?;

    let result = execute(&catalog, &spec);

    let favorites = collect_favorites(&args.favorites);

    print!("{}", render_page(&result, spec.page_size().get(), &favorites));

    if let Some(path) = &args.output {
        let snapshot = QuerySnapshot::new(source.source_name(), &spec, &result);
        let json = serde_json::to_string_pretty(&snapshot)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved result page to {}", path.display());
    }

    Ok(())
}
