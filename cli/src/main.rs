mod render;

use catalog::{CatalogState, DEFAULT_ENDPOINT, ListingError, Product, ProductId, ProductListing};
use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("endpoint returned HTTP {0}")]
    Status(u16),
    #[error(transparent)]
    Listing(#[from] ListingError),
    #[error("page {page} is out of range (1..={total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },
    #[error("no product with id {0}")]
    UnknownProduct(ProductId),
}

#[derive(Parser, Debug)]
#[command(name = "catalog-cli", about = "Browse the product listing from a terminal")]
struct Cli {
    #[arg(long, env = "CATALOG_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Sent as the `x-api-key` header when present.
    #[arg(long, env = "CATALOG_API_KEY")]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of products, optionally filtered by id substring.
    List {
        #[arg(long, default_value = "")]
        filter: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Print the details of one product.
    Show { id: u32 },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let products = fetch_products(&cli.endpoint, cli.api_key.as_deref()).await?;

    let mut state = CatalogState::default();
    state.load(products);

    match cli.command {
        Command::List { filter, page } => run_list(&mut state, filter, page),
        Command::Show { id } => run_show(&mut state, ProductId(id)),
    }
}

async fn fetch_products(endpoint: &str, api_key: Option<&str>) -> Result<Vec<Product>, CliError> {
    let mut headers = HeaderMap::new();
    if let Some(key) = api_key {
        headers.insert("x-api-key", HeaderValue::from_str(key)?);
    }
    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;

    let response = client.get(endpoint).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    Ok(ProductListing::from_json(&body)?.into_products())
}

fn run_list(state: &mut CatalogState, filter: String, page: usize) -> Result<(), CliError> {
    state.set_filter(filter);
    goto_page(state, page)?;
    println!("{}", render::render_page(&state.view()));
    Ok(())
}

fn run_show(state: &mut CatalogState, id: ProductId) -> Result<(), CliError> {
    if !state.select(id) {
        return Err(CliError::UnknownProduct(id));
    }
    if let Some(product) = state.selected() {
        println!("{}", render::render_detail(product));
    }
    Ok(())
}

/// Move to `page`, rejecting pages the filtered list does not have.
fn goto_page(state: &mut CatalogState, page: usize) -> Result<(), CliError> {
    let total_pages = state.total_pages();
    if page == 0 || page > total_pages {
        return Err(CliError::PageOutOfRange { page, total_pages });
    }
    state.set_page(page);
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
