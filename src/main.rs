//! # storefront
//!
//! Activates one catalog page against a live product API and prints its ranked lists.
//! Exits with a non-zero status if the page ends in the error state.

use clap::{Parser, ValueEnum};
use storefront_catalog::model::Locale;
use storefront_catalog::pages::{PageKind, PageState};
use storefront_catalog::runtime::{
    setup_tracing, ConfigOverrides, Storefront, StorefrontConfig, ENV_API_URL, ENV_FETCH_LIMIT,
    ENV_IMAGE_BASE_URL, ENV_TIMEOUT_SECS,
};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PageArg {
    Home,
    BestSellers,
    NewArrivals,
    Catalog,
}

impl From<PageArg> for PageKind {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Home => PageKind::Home,
            PageArg::BestSellers => PageKind::BestSellers,
            PageArg::NewArrivals => PageKind::NewArrivals,
            PageArg::Catalog => PageKind::Catalog,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LocaleArg {
    En,
    Ar,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::English,
            LocaleArg::Ar => Locale::Arabic,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Fetch and rank storefront products")]
struct Cli {
    /// Page to activate
    #[arg(value_enum)]
    page: PageArg,

    /// Product API root (products are read from `<api-url>/products`)
    #[arg(long, env = ENV_API_URL)]
    api_url: Option<String>,

    /// Base URL prefixed to rooted image paths
    #[arg(long, env = ENV_IMAGE_BASE_URL)]
    image_base_url: Option<String>,

    /// Result-count limit sent with the fetch
    #[arg(long, env = ENV_FETCH_LIMIT)]
    limit: Option<usize>,

    /// Transport timeout in seconds
    #[arg(long, env = ENV_TIMEOUT_SECS)]
    timeout: Option<u64>,

    /// Language for product names
    #[arg(long, value_enum, default_value = "en")]
    locale: LocaleArg,

    /// Print the page state as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Flags already carry their environment fallbacks, so this is the only source of
    /// overrides and the config is validated exactly once.
    fn config(&self) -> Result<StorefrontConfig, String> {
        StorefrontConfig::resolve(ConfigOverrides {
            api_url: self.api_url.clone(),
            image_base_url: self.image_base_url.clone(),
            timeout_secs: self.timeout,
            fetch_limit: self.limit,
        })
        .map_err(|e| e.to_string())
    }
}

fn print_state(state: &PageState, locale: Locale) {
    for list in state.lists() {
        println!("== {} ({})", list.view.label(), list.products.len());
        for (rank, product) in list.products.iter().enumerate() {
            let discount = product
                .discount_percent()
                .map(|d| format!(" -{d}%"))
                .unwrap_or_default();
            println!(
                "{:>2}. [{}] {} | {:.2}{}{} | sold {} | rating {:.1} | {}",
                rank + 1,
                product.id,
                product.display_name(locale),
                product.price,
                discount,
                if product.in_stock() { "" } else { " (out of stock)" },
                product.sales_count,
                product.rating,
                if product.image.is_empty() { "-" } else { product.image.as_str() },
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let cli = Cli::parse();
    let config = cli.config()?;
    let storefront = Storefront::new(config).map_err(|e| e.to_string())?;

    let page = storefront.page(cli.page.into());
    info!(page = ?page.kind(), "Activating page");
    let state = page.activate().await;

    if cli.json {
        let body = serde_json::to_string_pretty(&state).map_err(|e| e.to_string())?;
        println!("{body}");
    } else {
        print_state(&state, cli.locale.into());
    }

    if let Some(message) = state.error_message() {
        error!(%message, "Page ended in error state");
        return Err(message.to_string());
    }
    Ok(())
}
