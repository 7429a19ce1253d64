//! product-filter: browse a product catalog by title search or company
//!
//! Usage:
//!   product-filter                    - Open the filter window
//!   product-filter list               - Print every product
//!   product-filter search <text>      - Print products matching <text>
//!   product-filter company <tag>      - Print products of one company
//!   product-filter companies          - Print the company tags
//!   product-filter help               - Show help

mod app;
mod catalog;
mod commands;
mod companies;
mod config;
mod error;
mod filter;
mod images;
mod render;
mod ui;

use std::env;
use std::process::ExitCode;

use app::ProductFilter;
use catalog::Catalog;
use commands::{Command, Invocation};
use companies::company_tags;
use config::Config;
use iced::{window, Size};
use render::Listing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let invocation = Invocation::parse(env::args().skip(1));

    match &invocation.command {
        Command::Help => {
            println!("{}", Command::help_text());
            return ExitCode::SUCCESS;
        }
        Command::Invalid { message } => {
            eprintln!("Error: {}", message);
            eprintln!("Run 'product-filter help' for usage");
            return ExitCode::from(2);
        }
        _ => {}
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Could not load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let catalog = match config.load_catalog(invocation.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Could not load catalog: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match invocation.command {
        Command::Gui => match start_gui(catalog, config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("Window error: {}", e);
                ExitCode::FAILURE
            }
        },
        command => {
            print!("{}", run_cli(&command, &catalog));
            ExitCode::SUCCESS
        }
    }
}

/// Text output for the non-GUI commands.
fn run_cli(command: &Command, catalog: &Catalog) -> String {
    let products = catalog.as_slice();

    match command {
        Command::List => Listing::from_products(filter::reset_to_catalog(products)).to_text(),
        Command::Search { query } => {
            Listing::from_products(filter::filter_by_text(products, query)).to_text()
        }
        Command::Company { tag } => {
            Listing::from_products(filter::filter_by_company(products, tag)).to_text()
        }
        Command::Companies => {
            let tags = company_tags(products);
            let width = tags.iter().map(|t| t.as_str().chars().count()).max().unwrap_or(0);
            tags.iter()
                .map(|tag| format!("{:<w$}  {}\n", tag.as_str(), tag.label(), w = width))
                .collect()
        }
        Command::Gui | Command::Help | Command::Invalid { .. } => String::new(),
    }
}

fn start_gui(catalog: Catalog, config: Config) -> iced::Result {
    if catalog.is_empty() {
        tracing::warn!("Catalog is empty, the window will only show the no-results message");
    }
    tracing::info!("Opening filter window with {} products", catalog.len());

    let size = Size::new(config.window.width, config.window.height);

    iced::application(ProductFilter::title, ProductFilter::update, ProductFilter::view)
        .subscription(ProductFilter::subscription)
        .theme(ProductFilter::theme)
        .window(window::Settings {
            size,
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || ProductFilter::boot(catalog, &config))
}
