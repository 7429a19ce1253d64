//! Command-line parsing
//!
//! Parses `product-filter [--catalog <path>] [command] [args...]`.

use std::path::PathBuf;

use crate::companies::CompanyTag;

/// Parsed command from the process arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the window (default)
    Gui,
    /// Print the whole catalog: list
    List,
    /// Print products whose title contains the text: search <text...>
    Search { query: String },
    /// Print products of one company: company <tag>
    Company { tag: CompanyTag },
    /// Print the selectable company tags: companies
    Companies,
    /// Show help: help
    Help,
    /// Anything we could not make sense of
    Invalid { message: String },
}

/// Command plus global options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub catalog: Option<PathBuf>,
    pub command: Command,
}

impl Invocation {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = None;
        let mut rest = Vec::new();

        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            if arg == "--catalog" || arg == "-c" {
                match args.next() {
                    Some(path) => catalog = Some(PathBuf::from(path)),
                    None => {
                        return Self {
                            catalog,
                            command: Command::Invalid {
                                message: "--catalog needs a path".to_string(),
                            },
                        }
                    }
                }
            } else if let Some(path) = arg.strip_prefix("--catalog=") {
                catalog = Some(PathBuf::from(path));
            } else {
                rest.push(arg);
            }
        }

        Self {
            catalog,
            command: Command::parse(&rest),
        }
    }
}

impl Command {
    fn parse(args: &[String]) -> Self {
        let Some((cmd, params)) = args.split_first() else {
            return Command::Gui;
        };

        match cmd.to_lowercase().as_str() {
            "gui" | "open" => Command::Gui,
            "list" | "ls" => Command::List,
            "search" | "s" => Command::Search {
                query: params.join(" "),
            },
            "company" | "c" => match params {
                [tag] => Command::Company {
                    tag: CompanyTag::parse(tag),
                },
                _ => Command::Invalid {
                    message: "Usage: company <tag>".to_string(),
                },
            },
            "companies" => Command::Companies,
            "help" | "--help" | "-h" => Command::Help,
            _ => Command::Invalid {
                message: format!("Unknown command: {}", cmd),
            },
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"product-filter - browse and filter a product catalog

Usage: product-filter [--catalog <path>] [command]

Commands:
  (none), gui       Open the filter window
  list              Print every product
  search <text>     Print products whose title contains <text> (any case)
  company <tag>     Print products of one company ("all" for every company)
  companies         Print the company tags
  help              Show this help

Environment:
  PRODUCT_FILTER_CATALOG  JSON catalog to load
  PRODUCT_FILTER_CONFIG   Config file location
  RUST_LOG                Log filter, e.g. RUST_LOG=product_filter=debug"#
    }
}
