//! chronicle: browse a blog's post catalog from the terminal
//!
//! Reads the same `posts.json` the site fetches and derives the listing
//! grid, search results and related posts from it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use chronicle::catalog::SortOrder;
use chronicle::config;

mod commands;

#[derive(Parser)]
#[command(name = "chronicle")]
#[command(about = "Filter, search and rank blog posts", long_about = None)]
#[command(version)]
struct Cli {
    /// Catalog file (defaults to ./data/posts.json, then the user data dir)
    #[arg(long, global = true, env = config::CATALOG_ENV)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts as the blog grid shows them
    List {
        /// Only show posts with this tag ("all" for every post)
        #[arg(long, short)]
        tag: Option<String>,

        /// Sort by: latest, popular (default: latest)
        #[arg(long, short, default_value = "latest")]
        sort: SortOrder,

        /// Pages to reveal ("load more" count, starting at 1)
        #[arg(long, short, default_value_t = 1)]
        page: usize,

        /// Posts per page
        #[arg(long, default_value_t = config::DEFAULT_PAGE_SIZE)]
        page_size: usize,

        /// Page URL to take the tag filter from (e.g. https://site/blog/?tag=CSS)
        #[arg(long)]
        url: Option<String>,
    },

    /// Search titles, excerpts and tags
    Search {
        /// Search text
        query: Vec<String>,
    },

    /// Show a post and its related posts
    Show {
        /// Post slug
        slug: String,

        /// Number of related posts
        #[arg(long, short, default_value_t = config::RELATED_LIMIT)]
        related: usize,
    },

    /// Show catalog statistics and tags
    Tags {
        /// List every tag instead of the filter bar selection
        #[arg(short, long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::init_from_env(Env::default().default_filter_or(default_level));

    let catalog = cli.catalog.as_deref();

    match cli.command {
        Commands::List {
            tag,
            sort,
            page,
            page_size,
            url,
        } => {
            let options = commands::list::ListOptions {
                tag,
                sort,
                page,
                page_size,
                url,
            };
            let output = commands::list::execute(catalog, options)?;
            println!("{}", output);
        }

        Commands::Search { query } => {
            let query = query.join(" ");
            println!("{}", commands::search::execute(catalog, &query)?);
        }

        Commands::Show { slug, related } => {
            println!("{}", commands::show::execute(catalog, &slug, related)?);
        }

        Commands::Tags { all } => {
            println!("{}", commands::tags::execute(catalog, all)?);
        }
    }

    Ok(())
}
