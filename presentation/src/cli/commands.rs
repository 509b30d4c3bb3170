//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use gateway_domain::{ContentKind, DEFAULT_EXCERPT_LENGTH, Taxonomy};
use std::path::PathBuf;

/// Output format for content listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for humans
    Table,
    /// Pretty-printed JSON of the normalized entities
    Json,
}

impl From<OutputFormat> for gateway_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for content-gateway
#[derive(Parser, Debug)]
#[command(name = "content-gateway")]
#[command(author, version, about = "Read and normalize marketing content from the WordPress proxy")]
#[command(long_about = r#"
content-gateway talks to the site's same-origin WordPress proxy, pages
through collections, and prints the normalized entities the pages render.

Configuration files are loaded from (in priority order):
1. CONTENT_GATEWAY_* environment variables
2. --config <path>            Explicit config file
3. ./content-gateway.toml     Project-level config
4. ~/.config/content-gateway/config.toml   Global config

Example:
  content-gateway list services
  content-gateway show cases acme-rebrand --format json
  content-gateway term-name target-audience 12
  content-gateway overview
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output].format)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Site origin serving the proxy (overrides [gateway].site_url)
    #[arg(long, value_name = "URL", global = true)]
    pub site_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List every item of a collection
    List {
        /// services, cases, solutions, tools, testimonials, team, posts
        kind: ContentKind,

        /// Stop after this many items
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one item by slug
    Show {
        /// services, cases, solutions, tools, posts
        kind: ContentKind,
        slug: String,
    },

    /// List the terms of a taxonomy
    Terms {
        /// service-category, case-category, solution-category, tool-category,
        /// tool-type, target-audience
        taxonomy: Taxonomy,
    },

    /// Resolve a term ID to its display name
    TermName { taxonomy: Taxonomy, id: u64 },

    /// Clean HTML and print an excerpt of it
    Excerpt {
        text: String,

        /// Maximum excerpt length in characters
        #[arg(short, long, default_value_t = DEFAULT_EXCERPT_LENGTH)]
        max: usize,
    },

    /// Submit the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        company: Option<String>,
        /// Service of interest
        #[arg(long)]
        service: Option<String>,
        #[arg(long)]
        budget: Option<String>,
    },

    /// Subscribe an address to the newsletter
    Subscribe { email: String },

    /// Probe the WordPress proxy
    Health,

    /// Fetch every collection concurrently and print counts
    Overview,
}
