//! CLI commands and argument parsing

use crate::options::{GetOptions, SortDirection};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Metal API command-line client
#[derive(Parser, Debug)]
#[command(name = "metal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides config and METAL_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// API token (overrides config and METAL_AUTH_TOKEN)
    #[arg(long, global = true)]
    pub auth_token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Device batches
    Batches {
        #[command(subcommand)]
        command: BatchCommands,
    },
}

/// Batch subcommands
#[derive(Subcommand, Debug)]
pub enum BatchCommands {
    /// Show one batch
    Get {
        /// Batch ID
        id: String,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// List the batches of a project
    List {
        /// Project ID
        project_id: String,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Delete a batch
    Delete {
        /// Batch ID
        id: String,

        /// Also remove the devices the batch created
        #[arg(long)]
        remove_devices: bool,
    },
}

/// Include/exclude, paging and sorting flags
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Sub-resources to expand (comma-separated, dotted paths allowed)
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Sub-resources to collapse to links (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Fetch only this page
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Search keyword
    #[arg(long)]
    pub search: Option<String>,

    /// Field to sort by
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction
    #[arg(long)]
    pub sort_direction: Option<SortArg>,
}

impl QueryArgs {
    /// Build the option set for these flags; `None` when no flag was given
    pub fn to_options(&self) -> Option<GetOptions> {
        let mut opts = GetOptions::new()
            .including(&self.include)
            .excluding(&self.exclude)
            .with_page(self.page.unwrap_or(0))
            .with_per_page(self.per_page.unwrap_or(0));

        if let Some(search) = &self.search {
            opts = opts.with_search(search);
        }
        if let Some(field) = &self.sort_by {
            opts = opts.with_sort_by(field);
        }
        if let Some(direction) = self.sort_direction {
            opts = opts.with_sort_direction(direction.into());
        }

        (opts != GetOptions::default()).then_some(opts)
    }
}

/// Sort direction flag values
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortDirection {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortDirection::Asc,
            SortArg::Desc => SortDirection::Desc,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON (one document per line)
    Json,
    /// Indented JSON
    Pretty,
}
