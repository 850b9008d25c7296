//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use fallbacks_catalog::{Badge, Category, Feature, Language};
use fallbacks_lib::{Criteria, GalleryQuery, SortDirection, SortField, SortSpec};

use crate::CliError;

#[derive(Parser)]
#[command(name = "fallbacks")]
#[command(about = "Browse and fetch error boundary templates", long_about = None)]
pub(crate) struct Cli {
    /// Catalog YAML file or directory (defaults to the bundled catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter and sort options shared by `list` and `link`.
#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Free-text search over title, description, id, category, and tags
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category slug (e.g., minimal, themed)
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Required tags; an entry must carry all of them (e.g., retry,dark-mode)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<Feature>,

    /// Required languages (e.g., tsx,tailwind)
    #[arg(short, long, value_delimiter = ',')]
    pub languages: Vec<Language>,

    /// Accepted badges; entries without a badge are excluded
    #[arg(short, long, value_delimiter = ',')]
    pub badges: Vec<Badge>,

    /// Sort field: name, category, complexity, badge, or catalog
    #[arg(long, value_parser = parse_sort_field)]
    pub sort: Option<SortField>,

    /// Sort direction: asc or desc
    #[arg(long, value_parser = parse_sort_direction)]
    pub order: Option<SortDirection>,

    /// Start from a share link query string instead of the flags above
    #[arg(long, conflicts_with_all = ["search", "category", "tags", "languages", "badges", "sort", "order"])]
    pub link: Option<String>,
}

impl FilterArgs {
    /// Resolve the flags (or the share link) into a selection.
    pub(crate) fn to_state(&self) -> Result<(Criteria, SortSpec), CliError> {
        if let Some(link) = &self.link {
            return Ok(GalleryQuery::parse(link)?.apply());
        }

        let criteria = Criteria {
            query: self.search.clone().unwrap_or_default(),
            category: self.category,
            tags: self.tags.iter().copied().collect(),
            languages: self.languages.iter().copied().collect(),
            badges: self.badges.iter().copied().collect(),
        };
        let sort = SortSpec::new(
            self.sort.unwrap_or_default(),
            self.order.unwrap_or_default(),
        );
        Ok((criteria, sort))
    }
}

fn parse_sort_field(s: &str) -> Result<SortField, String> {
    let known = SortField::all()
        .iter()
        .copied()
        .chain([SortField::CatalogOrder])
        .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()));
    match (known, s.trim().to_lowercase().as_str()) {
        (Some(field), _) => Ok(field),
        (None, "title") => Ok(SortField::Name),
        (None, "status") => Ok(SortField::Badge),
        (None, _) => Err(format!(
            "unknown sort field '{s}' (expected name, category, complexity, badge, or catalog)"
        )),
    }
}

fn parse_sort_direction(s: &str) -> Result<SortDirection, String> {
    SortDirection::parse(s).ok_or_else(|| format!("unknown sort order '{s}' (expected asc or desc)"))
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List templates matching the given filters
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show every detail of one template
    Show {
        /// Template id (e.g., retry)
        id: String,
    },

    /// Show catalog statistics and available facet values
    Stats,

    /// Print the share link query string for the given filters
    Link {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Write a template's source file to stdout or a file
    Fetch {
        /// Template id
        id: String,

        /// Directory template paths are resolved against
        #[arg(long)]
        root: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the template download server
    Serve {
        /// Address to listen on (e.g., 127.0.0.1:3000)
        #[arg(long)]
        listen: Option<String>,

        /// Directory template paths are resolved against
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,

    /// Write the effective settings to the settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}
