mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand, ValueEnum};
use docsearch_core::index::{Category, ExportFormat};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "docsearch", version, about = "Query static documentation search indexes")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/docsearch/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Profile to use from the config file
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Search index file; skips the config file entirely
    #[arg(long, global = true)]
    index: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and the index, print resolved paths
    Doctor,

    /// Find entries whose title or text contains a string
    Search(SearchArgs),

    /// List the pages in the index
    Pages(PagesArgs),

    /// Print one entry in full
    Show(ShowArgs),

    /// Write the index back out as JSON or as a generator script
    Export(ExportArgs),
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    /// Locations only, one per line
    Quiet,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Page,
    Section,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Page => Category::Page,
            CategoryArg::Section => Category::Section,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ExportFormatArg {
    #[default]
    Json,
    Script,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Json => ExportFormat::Json,
            ExportFormatArg::Script => ExportFormat::Script,
        }
    }
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive)
    #[arg(default_value = "")]
    pub query: String,

    /// Only entries of this category
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,

    /// Only entries whose location starts with this (e.g. chap01.html)
    #[arg(long)]
    pub page: Option<String>,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Make an empty query match every entry
    #[arg(long)]
    pub all_on_empty: bool,

    #[arg(long, short = 'o', value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long)]
    pub json: bool,

    /// Shorthand for --output quiet
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct PagesArgs {
    #[arg(long, short = 'o', value_enum, default_value_t)]
    pub output: OutputFormat,

    #[arg(long)]
    pub json: bool,

    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Exact location, e.g. chap01.html#Debugging-1
    pub location: String,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, value_enum, default_value_t)]
    pub format: ExportFormatArg,

    /// Destination file (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let ctx = cmd::Context {
        config: cli.config,
        profile: cli.profile,
        index: cli.index,
    };

    match cli.command {
        Commands::Doctor => cmd::doctor::run(&ctx),
        Commands::Search(args) => cmd::search::run(&ctx, args),
        Commands::Pages(args) => cmd::pages::run(&ctx, args),
        Commands::Show(args) => cmd::show::run(&ctx, args),
        Commands::Export(args) => cmd::export::run(&ctx, args),
    }
}
