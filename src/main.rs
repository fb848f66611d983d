mod commands;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::Project;

#[derive(Parser)]
#[command(name = "tutor-concepts")]
#[command(about = "Concept tagging and tag-filtered content retrieval for the tutor", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Project root (default: $TUTOR_CONCEPTS_ROOT or current directory)"
    )]
    root: Option<PathBuf>,

    #[arg(long, global = true, help = "Catalog file or directory (overrides config)")]
    catalog: Option<PathBuf>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "More logging (-v, -vv, -vvv)")]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect concept tags in a response text
    Extract {
        /// Text to analyze ("-" reads stdin)
        text: String,
        #[arg(long, help = "Show why each tag was reported")]
        explain: bool,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Print a response together with its concept tags
    Annotate {
        /// Response text ("-" reads stdin)
        text: String,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// List catalog entries carrying any of the given tags
    Filter {
        #[arg(short, long = "tag", help = "Tag to match (repeatable; none lists everything)")]
        tags: Vec<String>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Show how the catalog was loaded
    Catalog {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Show the keyword vocabulary and the catalog tags close to each keyword
    Vocab {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let project = Project {
        root: cli.root,
        catalog: cli.catalog,
    };

    match cli.command {
        Commands::Extract {
            text,
            explain,
            json,
        } => commands::extract::run(&project, &text, explain, json),
        Commands::Annotate { text, json } => commands::extract::run_annotate(&project, &text, json),
        Commands::Filter { tags, json } => commands::filter::run(&project, &tags, json),
        Commands::Catalog { json } => commands::catalog::run(&project, json),
        Commands::Vocab { json } => commands::vocab::run(&project, json),
    }
}
