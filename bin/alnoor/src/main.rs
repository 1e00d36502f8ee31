//! Al-Noor CLI
//!
//! Builds, checks and serves the Al-Noor Quran Institute site.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use alnoor::cmd::render::ListingQuery;
use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for the Al-Noor site.
#[derive(Parser)]
#[command(
    name = "alnoor",
    version,
    about = "Static site builder for the Al-Noor Quran Institute"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Build the static site
    Build {
        /// Output directory (defaults to build.output_dir)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Validate configuration, content and partials
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Print a page fragment to stdout
    Render {
        #[command(subcommand)]
        target: RenderTarget,
    },
    /// Build the site and serve it locally
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

/// Fragments the render command can print.
#[derive(clap::Subcommand)]
enum RenderTarget {
    /// Category filters and one listing page
    Articles {
        /// Category to filter by ("all" for every category)
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive search term
        #[arg(long)]
        search: Option<String>,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// A single article body
    Article {
        /// Article ordinal (1-based)
        #[arg(long)]
        id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    alnoor::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { output } => {
            alnoor::cmd::build::run(&cli.config, output.as_deref())?;
        }
        Commands::Check { strict } => {
            alnoor::cmd::check::run(&cli.config, strict)?;
        }
        Commands::Render { target } => match target {
            RenderTarget::Articles {
                category,
                search,
                page,
            } => {
                let query = ListingQuery {
                    category,
                    search,
                    page,
                };
                alnoor::cmd::render::articles(&cli.config, &query)?;
            }
            RenderTarget::Article { id } => {
                alnoor::cmd::render::article(&cli.config, id.as_deref())?;
            }
        },
        Commands::Serve { port } => {
            alnoor::cmd::serve::run(&cli.config, port).await?;
        }
    }

    Ok(())
}
