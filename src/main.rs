use clap::{Parser, Subcommand};
use docpage::{generate, metadata, output};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "docpage")]
#[command(about = "Generate a single-page HTML documentation site from Markdown")]
#[command(long_about = "\
Generate a single-page HTML documentation site from Markdown

The source is either a bare .md file (rendered with the bundled stock
theme) or a docs folder containing index.md plus its own asset
subdirectories (images/, css/, js/, fonts/), copied to the output.

Frontmatter controls the page:

  ---
  title: API Reference
  language_tabs:
    - shell
    - python
  toc_footers:
    - <a href='https://example.com'>Support</a>
  logo: images/logo.png
  includes:
    - intro.md
    - chapters/*.md          # whole directory, alphabetical
  last_updated: May 4, 2026  # omit to derive from file mtimes
  ---

Every frontmatter key can be overridden from the command line with
-m key=value; list-typed keys (language_tabs, toc_footers, includes)
are comma-split.")]
#[command(version = version_string())]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate documentation from a Markdown file or docs folder
    Generate {
        /// Path to a .md file or a directory containing index.md
        source: PathBuf,

        /// Output directory (defaults to the source folder)
        destination: Option<PathBuf>,

        /// Metadata override as key=value (repeatable)
        #[arg(short = 'm', long = "metadata", value_parser = metadata::parse_override)]
        metadata: Vec<(String, String)>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;

    match cli.command {
        Command::Generate {
            source,
            destination,
            metadata,
        } => {
            let report = generate::generate(&source, destination.as_deref(), &metadata)?;
            output::print_report(&report);
        }
    }

    Ok(())
}
