//! Command-line interface for inspecting CMS content.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ContentConfig;
use crate::error::{ContentError, Result};
use crate::extract::{
    extract_department_sections, extract_link_list, extract_marquee, extract_placements,
    extract_table_sections,
};
use crate::fetch::{normalize_path, ContentSource, HttpContentSource};
use crate::rewrite::LinkRewriter;

/// Campus Content - fetch CMS nodes and inspect their rich text.
#[derive(Parser)]
#[command(name = "campus-content")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the node at a site path from the configured CMS.
    Fetch {
        /// Site path (e.g., /departments/cse)
        path: String,

        /// Run an extraction over the node's editor field
        #[arg(short, long, value_enum)]
        extract: Option<Extraction>,
    },

    /// Run an extraction over a local HTML file.
    Inspect {
        /// HTML fragment to read
        file: PathBuf,

        /// Extraction to run
        #[arg(short, long, value_enum, default_value_t = Extraction::Rewrite)]
        extract: Extraction,

        /// CMS origin for absolutizing links (default: CMS_ORIGIN)
        #[arg(short, long)]
        origin: Option<String>,
    },
}

/// What to pull out of a rich-text fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Extraction {
    /// Rewritten HTML with absolute file links
    Rewrite,
    /// Anchors inside list items
    Links,
    /// List item texts
    Marquee,
    /// Placement table rows
    Placements,
    /// Vision, mission and programs sections
    Department,
    /// One section per table
    Sections,
}

/// Run an extraction and format the result for the terminal.
///
/// `rewrite` prints HTML; every other kind prints pretty JSON.
pub fn render_extraction(kind: Extraction, html: &str, config: &ContentConfig) -> Result<String> {
    let output = match kind {
        Extraction::Rewrite => LinkRewriter::from_config(config).rewrite(html),
        Extraction::Links => serde_json::to_string_pretty(&extract_link_list(html))?,
        Extraction::Marquee => serde_json::to_string_pretty(&extract_marquee(html))?,
        Extraction::Placements => {
            serde_json::to_string_pretty(&extract_placements(html, &config.origin))?
        }
        Extraction::Department => {
            serde_json::to_string_pretty(&extract_department_sections(html))?
        }
        Extraction::Sections => serde_json::to_string_pretty(&extract_table_sections(html))?,
    };
    Ok(output)
}

/// Run the CLI.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { path, extract } => fetch_command(&path, extract).await,
        Commands::Inspect {
            file,
            extract,
            origin,
        } => inspect_command(&file, extract, origin.as_deref()),
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Execute the fetch command.
async fn fetch_command(path: &str, extract: Option<Extraction>) -> Result<()> {
    let config = ContentConfig::from_env()?;
    let source = HttpContentSource::new(&config)?;
    let path = normalize_path(path);

    eprintln!(
        "{} {} from {}",
        style("Fetching").bold(),
        style(path).cyan(),
        style(&config.origin).green()
    );

    let pb = spinner("Waiting for CMS...");
    let outcome = source.fetch_by_path(path).await;
    pb.finish_and_clear();
    let outcome = outcome?;

    let not_found = outcome.is_not_found();
    let status = outcome.status;
    let Some(node) = outcome.data else {
        if not_found {
            eprintln!("{} {}", style("Not found:").yellow().bold(), path);
            return Err(ContentError::NotFound(path.to_string()));
        }
        eprintln!(
            "{} {}",
            style("CMS error:").red().bold(),
            style(status).red()
        );
        return Err(ContentError::Status {
            path: path.to_string(),
            status,
        });
    };

    eprintln!("  Title: {}", style(&node.title).green());
    eprintln!("  Images: {}", node.images.len());
    eprintln!();

    let output = match extract {
        Some(kind) => render_extraction(kind, &node.editor, &config)?,
        None => serde_json::to_string_pretty(&node)?,
    };
    println!("{output}");

    Ok(())
}

/// Execute the inspect command.
fn inspect_command(file: &Path, extract: Extraction, origin: Option<&str>) -> Result<()> {
    let config = match origin {
        Some(origin) => ContentConfig::new(origin)?,
        None => ContentConfig::from_env()?,
    };
    let html = std::fs::read_to_string(file)?;

    println!("{}", render_extraction(extract, &html, &config)?);
    Ok(())
}
