//! portext CLI - render headless-CMS content documents

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use portext::{extract_plain_text, flatten, render, ContentDocument, RenderOptions};

#[derive(Parser)]
#[command(name = "portext")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render CMS content documents to nodes, text, and excerpts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a content document to tagged render-node JSON
    Nodes {
        /// Input JSON file (a content document or a full entry)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Alt-text fallback for images without alt text
        #[arg(long, value_name = "TEXT")]
        title: Option<String>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Flatten a content document to plain text
    Text {
        /// Input JSON file (a content document or a full entry)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Extract a truncated plain-text excerpt
    Excerpt {
        /// Input JSON file (a content document or a full entry)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Maximum excerpt length in characters
        #[arg(short, long, default_value = "160")]
        max_length: usize,
    },

    /// Show document information
    Info {
        /// Input JSON file (a content document or a full entry)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Nodes {
            input,
            output,
            title,
            compact,
        } => cmd_nodes(&input, output.as_deref(), title, compact),
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Excerpt { input, max_length } => cmd_excerpt(&input, max_length),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Load a content document from a file holding either a bare document or a
/// full entry. Entries also supply a title for image alt fallback.
fn load_document(input: &Path) -> portext::Result<(ContentDocument, Option<String>)> {
    let json = fs::read_to_string(input)?;
    match portext::parse_entry(&json) {
        Ok(entry) => {
            log::debug!("Loaded entry {} with {} blocks", entry.id, entry.content.len());
            Ok((entry.content, Some(entry.title)))
        }
        Err(_) => Ok((portext::parse_document(&json)?, None)),
    }
}

fn write_output(output: Option<&Path>, content: &str) -> portext::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!("{} {}", "Wrote".green(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn cmd_nodes(
    input: &Path,
    output: Option<&Path>,
    title: Option<String>,
    compact: bool,
) -> portext::Result<()> {
    let (doc, entry_title) = load_document(input)?;

    let mut options = RenderOptions::new();
    if let Some(alt) = title.or(entry_title) {
        options = options.with_fallback_alt(alt);
    }

    let nodes = render(&doc, &options);
    let json = if compact {
        serde_json::to_string(&nodes)?
    } else {
        serde_json::to_string_pretty(&nodes)?
    };
    write_output(output, &json)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> portext::Result<()> {
    let (doc, _) = load_document(input)?;
    write_output(output, &flatten(&doc))
}

fn cmd_excerpt(input: &Path, max_length: usize) -> portext::Result<()> {
    let (doc, _) = load_document(input)?;
    println!("{}", extract_plain_text(&doc, max_length));
    Ok(())
}

fn cmd_info(input: &Path) -> portext::Result<()> {
    let (doc, title) = load_document(input)?;
    let nodes = render(&doc, &RenderOptions::default());

    if let Some(title) = title {
        println!("{}: {}", "Title".bold(), title);
    }
    println!("{}: {}", "Blocks".bold(), doc.len());
    println!("{}: {}", "Render nodes".bold(), nodes.len());
    println!(
        "{}: {}",
        "Text length".bold(),
        flatten(&doc).chars().count()
    );
    Ok(())
}
