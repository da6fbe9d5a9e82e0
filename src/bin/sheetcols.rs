//! sheetcols CLI - Render a published spreadsheet as a column page

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{ArgAction, Parser, Subcommand};
#[cfg(feature = "cli")]
use sheetcols::{
    format_cell_html, Page, PresentationMode, RenderOptions, SheetConfig, Surface,
    Table,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use tracing::{info, warn};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "sheetcols")]
#[command(version)]
#[command(about = "Render a published spreadsheet as a column-based page", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Local CSV or gviz JSON file (`-` for stdin); fetches the sheet if omitted
    input: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Spreadsheet identifier
    #[arg(short, long, default_value = sheetcols::DEFAULT_SPREADSHEET_ID)]
    sheet: String,

    /// Start in light presentation mode
    #[arg(long)]
    light: bool,

    /// Emit only the content region instead of a full document
    #[arg(long)]
    fragment: bool,

    /// Document title
    #[arg(long, default_value = "Sheet")]
    title: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Format a single cell and print its HTML
    Format {
        /// Cell text (reads from stdin if not provided)
        text: Option<String>,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let options = RenderOptions {
        mode: if cli.light {
            PresentationMode::Light
        } else {
            PresentationMode::Dark
        },
        title: cli.title.clone(),
        full_document: !cli.fragment,
    };
    let mut page = Page::new(options);

    let success = match cli.input.as_deref() {
        Some(path) => {
            let body = read_input(path)?;
            let table = Table::from_any(&body)
                .with_context(|| format!("Failed to parse input: {}", path))?;
            info!(
                shape = sheetcols::detect_shape(&body).as_str(),
                columns = table.column_count(),
                "loaded local input"
            );
            page.populate(&table);
            true
        }
        None => fetch_into(&mut page, SheetConfig::for_sheet(cli.sheet.clone()))?,
    };

    let html = page.to_html();
    match cli.output {
        Some(path) => {
            fs::write(&path, &html).with_context(|| format!("Failed to write {}", path))?;
            if success {
                eprintln!("✓ Output written to: {}", path);
            } else {
                eprintln!("⚠ Error page written to: {}", path);
            }
        }
        None => {
            io::stdout().write_all(html.as_bytes())?;
        }
    }

    if !success {
        std::process::exit(1);
    }
    Ok(())
}

/// Load the sheet over HTTP, returning whether any channel succeeded
#[cfg(all(feature = "cli", feature = "fetch"))]
fn fetch_into(page: &mut Page, config: SheetConfig) -> Result<bool> {
    let source = sheetcols::HttpSource::new(config).context("Failed to build HTTP client")?;
    let outcome = sheetcols::load(source, page);
    if let sheetcols::LoadOutcome::Fallback { primary } = &outcome {
        warn!(error = %primary, "served from structured fallback");
    }
    for err in outcome.errors() {
        eprintln!("✗ {}", err);
    }
    Ok(outcome.is_success())
}

#[cfg(all(feature = "cli", not(feature = "fetch")))]
fn fetch_into(page: &mut Page, _config: SheetConfig) -> Result<bool> {
    warn!("built without the `fetch` feature; pass an input file instead");
    page.show_error();
    Ok(false)
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Format { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            println!("{}", format_cell_html(&text));
        }

        Commands::Info => {
            println!("sheetcols - Render a published spreadsheet as a column-based page");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ CSV export with structured (gviz) fallback");
            println!("  ✓ [H1], <H2>, \"quote\" and - superscript formatting");
            println!("  ✓ Bionic reading emphasis");
            println!("  ✓ Video embeds and image links");
            println!("  ✓ Light/dark presentation");
            println!(
                "  {} HTTP retrieval",
                if cfg!(feature = "fetch") { "✓" } else { "✗" }
            );
            println!();
            println!("Default sheet: {}", sheetcols::DEFAULT_SPREADSHEET_ID);
            println!();
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}

#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install sheetcols --features cli");
    eprintln!("  sheetcols [OPTIONS] [INPUT]");
}
