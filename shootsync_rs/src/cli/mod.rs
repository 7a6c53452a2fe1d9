//! Command-line interface for inspecting site content.
//!
//! ```bash
//! shootsync pages                          # navigation surface
//! shootsync catalog --category ugc         # filtered portfolio
//! shootsync catalog --json                 # full catalog as JSON
//! shootsync check --assets landing/public  # content invariants + media files
//! shootsync inquiry draft.json             # validate a contact form draft
//! ```

mod check;

pub use check::{CheckReport, check_site};

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use tracing::{debug, info};

use crate::catalog::CategoryFilter;
use crate::config::{CONFIG_DIR, CONFIG_FILE, SiteConfig};
use crate::contact::ContactDraft;
use crate::content;
use crate::nav::Page;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "shootsync")]
#[command(about = "Inspect and check the ShootSync site content")]
#[command(version)]
pub struct Cli {
    /// Config file (default: .shootsync/config.toml in the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the site pages and their paths
    Pages,
    /// Print the portfolio, optionally filtered by category
    Catalog {
        /// Category label (ALL, COMMERCIAL, UGC, BRANDING, PERFORMANCE, DIGITAL)
        #[arg(long, short = 'c', default_value = CategoryFilter::ALL_LABEL)]
        category: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate content invariants and media references
    Check {
        /// Static asset directory to resolve site-local media against
        #[arg(long)]
        assets: Option<PathBuf>,
    },
    /// Validate a contact form draft (JSON file, or `-` for stdin)
    Inquiry {
        input: PathBuf,
    },
}

// ============================================================================
// Entry Points
// ============================================================================

/// Route logs to stderr so command output stays pipeable.
pub fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

pub fn run(cli: Cli) -> Result<ExitCode> {
    info!("Starting shootsync v{}", env!("CARGO_PKG_VERSION"));
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Command::Pages => {
            print_pages(&config);
            Ok(ExitCode::SUCCESS)
        }
        Command::Catalog { category, json } => print_catalog(&category, json),
        Command::Check { assets } => Ok(run_check(&config, assets.as_deref())),
        Command::Inquiry { input } => run_inquiry(&input),
    }
}

fn load_config(explicit: Option<&Path>) -> SiteConfig {
    match explicit {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            SiteConfig::load_from_path(path)
        }
        None => {
            let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            debug!(
                "Looking for {}/{} under {}",
                CONFIG_DIR,
                CONFIG_FILE,
                root.display()
            );
            SiteConfig::load(&root)
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

fn print_pages(config: &SiteConfig) {
    println!("{}", style(&config.brand).bold());
    for page in Page::ALL {
        println!(
            "  {:<10} {:<12} {}",
            page.nav_label(),
            page.path(),
            style(page.title()).dim()
        );
    }
}

fn print_catalog(category: &str, json: bool) -> Result<ExitCode> {
    let filter: CategoryFilter = category
        .parse()
        .with_context(|| format!("Invalid --category value {category:?}"))?;
    let catalog = content::portfolio_catalog();
    let items = catalog.filter(filter);
    debug!("{} of {} items match {}", items.len(), catalog.len(), filter);

    if json {
        let out = serde_json::to_string_pretty(&items).context("Failed to serialize catalog")?;
        println!("{out}");
        return Ok(ExitCode::SUCCESS);
    }

    let counts: Vec<String> = catalog
        .counts()
        .into_iter()
        .map(|(option, n)| format!("{option} {n}"))
        .collect();
    println!("{}", style(counts.join(" · ")).dim());
    println!("{} ({})", style(filter.label()).bold(), items.len());
    for item in items {
        let highlights: Vec<String> = item
            .highlights()
            .iter()
            .map(|(label, value)| format!("{label} {value}"))
            .collect();
        println!(
            "  {:<28} {:<12} {}  {}",
            item.title,
            item.category.label(),
            item.year,
            style(highlights.join(" · ")).dim()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn run_check(config: &SiteConfig, assets: Option<&Path>) -> ExitCode {
    let report = check_site(config, assets);
    for line in &report.passed {
        println!("{} {}", style("✓").green().bold(), line);
    }
    for line in &report.warnings {
        println!("{} {}", style("⚠").yellow().bold(), line);
    }
    for line in &report.violations {
        eprintln!("{} {}", style("✗").red().bold(), line);
    }
    if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_inquiry(input: &Path) -> Result<ExitCode> {
    let raw = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read draft from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };
    let draft: ContactDraft =
        serde_json::from_str(&raw).context("Draft is not a JSON object of form fields")?;

    match draft.validate() {
        Ok(inquiry) => {
            let out =
                serde_json::to_string_pretty(&inquiry).context("Failed to serialize inquiry")?;
            println!("{out}");
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            for error in &errors.errors {
                eprintln!(
                    "{} {}: {}",
                    style("✗").red().bold(),
                    error.field,
                    error.message
                );
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
