use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::env;
use std::io;
use std::path::PathBuf;
use std::thread;
use syngrep::scan::{self, ScanError};
use syngrep::sg;
use syngrep::ScanOptions;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "syngrep")]
#[command(about = "Structural code search with ast-grep patterns", long_about = None)]
#[command(version)]
struct Cli {
    /// Structural pattern to search for (e.g. "fn $NAME($$$ARGS) { $$$BODY }")
    pattern: String,

    /// Files or directories to search (default: current directory)
    paths: Vec<PathBuf>,

    /// Additional pattern to match
    #[arg(short = 'p', long = "pattern", value_name = "PATTERN")]
    extra_patterns: Vec<String>,

    /// Exclude paths matching this glob
    #[arg(short = 'e', long = "exclude", value_name = "GLOB")]
    exclude: Vec<String>,

    /// Number of lines to show before each match
    #[arg(short = 'B', long, value_name = "N")]
    before: Option<usize>,

    /// Number of lines to show after each match
    #[arg(short = 'A', long, value_name = "N")]
    after: Option<usize>,

    /// Number of lines to show before and after each match
    #[arg(short = 'C', long, value_name = "N")]
    context: Option<usize>,

    /// Maximum number of files processed in parallel
    #[arg(short = 'c', long, value_name = "N")]
    concurrency: Option<usize>,

    /// Directory to search in (default: current working directory)
    #[arg(short = 'd', long, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Language to parse files as
    #[arg(short = 'l', long, default_value = "rust")]
    lang: String,

    /// Do not show line numbers
    #[arg(short = 'N', long)]
    no_line_number: bool,

    /// Do not show filenames
    #[arg(short = 'I', long)]
    no_filename: bool,

    /// Print only the exact matched text instead of whole lines
    #[arg(short = 'E', long)]
    exact: bool,

    /// Do not colorize output
    #[arg(long)]
    no_color: bool,
}

fn default_concurrency() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(4)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let lang = sg::parse_lang(&cli.lang)
        .ok_or_else(|| anyhow!("unsupported language: {}", cli.lang))?;

    // Control plane: every pattern must compile and at least one file must
    // exist before any scanning starts.
    let mut pattern_texts = vec![cli.pattern.clone()];
    pattern_texts.extend(cli.extra_patterns.iter().cloned());
    pattern_texts.retain(|p| !p.trim().is_empty());
    if pattern_texts.is_empty() {
        return Err(ScanError::NoPatterns.into());
    }

    let patterns = sg::compile_all(&pattern_texts, lang)?;

    let root = match cli.dir {
        Some(dir) => dir,
        None => env::current_dir().context("failed to resolve working directory")?,
    };
    let root = root
        .canonicalize()
        .with_context(|| format!("failed to resolve directory {}", root.display()))?;

    let paths = if cli.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli.paths.clone()
    };

    let files = scan::expand_paths(&paths, &root, &cli.exclude, lang)?;
    if files.is_empty() {
        return Err(ScanError::NoFiles.into());
    }

    let context = cli.context.unwrap_or(0);
    let options = ScanOptions {
        before_context: cli.before.unwrap_or(0).max(context),
        after_context: cli.after.unwrap_or(0).max(context),
        exact: cli.exact,
        color: !cli.no_color,
        print_filenames: !cli.no_filename,
        print_line_numbers: !cli.no_line_number,
    };
    let concurrency = cli.concurrency.unwrap_or_else(default_concurrency).max(1);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = scan::run_scan(files, &patterns, lang, &options, concurrency, &root, &mut out)?;

    debug!(
        scanned = summary.files_scanned,
        matched = summary.files_matched,
        failed = summary.files_failed,
        "scan complete"
    );

    Ok(())
}
