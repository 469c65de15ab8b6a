//! htmlpress - command-line HTML to PDF converter.
//!
//! ```text
//! htmlpress report.html -o report.pdf --theme corporate --watermark DRAFT
//! htmlpress https://example.com --format letter --landscape
//! htmlpress '<h1>Hello</h1>' --debug --explain
//! ```

mod config;

use crate::config::Config;
use clap::Parser;
use htmlpress_render::{Margins, PaperFormat, RenderOptions, Renderer, Theme, Watermark};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Convert HTML to PDF via headless Chromium.
#[derive(Parser)]
#[command(name = "htmlpress", version, about)]
struct Cli {
    /// Input HTML file, URL, or literal markup
    input: String,

    /// Output PDF path
    #[arg(short, long, default_value = "output.pdf")]
    output: PathBuf,

    /// Paper format (a3, a4, a5, letter, legal, tabloid)
    #[arg(long)]
    format: Option<PaperFormat>,

    /// Landscape orientation
    #[arg(long)]
    landscape: bool,

    /// Builtin theme (standard, clean, corporate, minimal, none)
    #[arg(long)]
    theme: Option<Theme>,

    /// Watermark text overlaid on every page
    #[arg(long)]
    watermark: Option<String>,

    /// Watermark opacity, 0.0 through 1.0
    #[arg(long, default_value_t = 0.1)]
    watermark_opacity: f64,

    /// Watermark CSS color
    #[arg(long, default_value = "#000")]
    watermark_color: String,

    /// Extra stylesheet file injected after the theme (repeatable)
    #[arg(long = "css", value_name = "FILE")]
    stylesheets: Vec<PathBuf>,

    /// Uniform page margins in millimetres
    #[arg(long, value_name = "MM")]
    margin: Option<f64>,

    /// Outline layout boundaries and page-break markers
    #[arg(long)]
    debug: bool,

    /// Scan the rendered page for common layout problems
    #[arg(long)]
    explain: bool,

    /// Browser executable override
    #[arg(long, value_name = "PATH")]
    browser: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise defer to RUST_LOG.
    let filter = if cli.verbose { EnvFilter::new("info") } else { EnvFilter::from_default_env() };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("configuration error: {error}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: Config) -> htmlpress_render::error::Result<()> {
    let mut options = RenderOptions {
        format: cli.format.or(config.format).unwrap_or_default(),
        landscape: cli.landscape,
        theme: cli.theme.or(config.theme).unwrap_or_default(),
        stylesheets: cli.stylesheets,
        debug: cli.debug,
        explain: cli.explain,
        ..RenderOptions::default()
    };
    if let Some(text) = cli.watermark {
        options.watermark = Some(
            Watermark::new(text)
                .with_opacity(cli.watermark_opacity)
                .with_color(cli.watermark_color),
        );
    }
    if let Some(mm) = cli.margin {
        options.margins = Some(Margins::uniform(mm));
    }

    let renderer = match cli.browser.or(config.browser) {
        Some(path) => Renderer::with_browser(path),
        None => Renderer::new()?,
    }
    .sandbox(config.sandbox);

    tracing::info!(output = %cli.output.display(), "rendering PDF");
    renderer.render_to(&cli.input, &options, &cli.output)
}
