use std::path::PathBuf;

use anyhow::Context;
use catalog_flow::{build, watch, BuildOptions, WriteOutcome};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Build the fangame catalog JSON from the blog content collection.
#[derive(Parser)]
#[command(name = "catalog-flow", version, about)]
struct Cli {
    /// Content collection root (one post per `<id>.md` or `<id>/index.md`)
    #[arg(long, default_value = "src/content/blog")]
    content: PathBuf,

    /// Catalog file to write
    #[arg(long, default_value = "public/catalog.json")]
    out: PathBuf,

    /// Static root to copy banners into, as `<public>/blog/<id>/banner.png`
    #[arg(long)]
    public: Option<PathBuf>,

    /// Keep running and rebuild whenever the content changes
    #[arg(long)]
    watch: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let options = BuildOptions { content_dir: cli.content, out_file: cli.out, public_dir: cli.public };

    if cli.watch {
        return watch::watch(&options).context("watch mode stopped");
    }

    let report = build(&options).with_context(|| format!("building catalog from {}", options.content_dir.display()))?;
    let verb = match report.outcome {
        WriteOutcome::Written => "wrote",
        WriteOutcome::Unchanged => "kept",
    };
    tracing::info!(
        "{} {} ({} fangames, {} drafts skipped, {} banners)",
        verb,
        options.out_file.display(),
        report.records,
        report.drafts,
        report.banners
    );
    Ok(())
}
