use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;

use smartcal::ai::AiProvider;
use smartcal::cache::{LayoutCache, default_cache_dir};
use smartcal::config::{self, Config};
use smartcal::context::{ContextSource, HostSource};
use smartcal::output::{OutputFormat, WidgetRequest, format_output};
use smartcal::preview::{Preview, run_preview};
use smartcal::{ItemCatalog, LayoutDecision, LayoutFetcher, LayoutRenderer};

/// Pick and render a home-screen widget layout with an LLM
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to ~/.config/smartcal/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Context snapshot exported by the widget host
    #[arg(long, value_name = "PATH")]
    context: Option<PathBuf>,

    /// Ignore the cached layout and show the result in the terminal
    #[arg(long)]
    preview: bool,

    /// What to print
    #[arg(long, value_enum, default_value_t = OutputFormat::Markup)]
    format: OutputFormat,

    /// Render this layout decision JSON instead of asking the model
    #[arg(long, value_name = "JSON", conflicts_with = "preview")]
    decision: Option<String>,

    /// Delete the cached layout and exit
    #[arg(long)]
    clear_cache: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };

    let cache = layout_cache(&config);

    if args.clear_cache {
        if cache.clear()? {
            println!("Removed {}", cache.path().display());
        }
        return Ok(());
    }

    let catalog = match &config.widget.items {
        Some(items) => ItemCatalog::from_items(items.iter().copied()),
        None => ItemCatalog::full(),
    };
    let renderer = LayoutRenderer::new(config.widget.columns, catalog.clone());
    let source = HostSource::from_path(args.context.clone().or(config.context.snapshot.clone()));

    let decision = match &args.decision {
        Some(json) => serde_json::from_str::<LayoutDecision>(json)
            .wrap_err("--decision is not a {\"layout\", \"message\"} object")?,
        None => fetch_decision(&config, cache, source.clone(), catalog, args.preview).await,
    };

    if args.preview {
        let context = source.gather().await.unwrap_or_else(|e| {
            log::warn!("Preview without context: {}", e);
            Default::default()
        });
        let preview = Preview {
            decision: &decision,
            renderer: &renderer,
            context: &context,
        };
        return run_preview(&preview);
    }

    let request = WidgetRequest::new(renderer.render(&decision), &config.widget);
    let text = format_output(&request, args.format)?;
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }

    Ok(())
}

/// Ask the configured provider, or fall back when none is usable
async fn fetch_decision(
    config: &Config,
    cache: LayoutCache,
    source: HostSource,
    catalog: ItemCatalog,
    preview: bool,
) -> LayoutDecision {
    let provider = match AiProvider::from_config(&config.ai) {
        Ok(provider) => provider,
        Err(e) => {
            log::warn!("{}; using fallback layout", e);
            let cached = if preview { None } else { cache.read_fresh() };
            return cached.unwrap_or_else(LayoutDecision::fallback);
        }
    };
    log::debug!("Using {} provider", provider.provider_name());

    LayoutFetcher::new(cache, source, provider)
        .with_catalog(catalog)
        .with_preview(preview)
        .fetch()
        .await
}

fn layout_cache(config: &Config) -> LayoutCache {
    let dir = config
        .cache
        .dir
        .clone()
        .or_else(default_cache_dir)
        .unwrap_or_else(|| std::env::temp_dir().join("smartcal"));

    LayoutCache::for_widget(
        &dir,
        &config.widget.name,
        Duration::from_secs(config.cache.max_age_minutes.saturating_mul(60)),
    )
}
