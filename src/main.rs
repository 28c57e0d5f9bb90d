//! Headless demo host: runs a short tally-and-preset session against the
//! in-memory gateway and prints the share text.

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tallycart::{
    AppConfig, FlowOutcome, MemoryGateway, SelectorValue, SyncCapability, TallyCart, catalog,
    config,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app_config = AppConfig::load().unwrap_or_else(|err| {
        warn!(error = %err, "could not load configuration; using defaults");
        AppConfig::default()
    });

    let default_catalog = match &app_config.catalog_path {
        Some(path) => config::load_catalog(path)
            .with_context(|| format!("loading catalog override from {}", path.display()))?,
        None => catalog::default_preset(),
    };

    if let Some(endpoint) = &app_config.sync_endpoint {
        info!(endpoint = %endpoint, "sync endpoint configured; demo uses the in-memory backend");
    }

    let mut app = TallyCart::new(
        default_catalog,
        SyncCapability::from_gateway(MemoryGateway::new()),
    )
    .context("building the engine")?;
    let mut events = app.subscribe();

    app.bootstrap().await.context("initial catalog load")?;

    // Tally a few groceries on the default preset.
    app.increment("apples");
    app.increment("apples");
    app.increment("apples");
    app.increment("milk");
    app.increment("eggs");
    app.decrement("apples");

    let summary = app.summarize();
    info!(distinct = summary.distinct, preview = ?summary.preview, "current tally");
    println!("{}", app.share_text());

    // Create a user preset through the management flow and switch to it.
    app.choose(SelectorValue::CreateNew)?;
    app.set_flow_input("Weekend Trip");
    let created = match app.submit_flow().await? {
        FlowOutcome::Created(preset) => preset,
        other => anyhow::bail!("unexpected flow outcome {:?}", other),
    };
    app.choose(SelectorValue::Preset(created.id.clone()))?;
    info!(preset = %created.name, "switched preset; tally starts empty");

    // Back to the default; the selection was cleared on each switch.
    app.choose(SelectorValue::Preset(
        tallycart::DEFAULT_PRESET_ID.to_string(),
    ))?;

    while let Ok(event) = events.try_recv() {
        info!(
            preset = %event.preset_name,
            generation = event.generation,
            "content loaded"
        );
    }

    Ok(())
}
