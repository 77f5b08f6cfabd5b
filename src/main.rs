// Main entry point - Page shell around one fetch and one render
use literacy_chart::application::chart_service::ChartService;
use literacy_chart::application::dataset_provider::DatasetProvider;
use literacy_chart::domain::viewport::ViewportSize;
use literacy_chart::infrastructure::config::load_chart_config;
use literacy_chart::infrastructure::owid_csv::OwidCsvProvider;
use literacy_chart::presentation::chart_state::{ChartState, LoadPhase};
use literacy_chart::presentation::svg::render_svg;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_chart_config()?;
    let policy = config.viewport.policy();
    let viewport = ViewportSize::from_container(config.viewport.container_width, &policy);

    let provider = OwidCsvProvider::new(config.dataset.clone());
    let service = ChartService::new(config.margins.to_margins(), config.style.clone());

    // Single fetch attempt; the state container tracks the lifecycle.
    let state = ChartState::new(viewport).fetch_started();
    tracing::info!(url = %config.dataset.url, "fetching literacy dataset");
    let state = match provider.fetch_records().await {
        Ok(records) => {
            tracing::info!(records = records.len(), "dataset ready");
            state.fetch_succeeded(records)
        }
        Err(e) => state.fetch_failed(format!("{e:#}")),
    };

    if let LoadPhase::Failed(message) = state.phase() {
        anyhow::bail!("{message}");
    }

    let scene = service.compose(state.dataset(), state.viewport());
    if scene.is_empty() {
        tracing::warn!("dataset contained no plottable records");
    }
    print!("{}", render_svg(&scene, &config.labels, &config.style));
    Ok(())
}
