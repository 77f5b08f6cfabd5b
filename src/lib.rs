// Scatter chart of youth literacy rates, built from Our World in Data CSV
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::chart_service::ChartService;
pub use application::dataset_provider::DatasetProvider;
pub use infrastructure::config::{ChartConfig, load_chart_config};
pub use infrastructure::owid_csv::OwidCsvProvider;
pub use presentation::chart_state::{ChartState, LoadPhase};
pub use presentation::svg::render_svg;
