// Chart configuration loaded from config/chart.toml
use crate::domain::color::DEFAULT_PALETTE;
use crate::domain::viewport::{Margins, SizePolicy};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub dataset: DatasetSource,
    #[serde(default)]
    pub labels: ChartLabels,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub margins: MarginsConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

/// Where the CSV lives and which named columns carry each field.
#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSource {
    pub url: String,
    #[serde(default = "default_entity_column")]
    pub entity_column: String,
    #[serde(default = "default_year_column")]
    pub year_column: String,
    #[serde(default = "default_women_column")]
    pub women_column: String,
    #[serde(default = "default_men_column")]
    pub men_column: String,
    #[serde(default = "default_region_column")]
    pub region_column: String,
}

fn default_entity_column() -> String {
    "Entity".to_string()
}

fn default_year_column() -> String {
    "Year".to_string()
}

fn default_women_column() -> String {
    "Literacy rate among young women".to_string()
}

fn default_men_column() -> String {
    "Literacy rate among young men".to_string()
}

fn default_region_column() -> String {
    "World regions according to OWID".to_string()
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartLabels {
    pub title: String,
    pub subtitle: String,
    pub source: String,
    pub x_axis: String,
    pub y_axis: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            title: "Literacy rate of young men vs. women, 2023".to_string(),
            subtitle: "Share of women and men aged between 15 and 24 years old who can both read and write.".to_string(),
            source: "Data source: UNESCO Institute for Statistics (2025) - ourworldindata.org/literacy".to_string(),
            x_axis: "Literacy Rate among Women (%)".to_string(),
            y_axis: "Literacy Rate among Men (%)".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ViewportConfig {
    /// Stand-in for a browser window width; there is no live window to read.
    pub container_width: f64,
    pub width_fraction: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub aspect_ratio: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        let policy = SizePolicy::default();
        Self {
            container_width: 1800.0,
            width_fraction: policy.width_fraction,
            min_width: policy.min_width,
            max_width: policy.max_width,
            aspect_ratio: policy.aspect_ratio,
        }
    }
}

impl ViewportConfig {
    pub fn policy(&self) -> SizePolicy {
        SizePolicy {
            width_fraction: self.width_fraction,
            min_width: self.min_width,
            max_width: self.max_width,
            aspect_ratio: self.aspect_ratio,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MarginsConfig {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for MarginsConfig {
    fn default() -> Self {
        let margins = Margins::default();
        Self {
            top: margins.top,
            right: margins.right,
            bottom: margins.bottom,
            left: margins.left,
        }
    }
}

impl MarginsConfig {
    pub fn to_margins(&self) -> Margins {
        Margins {
            top: self.top,
            right: self.right,
            bottom: self.bottom,
            left: self.left,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StyleConfig {
    pub tick_count: usize,
    pub marker_radius: f64,
    pub marker_opacity: f64,
    pub palette: Vec<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            tick_count: 6,
            marker_radius: 6.0,
            marker_opacity: 0.9,
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

pub fn load_chart_config() -> anyhow::Result<ChartConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/chart"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_fills_defaults() {
        let config: ChartConfig = toml::from_str(
            r#"
            [dataset]
            url = "https://example.org/literacy.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.dataset.entity_column, "Entity");
        assert_eq!(config.dataset.women_column, "Literacy rate among young women");
        assert_eq!(config.viewport.min_width, 500.0);
        assert_eq!(config.viewport.max_width, 1200.0);
        assert_eq!(config.margins.left, 70.0);
        assert_eq!(config.style.tick_count, 6);
        assert_eq!(config.style.palette.len(), 10);
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config: ChartConfig = toml::from_str(
            r#"
            [dataset]
            url = "https://example.org/literacy.csv"
            year_column = "year"

            [viewport]
            container_width = 1000.0
            aspect_ratio = 2.0

            [style]
            tick_count = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.dataset.year_column, "year");
        assert_eq!(config.viewport.container_width, 1000.0);
        assert_eq!(config.viewport.policy().aspect_ratio, 2.0);
        assert_eq!(config.style.tick_count, 10);
        // Untouched sections keep their defaults.
        assert_eq!(config.style.marker_radius, 6.0);
    }

    #[test]
    fn test_margins_mapping() {
        let margins = MarginsConfig::default().to_margins();
        assert_eq!(margins, Margins::default());
    }
}
