// Chart service - Use case for deriving the renderable scene
use crate::domain::color::CategoryColors;
use crate::domain::record::LiteracyRecord;
use crate::domain::scale::{LinearScale, extent};
use crate::domain::scene::{AxisTick, ChartScene, LegendEntry, Marker};
use crate::domain::ticks::nice_ticks;
use crate::domain::viewport::{Margins, ViewportSize};
use crate::infrastructure::config::StyleConfig;

#[derive(Debug, Clone)]
pub struct ChartService {
    margins: Margins,
    style: StyleConfig,
}

impl ChartService {
    pub fn new(margins: Margins, style: StyleConfig) -> Self {
        Self { margins, style }
    }

    /// Builds the scene from scratch: scales, ticks, colors and marker
    /// positions are all re-derived from the current dataset and viewport on
    /// every call, so repeated calls with unchanged inputs are identical and
    /// a resize only changes pixel ranges, never data domains.
    pub fn compose(&self, dataset: &[LiteracyRecord], viewport: ViewportSize) -> ChartScene {
        let inner = viewport.inner_area(&self.margins);

        // Group labels come from the whole dataset, so the legend also covers
        // regions whose records carry no plottable rates.
        let colors =
            CategoryColors::from_labels(dataset.iter().map(|r| r.region.as_str()), &self.style.palette);
        let legend = colors
            .entries()
            .map(|(label, color)| LegendEntry {
                label: label.to_string(),
                color: color.to_string(),
            })
            .collect();

        let points: Vec<(&LiteracyRecord, (f64, f64))> = dataset
            .iter()
            .filter_map(|r| r.coordinates().map(|c| (r, c)))
            .collect();

        let x_extent = extent(points.iter().map(|(_, (w, _))| *w));
        let y_extent = extent(points.iter().map(|(_, (_, m))| *m));
        let (Some(x_domain), Some(y_domain)) = (x_extent, y_extent) else {
            // No plottable observations: an empty chart, not an error.
            return ChartScene {
                viewport,
                margins: self.margins,
                inner,
                x_ticks: Vec::new(),
                y_ticks: Vec::new(),
                markers: Vec::new(),
                legend,
            };
        };

        let x_scale = LinearScale::new(x_domain, (0.0, inner.width));
        let y_scale = LinearScale::new(y_domain, (inner.height, 0.0));

        let markers = points
            .iter()
            .map(|(r, (w, m))| Marker {
                x: x_scale.map(*w),
                y: y_scale.map(*m),
                color: colors.color_for(&r.region).to_string(),
                record: (*r).clone(),
            })
            .collect();

        ChartScene {
            viewport,
            margins: self.margins,
            inner,
            x_ticks: axis_ticks(&x_scale, self.style.tick_count),
            y_ticks: axis_ticks(&y_scale, self.style.tick_count),
            markers,
            legend,
        }
    }
}

/// Ticks for one axis. The generator may round past the data domain; ticks
/// outside it are not drawn, so gridlines stay inside the plot.
fn axis_ticks(scale: &LinearScale, count: usize) -> Vec<AxisTick> {
    let (d0, d1) = scale.domain();
    let (lo, hi) = if d1 < d0 { (d1, d0) } else { (d0, d1) };
    nice_ticks(d0, d1, count)
        .into_iter()
        .filter(|v| *v >= lo && *v <= hi)
        .map(|value| AxisTick {
            value,
            offset: scale.map(value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entity: &str, region: &str, women: Option<f64>, men: Option<f64>) -> LiteracyRecord {
        LiteracyRecord::new(
            entity.to_string(),
            region.to_string(),
            Some(2023),
            women,
            men,
        )
    }

    fn service() -> ChartService {
        ChartService::new(Margins::default(), StyleConfig::default())
    }

    fn sample_dataset() -> Vec<LiteracyRecord> {
        vec![
            record("Chad", "Africa", Some(0.0), Some(0.0)),
            record("Niger", "Africa", Some(25.0), Some(50.0)),
            record("India", "Asia", Some(50.0), Some(75.0)),
            record("Nepal", "Asia", Some(75.0), Some(90.0)),
            record("Japan", "Asia", Some(100.0), Some(100.0)),
        ]
    }

    #[test]
    fn test_invalid_records_are_excluded() {
        let mut dataset = sample_dataset();
        dataset[2].women = None;
        let scene = service().compose(&dataset, ViewportSize::new(900.0, 500.0));
        assert_eq!(scene.markers.len(), 4);
        // The extent comes from the four remaining records, so the outermost
        // markers still span the full inner width.
        assert_eq!(scene.markers[0].x, 0.0);
        assert_eq!(scene.markers[3].x, 800.0);
    }

    #[test]
    fn test_marker_projection() {
        let scene = service().compose(&sample_dataset(), ViewportSize::new(900.0, 500.0));
        assert_eq!(scene.markers.len(), 5);
        // Chad sits at the domain minimum on both axes; y range is inverted.
        assert_eq!(scene.markers[0].x, 0.0);
        assert_eq!(scene.markers[0].y, 420.0);
        // Japan sits at both maxima.
        assert_eq!(scene.markers[4].x, 800.0);
        assert_eq!(scene.markers[4].y, 0.0);
    }

    #[test]
    fn test_resize_rescales_positions_only() {
        let svc = service();
        let dataset = sample_dataset();
        let wide = svc.compose(&dataset, ViewportSize::new(1200.0, 500.0));
        let narrow = svc.compose(&dataset, ViewportSize::new(600.0, 500.0));
        assert_eq!(wide.inner.width, 1100.0);
        assert_eq!(narrow.inner.width, 500.0);
        for (w, n) in wide.markers.iter().zip(&narrow.markers) {
            let expected = w.x / 1100.0 * 500.0;
            assert!((n.x - expected).abs() < 1e-9);
            assert_eq!(w.record, n.record);
        }
    }

    #[test]
    fn test_ticks_cover_percent_domain() {
        let scene = service().compose(&sample_dataset(), ViewportSize::new(900.0, 500.0));
        let values: Vec<f64> = scene.x_ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(scene.x_ticks.first().unwrap().offset, 0.0);
        assert_eq!(scene.x_ticks.last().unwrap().offset, 800.0);
    }

    #[test]
    fn test_colors_follow_first_seen_region_order() {
        let scene = service().compose(&sample_dataset(), ViewportSize::new(900.0, 500.0));
        assert_eq!(scene.legend.len(), 2);
        assert_eq!(scene.legend[0].label, "Africa");
        assert_eq!(scene.legend[1].label, "Asia");
        assert_eq!(scene.markers[0].color, scene.legend[0].color);
        assert_eq!(scene.markers[2].color, scene.legend[1].color);
        // Unchanged input, identical derivation.
        let again = service().compose(&sample_dataset(), ViewportSize::new(900.0, 500.0));
        assert_eq!(scene.legend, again.legend);
    }

    #[test]
    fn test_empty_dataset_composes_empty_scene() {
        let scene = service().compose(&[], ViewportSize::new(900.0, 500.0));
        assert!(scene.is_empty());
        assert!(scene.x_ticks.is_empty());
        assert!(scene.y_ticks.is_empty());
        assert!(scene.legend.is_empty());
    }

    #[test]
    fn test_all_invalid_dataset_keeps_legend() {
        let dataset = vec![record("Chad", "Africa", None, None)];
        let scene = service().compose(&dataset, ViewportSize::new(900.0, 500.0));
        assert!(scene.is_empty());
        assert_eq!(scene.legend.len(), 1);
    }

    #[test]
    fn test_degenerate_extent_is_finite() {
        let dataset = vec![
            record("A", "Africa", Some(60.0), Some(60.0)),
            record("B", "Africa", Some(60.0), Some(60.0)),
        ];
        let scene = service().compose(&dataset, ViewportSize::new(900.0, 500.0));
        for marker in &scene.markers {
            assert!(marker.x.is_finite());
            assert!(marker.y.is_finite());
        }
        // Midpoint of each range.
        assert_eq!(scene.markers[0].x, 400.0);
        assert_eq!(scene.markers[0].y, 210.0);
        assert_eq!(scene.x_ticks.len(), 1);
    }
}
