// SVG document rendering
use crate::domain::record::LiteracyRecord;
use crate::domain::scene::ChartScene;
use crate::infrastructure::config::{ChartLabels, StyleConfig};
use std::fmt::Write as _;

const AXIS_COLOR: &str = "#868686";
const GRID_COLOR: &str = "#e0e0e0";
const TEXT_COLOR: &str = "#333";
const ENTITY_LABEL_COLOR: &str = "#525252";
const MUTED_COLOR: &str = "#808080";

const HEADER_HEIGHT: f64 = 76.0;
const LEGEND_TOP_GAP: f64 = 18.0;
const LEGEND_ROW_HEIGHT: f64 = 22.0;
const LEGEND_DOT_RADIUS: f64 = 6.0;
const LEGEND_ENTRY_GAP: f64 = 18.0;
const TICK_LENGTH: f64 = 6.0;

/// Serializes the composed scene into a standalone SVG document: heading
/// block, gridlines, axes, markers with native `<title>` tooltips, and a
/// legend band beneath the plot. The `viewBox` carries the logical size, so
/// the chart scales with whatever container embeds it.
pub fn render_svg(scene: &ChartScene, labels: &ChartLabels, style: &StyleConfig) -> String {
    let legend_rows = legend_row_count(scene);
    let legend_height = if legend_rows == 0 {
        0.0
    } else {
        LEGEND_TOP_GAP + legend_rows as f64 * LEGEND_ROW_HEIGHT
    };
    let total_height = HEADER_HEIGHT + scene.viewport.height + legend_height;

    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" font-family="sans-serif">"#,
        fmt(scene.viewport.width),
        fmt(total_height),
        fmt(scene.viewport.width),
        fmt(total_height),
    );

    write_heading(&mut out, labels);

    let _ = writeln!(
        &mut out,
        r#"<g transform="translate({}, {})">"#,
        fmt(scene.margins.left),
        fmt(HEADER_HEIGHT + scene.margins.top),
    );
    write_gridlines(&mut out, scene);
    write_axes(&mut out, scene, labels);
    write_markers(&mut out, scene, style);
    out.push_str("</g>\n");

    if legend_rows > 0 {
        write_legend(&mut out, scene, HEADER_HEIGHT + scene.viewport.height + LEGEND_TOP_GAP);
    }

    out.push_str("</svg>\n");
    out
}

fn write_heading(out: &mut String, labels: &ChartLabels) {
    let _ = writeln!(
        out,
        r#"<text x="0" y="24" font-size="20" font-weight="bold" fill="{TEXT_COLOR}">{}</text>"#,
        escape_xml(&labels.title),
    );
    let _ = writeln!(
        out,
        r#"<text x="0" y="44" font-size="13" fill="{MUTED_COLOR}">{}</text>"#,
        escape_xml(&labels.subtitle),
    );
    let _ = writeln!(
        out,
        r#"<text x="0" y="62" font-size="10" fill="{MUTED_COLOR}">{}</text>"#,
        escape_xml(&labels.source),
    );
}

fn write_gridlines(out: &mut String, scene: &ChartScene) {
    for tick in &scene.x_ticks {
        let _ = writeln!(
            out,
            r#"<line x1="{x}" x2="{x}" y1="0" y2="{h}" stroke="{GRID_COLOR}" stroke-width="1"/>"#,
            x = fmt(tick.offset),
            h = fmt(scene.inner.height),
        );
    }
    for tick in &scene.y_ticks {
        let _ = writeln!(
            out,
            r#"<line x1="0" x2="{w}" y1="{y}" y2="{y}" stroke="{GRID_COLOR}" stroke-width="1"/>"#,
            w = fmt(scene.inner.width),
            y = fmt(tick.offset),
        );
    }
}

fn write_axes(out: &mut String, scene: &ChartScene, labels: &ChartLabels) {
    for tick in &scene.x_ticks {
        let _ = writeln!(
            out,
            r#"<g transform="translate({}, {})"><line y2="{}" stroke="{AXIS_COLOR}"/><text y="20" text-anchor="middle" font-size="10">{}%</text></g>"#,
            fmt(tick.offset),
            fmt(scene.inner.height),
            fmt(TICK_LENGTH),
            fmt(tick.value),
        );
    }
    for tick in &scene.y_ticks {
        let _ = writeln!(
            out,
            r#"<g transform="translate(0, {})"><line x2="-{}" stroke="{AXIS_COLOR}"/><text x="-10" dy="0.32em" text-anchor="end" font-size="10">{}%</text></g>"#,
            fmt(tick.offset),
            fmt(TICK_LENGTH),
            fmt(tick.value),
        );
    }

    let _ = writeln!(
        out,
        r#"<line x1="0" x2="{}" y1="{y}" y2="{y}" stroke="{AXIS_COLOR}"/>"#,
        fmt(scene.inner.width),
        y = fmt(scene.inner.height),
    );
    let _ = writeln!(
        out,
        r#"<line x1="0" x2="0" y1="0" y2="{}" stroke="{AXIS_COLOR}"/>"#,
        fmt(scene.inner.height),
    );

    let _ = writeln!(
        out,
        r#"<text x="{}" y="{}" text-anchor="middle" font-size="14" fill="{TEXT_COLOR}">{}</text>"#,
        fmt(scene.inner.width / 2.0),
        fmt(scene.inner.height + scene.margins.bottom - 5.0),
        escape_xml(&labels.x_axis),
    );
    let _ = writeln!(
        out,
        r#"<text transform="rotate(-90)" x="{}" y="{}" text-anchor="middle" font-size="14" fill="{TEXT_COLOR}">{}</text>"#,
        fmt(-scene.inner.height / 2.0),
        fmt(-scene.margins.left + 15.0),
        escape_xml(&labels.y_axis),
    );
}

fn write_markers(out: &mut String, scene: &ChartScene, style: &StyleConfig) {
    for marker in &scene.markers {
        let _ = writeln!(
            out,
            r#"<g><circle cx="{}" cy="{}" r="{}" fill="{}" opacity="{}"><title>{}</title></circle><text x="{}" y="{}" font-size="10" fill="{ENTITY_LABEL_COLOR}">{}</text></g>"#,
            fmt(marker.x),
            fmt(marker.y),
            fmt(style.marker_radius),
            escape_xml(&marker.color),
            fmt(style.marker_opacity),
            escape_xml(&tooltip_text(&marker.record)),
            fmt(marker.x + 10.0),
            fmt(marker.y + 4.0),
            escape_xml(&marker.record.entity),
        );
    }
}

fn write_legend(out: &mut String, scene: &ChartScene, top: f64) {
    let mut x = 0.0;
    let mut row = 0usize;
    for entry in &scene.legend {
        let width = legend_entry_width(&entry.label);
        if x > 0.0 && x + width > scene.viewport.width {
            x = 0.0;
            row += 1;
        }
        let cy = top + row as f64 * LEGEND_ROW_HEIGHT + LEGEND_ROW_HEIGHT / 2.0;
        let _ = writeln!(
            out,
            r#"<g><circle cx="{}" cy="{}" r="{}" fill="{}" opacity="0.9"/><text x="{}" y="{}" dy="0.32em" font-size="12">{}</text></g>"#,
            fmt(x + LEGEND_DOT_RADIUS),
            fmt(cy),
            fmt(LEGEND_DOT_RADIUS),
            escape_xml(&entry.color),
            fmt(x + LEGEND_DOT_RADIUS * 2.0 + 4.0),
            fmt(cy),
            escape_xml(&entry.label),
        );
        x += width;
    }
}

fn legend_row_count(scene: &ChartScene) -> usize {
    let mut x = 0.0;
    let mut rows = 0usize;
    for entry in &scene.legend {
        let width = legend_entry_width(&entry.label);
        if x > 0.0 && x + width > scene.viewport.width {
            x = 0.0;
            rows += 1;
        }
        x += width;
        if rows == 0 {
            rows = 1;
        }
    }
    rows
}

// Rough advance width; real text measurement would need font metrics.
fn legend_entry_width(label: &str) -> f64 {
    LEGEND_DOT_RADIUS * 2.0 + 4.0 + label.chars().count() as f64 * 6.5 + LEGEND_ENTRY_GAP
}

fn tooltip_text(record: &LiteracyRecord) -> String {
    let year = match record.year {
        Some(year) => year.to_string(),
        None => "n/a".to_string(),
    };
    format!(
        "{} ({year})\nWomen: {}% Men: {}%\n{}",
        record.entity,
        fmt_rate(record.women),
        fmt_rate(record.men),
        record.region,
    )
}

fn fmt_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => fmt((rate * 10.0).round() / 10.0),
        None => "n/a".to_string(),
    }
}

/// Decimal formatting for SVG attributes and labels: up to three decimals,
/// trailing zeros trimmed.
fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    let mut s = format!("{rounded:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::chart_service::ChartService;
    use crate::domain::viewport::{Margins, ViewportSize};

    fn record(entity: &str, region: &str, women: f64, men: f64) -> LiteracyRecord {
        LiteracyRecord::new(
            entity.to_string(),
            region.to_string(),
            Some(2023),
            Some(women),
            Some(men),
        )
    }

    fn rendered(dataset: &[LiteracyRecord]) -> String {
        let service = ChartService::new(Margins::default(), StyleConfig::default());
        let scene = service.compose(dataset, ViewportSize::new(900.0, 500.0));
        render_svg(&scene, &ChartLabels::default(), &StyleConfig::default())
    }

    #[test]
    fn test_document_structure() {
        let svg = rendered(&[
            record("Chad", "Africa", 30.0, 40.0),
            record("India", "Asia", 75.0, 85.0),
        ]);
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 900 "));
        // Two markers, two legend dots.
        assert_eq!(svg.matches("<circle").count(), 4);
        assert_eq!(svg.matches("<title>").count(), 2);
    }

    #[test]
    fn test_tick_labels_carry_percent() {
        let svg = rendered(&[
            record("Chad", "Africa", 0.0, 0.0),
            record("Japan", "Asia", 100.0, 100.0),
        ]);
        assert!(svg.contains(">0%</text>"));
        assert!(svg.contains(">100%</text>"));
    }

    #[test]
    fn test_entity_names_are_escaped() {
        let svg = rendered(&[record("Trinidad & Tobago", "Americas", 90.0, 92.0)]);
        assert!(svg.contains("Trinidad &amp; Tobago"));
        assert!(!svg.contains("Trinidad & Tobago"));
    }

    #[test]
    fn test_tooltip_contents() {
        let svg = rendered(&[record("Mali", "Africa", 38.25, 50.1)]);
        assert!(svg.contains("<title>Mali (2023)"));
        assert!(svg.contains("Women: 38.3% Men: 50.1%"));
    }

    #[test]
    fn test_legend_labels_present() {
        let svg = rendered(&[
            record("Chad", "Africa", 30.0, 40.0),
            record("India", "Asia", 75.0, 85.0),
        ]);
        assert!(svg.contains(">Africa</text>"));
        assert!(svg.contains(">Asia</text>"));
    }

    #[test]
    fn test_empty_scene_renders_without_markers() {
        let svg = rendered(&[]);
        assert!(svg.starts_with("<svg "));
        assert_eq!(svg.matches("<circle").count(), 0);
    }

    #[test]
    fn test_fmt_trims_trailing_zeros() {
        assert_eq!(fmt(20.0), "20");
        assert_eq!(fmt(0.2), "0.2");
        assert_eq!(fmt(33.3333333), "33.333");
        assert_eq!(fmt(-0.0001), "0");
    }
}
