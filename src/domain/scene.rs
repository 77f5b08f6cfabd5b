// Composed chart scene handed to the renderer
use super::record::LiteracyRecord;
use super::viewport::{InnerArea, Margins, ViewportSize};

/// One axis tick: the data value and its pixel offset along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub offset: f64,
}

/// One plotted observation: pixel position within the inner drawing area,
/// fill color, and the source record for its label and tooltip.
#[derive(Debug, Clone)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub record: LiteracyRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Everything the drawing surface needs, fully derived from the current
/// dataset and viewport. Contains no rendering logic.
#[derive(Debug, Clone)]
pub struct ChartScene {
    pub viewport: ViewportSize,
    pub margins: Margins,
    pub inner: InnerArea,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub markers: Vec<Marker>,
    pub legend: Vec<LegendEntry>,
}

impl ChartScene {
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
