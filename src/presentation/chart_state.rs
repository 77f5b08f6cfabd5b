// Interactive chart state with explicit transitions
use crate::domain::record::LiteracyRecord;
use crate::domain::viewport::{SizePolicy, ViewportSize};

/// Dataset loading lifecycle: `Idle -> Loading -> Ready | Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// At most one tooltip at a time: pointer position plus the hovered record.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub record: LiteracyRecord,
}

/// Snapshot of everything the page shell owns. Each transition consumes the
/// previous state and returns the next one, so every step can be tested in
/// isolation and derived values are always recomputed from current inputs.
#[derive(Debug, Clone)]
pub struct ChartState {
    phase: LoadPhase,
    dataset: Vec<LiteracyRecord>,
    viewport: ViewportSize,
    tooltip: Option<Tooltip>,
}

impl ChartState {
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            phase: LoadPhase::Idle,
            dataset: Vec::new(),
            viewport,
            tooltip: None,
        }
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn dataset(&self) -> &[LiteracyRecord] {
        &self.dataset
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn fetch_started(mut self) -> Self {
        self.phase = LoadPhase::Loading;
        self
    }

    /// An empty dataset is still `Ready`: it renders as an empty chart.
    pub fn fetch_succeeded(mut self, records: Vec<LiteracyRecord>) -> Self {
        self.dataset = records;
        self.phase = LoadPhase::Ready;
        self
    }

    /// The stored message is always a non-empty human-readable string, and
    /// the phase is written exactly once.
    pub fn fetch_failed(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "an error occurred while fetching the dataset".to_string()
        } else {
            message
        };
        self.phase = LoadPhase::Failed(message);
        self
    }

    /// Reads only the current container width; safe to run redundantly.
    pub fn resized(mut self, container_width: f64, policy: &SizePolicy) -> Self {
        self.viewport = ViewportSize::from_container(container_width, policy);
        self
    }

    /// Entering a marker replaces any visible tooltip unconditionally.
    pub fn hover_entered(mut self, x: f64, y: f64, record: LiteracyRecord) -> Self {
        self.tooltip = Some(Tooltip { x, y, record });
        self
    }

    /// Leaving clears unconditionally; there is no debounce.
    pub fn hover_left(mut self) -> Self {
        self.tooltip = None;
        self
    }
}
