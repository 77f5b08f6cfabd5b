// Responsive viewport sizing and fixed chart margins

/// How the chart tracks its container: a fraction of the container width,
/// clamped to `[min_width, max_width]`, with height fixed by aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizePolicy {
    pub width_fraction: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub aspect_ratio: f64,
}

impl Default for SizePolicy {
    fn default() -> Self {
        Self {
            width_fraction: 0.5,
            min_width: 500.0,
            max_width: 1200.0,
            aspect_ratio: 900.0 / 500.0,
        }
    }
}

/// Current chart size in logical pixels. Recomputed from the container on
/// every resize, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Deterministic: the same container width always yields the same size,
    /// so redundant resize events are harmless.
    pub fn from_container(container_width: f64, policy: &SizePolicy) -> Self {
        let width = (container_width * policy.width_fraction)
            .max(policy.min_width)
            .min(policy.max_width);
        let height = width / policy.aspect_ratio;
        Self { width, height }
    }

    /// The drawing area once the fixed margins are subtracted.
    pub fn inner_area(&self, margins: &Margins) -> InnerArea {
        InnerArea {
            width: (self.width - margins.left - margins.right).max(0.0),
            height: (self.height - margins.top - margins.bottom).max(0.0),
        }
    }
}

/// Fixed margins around the inner drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 60.0,
            left: 70.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerArea {
    pub width: f64,
    pub height: f64,
}
