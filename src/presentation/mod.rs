// Presentation layer - UI state and SVG output
pub mod chart_state;
pub mod svg;
