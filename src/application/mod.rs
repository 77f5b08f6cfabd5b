// Application layer - Use cases composing the chart
pub mod chart_service;
pub mod dataset_provider;
