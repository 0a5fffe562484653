// Dashboard errors
use crate::infrastructure::svg_chart::ChartRenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown section '{0}'")]
    UnknownSection(String),

    #[error("section '{section}' has no chart '{chart}'")]
    UnknownChart { section: String, chart: String },

    #[error("failed to render chart: {0}")]
    Render(#[from] ChartRenderError),
}
