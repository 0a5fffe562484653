// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::svg_chart::SvgChartRenderer;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub chart_renderer: SvgChartRenderer,
}
