// Infrastructure layer - Configuration, rendering and HTTP adapters
pub mod config;
pub mod html_page;
pub mod http_response;
pub mod svg_chart;
