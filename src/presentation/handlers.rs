// HTTP request handlers
use crate::application::error::DashboardError;
use crate::domain::section::SectionId;
use crate::infrastructure::html_page::render_page;
use crate::infrastructure::http_response::{html_response, json_response, svg_response};
use crate::presentation::app_state::AppState;
use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

fn respond(result: Result<Response<Body>, StatusCode>) -> Response {
    match result {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

fn page_response(state: &AppState, section: SectionId) -> Response {
    let page = state.dashboard_service.page(section);
    match render_page(&page, &state.chart_renderer) {
        Ok(html) => respond(html_response(html)),
        Err(e) => DashboardError::from(e).into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page; `?tab=<slug>` picks the section, the first tab otherwise
pub async fn index(Query(query): Query<TabQuery>, State(state): State<Arc<AppState>>) -> Response {
    let section = match query.tab.as_deref() {
        Some(slug) => match state.dashboard_service.resolve(slug) {
            Ok(section) => section,
            Err(e) => return e.into_response(),
        },
        None => SectionId::default(),
    };
    page_response(&state, section)
}

/// Dashboard page with the given section selected
pub async fn section_page(Path(slug): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    match state.dashboard_service.resolve(&slug) {
        Ok(section) => page_response(&state, section),
        Err(e) => e.into_response(),
    }
}

/// Section layout as JSON
pub async fn section_json(Path(slug): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    match state.dashboard_service.resolve(&slug) {
        Ok(section) => respond(json_response(&state.dashboard_service.section(section))),
        Err(e) => e.into_response(),
    }
}

/// One chart as a standalone SVG document
pub async fn chart_svg(
    Path((slug, chart_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let rendered = state
        .dashboard_service
        .resolve(&slug)
        .and_then(|section| state.dashboard_service.chart(section, &chart_id))
        .and_then(|chart| {
            state
                .chart_renderer
                .render(&chart)
                .map_err(DashboardError::from)
        });

    match rendered {
        Ok(svg) => respond(svg_response(svg)),
        Err(e) => e.into_response(),
    }
}
