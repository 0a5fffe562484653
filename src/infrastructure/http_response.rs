// HTTP response utilities for HTML, SVG and JSON bodies
use crate::application::error::DashboardError;
use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
    response::IntoResponse,
};
use serde::Serialize;

const HTML: &str = "text/html; charset=utf-8";
const SVG: &str = "image/svg+xml";
const JSON: &str = "application/json";

/// Build a 200 response with an explicit length for a fully rendered body
fn rendered_response(content_type: &'static str, body: Vec<u8>) -> Result<Response<Body>, StatusCode> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, HeaderValue::from(body.len()))
        .body(Body::from(body))
        .map_err(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

pub fn html_response(html: String) -> Result<Response<Body>, StatusCode> {
    rendered_response(HTML, html.into_bytes())
}

pub fn svg_response(svg: String) -> Result<Response<Body>, StatusCode> {
    rendered_response(SVG, svg.into_bytes())
}

pub fn json_response<T: Serialize>(value: &T) -> Result<Response<Body>, StatusCode> {
    let body = serde_json::to_vec(value).map_err(|e| {
        tracing::error!("JSON serialization error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    rendered_response(JSON, body)
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            DashboardError::UnknownSection(_) | DashboardError::UnknownChart { .. } => {
                StatusCode::NOT_FOUND
            }
            DashboardError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Dashboard error: {}", self);
        } else {
            tracing::debug!("Dashboard lookup failed: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::svg_chart::ChartRenderError;

    #[test]
    fn test_html_response_headers() {
        let response = html_response("<p>ok</p>".to_string()).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], HTML);
        assert_eq!(response.headers()[header::CONTENT_LENGTH], "9");
    }

    #[test]
    fn test_json_response() {
        let response = json_response(&vec![65.9, 10.1]).unwrap();
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON);
        assert_eq!(response.headers()[header::CONTENT_LENGTH], "11");
    }

    #[test]
    fn test_error_status_codes() {
        let missing = DashboardError::UnknownSection("monzo".to_string()).into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let chart = DashboardError::UnknownChart {
            section: "telda".to_string(),
            chart: "arpu".to_string(),
        }
        .into_response();
        assert_eq!(chart.status(), StatusCode::NOT_FOUND);

        let render = DashboardError::Render(ChartRenderError::InvalidColor("#12".to_string())).into_response();
        assert_eq!(render.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
