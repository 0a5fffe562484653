// Chart dataset domain models
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub category: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// One named run of (category, value) pairs. A single palette entry colours
/// every point; longer palettes colour points in turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub name: String,
    pub colors: Vec<String>,
    pub points: Vec<DataPoint>,
}

impl SeriesData {
    pub fn new(name: impl Into<String>, colors: Vec<String>, points: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            colors,
            points,
        }
    }

    pub fn categories(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.category.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn color_at(&self, index: usize) -> Option<&str> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[index % self.colors.len()].as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    GroupedBar,
    Pie,
    /// Pie with a hole; `hole` is the inner radius as a fraction of the outer
    Donut { hole: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CenterLabel {
    pub text: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub y_range: Option<(f64, f64)>,
    pub height: u32,
    pub show_legend: bool,
    pub value_suffix: Option<String>,
    pub center_label: Option<CenterLabel>,
    pub series: Vec<SeriesData>,
}

pub const DEFAULT_CHART_HEIGHT: u32 = 400;

impl ChartSpec {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: ChartKind,
        series: Vec<SeriesData>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            x_title: None,
            y_title: None,
            y_range: None,
            height: DEFAULT_CHART_HEIGHT,
            show_legend: matches!(kind, ChartKind::GroupedBar | ChartKind::Pie),
            value_suffix: None,
            center_label: None,
            series,
        }
    }

    pub fn with_axes(mut self, x_title: &str, y_title: &str) -> Self {
        self.x_title = Some(x_title.to_string());
        self.y_title = Some(y_title.to_string());
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some((min, max));
        self
    }

    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    pub fn with_value_labels(mut self, suffix: &str) -> Self {
        self.value_suffix = Some(suffix.to_string());
        self
    }

    pub fn with_center_label(mut self, text: &str, caption: Option<&str>) -> Self {
        self.center_label = Some(CenterLabel {
            text: text.to_string(),
            caption: caption.map(str::to_string),
        });
        self
    }

    /// Categories of the first series; every series of a chart shares them.
    pub fn categories(&self) -> Vec<&str> {
        self.series
            .first()
            .map(SeriesData::categories)
            .unwrap_or_default()
    }
}
