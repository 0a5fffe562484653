// Metric cards, phase cards and text blocks
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

impl MetricCard {
    pub fn new(label: &str, value: &str, delta: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            delta: delta.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseCard {
    pub title: String,
    pub phase: String,
    pub description: String,
    pub investment: String,
    pub revenue: String,
    pub roi: String,
}

impl PhaseCard {
    /// A loss-making phase is one whose ROI literal is negative.
    pub fn is_loss(&self) -> bool {
        self.roi.starts_with('-')
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextBlock {
    Heading { level: u8, text: String },
    Paragraph { lead: Option<String>, text: String },
    Bullets { items: Vec<String> },
    Caption { text: String },
    Divider,
}

impl TextBlock {
    pub fn heading(level: u8, text: &str) -> Self {
        TextBlock::Heading {
            level: level.clamp(1, 6),
            text: text.to_string(),
        }
    }

    pub fn paragraph(text: &str) -> Self {
        TextBlock::Paragraph {
            lead: None,
            text: text.to_string(),
        }
    }

    pub fn bullets(items: &[&str]) -> Self {
        TextBlock::Bullets {
            items: items.iter().map(|i| i.to_string()).collect(),
        }
    }

    pub fn caption(text: &str) -> Self {
        TextBlock::Caption {
            text: text.to_string(),
        }
    }
}
