// Dashboard domain model
use super::chart::ChartSpec;
use super::section::SectionId;
use super::widgets::{MetricCard, PhaseCard, TextBlock};
use serde::Serialize;

/// One render instruction inside a section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Block {
    Text(TextBlock),
    Metrics(Vec<MetricCard>),
    Phases(Vec<PhaseCard>),
    Chart(ChartSpec),
    /// Side-by-side columns, each an ordered list of blocks
    Columns(Vec<Vec<Block>>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionLayout {
    pub id: SectionId,
    pub title: String,
    pub subtitle: Option<String>,
    pub blocks: Vec<Block>,
}

impl SectionLayout {
    pub fn new(id: SectionId, title: &str, subtitle: Option<&str>, blocks: Vec<Block>) -> Self {
        Self {
            id,
            title: title.to_string(),
            subtitle: subtitle.map(str::to_string),
            blocks,
        }
    }

    /// Every block, with columns flattened in reading order
    pub fn flatten(&self) -> Vec<&Block> {
        fn walk<'a>(blocks: &'a [Block], out: &mut Vec<&'a Block>) {
            for block in blocks {
                match block {
                    Block::Columns(columns) => {
                        for column in columns {
                            walk(column, out);
                        }
                    }
                    other => out.push(other),
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.blocks, &mut out);
        out
    }

    pub fn charts(&self) -> Vec<&ChartSpec> {
        self.flatten()
            .into_iter()
            .filter_map(|b| match b {
                Block::Chart(chart) => Some(chart),
                _ => None,
            })
            .collect()
    }

    pub fn metric_cards(&self) -> Vec<&MetricCard> {
        self.flatten()
            .into_iter()
            .filter_map(|b| match b {
                Block::Metrics(cards) => Some(cards.iter()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    pub fn phase_cards(&self) -> Vec<&PhaseCard> {
        self.flatten()
            .into_iter()
            .filter_map(|b| match b {
                Block::Phases(cards) => Some(cards.iter()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    pub fn text_blocks(&self) -> Vec<&TextBlock> {
        self.flatten()
            .into_iter()
            .filter_map(|b| match b {
                Block::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn chart(&self, chart_id: &str) -> Option<&ChartSpec> {
        self.charts().into_iter().find(|c| c.id == chart_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    pub id: SectionId,
    pub label: String,
    pub selected: bool,
}

/// Headline bullets for one company, shown below every tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryColumn {
    pub heading: String,
    pub bullets: Vec<String>,
}

/// A full page: tab bar, the selected section and the suite summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPage {
    pub title: String,
    pub tabs: Vec<Tab>,
    pub section: SectionLayout,
    pub summary: Vec<SummaryColumn>,
}

impl DashboardPage {
    pub fn new(
        title: String,
        tabs: Vec<Tab>,
        section: SectionLayout,
        summary: Vec<SummaryColumn>,
    ) -> Self {
        Self {
            title,
            tabs,
            section,
            summary,
        }
    }

    pub fn selected_tab(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::ChartKind;

    fn layout() -> SectionLayout {
        SectionLayout::new(
            SectionId::Telda,
            "Telda",
            None,
            vec![
                Block::Text(TextBlock::Divider),
                Block::Columns(vec![
                    vec![Block::Chart(ChartSpec::new(
                        "growth",
                        "Growth",
                        ChartKind::Line,
                        Vec::new(),
                    ))],
                    vec![Block::Metrics(vec![
                        MetricCard::new("Volume", "$300M", None),
                        MetricCard::new("Per employee", "$143K", None),
                    ])],
                ]),
                Block::Text(TextBlock::caption("source")),
            ],
        )
    }

    #[test]
    fn test_flatten_descends_into_columns() {
        let layout = layout();
        assert_eq!(layout.flatten().len(), 4);
        assert_eq!(layout.charts().len(), 1);
        assert_eq!(layout.metric_cards().len(), 2);
        assert_eq!(layout.text_blocks().len(), 2);
        assert!(layout.phase_cards().is_empty());
    }

    #[test]
    fn test_chart_lookup() {
        let layout = layout();
        assert_eq!(layout.chart("growth").map(|c| c.title.as_str()), Some("Growth"));
        assert!(layout.chart("missing").is_none());
    }
}
