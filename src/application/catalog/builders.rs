// Reusable chart and card builders over literal tables
use crate::domain::chart::{ChartKind, ChartSpec, DataPoint, SeriesData};
use crate::domain::widgets::{MetricCard, PhaseCard};

/// A literal (category, value) table
pub type Table = [(&'static str, f64)];

pub struct PhaseRow {
    pub title: &'static str,
    pub phase: &'static str,
    pub investment: &'static str,
    pub revenue: &'static str,
    pub roi: &'static str,
    pub description: &'static str,
}

fn palette(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
}

pub fn series(name: &str, table: &Table, colors: &[&str]) -> SeriesData {
    let points = table
        .iter()
        .map(|(category, value)| DataPoint::new(*category, *value))
        .collect();
    SeriesData::new(name, palette(colors), points)
}

fn zipped_series(name: &str, categories: &[&str], values: &[f64], color: &str) -> SeriesData {
    debug_assert_eq!(categories.len(), values.len(), "series {name} is ragged");
    let points = categories
        .iter()
        .zip(values)
        .map(|(category, value)| DataPoint::new(*category, *value))
        .collect();
    SeriesData::new(name, palette(&[color]), points)
}

pub fn line_chart(id: &str, title: &str, name: &str, table: &Table, color: &str) -> ChartSpec {
    ChartSpec::new(id, title, ChartKind::Line, vec![series(name, table, &[color])])
}

/// Single-series bar chart; a multi-colour palette colours bars in turn
pub fn bar_chart(id: &str, title: &str, table: &Table, colors: &[&str]) -> ChartSpec {
    ChartSpec::new(id, title, ChartKind::Bar, vec![series(title, table, colors)])
}

/// Side-by-side bars, one `(name, values, colour)` group per series
pub fn grouped_bar_chart(
    id: &str,
    title: &str,
    categories: &[&str],
    groups: &[(&str, &[f64], &str)],
) -> ChartSpec {
    let series = groups
        .iter()
        .map(|(name, values, color)| zipped_series(name, categories, values, color))
        .collect();
    ChartSpec::new(id, title, ChartKind::GroupedBar, series)
}

pub fn pie_chart(id: &str, title: &str, table: &Table, colors: &[&str]) -> ChartSpec {
    ChartSpec::new(id, title, ChartKind::Pie, vec![series(title, table, colors)])
}

pub fn donut_chart(id: &str, title: &str, table: &Table, colors: &[&str], hole: f64) -> ChartSpec {
    ChartSpec::new(
        id,
        title,
        ChartKind::Donut { hole },
        vec![series(title, table, colors)],
    )
}

pub fn metric_cards(rows: &[(&str, &str, Option<&str>)]) -> Vec<MetricCard> {
    rows.iter()
        .map(|(label, value, delta)| MetricCard::new(label, value, *delta))
        .collect()
}

pub fn phase_cards(rows: &[PhaseRow]) -> Vec<PhaseCard> {
    rows.iter()
        .map(|row| PhaseCard {
            title: row.title.to_string(),
            phase: row.phase.to_string(),
            description: row.description.to_string(),
            investment: row.investment.to_string(),
            revenue: row.revenue.to_string(),
            roi: row.roi.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_chart_keeps_table_order() {
        let chart = line_chart(
            "revenue",
            "Revenue",
            "Revenue",
            &[("FY21", 25.0), ("FY20", 0.0)],
            "#667eea",
        );

        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.categories(), vec!["FY21", "FY20"]);
        assert_eq!(chart.series[0].values(), vec![25.0, 0.0]);
        assert_eq!(chart.series[0].color_at(0), Some("#667eea"));
    }

    #[test]
    fn test_grouped_bars_share_categories() {
        let chart = grouped_bar_chart(
            "cac-ltv",
            "CAC vs. LTV",
            &["Phase 1", "Phase 2"],
            &[("CAC", &[40.0, 20.0], "#764ba2"), ("LTV", &[500.0, 550.0], "#667eea")],
        );

        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "CAC");
        assert_eq!(chart.series[1].categories(), vec!["Phase 1", "Phase 2"]);
        assert_eq!(chart.series[1].values(), vec![500.0, 550.0]);
        assert!(chart.show_legend);
    }

    #[test]
    fn test_metric_cards() {
        let cards = metric_cards(&[("Customer Retention", "92%", None), ("ARPU", "£94", Some("+213% YoY"))]);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].delta, None);
        assert_eq!(cards[1].delta.as_deref(), Some("+213% YoY"));
    }
}
