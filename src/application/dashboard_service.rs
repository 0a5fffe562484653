// Dashboard service - Use case for building dashboard pages
use crate::application::catalog::{section_layout, suite_summary, SUITE_TITLE};
use crate::application::error::DashboardError;
use crate::domain::chart::ChartSpec;
use crate::domain::dashboard::{DashboardPage, SectionLayout, Tab};
use crate::domain::section::SectionId;
use chrono::NaiveDate;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Debug, Clone)]
pub struct DashboardService {
    updated_on: NaiveDate,
}

impl DashboardService {
    /// `updated_on` is the date shown as the dashboard's last update.
    pub fn new(updated_on: NaiveDate) -> Self {
        Self { updated_on }
    }

    pub fn resolve(&self, slug: &str) -> Result<SectionId, DashboardError> {
        SectionId::from_str(slug).map_err(|_| DashboardError::UnknownSection(slug.to_string()))
    }

    pub fn section(&self, id: SectionId) -> SectionLayout {
        tracing::debug!("Building layout for section {}", id);
        section_layout(id, self.updated_on)
    }

    pub fn page(&self, active: SectionId) -> DashboardPage {
        let tabs = SectionId::iter()
            .map(|id| Tab {
                id,
                label: id.tab_label().to_string(),
                selected: id == active,
            })
            .collect();

        DashboardPage::new(
            SUITE_TITLE.to_string(),
            tabs,
            self.section(active),
            suite_summary(),
        )
    }

    pub fn chart(&self, id: SectionId, chart_id: &str) -> Result<ChartSpec, DashboardError> {
        self.section(id)
            .chart(chart_id)
            .cloned()
            .ok_or_else(|| DashboardError::UnknownChart {
                section: id.to_string(),
                chart: chart_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> DashboardService {
        DashboardService::new(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    }

    #[test]
    fn test_resolve() {
        let service = service();
        assert_eq!(service.resolve("telda").unwrap(), SectionId::Telda);
        assert!(matches!(
            service.resolve("monzo"),
            Err(DashboardError::UnknownSection(slug)) if slug == "monzo"
        ));
    }

    #[test]
    fn test_page_selects_exactly_one_tab() {
        let service = service();
        let order = [
            SectionId::AmericanExpress,
            SectionId::RevolutYouth,
            SectionId::Telda,
            SectionId::AmericanExpress,
        ];

        for id in order {
            let page = service.page(id);
            assert_eq!(page.tabs.len(), 3);
            assert_eq!(page.tabs.iter().filter(|t| t.selected).count(), 1);
            assert_eq!(page.selected_tab().map(|t| t.id), Some(id));
            assert_eq!(page.section.id, id);
        }
    }

    #[test]
    fn test_chart_lookup() {
        let service = service();
        let chart = service.chart(SectionId::Telda, "youth-segment").unwrap();
        assert_eq!(chart.series[0].values(), vec![19.9, 80.1]);

        assert!(matches!(
            service.chart(SectionId::Telda, "revenue-growth"),
            Err(DashboardError::UnknownChart { .. })
        ));
    }
}
