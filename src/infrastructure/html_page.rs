// HTML rendering of a dashboard page with server-side leptos components
use crate::domain::dashboard::{Block, DashboardPage, SummaryColumn, Tab};
use crate::domain::widgets::{MetricCard, PhaseCard, TextBlock};
use crate::infrastructure::svg_chart::{ChartRenderError, SvgChartRenderer};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

const STYLESHEET: &str = r#"
    body { font-family: "Source Sans Pro", sans-serif; margin: 0 auto; max-width: 1400px; padding: 1.5rem 2rem; color: #2d3748; }
    .tab-header { font-size: 2.5rem; font-weight: bold; margin-bottom: 1rem; }
    .tabs { display: flex; gap: 1.5rem; border-bottom: 1px solid #dee2e6; margin-bottom: 1.5rem; }
    .tab { padding: 0.6rem 0; color: #4a5568; text-decoration: none; border-bottom: 3px solid transparent; }
    .tab.active { color: #ff4b4b; border-bottom-color: #ff4b4b; }
    .columns { display: grid; grid-template-columns: repeat(var(--cols), minmax(0, 1fr)); gap: 1.5rem; }
    .metric-card { background: white; padding: 1.5rem; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); border-left: 4px solid #667eea; margin-bottom: 1rem; }
    .metric-value { font-size: 1.8rem; font-weight: bold; color: #2d3748; margin: 0.5rem 0; }
    .metric-label { font-size: 0.9rem; color: #718096; font-weight: 500; }
    .metric-delta { color: #38a169; font-weight: 500; font-size: 0.9rem; }
    .phase-card { background: #f8f9fa; padding: 1.5rem; border-radius: 8px; border: 1px solid #dee2e6; text-align: center; margin-bottom: 1rem; }
    .phase-card h4 { color: #667eea; margin: 0 0 0.5rem 0; }
    .phase-card .description { color: #6c757d; font-size: 0.85rem; margin: 0 0 1rem 0; }
    .phase-card .figure { font-size: 0.9rem; margin: 0.3rem 0; }
    .phase-card .roi { font-size: 1.2rem; font-weight: bold; margin: 0.5rem 0; }
    .roi.loss { color: #dc3545; }
    .roi.gain { color: #28a745; }
    .chart svg { max-width: 100%; height: auto; }
    .caption { font-style: italic; color: #718096; }
"#;

/// A section block with its chart already drawn to SVG.
enum PageBlock {
    Text(TextBlock),
    Metrics(Vec<MetricCard>),
    Phases(Vec<PhaseCard>),
    Chart { id: String, title: String, svg: String },
    Columns(Vec<Vec<PageBlock>>),
}

fn prepare_block(block: &Block, charts: &SvgChartRenderer) -> Result<PageBlock, ChartRenderError> {
    Ok(match block {
        Block::Text(text) => PageBlock::Text(text.clone()),
        Block::Metrics(cards) => PageBlock::Metrics(cards.clone()),
        Block::Phases(cards) => PageBlock::Phases(cards.clone()),
        Block::Chart(chart) => PageBlock::Chart {
            id: chart.id.clone(),
            title: chart.title.clone(),
            svg: charts.render(chart)?,
        },
        Block::Columns(columns) => PageBlock::Columns(
            columns
                .iter()
                .map(|column| {
                    column
                        .iter()
                        .map(|inner| prepare_block(inner, charts))
                        .collect::<Result<Vec<_>, _>>()
                })
                .collect::<Result<Vec<_>, _>>()?,
        ),
    })
}

pub fn section_href(tab: &Tab) -> String {
    format!("/sections/{}", tab.id.slug())
}

/// Renders the whole page. Only the selected section's content is emitted.
pub fn render_page(page: &DashboardPage, charts: &SvgChartRenderer) -> Result<String, ChartRenderError> {
    let blocks = page
        .section
        .blocks
        .iter()
        .map(|block| prepare_block(block, charts))
        .collect::<Result<Vec<_>, _>>()?;
    let heading = page
        .selected_tab()
        .map(|tab| format!("Financial Dashboards Suite - {}", tab.label))
        .unwrap_or_else(|| "Financial Dashboards Suite".to_string());
    let page = page.clone();

    Ok(Owner::new().with(move || shell(heading, page, blocks).to_html()))
}

fn shell(heading: String, page: DashboardPage, blocks: Vec<PageBlock>) -> impl IntoView {
    let section = page.section;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{heading}</title>
                <style inner_html=STYLESHEET></style>
            </head>
            <body>
                <div class="tab-header">{page.title}</div>
                <TabBar tabs=page.tabs/>
                <section role="tabpanel" id=section.id.slug()>
                    <h1>{section.title}</h1>
                    {section.subtitle.map(|subtitle| view! { <h3>{subtitle}</h3> })}
                    {blocks.into_iter().map(block_view).collect_view()}
                </section>
                <hr/>
                <h3>"📊 Dashboard Suite Summary"</h3>
                <SuiteSummary columns=page.summary/>
            </body>
        </html>
    }
}

#[component]
fn TabBar(tabs: Vec<Tab>) -> impl IntoView {
    view! {
        <nav class="tabs" role="tablist">
            {tabs
                .into_iter()
                .map(|tab| {
                    let href = section_href(&tab);
                    let class = if tab.selected { "tab active" } else { "tab" };
                    let selected = if tab.selected { "true" } else { "false" };
                    view! {
                        <a role="tab" class=class aria-selected=selected href=href>
                            {tab.label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn Columns(count: usize, children: Children) -> impl IntoView {
    view! {
        <div class="columns" style=format!("--cols: {}", count.max(1))>
            {children()}
        </div>
    }
}

// Columns nest blocks, so this stays a plain function over a concrete view type
fn block_view(block: PageBlock) -> AnyView {
    match block {
        PageBlock::Text(text) => view! { <TextView block=text/> }.into_any(),
        PageBlock::Metrics(cards) => {
            let count = cards.len();
            view! {
                <Columns count>
                    {cards.into_iter().map(|card| view! { <div><MetricTile card/></div> }).collect_view()}
                </Columns>
            }
            .into_any()
        }
        PageBlock::Phases(cards) => {
            let count = cards.len();
            view! {
                <Columns count>
                    {cards.into_iter().map(|card| view! { <PhaseTile card/> }).collect_view()}
                </Columns>
            }
            .into_any()
        }
        PageBlock::Chart { id, title, svg } => view! {
            <figure class="chart" id=format!("chart-{id}") aria-label=title inner_html=svg></figure>
        }
        .into_any(),
        PageBlock::Columns(columns) => {
            let count = columns.len();
            view! {
                <Columns count>
                    {columns
                        .into_iter()
                        .map(|column| view! { <div>{column.into_iter().map(block_view).collect_view()}</div> })
                        .collect_view()}
                </Columns>
            }
            .into_any()
        }
    }
}

#[component]
fn TextView(block: TextBlock) -> impl IntoView {
    match block {
        TextBlock::Heading { level, text } => heading(level, text),
        TextBlock::Paragraph { lead, text } => view! {
            <p>{lead.map(|lead| view! { <strong>{lead}</strong>" " })}{text}</p>
        }
        .into_any(),
        TextBlock::Bullets { items } => view! { <BulletList items/> }.into_any(),
        TextBlock::Caption { text } => view! { <p class="caption">{text}</p> }.into_any(),
        TextBlock::Divider => view! { <hr/> }.into_any(),
    }
}

fn heading(level: u8, text: String) -> AnyView {
    match level {
        1 => view! { <h1>{text}</h1> }.into_any(),
        2 => view! { <h2>{text}</h2> }.into_any(),
        3 => view! { <h3>{text}</h3> }.into_any(),
        4 => view! { <h4>{text}</h4> }.into_any(),
        5 => view! { <h5>{text}</h5> }.into_any(),
        _ => view! { <h6>{text}</h6> }.into_any(),
    }
}

#[component]
fn BulletList(items: Vec<String>) -> impl IntoView {
    view! {
        <ul>
            {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
        </ul>
    }
}

#[component]
fn MetricTile(card: MetricCard) -> impl IntoView {
    view! {
        <div class="metric-card">
            <div class="metric-label">{card.label}</div>
            <div class="metric-value">{card.value}</div>
            {card.delta.map(|delta| view! { <div class="metric-delta">{delta}</div> })}
        </div>
    }
}

#[component]
fn PhaseTile(card: PhaseCard) -> impl IntoView {
    let roi_class = if card.is_loss() { "roi loss" } else { "roi gain" };

    view! {
        <div class="phase-card" data-phase=card.phase>
            <h4>{card.title}</h4>
            <p class="description">{card.description}</p>
            <div class="figure"><strong>"Investment:"</strong>" "{card.investment}</div>
            <div class="figure"><strong>"Revenue:"</strong>" "{card.revenue}</div>
            <div class=roi_class>"ROI: "{card.roi}</div>
        </div>
    }
}

#[component]
fn SuiteSummary(columns: Vec<SummaryColumn>) -> impl IntoView {
    let count = columns.len();

    view! {
        <Columns count>
            {columns
                .into_iter()
                .map(|column| view! {
                    <div>
                        <p><strong>{column.heading}</strong></p>
                        <BulletList items=column.bullets/>
                    </div>
                })
                .collect_view()}
        </Columns>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::domain::section::SectionId;
    use chrono::NaiveDate;
    use strum::IntoEnumIterator;

    fn service() -> DashboardService {
        DashboardService::new(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    }

    fn render(view: impl FnOnce() -> AnyView) -> String {
        Owner::new().with(|| view().to_html())
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render(|| {
            let block = TextBlock::paragraph("Initial setup & <infra>");
            view! { <TextView block/> }.into_any()
        });

        assert!(html.contains("Initial setup &amp; &lt;infra&gt;"));
        assert!(!html.contains("<infra>"));
    }

    #[test]
    fn test_metric_tile_delta_is_optional() {
        let with_delta = render(|| {
            let card = MetricCard::new("ARPU (FY23)", "£94", Some("+213% YoY"));
            view! { <MetricTile card/> }.into_any()
        });
        let without_delta = render(|| {
            let card = MetricCard::new("Customer Retention", "92%", None);
            view! { <MetricTile card/> }.into_any()
        });

        assert!(with_delta.contains("£94"));
        assert!(with_delta.contains("class=\"metric-delta\""));
        assert!(!without_delta.contains("class=\"metric-delta\""));
    }

    #[test]
    fn test_page_marks_one_tab_selected() {
        let renderer = SvgChartRenderer::default();
        for id in SectionId::iter() {
            let html = render_page(&service().page(id), &renderer).unwrap();
            assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
            assert_eq!(html.matches("aria-selected=\"false\"").count(), 2);
            assert_eq!(html.matches("role=\"tabpanel\"").count(), 1);
            assert!(html.contains(&format!("id=\"{}\"", id.slug())));
        }
    }

    #[test]
    fn test_revolut_page_contents() {
        let renderer = SvgChartRenderer::default();
        let html = render_page(&service().page(SectionId::RevolutYouth), &renderer).unwrap();

        assert_eq!(html.matches("class=\"metric-card\"").count(), 4);
        assert_eq!(html.matches("class=\"phase-card\"").count(), 4);
        assert_eq!(html.matches("<figure class=\"chart\"").count(), 6);
        assert_eq!(html.matches("class=\"roi loss\"").count(), 1);
        assert!(html.contains("March 14, 2025"));
        assert!(html.contains("Initial setup &amp; infrastructure"));
    }

    #[test]
    fn test_american_express_page_contents() {
        let renderer = SvgChartRenderer::default();
        let html = render_page(&service().page(SectionId::AmericanExpress), &renderer).unwrap();

        assert_eq!(html.matches("class=\"metric-card\"").count(), 3);
        assert_eq!(html.matches("<figure class=\"chart\"").count(), 11);
        assert!(html.contains("<svg"));
        assert!(html.contains("Data reflects strong performance"));
        assert!(html.contains("Dashboard Suite Summary"));
    }

    #[test]
    fn test_render_page_is_idempotent() {
        let renderer = SvgChartRenderer::default();
        let page = service().page(SectionId::Telda);
        assert_eq!(
            render_page(&page, &renderer).unwrap(),
            render_page(&page, &renderer).unwrap()
        );
    }
}
