// American Express case study section
use super::builders::{bar_chart, donut_chart, line_chart, metric_cards, pie_chart, Table};
use crate::domain::dashboard::{Block, SectionLayout};
use crate::domain::section::SectionId;
use crate::domain::widgets::TextBlock;

const BURGUNDY: &str = "#722F37";
const LIGHT_RED: &str = "#A85751";
const MEDIUM_RED: &str = "#8B3E3E";
const ROSE: &str = "#B87070";
const CLARET: &str = "#800020";
const PALE_GREY: &str = "#F0F0F0";

const SMALL_CHART_HEIGHT: u32 = 300;

const RECORD_GROWTH: &Table = &[("Revenue", 65.9), ("Net Income", 10.1)];

const ROI_VS_COMPETITORS: &Table = &[("American Express", 22.5), ("Visa", 18.3), ("Mastercard", 17.9)];

const CUSTOMER_VALUE: &Table = &[
    ("2019", 350000.0),
    ("2020", 385000.0),
    ("2021", 420000.0),
    ("2022", 455000.0),
    ("2023", 490000.0),
];

const ACQUISITION_COST: &Table = &[
    ("Q1 2023", 75.0),
    ("Q2 2023", 72.0),
    ("Q3 2023", 68.0),
    ("Q4 2023", 65.0),
    ("Q1 2024", 63.0),
];

const MARKET_SHARE: &Table = &[("2021", 18.0), ("2022", 19.0), ("2023", 21.0)];

const INVESTOR_CONFIDENCE: &Table = &[("Jan 2020", 0.0), ("Mar 2025", 120.0)];

const MARGIN_BY_CARD: &Table = &[("Platinum", 40.0), ("Gold", 30.0), ("Green", 15.0), ("Cobrand", 15.0)];

const GROWTH_DRIVERS: &Table = &[("Gen Z/Millennials", 75.0), ("Other", 25.0)];

// Ratio donuts: the figure against its complement to 100
const DIVIDEND_YIELD: &Table = &[("Dividend yield", 0.93), ("Remainder", 99.07)];
const PE_RATIO: &Table = &[("P/E ratio", 22.98), ("Remainder", 77.02)];

const KPIS: &[(&str, &str, Option<&str>)] = &[
    ("Customer Retention", "92%", None),
    ("Avg. Transaction Value", "$1,250", None),
    ("Cross-Sell Rate", "1.5x", None),
];

const SPENDING_GROWTH: &Table = &[("Gen Z", 16.0), ("Millennials", 12.0), ("Gen X", 7.0), ("Baby Boomers", 4.0)];

pub fn layout() -> SectionLayout {
    let record_growth = bar_chart(
        "record-growth",
        "Record Growth in (B$)",
        RECORD_GROWTH,
        &[BURGUNDY, LIGHT_RED],
    )
    .with_axes("Category", "Value")
    .with_legend(true)
    .with_height(SMALL_CHART_HEIGHT);

    let roi = bar_chart(
        "roi-vs-competitors",
        "ROI vs. Competitors",
        ROI_VS_COMPETITORS,
        &[BURGUNDY, LIGHT_RED, MEDIUM_RED],
    )
    .with_axes("Company", "ROI (%)")
    .with_height(SMALL_CHART_HEIGHT);

    let customer_value = line_chart(
        "customer-value",
        "Customer Value Growth",
        "Revenue per Customer",
        CUSTOMER_VALUE,
        BURGUNDY,
    )
    .with_axes("Year", "Revenue per Customer ($)")
    .with_height(SMALL_CHART_HEIGHT);

    let acquisition_cost = line_chart(
        "acquisition-cost",
        "Customer Acquisition Cost (CAC)",
        "CAC",
        ACQUISITION_COST,
        BURGUNDY,
    )
    .with_axes("Quarter", "Cost ($)")
    .with_height(SMALL_CHART_HEIGHT);

    let market_share = bar_chart(
        "market-share",
        "Market Share Growth",
        MARKET_SHARE,
        &[CLARET, "#B76E79", "#D8A7B1"],
    )
    .with_axes("Year", "Market Share (%)")
    .with_value_labels("%")
    .with_height(SMALL_CHART_HEIGHT);

    let confidence = line_chart(
        "investor-confidence",
        "Investor Confidence Index",
        "Investor Confidence",
        INVESTOR_CONFIDENCE,
        CLARET,
    )
    .with_axes("Date", "Confidence Index")
    .with_y_range(0.0, 130.0)
    .with_height(SMALL_CHART_HEIGHT);

    let margins = pie_chart(
        "margin-by-card",
        "Profit Margin by Card Type",
        MARGIN_BY_CARD,
        &[BURGUNDY, MEDIUM_RED, LIGHT_RED, ROSE],
    );

    let drivers = pie_chart(
        "growth-drivers",
        "Growth Drivers - Customer Acquisition",
        GROWTH_DRIVERS,
        &[BURGUNDY, LIGHT_RED],
    );

    let dividend_yield = donut_chart(
        "dividend-yield",
        "Dividend Yield",
        DIVIDEND_YIELD,
        &[CLARET, PALE_GREY],
        0.6,
    )
    .with_center_label("0.93%", Some("Consistent returns"))
    .with_height(SMALL_CHART_HEIGHT);

    let pe_ratio = donut_chart("pe-ratio", "P/E Ratio", PE_RATIO, &[CLARET, PALE_GREY], 0.6)
        .with_center_label("22.98", Some("Healthy valuation"))
        .with_height(SMALL_CHART_HEIGHT);

    let spending = bar_chart(
        "spending-growth",
        "Spending Growth by Generation (%)",
        SPENDING_GROWTH,
        &[BURGUNDY],
    )
    .with_axes("Generation", "Growth (%)")
    .with_height(SMALL_CHART_HEIGHT);

    let blocks = vec![
        Block::Text(TextBlock::Divider),
        Block::Columns(vec![vec![Block::Chart(record_growth)], vec![Block::Chart(roi)]]),
        Block::Columns(vec![
            vec![Block::Chart(customer_value)],
            vec![Block::Chart(acquisition_cost)],
        ]),
        Block::Text(TextBlock::heading(3, "📈 Market Performance")),
        Block::Columns(vec![vec![Block::Chart(market_share)], vec![Block::Chart(confidence)]]),
        Block::Columns(vec![vec![Block::Chart(margins)], vec![Block::Chart(drivers)]]),
        Block::Text(TextBlock::heading(3, "💰 Key Financial Ratios")),
        Block::Columns(vec![vec![Block::Chart(dividend_yield)], vec![Block::Chart(pe_ratio)]]),
        Block::Text(TextBlock::heading(3, "Key Performance Indicators")),
        Block::Metrics(metric_cards(KPIS)),
        Block::Text(TextBlock::heading(3, "Spending Trends")),
        Block::Chart(spending),
        Block::Text(TextBlock::Divider),
        Block::Text(TextBlock::caption(
            "Data reflects strong performance across key metrics and segments",
        )),
    ];

    SectionLayout::new(
        SectionId::AmericanExpress,
        "💳 American Express Case Study",
        Some("2024 Financial Highlights"),
        blocks,
    )
}
