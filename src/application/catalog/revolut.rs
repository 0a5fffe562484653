// Revolut Youth section
use super::builders::{
    grouped_bar_chart, line_chart, metric_cards, phase_cards, PhaseRow, Table,
};
use crate::domain::dashboard::{Block, SectionLayout};
use crate::domain::section::SectionId;
use crate::domain::widgets::TextBlock;
use chrono::NaiveDate;

const PRIMARY: &str = "#667eea";
const SECONDARY: &str = "#764ba2";

const KPIS: &[(&str, &str, Option<&str>)] = &[
    ("Total Revenue (FY23)", "£188M", Some("+135% YoY")),
    ("Active Users (2023)", "2.0M", Some("+33% YoY")),
    ("ARPU (FY23)", "£94", Some("+213% YoY")),
    ("Operating Margin", "65%", Some("Best in class")),
];

const REVENUE: &Table = &[("FY20", 0.0), ("FY21", 25.0), ("FY22", 80.0), ("FY23", 188.0)];

const USERS: &Table = &[
    ("2019", 0.0),
    ("2020", 0.2),
    ("2021", 0.8),
    ("2022", 1.5),
    ("2023", 2.0),
];

const PROJECTION_YEARS: &[&str] = &["FY21", "FY23", "Proj. H1 2025"];
const PROJECTED_REVENUE: &[f64] = &[25.0, 188.0, 145.0];
const PROJECTED_OPERATING_PROFIT: &[f64] = &[15.0, 122.0, 101.5];

const PHASES: &[&str] = &["Phase 1", "Phase 2", "Phase 3", "Phase 4"];
const CAC: &[f64] = &[40.0, 20.0, 15.0, 10.0];
const LTV: &[f64] = &[500.0, 550.0, 600.0, 650.0];

const ARPU: &Table = &[("FY20", 0.0), ("FY21", 20.0), ("FY23", 35.0), ("Proj. FY25", 60.0)];

const CUMULATIVE_ROI: &Table = &[
    ("Phase 1", -100.0),
    ("Phase 2", 52.8),
    ("Phase 3", 265.4),
    ("Phase 4", 630.9),
];

const PHASE_ROWS: &[PhaseRow] = &[
    PhaseRow {
        title: "Foundation",
        phase: "Phase 1",
        investment: "£6M",
        revenue: "£0M",
        roi: "-100%",
        description: "Initial setup & infrastructure",
    },
    PhaseRow {
        title: "Growth",
        phase: "Phase 2",
        investment: "£14M",
        revenue: "£25M",
        roi: "+78.6%",
        description: "User acquisition & scaling",
    },
    PhaseRow {
        title: "Expansion",
        phase: "Phase 3",
        investment: "£10.5M",
        revenue: "£80M",
        roi: "+661.9%",
        description: "Market expansion & features",
    },
    PhaseRow {
        title: "Scale",
        phase: "Phase 4",
        investment: "£5M",
        revenue: "£188M",
        roi: "+3,660%",
        description: "Optimization & profitability",
    },
];

pub fn layout(updated_on: NaiveDate) -> SectionLayout {
    let revenue = line_chart(
        "revenue-growth",
        "Revenue Growth Trajectory",
        "Revenue",
        REVENUE,
        PRIMARY,
    )
    .with_axes("Fiscal Year", "Revenue (£M)");

    let users = line_chart("user-growth", "User Growth Curve", "Users", USERS, SECONDARY)
        .with_axes("Year", "Users (Millions)");

    let comparison = grouped_bar_chart(
        "revenue-vs-profit",
        "Revenue vs Operating Profit Comparison",
        PROJECTION_YEARS,
        &[
            ("Revenue", PROJECTED_REVENUE, PRIMARY),
            ("Operating Profit", PROJECTED_OPERATING_PROFIT, SECONDARY),
        ],
    )
    .with_axes("Fiscal Year", "Amount (£M)");

    let cac_ltv = grouped_bar_chart(
        "cac-vs-ltv",
        "CAC vs. LTV Progression (£)",
        PHASES,
        &[("CAC", CAC, SECONDARY), ("LTV", LTV, PRIMARY)],
    );

    let arpu = line_chart(
        "arpu",
        "Annual Revenue Per User (ARPU)",
        "ARPU (£/user/year)",
        ARPU,
        SECONDARY,
    )
    .with_axes("Fiscal Year", "ARPU (£)");

    let roi = line_chart(
        "cumulative-roi",
        "Cumulative ROI & Payback",
        "ROI",
        CUMULATIVE_ROI,
        SECONDARY,
    )
    .with_axes("Phase", "ROI (%)");

    let blocks = vec![
        Block::Text(TextBlock::Paragraph {
            lead: Some("Dashboard updated:".to_string()),
            text: updated_on.format("%B %d, %Y").to_string(),
        }),
        Block::Text(TextBlock::Divider),
        Block::Text(TextBlock::heading(3, "📊 Key Performance Indicators")),
        Block::Metrics(metric_cards(KPIS)),
        Block::Text(TextBlock::Divider),
        Block::Text(TextBlock::heading(3, "💰 Financial Performance")),
        Block::Columns(vec![vec![Block::Chart(revenue)], vec![Block::Chart(users)]]),
        Block::Text(TextBlock::heading(3, "📈 Revenue vs Operating Profit")),
        Block::Chart(comparison),
        Block::Chart(cac_ltv),
        Block::Chart(arpu),
        Block::Chart(roi),
        Block::Text(TextBlock::heading(3, "🚀 Strategic Phase Analysis")),
        Block::Phases(phase_cards(PHASE_ROWS)),
    ];

    SectionLayout::new(
        SectionId::RevolutYouth,
        "🏦 Revolut Youth - Financial Performance Dashboard",
        None,
        blocks,
    )
}
