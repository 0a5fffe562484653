// Telda case study section
use super::builders::{donut_chart, line_chart, metric_cards, pie_chart, Table};
use crate::domain::dashboard::{Block, SectionLayout};
use crate::domain::section::SectionId;
use crate::domain::widgets::TextBlock;

const BROWN: &str = "#663300";
const BURGUNDY: &str = "#800020";
const OXBLOOD: &str = "#4A0404";

// Survey points, not a regular time series: the axis spaces them evenly
const USER_GROWTH: &Table = &[("Apr 2021", 30000.0), ("Oct 2022", 135000.0), ("2023", 500000.0)];

const FINANCIALS: &[(&str, &str, Option<&str>)] = &[
    ("Transaction Volume (2023)", "$300M", None),
    ("Revenue per Employee", "$143K", None),
];

const USERS_UNDER_30: &Table = &[("Users Under 30", 70.0), ("Other Users", 30.0)];

const YOUTH_SEGMENT: &Table = &[("Youth (18-29)", 19.9), ("Other population", 80.1)];

const PRODUCT_DESIGN: &[&str] = &[
    "Mobile-first user experience",
    "Integrated social payment features (GIFs, emojis)",
    "Intuitive interface tailored for digital natives",
];

pub fn layout() -> SectionLayout {
    let growth = line_chart(
        "user-growth",
        "Explosive User Growth (2021-2023)",
        "Users",
        USER_GROWTH,
        BROWN,
    );

    let under_30 = donut_chart(
        "users-under-30",
        "Youth-Centric Product Design",
        USERS_UNDER_30,
        &[BURGUNDY, OXBLOOD],
        0.7,
    )
    .with_legend(true)
    .with_center_label("70%", None);

    let market = pie_chart(
        "youth-segment",
        "Market Opportunity: Egyptian Youth Segment",
        YOUTH_SEGMENT,
        &[BURGUNDY, OXBLOOD],
    );

    let blocks = vec![
        Block::Text(TextBlock::Divider),
        Block::Columns(vec![
            vec![Block::Chart(growth)],
            vec![
                Block::Text(TextBlock::heading(3, "Robust Financial Performance")),
                Block::Metrics(metric_cards(FINANCIALS)),
            ],
        ]),
        Block::Columns(vec![
            vec![
                Block::Chart(under_30),
                Block::Text(TextBlock::bullets(PRODUCT_DESIGN)),
            ],
            vec![
                Block::Chart(market),
                Block::Text(TextBlock::paragraph(
                    "The youth segment (18-29) comprises 21.3M of the total population, \
                     representing a significant market opportunity.",
                )),
            ],
        ]),
        Block::Text(TextBlock::Divider),
        Block::Text(TextBlock::caption("Data source: Telda Case Study 2023")),
    ];

    SectionLayout::new(SectionId::Telda, "🏛️ Telda Case Study Dashboard", None, blocks)
}
