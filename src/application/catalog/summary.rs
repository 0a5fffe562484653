// Suite summary shown under every tab
use crate::domain::dashboard::SummaryColumn;

const COLUMNS: &[(&str, [&str; 3])] = &[
    (
        "🏦 Revolut Youth",
        ["£188M Revenue (FY23)", "2M Active Users", "3,660% ROI Achievement"],
    ),
    (
        "🏛️ Telda",
        ["500K Users by 2023", "$300M Transaction Volume", "70% Youth Market Focus"],
    ),
    (
        "💳 American Express",
        ["$75B Revenue (2024)", "21% ROI vs Competitors", "75% Millennial/Gen Z Growth"],
    ),
];

pub fn summary() -> Vec<SummaryColumn> {
    COLUMNS
        .iter()
        .map(|(heading, bullets)| SummaryColumn {
            heading: heading.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
        })
        .collect()
}
