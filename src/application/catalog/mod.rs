// Constant catalog - one layout per section, built from literal tables
mod american_express;
pub mod builders;
mod revolut;
mod summary;
mod telda;

use crate::domain::dashboard::{SectionLayout, SummaryColumn};
use crate::domain::section::SectionId;
use chrono::NaiveDate;

pub const SUITE_TITLE: &str = "💼 Financial Performance Dashboard Suite";

/// Maps a section to its render instructions. Pure: the same inputs always
/// give an equal layout.
pub fn section_layout(id: SectionId, updated_on: NaiveDate) -> SectionLayout {
    match id {
        SectionId::RevolutYouth => revolut::layout(updated_on),
        SectionId::Telda => telda::layout(),
        SectionId::AmericanExpress => american_express::layout(),
    }
}

pub fn suite_summary() -> Vec<SummaryColumn> {
    summary::summary()
}
