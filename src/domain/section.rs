// Section identifiers - one per dashboard tab
use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SectionId {
    #[default]
    RevolutYouth,
    Telda,
    AmericanExpress,
}

impl SectionId {
    /// URL slug, e.g. `revolut-youth`
    pub fn slug(self) -> &'static str {
        self.into()
    }

    /// Label shown on the tab bar
    pub fn tab_label(self) -> &'static str {
        match self {
            SectionId::RevolutYouth => "🏦 Revolut Youth",
            SectionId::Telda => "🏛️ Telda Case Study",
            SectionId::AmericanExpress => "💳 American Express",
        }
    }
}
