use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The application's navigable pages.
///
/// The serialized form is the page's slug, which doubles as the element id a
/// rendering surface attaches the page to. Flowchart outcome nodes link to
/// the two guideline pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Page {
    #[serde(rename = "home-page")]
    Home,
    #[serde(rename = "alcohol-withdrawal-page")]
    AlcoholWithdrawal,
    #[serde(rename = "scales-page")]
    Scales,
    #[serde(rename = "std-drinks-page")]
    StandardDrinks,
    #[serde(rename = "other-syndromes-page")]
    OtherSyndromes,
    #[serde(rename = "inpatient-guidelines-page")]
    InpatientGuidelines,
    #[serde(rename = "ambulatory-guidelines-page")]
    AmbulatoryGuidelines,
}

impl Page {
    /// Every page, in the order the home menu lists them.
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::AlcoholWithdrawal,
        Page::Scales,
        Page::StandardDrinks,
        Page::OtherSyndromes,
        Page::InpatientGuidelines,
        Page::AmbulatoryGuidelines,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home-page",
            Page::AlcoholWithdrawal => "alcohol-withdrawal-page",
            Page::Scales => "scales-page",
            Page::StandardDrinks => "std-drinks-page",
            Page::OtherSyndromes => "other-syndromes-page",
            Page::InpatientGuidelines => "inpatient-guidelines-page",
            Page::AmbulatoryGuidelines => "ambulatory-guidelines-page",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::AlcoholWithdrawal => "Alcohol Withdrawal",
            Page::Scales => "Withdrawal Scales",
            Page::StandardDrinks => "Standard Drink Calculator",
            Page::OtherSyndromes => "Other Withdrawal Syndromes",
            Page::InpatientGuidelines => "Inpatient Guidelines",
            Page::AmbulatoryGuidelines => "Ambulatory Detox Guidelines",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.slug() == slug)
    }
}
