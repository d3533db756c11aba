//! Hardcoded farm content and the small pure functions over it
//!
//! Nothing here is fetched. Pages build fresh copies on entry.

pub mod assistant;
pub mod crops;
pub mod farm;
pub mod guidance;
pub mod market;
pub mod soil;

use crate::i18n::{t, Language, TextKey};
use crate::navigation::Page;

/// Location shown in the dashboard header
pub const DASHBOARD_LOCATION: &str = "Hyderabad, Telangana";

/// Spoken when the farmer logs out from the dashboard
pub const LOGOUT_MESSAGE: &str = "Logging out. Goodbye!";

/// Dashboard quick stat card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickStat {
    pub title: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
}

pub fn quick_stats() -> [QuickStat; 3] {
    [
        QuickStat {
            title: "Soil Health",
            value: "Good",
            detail: "pH: 6.5 | NPK: Balanced",
        },
        QuickStat {
            title: "Active Crops",
            value: "3",
            detail: "Rice, Tomato, Cotton",
        },
        QuickStat {
            title: "Last Sync",
            value: "2 min",
            detail: "Online",
        },
    ]
}

/// What a content page says when it opens
pub fn entry_announcement(page: Page, language: Language) -> Option<String> {
    let text = match page {
        Page::BestCrops => format!(
            "{} recommendations for your farm",
            t(language, TextKey::BestCrops)
        ),
        Page::MarketPrices => format!("{} from local mandis", t(language, TextKey::MarketPrices)),
        Page::SmartGuidance => format!(
            "{} recommendations for your farm",
            t(language, TextKey::SmartGuidance)
        ),
        Page::AskAi => format!(
            "{} assistant. Ask me anything about farming",
            t(language, TextKey::AskAi)
        ),
        Page::MyFarm => {
            let farm = farm::overview();
            format!(
                "{} overview. {} located at {}",
                t(language, TextKey::MyFarm),
                farm.name,
                farm.location
            )
        }
        _ => return None,
    };
    Some(text)
}
