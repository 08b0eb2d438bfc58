use serde::{Deserialize, Serialize};

/// A logo the trivia can ask about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptItem {
    /// Stable identifier.
    pub symbol: String,
    /// Path of the logo image shown as the prompt.
    pub asset: String,
    /// Name the player must pick; doubles as the option text.
    pub label: String,
}

impl PromptItem {
    pub fn new(symbol: &str, asset: &str, label: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            asset: asset.to_string(),
            label: label.to_string(),
        }
    }
}

const DEFAULT_LOGOS: [(&str, &str); 12] = [
    ("mozi", "Mozi"),
    ("chog", "Chog"),
    ("molandak", "Molandak"),
    ("moyaki", "Moyaki"),
    ("salmonad", "Salmonad"),
    ("mouch", "Mouch"),
    ("kuru", "Kuru"),
    ("kintsu", "Kintsu"),
    ("apriori", "aPriori"),
    ("monorail", "Monorail"),
    ("nadfun", "Nad.fun"),
    ("magma", "Magma"),
];

/// Logos bundled with the app under `/assets/logos/`.
pub fn default_pool() -> Vec<PromptItem> {
    DEFAULT_LOGOS
        .iter()
        .map(|(symbol, label)| PromptItem::new(symbol, &format!("/assets/logos/{symbol}.png"), label))
        .collect()
}
