use crate::domain::ingredient::entities::IngredientCategory;

pub const FALLBACK_EMOJI: &str = "🍽️";

const KEYWORD_RULES: &[(&[&str], &str)] = &[
    (&["apple"], "🍎"),
    (&["banana"], "🍌"),
    (&["orange", "citrus"], "🍊"),
    (&["lemon"], "🍋"),
    (&["grape"], "🍇"),
    (&["strawberr"], "🍓"),
    (&["blueberr", "berr"], "🫐"),
    (&["cherry"], "🍒"),
    (&["peach"], "🍑"),
    (&["pear"], "🍐"),
    (&["pineapple"], "🍍"),
    (&["watermelon", "melon"], "🍉"),
    (&["mango"], "🥭"),
    (&["avocado"], "🥑"),
    (&["tomato"], "🍅"),
    (&["broccoli"], "🥦"),
    (&["carrot"], "🥕"),
    (&["corn"], "🌽"),
    (&["pepper", "chili"], "🌶️"),
    (&["cucumber"], "🥒"),
    (&["lettuce", "salad", "green"], "🥬"),
    (&["potato"], "🥔"),
    (&["onion"], "🧅"),
    (&["garlic"], "🧄"),
    (&["mushroom"], "🍄"),
    (&["coconut"], "🥥"),
    (&["ginger"], "🫚"),
    (&["chicken"], "🍗"),
    (&["beef", "steak"], "🥩"),
    (&["pork", "bacon"], "🥓"),
    (&["fish", "salmon", "tuna"], "🐟"),
    (&["shrimp", "prawn"], "🦐"),
    (&["crab"], "🦀"),
    (&["lobster"], "🦞"),
    (&["egg"], "🥚"),
    (&["milk"], "🥛"),
    (&["cheese"], "🧀"),
    (&["butter"], "🧈"),
    (&["yogurt"], "🥛"),
    (&["bread"], "🍞"),
    (&["rice"], "🍚"),
    (&["pasta", "spaghetti", "noodle"], "🍝"),
    (&["coffee"], "☕"),
    (&["tea"], "🍵"),
    (&["honey"], "🍯"),
    (&["chocolate"], "🍫"),
    (&["salt"], "🧂"),
];

const CATEGORY_FALLBACKS: &[(IngredientCategory, &str)] = &[
    (IngredientCategory::Produce, "🥬"),
    (IngredientCategory::Protein, "🍖"),
    (IngredientCategory::Dairy, "🥛"),
    (IngredientCategory::Grains, "🌾"),
    (IngredientCategory::Spices, "🌿"),
    (IngredientCategory::Pantry, "🥫"),
    (IngredientCategory::Beverages, "🥤"),
    (IngredientCategory::Frozen, "❄️"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiRule {
    pub keywords: Vec<String>,
    pub emoji: String,
}

/// Keyword and category lookup table for ingredient glyphs.
///
/// Rules are checked in order; the first rule with a keyword contained in
/// the lower-cased name wins, then the category fallback applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiCatalog {
    pub rules: Vec<EmojiRule>,
    pub category_fallbacks: Vec<(IngredientCategory, String)>,
    pub default_emoji: String,
}

impl Default for EmojiCatalog {
    fn default() -> Self {
        Self {
            rules: KEYWORD_RULES
                .iter()
                .map(|(keywords, emoji)| EmojiRule {
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                    emoji: emoji.to_string(),
                })
                .collect(),
            category_fallbacks: CATEGORY_FALLBACKS
                .iter()
                .map(|(category, emoji)| (*category, emoji.to_string()))
                .collect(),
            default_emoji: FALLBACK_EMOJI.to_string(),
        }
    }
}

impl EmojiCatalog {
    pub fn emoji_for(&self, name: &str, category: IngredientCategory) -> &str {
        let lower = name.to_lowercase();

        if let Some(rule) = self
            .rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lower.contains(k.as_str())))
        {
            return &rule.emoji;
        }

        self.category_fallbacks
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, emoji)| emoji.as_str())
            .unwrap_or(&self.default_emoji)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_rules_win_over_category() {
        let catalog = EmojiCatalog::default();
        assert_eq!(
            catalog.emoji_for("Chicken Thighs", IngredientCategory::Other),
            "🍗"
        );
        assert_eq!(catalog.emoji_for("Fresh GARLIC", IngredientCategory::Produce), "🧄");
    }

    #[test]
    fn rule_order_decides_overlapping_keywords() {
        let catalog = EmojiCatalog::default();
        // "pineapple" contains "apple", which is listed first.
        assert_eq!(catalog.emoji_for("Pineapple", IngredientCategory::Produce), "🍎");
    }

    #[test]
    fn falls_back_to_category_then_default() {
        let catalog = EmojiCatalog::default();
        assert_eq!(catalog.emoji_for("Quinoa", IngredientCategory::Grains), "🌾");
        assert_eq!(catalog.emoji_for("Mystery", IngredientCategory::Other), FALLBACK_EMOJI);
    }

    #[test]
    fn custom_catalog_can_be_injected() {
        let catalog = EmojiCatalog {
            rules: vec![EmojiRule {
                keywords: vec!["kale".to_string()],
                emoji: "K".to_string(),
            }],
            category_fallbacks: Vec::new(),
            default_emoji: "?".to_string(),
        };
        assert_eq!(catalog.emoji_for("Baby Kale", IngredientCategory::Produce), "K");
        assert_eq!(catalog.emoji_for("Chicken", IngredientCategory::Protein), "?");
    }
}
