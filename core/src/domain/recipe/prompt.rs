use std::fmt::Write;

use crate::domain::{
    inventory::value_objects::InventoryEntry,
    pantry::entities::PantryStapleEntry,
    recipe::value_objects::GenerateRecipesInput,
    user::entities::UserProfile,
};

pub const RECIPES_PER_REQUEST: usize = 5;

const RESPONSE_SCHEMA: &str = r#"{
  "name": "string",
  "description": "string (1-2 sentences)",
  "heroEmoji": "string (single food emoji)",
  "ingredients": [{"name": "string", "quantity": number, "unit": "string", "optional": boolean}],
  "steps": [{"stepNumber": number, "instruction": "string (DETAILED - 2-4 sentences with specific techniques, timing, and sensory cues)", "duration": number, "tips": "string (helpful tip or common mistake to avoid)"}],
  "totalTime": number,
  "activeTime": number,
  "difficulty": "BEGINNER" | "INTERMEDIATE" | "ADVANCED",
  "cuisineType": "string",
  "mealType": "BREAKFAST" | "LUNCH" | "DINNER" | "SNACK" | "DESSERT",
  "isOnePot": boolean,
  "isVegetarian": boolean,
  "isVegan": boolean,
  "equipment": ["string"],
  "nutrition": {"calories": number, "protein": number, "carbs": number, "fat": number},
  "servings": number
}"#;

const INSTRUCTION_REQUIREMENTS: &str = "INSTRUCTION REQUIREMENTS:
- Each step should be DETAILED with specific techniques (e.g., \"dice into 1/4 inch cubes\", \"saute until golden brown, about 3-4 minutes\")
- Include sensory cues (what to look for, smell, texture changes)
- Mention specific temperatures and timing
- Add helpful tips for each step when relevant
- Explain WHY certain techniques matter for beginners";

const SHOPPING_MODE: &str = "SHOPPING MODE: User is willing to buy 1-3 additional common ingredients. You may suggest recipes that need a few extra items beyond what's available. Mark any ingredients they'd need to buy.";
const PANTRY_ONLY: &str = "IMPORTANT: Only suggest recipes that can be made with the available ingredients. Avoid suggesting recipes that require significant shopping.";

/// Everything the language model is told about the user's kitchen.
pub struct PromptContext<'a> {
    pub inventory: &'a [InventoryEntry],
    pub staples: &'a [PantryStapleEntry],
    pub expiring: &'a [InventoryEntry],
    pub profile: Option<&'a UserProfile>,
    pub recent_recipes: &'a [String],
    pub options: &'a GenerateRecipesInput,
}

fn join_or(values: &[String], fallback: &str) -> String {
    if values.is_empty() {
        fallback.to_string()
    } else {
        values.join(", ")
    }
}

pub fn build_recipe_prompt(context: &PromptContext<'_>) -> String {
    let options = context.options;

    let inventory = context
        .inventory
        .iter()
        .map(|entry| {
            format!(
                "{} ({} {})",
                entry.ingredient.name, entry.item.quantity, entry.item.unit
            )
        })
        .collect::<Vec<_>>();
    let staples = context
        .staples
        .iter()
        .filter(|entry| entry.staple.in_stock)
        .map(|entry| entry.ingredient.name.clone())
        .collect::<Vec<_>>();
    let expiring = context
        .expiring
        .iter()
        .map(|entry| entry.ingredient.name.clone())
        .collect::<Vec<_>>();

    let (allergies, restrictions, dislikes, cookware, appliances, skill_level) =
        match context.profile {
            Some(profile) => (
                join_or(&profile.allergies, "none"),
                join_or(&profile.restrictions, "none"),
                join_or(&profile.dislikes, "none"),
                join_or(&profile.cookware, "standard pots and pans"),
                join_or(&profile.appliances, "oven, stovetop"),
                profile.skill_level.to_string(),
            ),
            None => (
                "none".to_string(),
                "none".to_string(),
                "none".to_string(),
                "standard pots and pans".to_string(),
                "oven, stovetop".to_string(),
                "beginner".to_string(),
            ),
        };

    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Generate {RECIPES_PER_REQUEST} recipe suggestions based on the following context:\n"
    );
    let _ = writeln!(
        prompt,
        "AVAILABLE INGREDIENTS: {}",
        join_or(
            &inventory,
            "Not much, please suggest simple recipes with common ingredients"
        )
    );
    let _ = writeln!(
        prompt,
        "PANTRY STAPLES: {}",
        join_or(&staples, "basic salt, pepper, oil")
    );
    if options.prioritize_expiring && !expiring.is_empty() {
        let _ = writeln!(prompt, "MUST USE (EXPIRING SOON): {}", expiring.join(", "));
    }
    let _ = writeln!(
        prompt,
        "\n{}\n",
        if options.willing_to_shop {
            SHOPPING_MODE
        } else {
            PANTRY_ONLY
        }
    );

    let _ = writeln!(prompt, "CONSTRAINTS:");
    let _ = writeln!(prompt, "- Maximum cooking time: {} minutes", options.max_time);
    let _ = writeln!(prompt, "- Skill level: {skill_level}");
    let _ = writeln!(prompt, "- Allergies (NEVER include): {allergies}");
    let _ = writeln!(prompt, "- Dietary restrictions: {restrictions}");
    let _ = writeln!(prompt, "- Dislikes (avoid): {dislikes}");
    let _ = writeln!(prompt, "- Available cookware: {cookware}");
    let _ = writeln!(prompt, "- Available appliances: {appliances}");
    if options.one_pot_only {
        let _ = writeln!(prompt, "- ONE POT MEALS ONLY");
    }
    if let Some(meal_type) = options.meal_type {
        let _ = writeln!(prompt, "- Meal type: {}", meal_type.as_str());
    }
    if let Some(cuisine) = options.cuisine_type.as_deref().filter(|c| !c.trim().is_empty()) {
        let _ = writeln!(prompt, "- Cuisine: {cuisine}");
    }

    let _ = writeln!(
        prompt,
        "\nAVOID REPEATING: {}\n",
        join_or(context.recent_recipes, "none")
    );
    let _ = writeln!(prompt, "{INSTRUCTION_REQUIREMENTS}\n");
    let _ = write!(
        prompt,
        "Return ONLY valid JSON array with exactly {RECIPES_PER_REQUEST} recipes. Each recipe must follow this schema:\n{RESPONSE_SCHEMA}"
    );

    prompt
}
