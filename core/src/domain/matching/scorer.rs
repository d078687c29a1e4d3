use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::matching::availability::AvailabilityIndex;

/// Anything that lists an ingredient a recipe asks for.
pub trait IngredientRequirement {
    fn name(&self) -> &str;
    fn is_optional(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchScore {
    /// 0..=100
    pub match_percentage: u8,
    /// Lower-cased required names with no match, in recipe order.
    pub missing: Vec<String>,
}

/// Share of required (non-optional) ingredients covered by `availability`.
///
/// A recipe with no required ingredients scores 100.
pub fn score<T: IngredientRequirement>(
    ingredients: &[T],
    availability: &AvailabilityIndex,
) -> MatchScore {
    let required: Vec<String> = ingredients
        .iter()
        .filter(|ingredient| !ingredient.is_optional())
        .map(|ingredient| ingredient.name().to_lowercase())
        .collect();

    if required.is_empty() {
        return MatchScore {
            match_percentage: 100,
            missing: Vec::new(),
        };
    }

    let (matched, missing): (Vec<String>, Vec<String>) = required
        .into_iter()
        .partition(|name| availability.covers(name));

    MatchScore {
        match_percentage: rounded_percentage(matched.len(), matched.len() + missing.len()),
        missing,
    }
}

/// `round(100 * part / whole)` with halves rounded up.
fn rounded_percentage(part: usize, whole: usize) -> u8 {
    let percentage = (200 * part + whole) / (2 * whole);
    percentage.min(100) as u8
}
