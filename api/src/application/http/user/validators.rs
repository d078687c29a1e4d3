use hungry_owl_core::domain::user::{entities::SkillLevel, value_objects::UpdateProfileInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileValidator {
    #[serde(default)]
    #[validate(range(min = 1, max = 50, message = "household_size must be between 1 and 50"))]
    pub household_size: Option<i32>,

    #[serde(default)]
    pub allergies: Option<Vec<String>>,

    #[serde(default)]
    pub restrictions: Option<Vec<String>>,

    #[serde(default)]
    pub dislikes: Option<Vec<String>>,

    #[serde(default)]
    pub cookware: Option<Vec<String>>,

    #[serde(default)]
    pub appliances: Option<Vec<String>>,

    #[serde(default)]
    pub skill_level: Option<SkillLevel>,
}

impl From<UpdateProfileValidator> for UpdateProfileInput {
    fn from(payload: UpdateProfileValidator) -> Self {
        Self {
            household_size: payload.household_size,
            allergies: payload.allergies,
            restrictions: payload.restrictions,
            dislikes: payload.dislikes,
            cookware: payload.cookware,
            appliances: payload.appliances,
            skill_level: payload.skill_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn household_size_must_be_positive() {
        let payload = UpdateProfileValidator {
            household_size: Some(0),
            ..Default::default()
        };
        assert!(payload.validate().is_err());

        let payload = UpdateProfileValidator {
            household_size: Some(4),
            ..Default::default()
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn omitted_fields_stay_untouched() {
        let payload: UpdateProfileValidator =
            serde_json::from_str(r#"{"skill_level":"ADVANCED"}"#).unwrap();
        assert!(payload.validate().is_ok());

        let input = UpdateProfileInput::from(payload);
        assert_eq!(input.skill_level, Some(SkillLevel::Advanced));
        assert!(input.household_size.is_none());
        assert!(input.allergies.is_none());
    }
}
