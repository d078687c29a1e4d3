use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::IdentityClaims,
    common::{generate_timestamp, generate_uuid_v7},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "BEGINNER",
            SkillLevel::Intermediate => "INTERMEDIATE",
            SkillLevel::Advanced => "ADVANCED",
        }
    }
}

impl From<&str> for SkillLevel {
    fn from(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "INTERMEDIATE" => SkillLevel::Intermediate,
            "ADVANCED" => SkillLevel::Advanced,
            _ => SkillLevel::Beginner,
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub external_id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
    pub onboarding_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn from_claims(claims: &IdentityClaims) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7(),
            external_id: claims.sub.clone(),
            email: claims.email.clone().unwrap_or_default(),
            first_name: claims.given_name.clone(),
            last_name: claims.family_name.clone(),
            image_url: claims.picture.clone(),
            onboarding_complete: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub household_size: i32,
    pub allergies: Vec<String>,
    pub restrictions: Vec<String>,
    pub dislikes: Vec<String>,
    pub cookware: Vec<String>,
    pub appliances: Vec<String>,
    pub skill_level: SkillLevel,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn empty(user_id: Uuid) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            user_id,
            household_size: 1,
            allergies: Vec::new(),
            restrictions: Vec::new(),
            dislikes: Vec::new(),
            cookware: Vec::new(),
            appliances: Vec::new(),
            skill_level: SkillLevel::default(),
            updated_at: now,
        }
    }

    pub fn update(&mut self, input: crate::domain::user::value_objects::UpdateProfileInput) {
        let (now, _) = generate_timestamp();

        if let Some(household_size) = input.household_size {
            self.household_size = household_size;
        }
        if let Some(allergies) = input.allergies {
            self.allergies = allergies;
        }
        if let Some(restrictions) = input.restrictions {
            self.restrictions = restrictions;
        }
        if let Some(dislikes) = input.dislikes {
            self.dislikes = dislikes;
        }
        if let Some(cookware) = input.cookware {
            self.cookware = cookware;
        }
        if let Some(appliances) = input.appliances {
            self.appliances = appliances;
        }
        if let Some(skill_level) = input.skill_level {
            self.skill_level = skill_level;
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_level_parses_case_insensitively_and_defaults_to_beginner() {
        assert_eq!(SkillLevel::from("advanced"), SkillLevel::Advanced);
        assert_eq!(SkillLevel::from("INTERMEDIATE"), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::from("chef"), SkillLevel::Beginner);
    }

    #[test]
    fn profile_update_only_touches_provided_fields() {
        let mut profile = UserProfile::empty(Uuid::nil());
        profile.update(crate::domain::user::value_objects::UpdateProfileInput {
            allergies: Some(vec!["peanuts".to_string()]),
            skill_level: Some(SkillLevel::Advanced),
            ..Default::default()
        });

        assert_eq!(profile.allergies, vec!["peanuts".to_string()]);
        assert_eq!(profile.skill_level, SkillLevel::Advanced);
        assert_eq!(profile.household_size, 1);
        assert!(profile.cookware.is_empty());
    }
}
