use crate::{
    domain::user::entities::{SkillLevel, User, UserProfile},
    entity::{user_profiles, users},
};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            external_id: model.external_id.clone(),
            email: model.email.clone(),
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            image_url: model.image_url.clone(),
            onboarding_complete: model.onboarding_complete,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}

impl From<user_profiles::Model> for UserProfile {
    fn from(model: user_profiles::Model) -> Self {
        Self {
            user_id: model.user_id,
            household_size: model.household_size,
            allergies: model.allergies,
            restrictions: model.restrictions,
            dislikes: model.dislikes,
            cookware: model.cookware,
            appliances: model.appliances,
            skill_level: SkillLevel::from(model.skill_level.as_str()),
            updated_at: model.updated_at.to_utc(),
        }
    }
}
