use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::user::entities::{SkillLevel, User, UserProfile};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileInput {
    pub household_size: Option<i32>,
    pub allergies: Option<Vec<String>>,
    pub restrictions: Option<Vec<String>>,
    pub dislikes: Option<Vec<String>>,
    pub cookware: Option<Vec<String>>,
    pub appliances: Option<Vec<String>>,
    pub skill_level: Option<SkillLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserWithProfile {
    pub user: User,
    pub profile: Option<UserProfile>,
}
