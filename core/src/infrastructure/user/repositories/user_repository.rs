use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::{Expr, OnConflict},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{
            entities::{User, UserProfile},
            ports::UserRepository,
        },
    },
    entity::{
        user_profiles,
        users::{ActiveModel, Column, Entity},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn get_by_external_id(&self, external_id: String) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(Column::ExternalId.eq(external_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by external id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        // A concurrent first request for the same identity lands on the
        // conflict branch and gets the stored row back.
        let stored = Entity::insert(ActiveModel {
            id: Set(user.id),
            external_id: Set(user.external_id),
            email: Set(user.email),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            image_url: Set(user.image_url),
            onboarding_complete: Set(user.onboarding_complete),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        })
        .on_conflict(
            OnConflict::column(Column::ExternalId)
                .update_column(Column::UpdatedAt)
                .to_owned(),
        )
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create user: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(User::from(stored))
    }

    async fn set_onboarding_complete(&self, user_id: Uuid) -> Result<User, CoreError> {
        let updated = Entity::update_many()
            .col_expr(Column::OnboardingComplete, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(user_id))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to complete onboarding: {}", e);
                CoreError::InternalServerError
            })?;

        updated
            .into_iter()
            .next()
            .map(User::from)
            .ok_or(CoreError::NotFound)
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        let profile = user_profiles::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(profile.map(UserProfile::from))
    }

    async fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        use user_profiles::Column as ProfileColumn;

        let stored = user_profiles::Entity::insert(user_profiles::ActiveModel {
            user_id: Set(profile.user_id),
            household_size: Set(profile.household_size),
            allergies: Set(profile.allergies),
            restrictions: Set(profile.restrictions),
            dislikes: Set(profile.dislikes),
            cookware: Set(profile.cookware),
            appliances: Set(profile.appliances),
            skill_level: Set(profile.skill_level.as_str().to_string()),
            updated_at: Set(profile.updated_at.fixed_offset()),
        })
        .on_conflict(
            OnConflict::column(ProfileColumn::UserId)
                .update_columns([
                    ProfileColumn::HouseholdSize,
                    ProfileColumn::Allergies,
                    ProfileColumn::Restrictions,
                    ProfileColumn::Dislikes,
                    ProfileColumn::Cookware,
                    ProfileColumn::Appliances,
                    ProfileColumn::SkillLevel,
                    ProfileColumn::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to upsert user profile: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(UserProfile::from(stored))
    }
}
