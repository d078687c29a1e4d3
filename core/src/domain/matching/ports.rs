use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    matching::recommendations::Recommendations,
};

#[cfg_attr(test, mockall::automock)]
pub trait RecommendationService: Send + Sync {
    /// Staples the user is missing for their skill level.
    fn recommended_ingredients(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Recommendations, CoreError>> + Send;
}
