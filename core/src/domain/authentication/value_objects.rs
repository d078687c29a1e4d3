use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims issued by the hosted identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Local user resolved from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: Uuid,
    external_id: String,
}

impl Identity {
    pub fn new(user_id: Uuid, external_id: impl Into<String>) -> Self {
        Self {
            user_id,
            external_id: external_id.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.user_id
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }
}
