use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::ApiError;

/// Tenant root. Every other catalog entity is scoped to exactly one store.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePayload {
    pub name: Option<String>,
}

impl StorePayload {
    pub fn validate(self) -> Result<String, ApiError> {
        super::require_text(self.name, "name")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        let err = StorePayload { name: None }.validate().unwrap_err();
        assert_eq!(err.message(), "name is required");
    }
}
