use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::Billboard;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub store_id: Uuid,
    pub billboard_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category with its referenced billboard, for get-one reads
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: Category,
    pub billboard: Option<Billboard>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: Option<String>,
    pub billboard_id: Option<Uuid>,
}

#[derive(Debug)]
pub struct ValidCategory {
    pub name: String,
    pub billboard_id: Uuid,
}

impl CategoryPayload {
    pub fn validate(self) -> Result<ValidCategory, ApiError> {
        let name = super::require_text(self.name, "name")?;
        let billboard_id = super::require(self.billboard_id, "billboardId")?;
        Ok(ValidCategory { name, billboard_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_checked_before_billboard_id() {
        let err = CategoryPayload { name: None, billboard_id: None }
            .validate()
            .unwrap_err();
        assert_eq!(err.message(), "name is required");

        let err = CategoryPayload {
            name: Some("Shirts".to_string()),
            billboard_id: None,
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.message(), "billboardId is required");
    }
}
