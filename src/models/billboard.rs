use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::ApiError;

/// Promotional banner, referenced by categories
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Billboard {
    pub id: Uuid,
    pub store_id: Uuid,
    pub label: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardPayload {
    pub label: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug)]
pub struct ValidBillboard {
    pub label: String,
    pub image_url: String,
}

impl BillboardPayload {
    pub fn validate(self) -> Result<ValidBillboard, ApiError> {
        let label = super::require_text(self.label, "label")?;
        let image_url = super::require_text(self.image_url, "imageUrl")?;
        Ok(ValidBillboard { label, image_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_checked_before_image_url() {
        let err = BillboardPayload { label: None, image_url: None }
            .validate()
            .unwrap_err();
        assert_eq!(err.message(), "label is required");

        let err = BillboardPayload {
            label: Some("Summer sale".to_string()),
            image_url: None,
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.message(), "imageUrl is required");
    }
}
