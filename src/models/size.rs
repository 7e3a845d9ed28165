use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizePayload {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug)]
pub struct ValidSize {
    pub name: String,
    pub value: String,
}

impl SizePayload {
    pub fn validate(self) -> Result<ValidSize, ApiError> {
        let name = super::require_text(self.name, "name")?;
        let value = super::require_text(self.value, "value")?;
        Ok(ValidSize { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_checked_before_value() {
        let err = SizePayload { name: None, value: Some("XL".into()) }
            .validate()
            .unwrap_err();
        assert_eq!(err.message(), "name is required");

        let err = SizePayload { name: Some("Extra large".into()), value: None }
            .validate()
            .unwrap_err();
        assert_eq!(err.message(), "value is required");
    }
}
