use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPayload {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug)]
pub struct ValidColor {
    pub name: String,
    pub value: String,
}

impl ColorPayload {
    pub fn validate(self) -> Result<ValidColor, ApiError> {
        let name = super::require_text(self.name, "name")?;
        let value = super::require_text(self.value, "value")?;
        Ok(ValidColor { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_checked_before_value() {
        let err = ColorPayload { name: None, value: Some("#000".into()) }
            .validate()
            .unwrap_err();
        assert_eq!(err.message(), "name is required");

        let err = ColorPayload { name: Some("Black".into()), value: None }
            .validate()
            .unwrap_err();
        assert_eq!(err.message(), "value is required");
    }
}
