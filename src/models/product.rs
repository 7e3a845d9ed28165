use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Category, Color, Size};

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub store_id: Uuid,
    pub category_id: Uuid,
    pub size_id: Uuid,
    pub color_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub is_featured: bool,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Image rows are owned exclusively by their product and replaced
/// wholesale on update
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product with its images and referenced category/size/color, for reads
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub images: Vec<ProductImage>,
    pub category: Category,
    pub size: Size,
    pub color: Color,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: Option<String>,
    #[serde(default, alias = "image")]
    pub images: Vec<ImagePayload>,
    pub price: Option<Decimal>,
    pub category_id: Option<Uuid>,
    pub size_id: Option<Uuid>,
    pub color_id: Option<Uuid>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_archived: bool,
}

#[derive(Debug)]
pub struct ValidProduct {
    pub name: String,
    pub images: Vec<ImagePayload>,
    pub price: Decimal,
    pub category_id: Uuid,
    pub size_id: Uuid,
    pub color_id: Uuid,
    pub is_featured: bool,
    pub is_archived: bool,
}

impl ProductPayload {
    pub fn validate(self) -> Result<ValidProduct, ApiError> {
        let name = super::require_text(self.name, "name")?;
        if self.images.is_empty() {
            return Err(ApiError::missing_field("images"));
        }
        let price = super::require(self.price, "price")?;
        let category_id = super::require(self.category_id, "categoryId")?;
        let size_id = super::require(self.size_id, "sizeId")?;
        let color_id = super::require(self.color_id, "colorId")?;

        Ok(ValidProduct {
            name,
            images: self.images,
            price,
            category_id,
            size_id,
            color_id,
            is_featured: self.is_featured,
            is_archived: self.is_archived,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ProductPayload {
        ProductPayload {
            name: Some("Tee".to_string()),
            images: vec![ImagePayload { url: "a".to_string() }],
            price: Some(Decimal::new(1999, 2)),
            category_id: Some(Uuid::new_v4()),
            size_id: Some(Uuid::new_v4()),
            color_id: Some(Uuid::new_v4()),
            is_featured: false,
            is_archived: false,
        }
    }

    #[test]
    fn accepts_complete_payload() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn fails_fast_in_field_order() {
        let mut p = payload();
        p.name = None;
        p.images = vec![];
        p.price = None;
        assert_eq!(p.validate().unwrap_err().message(), "name is required");

        let mut p = payload();
        p.images = vec![];
        p.price = None;
        assert_eq!(p.validate().unwrap_err().message(), "images is required");

        let mut p = payload();
        p.price = None;
        p.category_id = None;
        assert_eq!(p.validate().unwrap_err().message(), "price is required");

        let mut p = payload();
        p.category_id = None;
        assert_eq!(p.validate().unwrap_err().message(), "categoryId is required");

        let mut p = payload();
        p.size_id = None;
        assert_eq!(p.validate().unwrap_err().message(), "sizeId is required");

        let mut p = payload();
        p.color_id = None;
        assert_eq!(p.validate().unwrap_err().message(), "colorId is required");
    }

    #[test]
    fn accepts_legacy_image_field_name() {
        let p: ProductPayload = serde_json::from_value(serde_json::json!({
            "name": "Tee",
            "image": [{ "url": "a" }],
            "price": "19.99",
            "categoryId": Uuid::new_v4(),
            "sizeId": Uuid::new_v4(),
            "colorId": Uuid::new_v4()
        }))
        .expect("payload");
        assert_eq!(p.images.len(), 1);
        assert!(p.validate().is_ok());
    }
}
