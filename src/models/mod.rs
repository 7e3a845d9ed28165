pub mod billboard;
pub mod category;
pub mod color;
pub mod product;
pub mod size;
pub mod store;

pub use billboard::{Billboard, BillboardPayload};
pub use category::{Category, CategoryDetail, CategoryPayload};
pub use color::{Color, ColorPayload};
pub use product::{Product, ProductDetail, ProductImage, ProductPayload};
pub use size::{Size, SizePayload};
pub use store::{Store, StorePayload};

use crate::error::ApiError;

/// Reject absent or blank required text fields, naming the field in the error.
/// Validation is ordered and fails fast on the first missing field.
pub(crate) fn require_text(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::missing_field(field)),
    }
}

pub(crate) fn require<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::missing_field(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_counts_as_missing() {
        assert!(require_text(Some("  ".to_string()), "name").is_err());
        assert!(require_text(None, "name").is_err());
        assert_eq!(require_text(Some("ok".to_string()), "name").unwrap(), "ok");
    }
}
