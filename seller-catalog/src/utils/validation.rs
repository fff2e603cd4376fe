//! Input validation helpers
//!
//! Everything here runs before any store call; a failure never reaches the
//! database.

use rust_decimal::Decimal;
use shared::models::{ProductCreate, ProductUpdate, ProductVariant};

use crate::db::repository::{RepoError, RepoResult};
use crate::services::CategoryProvider;

// ── Limits ──────────────────────────────────────────────────────────

/// Product and variant names
pub const MAX_NAME_LEN: usize = 200;

/// Product descriptions
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/// Image references per product
pub const MAX_IMAGES: usize = 5;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Field validators ────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> RepoResult<()> {
    if value.trim().is_empty() {
        return Err(RepoError::Validation(format!("{field} must not be empty")));
    }
    validate_text_len(value, field, max_len)
}

pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> RepoResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(RepoError::Validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

pub fn validate_price(price: Decimal) -> RepoResult<()> {
    if price < Decimal::ZERO {
        return Err(RepoError::Validation(format!(
            "price must not be negative (got {price})"
        )));
    }
    Ok(())
}

pub fn validate_stock(stock: i64, field: &str) -> RepoResult<()> {
    if stock < 0 {
        return Err(RepoError::Validation(format!(
            "{field} must not be negative (got {stock})"
        )));
    }
    Ok(())
}

pub fn validate_category(category: &str, provider: &dyn CategoryProvider) -> RepoResult<()> {
    validate_required_text(category, "category", MAX_NAME_LEN)?;
    if !provider.is_known(category) {
        return Err(RepoError::Validation(format!("unknown category: {category}")));
    }
    Ok(())
}

/// At most [`MAX_IMAGES`] non-blank references. An empty list is allowed;
/// the repository substitutes the placeholder.
pub fn validate_images(images: &[String]) -> RepoResult<()> {
    if images.len() > MAX_IMAGES {
        return Err(RepoError::Validation(format!(
            "too many images ({}, max {MAX_IMAGES})",
            images.len()
        )));
    }
    for image in images {
        validate_required_text(image, "image reference", MAX_URL_LEN)?;
    }
    Ok(())
}

pub fn validate_variants(variants: &[ProductVariant]) -> RepoResult<()> {
    for variant in variants {
        validate_required_text(&variant.name, "variant name", MAX_NAME_LEN)?;
        validate_stock(variant.stock, "variant stock")?;
        if let Some(price) = variant.price {
            validate_price(price)?;
        }
    }
    Ok(())
}

// ── Payload validators ──────────────────────────────────────────────

pub fn validate_product_create(
    data: &ProductCreate,
    categories: &dyn CategoryProvider,
) -> RepoResult<()> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_text_len(&data.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_price(data.price)?;
    validate_stock(data.stock, "stock")?;
    validate_category(&data.category, categories)?;
    validate_images(&data.images)?;
    validate_variants(&data.variants)
}

/// Same rules as create, applied only to the fields present in the patch
pub fn validate_product_update(
    data: &ProductUpdate,
    categories: &dyn CategoryProvider,
) -> RepoResult<()> {
    if let Some(name) = &data.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(description) = &data.description {
        validate_text_len(description, "description", MAX_DESCRIPTION_LEN)?;
    }
    if let Some(price) = data.price {
        validate_price(price)?;
    }
    if let Some(stock) = data.stock {
        validate_stock(stock, "stock")?;
    }
    if let Some(category) = &data.category {
        validate_category(category, categories)?;
    }
    if let Some(images) = &data.images {
        validate_images(images)?;
    }
    if let Some(variants) = &data.variants {
        validate_variants(variants)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::StaticCategoryProvider;

    fn categories() -> StaticCategoryProvider {
        StaticCategoryProvider::new(["Makanan", "Elektronik"])
    }

    fn valid_create() -> ProductCreate {
        ProductCreate {
            name: "Kopi Gayo".into(),
            description: String::new(),
            price: Decimal::new(45000, 0),
            stock: 10,
            category: "Makanan".into(),
            images: vec!["img/kopi.jpg".into()],
            variants: vec![],
        }
    }

    #[test]
    fn accepts_valid_payload() {
        assert!(validate_product_create(&valid_create(), &categories()).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let mut data = valid_create();
        data.name = "  ".into();
        let err = validate_product_create(&data, &categories()).unwrap_err();
        assert!(matches!(err, RepoError::Validation(msg) if msg.contains("name")));
    }

    #[test]
    fn rejects_negative_price_and_stock() {
        let mut data = valid_create();
        data.price = Decimal::new(-1, 2);
        assert!(validate_product_create(&data, &categories()).is_err());

        let mut data = valid_create();
        data.stock = -3;
        assert!(validate_product_create(&data, &categories()).is_err());
    }

    #[test]
    fn zero_price_is_allowed() {
        let mut data = valid_create();
        data.price = Decimal::ZERO;
        assert!(validate_product_create(&data, &categories()).is_ok());
    }

    #[test]
    fn rejects_unknown_or_missing_category() {
        let mut data = valid_create();
        data.category = "Otomotif".into();
        assert!(validate_product_create(&data, &categories()).is_err());

        data.category = String::new();
        assert!(validate_product_create(&data, &categories()).is_err());
    }

    #[test]
    fn image_count_is_capped() {
        let mut data = valid_create();
        data.images = (0..6).map(|i| format!("img/{i}.jpg")).collect();
        assert!(validate_product_create(&data, &categories()).is_err());

        data.images.truncate(5);
        assert!(validate_product_create(&data, &categories()).is_ok());

        data.images.clear();
        assert!(validate_product_create(&data, &categories()).is_ok());
    }

    #[test]
    fn update_checks_only_present_fields() {
        let patch = ProductUpdate {
            stock: Some(4),
            ..Default::default()
        };
        assert!(validate_product_update(&patch, &categories()).is_ok());

        let patch = ProductUpdate {
            category: Some("Otomotif".into()),
            ..Default::default()
        };
        assert!(validate_product_update(&patch, &categories()).is_err());
    }

    #[test]
    fn variant_names_are_required() {
        let mut data = valid_create();
        data.variants = vec![ProductVariant {
            name: " ".into(),
            stock: 1,
            price: None,
        }];
        assert!(validate_product_create(&data, &categories()).is_err());
    }
}
