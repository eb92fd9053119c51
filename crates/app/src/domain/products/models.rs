//! Product Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::categories::models::CategoryUuid, i18n::TranslatedText, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: TranslatedText,
    pub description: TranslatedText,
    pub price: Decimal,
    pub stock: i32,
    pub category_uuid: Option<CategoryUuid>,
    pub image_url: Option<String>,
    pub document_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: TranslatedText,
    pub description: TranslatedText,
    pub price: Decimal,
    pub stock: i32,
    pub category_uuid: Option<CategoryUuid>,
    pub image_url: Option<String>,
    pub document_url: Option<String>,
}

/// Product Update Model
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: TranslatedText,
    pub description: TranslatedText,
    pub price: Decimal,
    pub stock: i32,
    pub category_uuid: Option<CategoryUuid>,
    pub image_url: Option<String>,
    pub document_url: Option<String>,
}
