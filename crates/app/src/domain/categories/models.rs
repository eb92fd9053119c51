//! Category Models

use jiff::Timestamp;

use crate::{i18n::TranslatedText, uuids::TypedUuid};

/// Category UUID
pub type CategoryUuid = TypedUuid<Category>;

/// Category Model
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub uuid: CategoryUuid,
    pub name: TranslatedText,
    pub description: TranslatedText,
    /// Emoji or short code shown next to the category name.
    pub icon: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Category Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub uuid: CategoryUuid,
    pub name: TranslatedText,
    pub description: TranslatedText,
    pub icon: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
}

/// Category Update Model
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryUpdate {
    pub name: TranslatedText,
    pub description: TranslatedText,
    pub icon: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
}
