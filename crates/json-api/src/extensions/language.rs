//! Language query parsing helpers.

use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use vitrine_app::i18n::Language;

use crate::extensions::*;

/// Parse the optional `lang` query parameter, defaulting to English.
pub(crate) trait LanguageExt {
    fn into_language(self) -> Result<Language, StatusError>;
}

impl LanguageExt for QueryParam<String, false> {
    fn into_language(self) -> Result<Language, StatusError> {
        self.into_inner()
            .map(|value| value.parse::<Language>())
            .transpose()
            .or_400("could not parse \"lang\" query parameter")
            .map(|language| language.unwrap_or(Language::En))
    }
}
