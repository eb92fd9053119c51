//! Bilingual content fields and their resolution rules.
//!
//! Catalog records carry their name and description in both English and
//! Norwegian. Records that predate the bilingual scheme store a plain
//! string instead; [`TranslatedText`] models both shapes so the fallback
//! chain is matched exhaustively rather than probed.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A supported content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    No,
}

impl Language {
    /// The two-letter code used in stored fields and query parameters.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::No => "no",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported language code: {0}")]
pub struct ParseLanguageError(String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("en") {
            Ok(Self::En)
        } else if s.eq_ignore_ascii_case("no") {
            Ok(Self::No)
        } else {
            Err(ParseLanguageError(s.to_string()))
        }
    }
}

/// A bilingual content field, or a plain string kept from before the
/// bilingual scheme existed.
///
/// Stored untagged: a JSON object deserializes as [`Self::Localized`], a
/// bare JSON string as [`Self::Legacy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslatedText {
    Localized { en: String, no: String },
    Legacy(String),
}

impl TranslatedText {
    /// Build a field from an admin form submission.
    ///
    /// A blank secondary entry is filled with the primary text at write
    /// time, so fields created through this path always carry both
    /// languages.
    #[must_use]
    pub fn from_form(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        let en = primary.into();
        let secondary = secondary.into();

        let no = if secondary.trim().is_empty() {
            en.clone()
        } else {
            secondary
        };

        Self::Localized { en, no }
    }

    /// Resolve the best available text for `language`.
    ///
    /// Legacy strings are returned verbatim. Localized fields yield the
    /// requested language when non-empty, then English, then the empty
    /// string. Never fails.
    #[must_use]
    pub fn resolve(&self, language: Language) -> &str {
        match self {
            Self::Legacy(text) => text,
            Self::Localized { en, no } => {
                let preferred = match language {
                    Language::En => en,
                    Language::No => no,
                };

                if !preferred.is_empty() {
                    preferred
                } else if !en.is_empty() {
                    en
                } else {
                    ""
                }
            }
        }
    }

    /// True when no tier holds any text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Legacy(text) => text.is_empty(),
            Self::Localized { en, no } => en.is_empty() && no.is_empty(),
        }
    }
}
