//! Localized strings.
//!
//! Page texts live in [`CommonStrings`]; tag labels are looked up by tag
//! identifier and fall back to the tag's built-in label.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TranslationError;
use crate::types::Tag;

const BUNDLED_EN: &str = include_str!("../data/locales/en.json");
const BUNDLED_FR: &str = include_str!("../data/locales/fr.json");

/// Locales shipped with the application
pub const BUNDLED_LOCALES: &[&str] = &["en", "fr"];

macro_rules! common_strings {
    ($($field:ident => $default:literal),* $(,)?) => {
        /// Page-level texts; missing keys fall back to English.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct CommonStrings {
            $(pub $field: String,)*
        }

        impl Default for CommonStrings {
            fn default() -> Self {
                Self {
                    $($field: $default.to_string(),)*
                }
            }
        }
    };
}

common_strings! {
    title_main => "Discover the ecosystem",
    subtitle_main => "Every project building on the network, in one place",
    community_driven => "Community driven and open to contributions",
    no_project => "No project here yet",
    maybe_yours => "Maybe yours will be the first?",
    category => "Category",
    status => "Status",
    live => "Live",
    testnet => "Testnet",
    flip_hint => "Click for details",
    website => "Website",
    twitter => "Twitter",
    github => "GitHub",
}

/// String lookup for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translations {
    pub common: CommonStrings,
    /// Tag label by tag identifier
    pub tags: HashMap<String, String>,
}

impl Translations {
    /// Bundled translations for `locale`, English when unknown
    pub fn bundled(locale: &str) -> Self {
        let json = match locale {
            "en" => BUNDLED_EN,
            "fr" => BUNDLED_FR,
            other => {
                tracing::warn!("No bundled translations for locale '{}', using en", other);
                BUNDLED_EN
            }
        };
        Self::from_json(json).unwrap_or_else(|e| {
            tracing::error!("Bundled translations for '{}' are invalid: {}", locale, e);
            Self::default()
        })
    }

    pub fn from_json(json: &str) -> Result<Self, TranslationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TranslationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TranslationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Display label for a tag
    pub fn tag_label<'a>(&'a self, tag: &'a Tag) -> &'a str {
        self.tags
            .get(&tag.value)
            .map(String::as_str)
            .unwrap_or(tag.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_locales_parse() {
        for locale in BUNDLED_LOCALES {
            let json = match *locale {
                "en" => BUNDLED_EN,
                _ => BUNDLED_FR,
            };
            assert!(Translations::from_json(json).is_ok(), "{} failed", locale);
        }
    }

    #[test]
    fn tag_label_prefers_translation() {
        let t = Translations::bundled("fr");
        let tag = Tag::new("gaming", "Gaming");
        assert_eq!(t.tag_label(&tag), "Jeux");
    }

    #[test]
    fn tag_label_falls_back_to_builtin() {
        let t = Translations::bundled("fr");
        let tag = Tag::new("dex", "DEX");
        assert_eq!(t.tag_label(&tag), "DEX");
    }

    #[test]
    fn missing_common_keys_use_english() {
        let t = Translations::from_json(r#"{"common":{"no_project":"Rien"}}"#).unwrap();
        assert_eq!(t.common.no_project, "Rien");
        assert_eq!(t.common.maybe_yours, "Maybe yours will be the first?");
        assert!(t.tags.is_empty());
    }

    #[test]
    fn unknown_locale_is_english() {
        assert_eq!(Translations::bundled("xx"), Translations::bundled("en"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Translations::load(dir.path().join("de.json"));
        assert!(matches!(result, Err(TranslationError::Io { .. })));
    }
}
