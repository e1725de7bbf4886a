//! Built-in language rules embedded at compile time

use crate::error::{CoreError, Result};
use crate::language::runtime::LanguageRules;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

static EMBEDDED: OnceLock<HashMap<&'static str, Arc<LanguageRules>>> = OnceLock::new();

/// (code, name alias, TOML source)
const BUILTIN: &[(&str, &str, &str)] = &[
    (
        "en",
        "english",
        include_str!("../../configs/languages/english.toml"),
    ),
    (
        "ja",
        "japanese",
        include_str!("../../configs/languages/japanese.toml"),
    ),
];

/// Get built-in rules by language code or name (`en`, `english`, `ja`, `japanese`)
pub fn get_rules(code: &str) -> Result<Arc<LanguageRules>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        for &(code, alias, source) in BUILTIN {
            match LanguageRules::from_toml_str(source) {
                Ok(rules) => {
                    let rules = Arc::new(rules);
                    map.insert(code, Arc::clone(&rules));
                    map.insert(alias, rules);
                }
                Err(e) => {
                    log::warn!("failed to load built-in '{code}' rules: {e}");
                }
            }
        }

        map
    });

    embedded
        .get(code.to_ascii_lowercase().as_str())
        .cloned()
        .ok_or_else(|| CoreError::UnsupportedLanguage(code.to_string()))
}

/// Codes and names of the built-in languages
pub fn available_languages() -> Vec<(&'static str, &'static str)> {
    BUILTIN
        .iter()
        .map(|&(code, alias, _)| (code, alias))
        .collect()
}
