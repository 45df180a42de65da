//! Language code resolution against the provider's language table

use std::fmt;

use crate::core::languages::LANGUAGES;

/// A provider language: canonical code plus English display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Canonical provider code, e.g. `zh-Hans`
    pub code: &'static str,
    /// English display name
    pub name: &'static str,
}

impl Language {
    /// Create a language entry
    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.name)
    }
}

/// Immutable, ordered mapping from language code to display name.
///
/// Lookups are linear: the table is small and order matters, since the
/// first matching entry wins when a name and a code collide.
#[derive(Debug, Clone, Copy)]
pub struct LanguageTable {
    entries: &'static [Language],
}

impl LanguageTable {
    /// Wrap a static list of languages
    pub const fn new(entries: &'static [Language]) -> Self {
        Self { entries }
    }

    /// Table generated from the provider's language list
    pub const fn builtin() -> Self {
        Self::new(LANGUAGES)
    }

    /// Map a code, a case variant of a code, or an English display name to
    /// the canonical code.
    ///
    /// Returns `None` for missing or empty input and for identifiers that
    /// match nothing.
    pub fn resolve(&self, identifier: Option<&str>) -> Option<&'static str> {
        let identifier = identifier.filter(|id| !id.is_empty())?;

        if let Some(lang) = self.entries.iter().find(|l| l.code == identifier) {
            return Some(lang.code);
        }

        let wanted = identifier.to_lowercase();
        self.entries
            .iter()
            .find(|l| l.code.to_lowercase() == wanted || l.name.to_lowercase() == wanted)
            .map(|l| l.code)
    }

    /// Check whether an identifier resolves to a known language
    pub fn is_supported(&self, identifier: &str) -> bool {
        self.resolve(Some(identifier)).is_some()
    }

    /// Display name of a canonical code
    pub fn name_of(&self, code: &str) -> Option<&'static str> {
        self.entries.iter().find(|l| l.code == code).map(|l| l.name)
    }

    /// Iterate over entries in table order
    pub fn iter(&self) -> impl Iterator<Item = &'static Language> {
        self.entries.iter()
    }

    /// Number of languages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolve an identifier against the built-in table
pub fn resolve(identifier: Option<&str>) -> Option<&'static str> {
    LanguageTable::builtin().resolve(identifier)
}

/// Check an identifier against the built-in table
pub fn is_supported(identifier: &str) -> bool {
    LanguageTable::builtin().is_supported(identifier)
}

/// Render the Rust source of the `languages` module from `(code, name)` pairs
pub fn render_table_source(entries: &[(String, String)]) -> String {
    let mut out = String::from(
        "//! Supported translation languages.\n\
         //!\n\
         //! Generated by `edge-translator generate-langs`. Do not edit by hand.\n\
         \n\
         use crate::core::lang::Language;\n\
         \n\
         /// Provider language codes and their English display names, in provider order.\n\
         pub static LANGUAGES: &[Language] = &[\n",
    );
    for (code, name) in entries {
        out.push_str(&format!("    Language::new({:?}, {:?}),\n", code, name));
    }
    out.push_str("];\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_keys_unique_and_non_empty() {
        let mut seen = HashSet::new();
        for lang in LanguageTable::builtin().iter() {
            assert!(!lang.code.is_empty());
            assert!(seen.insert(lang.code), "duplicate code {}", lang.code);
        }
    }

    #[test]
    fn test_every_code_resolves_to_itself() {
        for lang in LanguageTable::builtin().iter() {
            assert_eq!(resolve(Some(lang.code)), Some(lang.code));
        }
    }

    #[test]
    fn test_every_name_resolves_to_its_code() {
        for lang in LanguageTable::builtin().iter() {
            assert_eq!(resolve(Some(lang.name)), Some(lang.code), "{}", lang.name);
        }
    }

    #[test]
    fn test_resolve_case_variants() {
        assert_eq!(resolve(Some("ZH-HANS")), Some("zh-Hans"));
        assert_eq!(resolve(Some("zh-hans")), Some("zh-Hans"));
        assert_eq!(resolve(Some("chinese (literary)")), Some("lzh"));
        assert_eq!(resolve(Some("Chinese (Literary)")), Some("lzh"));
        assert_eq!(resolve(Some("FRENCH")), Some("fr"));
    }

    #[test]
    fn test_resolve_non_ascii_names() {
        assert_eq!(resolve(Some("MĀORI")), Some("mi"));
        assert_eq!(resolve(Some("querétaro otomi")), Some("otq"));
    }

    #[test]
    fn test_resolve_rejects_unknown_and_empty() {
        assert_eq!(resolve(Some("not-a-real-language")), None);
        assert!(!is_supported("not-a-real-language"));
        assert_eq!(resolve(Some("")), None);
        assert_eq!(resolve(None), None);
        assert!(!is_supported(""));
    }

    #[test]
    fn test_first_match_wins_on_collision() {
        static COLLIDING: &[Language] = &[
            Language::new("aa", "Shared"),
            Language::new("bb", "shared"),
        ];
        let table = LanguageTable::new(COLLIDING);
        assert_eq!(table.resolve(Some("SHARED")), Some("aa"));
        assert_eq!(table.resolve(Some("bb")), Some("bb"));
    }

    #[test]
    fn test_name_of() {
        let table = LanguageTable::builtin();
        assert_eq!(table.name_of("lzh"), Some("Chinese (Literary)"));
        assert_eq!(table.name_of("LZH"), None);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_render_matches_builtin_table() {
        let entries: Vec<(String, String)> = LanguageTable::builtin()
            .iter()
            .map(|l| (l.code.to_string(), l.name.to_string()))
            .collect();
        let rendered = render_table_source(&entries);
        assert_eq!(rendered, include_str!("languages.rs"));
    }

    proptest! {
        #[test]
        fn prop_resolution_ignores_case(index in 0..LANGUAGES.len(), use_name in any::<bool>()) {
            let lang = LANGUAGES[index];
            let id = if use_name { lang.name } else { lang.code };
            prop_assert_eq!(resolve(Some(&id.to_uppercase())), resolve(Some(&id.to_lowercase())));
            prop_assert_eq!(resolve(Some(&id.to_lowercase())), Some(lang.code));
        }
    }
}
