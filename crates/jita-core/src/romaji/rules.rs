use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::config::{parse_romaji_toml, RomajiConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Romanization rules compiled for longest-match-first prefix lookup.
///
/// The rule list is held sorted by descending pattern length (ties broken
/// lexicographically), so a 3-letter pattern is always tried before any
/// shorter pattern that is its prefix. The sort happens once, at build.
pub struct RomajiRules {
    rules: Vec<(String, String)>,
}

impl RomajiRules {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RomajiRules {
        static INSTANCE: OnceLock<RomajiRules> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = parse_romaji_toml(toml_str).expect("romaji TOML must be valid");
            Self::compile(map)
        })
    }

    /// Order the parsed mappings longest-first.
    ///
    /// BTreeMap iteration is lexicographic; the stable sort keeps that order
    /// within each length bucket, so the final order is total and
    /// reproducible.
    fn compile(map: BTreeMap<String, String>) -> RomajiRules {
        let mut rules: Vec<(String, String)> = map.into_iter().collect();
        rules.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        RomajiRules { rules }
    }

    /// The longest rule matching a prefix of `input`, if any.
    pub fn longest_prefix(&self, input: &str) -> Option<(&str, &str)> {
        self.rules
            .iter()
            .find(|(pattern, _)| input.starts_with(pattern.as_str()))
            .map(|(pattern, kana)| (pattern.as_str(), kana.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[cfg(test)]
    fn pattern_lengths(&self) -> Vec<usize> {
        self.rules.iter().map(|(p, _)| p.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel() {
        let rules = RomajiRules::global();
        assert_eq!(rules.longest_prefix("a"), Some(("a", "あ")));
    }

    #[test]
    fn test_longest_wins_over_prefix() {
        let rules = RomajiRules::global();
        // "sha" must match before "s"-row fallbacks could see it
        assert_eq!(rules.longest_prefix("sha"), Some(("sha", "しゃ")));
        assert_eq!(rules.longest_prefix("sa"), Some(("sa", "さ")));
    }

    #[test]
    fn test_chi_before_c_fallback() {
        let rules = RomajiRules::global();
        assert_eq!(rules.longest_prefix("chi"), Some(("chi", "ち")));
        assert_eq!(rules.longest_prefix("cha"), Some(("cha", "ちゃ")));
    }

    #[test]
    fn test_no_match_for_bare_consonant() {
        let rules = RomajiRules::global();
        assert_eq!(rules.longest_prefix("k"), None);
        assert_eq!(rules.longest_prefix("xyz"), None);
    }

    #[test]
    fn test_symbols() {
        let rules = RomajiRules::global();
        assert_eq!(rules.longest_prefix("-"), Some(("-", "ー")));
        assert_eq!(rules.longest_prefix("."), Some((".", "。")));
        assert_eq!(rules.longest_prefix("?!"), Some(("?", "？")));
    }

    #[test]
    fn test_small_tsu_spellings() {
        let rules = RomajiRules::global();
        assert_eq!(rules.longest_prefix("ltu"), Some(("ltu", "っ")));
        assert_eq!(rules.longest_prefix("xtu"), Some(("xtu", "っ")));
    }

    #[test]
    fn test_descending_length_invariant() {
        let lengths = RomajiRules::global().pattern_lengths();
        assert!(
            lengths.windows(2).all(|w| w[0] >= w[1]),
            "rules must be sorted by descending pattern length"
        );
    }

    #[test]
    fn test_all_mappings_reachable() {
        let rules = RomajiRules::global();
        let map = parse_romaji_toml(DEFAULT_TOML).unwrap();
        for (romaji, kana) in &map {
            match rules.longest_prefix(romaji) {
                Some((pattern, out)) if pattern == romaji => {
                    assert_eq!(out, kana, "mapping mismatch for romaji={romaji}");
                }
                other => panic!("expected exact match for {romaji}, got {other:?}"),
            }
        }
    }
}
