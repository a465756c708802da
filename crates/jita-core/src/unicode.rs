//! Character-level Unicode classification for Japanese text.

/// Strict hiragana letter range (U+3041..=U+3096). Deliberately excludes
/// the combining marks, iteration marks, and the prolonged sound mark ー,
/// so the submission gate rejects anything that is not a plain hiragana
/// letter.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c)
}

/// Katakana letters with a hiragana counterpart (U+30A1..=U+30F6). The
/// rest of the katakana block (ー, ヷ..ヺ, ・) has no 0x60-shifted
/// equivalent and is treated as ordinary passthrough text.
pub fn is_katakana_letter(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c)
}

/// Fold katakana letters onto their hiragana counterparts, 0x60 below.
/// All other characters pass through, which makes the fold total and
/// idempotent.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_katakana_letter(c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Check that a string is non-empty, pure hiragana.
///
/// Rejects katakana, Latin, kanji, punctuation, and whitespace. Used as
/// the submission gate ahead of answer validation; a false result is the
/// caller's cue to flag the input, not an error.
pub fn is_hiragana_only(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_hiragana)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hiragana_only() {
        assert!(is_hiragana_only("あいう"));
        assert!(is_hiragana_only("どあがあきます"));
        assert!(!is_hiragana_only(""));
        assert!(!is_hiragana_only("アイウ"));
        assert!(!is_hiragana_only("あい "));
        assert!(!is_hiragana_only("あaい"));
        assert!(!is_hiragana_only("漢字"));
        assert!(!is_hiragana_only("らーめん")); // prolonged mark is not a letter
    }

    #[test]
    fn test_katakana_to_hiragana() {
        assert_eq!(katakana_to_hiragana("ドアガアキマス"), "どあがあきます");
        assert_eq!(katakana_to_hiragana("ドアがあきます"), "どあがあきます");
        assert_eq!(katakana_to_hiragana(""), "");
        assert_eq!(katakana_to_hiragana("abc"), "abc");
        // ー is outside the folded range and survives
        assert_eq!(katakana_to_hiragana("ラーメン"), "らーめん");
    }

    #[test]
    fn test_fold_is_idempotent() {
        for s in ["ドアガアキマス", "まざった文字列ダヨ", "abcー"] {
            let once = katakana_to_hiragana(s);
            assert_eq!(katakana_to_hiragana(&once), once);
        }
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(is_hiragana('ゖ')); // U+3096, top of the range
        assert!(!is_hiragana('ア'));
        assert!(!is_hiragana('ー'));
        assert!(is_katakana_letter('ア'));
        assert!(is_katakana_letter('ヶ')); // U+30F6, top of the range
        assert!(!is_katakana_letter('ー'));
        assert!(!is_katakana_letter('あ'));
    }
}
