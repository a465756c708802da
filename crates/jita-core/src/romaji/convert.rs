use tracing::debug_span;

use super::rules::RomajiRules;

const SMALL_TSU: char = 'っ';
const MORAIC_N: char = 'ん';

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Consonants that geminate: every lowercase ASCII consonant except `n`,
/// which the nn/hatsuon passes own.
fn is_geminable(ch: char) -> bool {
    ch.is_ascii_lowercase() && !is_vowel(ch) && ch != 'n'
}

/// Rewrite doubled consonants as っ plus the single consonant, so the
/// residual letter can still combine with a following vowel in the mapping
/// pass.
fn gemination_pass(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 1 < chars.len() && chars[i] == chars[i + 1] && is_geminable(chars[i]) {
            out.push(SMALL_TSU);
            out.push(chars[i]);
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// Rewrite the literal pair `nn` as ん. Runs after gemination (which skips
/// `n`) and before the hatsuon pass, so that pass only sees residual
/// single `n`s.
fn double_n_pass(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 1 < chars.len() && chars[i] == 'n' && chars[i + 1] == 'n' {
            out.push(MORAIC_N);
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// Rewrite a lone `n` as ん when the following character can no longer
/// start a syllable with it: anything but a vowel or `y` (`y` is spared so
/// the にゃ row survives to the mapping pass). A trailing `n` is left
/// alone.
fn hatsuon_pass(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    for (i, &ch) in chars.iter().enumerate() {
        if ch == 'n' {
            if let Some(&next) = chars.get(i + 1) {
                if !is_vowel(next) && next != 'y' {
                    out.push(MORAIC_N);
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

/// Replace every table match with its kana, longest pattern first at each
/// position; unmatched characters pass through.
fn mapping_pass(input: &str, rules: &RomajiRules) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(ch) = rest.chars().next() {
        match rules.longest_prefix(rest) {
            Some((pattern, kana)) => {
                out.push_str(kana);
                rest = &rest[pattern.len()..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    out
}

/// Convert a romanized string to hiragana.
///
/// Case-insensitive; characters no rule covers pass through unchanged, so
/// already-converted hiragana (and digits, kanji, whatever else) survives
/// a second run untouched. Pass order is load-bearing: gemination must run
/// before mapping, and the hatsuon pass must run after the `nn` pass.
pub fn transliterate(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let _span = debug_span!("transliterate", len = input.len()).entered();

    let lowered = input.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let chars = gemination_pass(&chars);
    let chars = double_n_pass(&chars);
    let chars = hatsuon_pass(&chars);
    let rewritten: String = chars.into_iter().collect();
    mapping_pass(&rewritten, RomajiRules::global())
}

/// Map a cursor offset in the raw text to the matching offset in the
/// transliterated text, by converting only the prefix before the cursor.
///
/// Offsets are char counts; out-of-range cursors clamp to the end. This is
/// a pure position calculator: the caller owns the input widget and
/// re-applies the returned offset on its next paint (skipping silently if
/// the widget is gone by then).
pub fn remap_cursor(raw_text: &str, cursor: usize) -> usize {
    let prefix: String = raw_text.chars().take(cursor).collect();
    transliterate(&prefix).chars().count()
}
