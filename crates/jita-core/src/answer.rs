//! Answer validation against a card's accepted renderings.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::unicode::katakana_to_hiragana;
use crate::verbs::VerbCard;

/// Grammatical register of an accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Polite,
    Plain,
}

/// The registers an answer may be given in.
///
/// Both flags set is the everyday case, so this is a plain flag pair
/// rather than an enum. Neither flag set matches nothing: the settings
/// layer keeps at least one register selected, but the validator does not
/// depend on that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormSet {
    pub polite: bool,
    pub plain: bool,
}

impl FormSet {
    pub const fn all() -> Self {
        Self {
            polite: true,
            plain: true,
        }
    }

    pub const fn only(form: Form) -> Self {
        match form {
            Form::Polite => Self {
                polite: true,
                plain: false,
            },
            Form::Plain => Self {
                polite: false,
                plain: true,
            },
        }
    }

    pub fn from_forms(forms: &[Form]) -> Self {
        Self {
            polite: forms.contains(&Form::Polite),
            plain: forms.contains(&Form::Plain),
        }
    }

    pub fn contains(self, form: Form) -> bool {
        match form {
            Form::Polite => self.polite,
            Form::Plain => self.plain,
        }
    }

    pub fn is_empty(self) -> bool {
        !self.polite && !self.plain
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Check a raw user answer against every accepted rendering of `card`.
///
/// The input is trimmed, stripped of internal whitespace, and folded to
/// hiragana. Each accepted register contributes two candidates: the folded
/// sentence field and the folded, whitespace-stripped kana field. Matching
/// is exact membership — no substring, no edit distance.
pub fn validate_answer(raw_input: &str, card: &VerbCard, forms: FormSet) -> bool {
    let input = katakana_to_hiragana(&strip_whitespace(raw_input.trim()));

    let mut candidates: Vec<String> = Vec::with_capacity(4);
    if forms.polite {
        candidates.push(katakana_to_hiragana(&card.polite));
        candidates.push(katakana_to_hiragana(&strip_whitespace(&card.polite_kana)));
    }
    if forms.plain {
        candidates.push(katakana_to_hiragana(&card.plain));
        candidates.push(katakana_to_hiragana(&strip_whitespace(&card.plain_kana)));
    }

    let matched = candidates.iter().any(|c| *c == input);
    if !matched {
        debug!(card = card.id, "answer matched no accepted rendering");
    }
    matched
}
