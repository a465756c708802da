mod proptest_fsm;

use jita_core::answer::{Form, FormSet};
use jita_core::settings::FilterSettings;
use jita_core::unicode::katakana_to_hiragana;
use jita_core::verbs::{parse_verbs_toml, VerbCard, VerbType, DEFAULT_TOML};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{build_deck, QuizSession};

fn all_cards() -> Vec<VerbCard> {
    parse_verbs_toml(DEFAULT_TOML).unwrap()
}

fn fixed_filter(levels: &[u8]) -> FilterSettings {
    FilterSettings {
        levels: levels.to_vec(),
        types: vec![VerbType::Transitive, VerbType::Intransitive],
        forms: vec![Form::Polite, Form::Plain],
        fixed_order: true,
    }
}

/// Deterministic session over levels 1-2, ids ascending, both forms.
fn fixed_session() -> QuizSession {
    let cards = all_cards();
    let mut rng = StdRng::seed_from_u64(7);
    let deck = build_deck(&cards, &fixed_filter(&[1, 2]), &mut rng);
    QuizSession::new(deck, FormSet::all())
}

/// Type the correct polite-register answer for the current card, the way a
/// player would: in hiragana.
fn type_correct_answer(session: &mut QuizSession) {
    let answer = {
        let card = session.current_card().expect("a card is up");
        katakana_to_hiragana(&card.polite_kana)
    };
    let len = answer.chars().count();
    session.input_changed(&answer, len);
}
