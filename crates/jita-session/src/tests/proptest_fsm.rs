//! Randomized event sequences against the session state machine.

use proptest::prelude::*;

use super::*;
use crate::SubmitOutcome;

#[derive(Debug, Clone)]
enum Op {
    TypeCorrect,
    TypeWrong,
    TypeInvalid,
    Submit,
    Advance,
    Retry,
    Reveal,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::TypeCorrect),
        Just(Op::TypeWrong),
        Just(Op::TypeInvalid),
        Just(Op::Submit),
        Just(Op::Advance),
        Just(Op::Retry),
        Just(Op::Reveal),
    ]
}

fn apply(session: &mut QuizSession, op: &Op) {
    match op {
        Op::TypeCorrect => {
            if session.current_card().is_some() {
                type_correct_answer(session);
            }
        }
        Op::TypeWrong => {
            session.input_changed("あ", 1);
        }
        Op::TypeInvalid => {
            session.input_changed("abc", 3);
        }
        Op::Submit => {
            session.submit();
        }
        Op::Advance => session.advance(),
        Op::Retry => session.retry(),
        Op::Reveal => session.reveal(),
    }
}

proptest! {
    /// Cards are conserved: every card is either still in the deck or
    /// counted as correct, no matter what the player does.
    #[test]
    fn deck_accounting_holds(ops in prop::collection::vec(op_strategy(), 1..80)) {
        let mut session = fixed_session();
        let total = session.progress().total;

        for op in &ops {
            apply(&mut session, op);

            prop_assert_eq!(session.progress().correct + session.remaining(), total);
            prop_assert!(session.progress().correct <= total);
            // the cursor into the deck stays valid whenever cards remain
            prop_assert!(session.remaining() == 0 || session.current_card().is_some());
            // completion is exactly "deck drained"
            prop_assert_eq!(session.is_complete(), session.remaining() == 0);
        }
    }

    /// The hiragana gate never lets raw Latin through, and an empty form
    /// set never accepts anything.
    #[test]
    fn gate_and_empty_forms(input in "[a-z ]{0,12}") {
        let cards = all_cards();
        let mut rng = StdRng::seed_from_u64(3);
        let deck = build_deck(&cards, &fixed_filter(&[1]), &mut rng);

        let mut gated = QuizSession::new(deck.clone(), FormSet::all());
        let len = input.chars().count();
        let update = gated.input_changed(&input, len);
        // submit trims, so judge the gate on the trimmed text
        let trimmed = update.text.trim();
        if trimmed.is_empty() || trimmed.chars().any(|c| c.is_ascii_alphabetic() || c == ' ') {
            prop_assert_eq!(gated.submit(), SubmitOutcome::Invalid);
        }

        let mut formless = QuizSession::new(deck, FormSet::default());
        formless.input_changed(&input, len);
        prop_assert_ne!(formless.submit(), SubmitOutcome::Correct);
    }
}
