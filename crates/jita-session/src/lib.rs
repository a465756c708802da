//! Stateful quiz session over the jita-core conversion and validation
//! primitives.
//!
//! `QuizSession` owns the deck and the in-progress answer, processes UI
//! events, and returns plain response values. The front end owns every
//! widget and applies the responses on its own schedule; the session never
//! touches UI objects.

mod deck;
mod types;

#[cfg(test)]
mod tests;

use tracing::debug;

use jita_core::answer::{validate_answer, FormSet};
use jita_core::romaji::{remap_cursor, transliterate};
use jita_core::unicode::is_hiragana_only;
use jita_core::verbs::VerbCard;

pub use deck::build_deck;
pub use types::{Feedback, InputUpdate, Progress, SubmitOutcome};

/// One play-through of a deck.
///
/// A correctly answered card leaves the deck; an incorrectly answered card
/// is re-queued at the back when the player moves on. The session is
/// complete when the deck is empty.
pub struct QuizSession {
    deck: Vec<VerbCard>,
    current: usize,
    correct_count: usize,
    total: usize,
    input: String,
    feedback: Option<Feedback>,
    answer_revealed: bool,
    forms: FormSet,
}

impl QuizSession {
    pub fn new(deck: Vec<VerbCard>, forms: FormSet) -> Self {
        let total = deck.len();
        Self {
            deck,
            current: 0,
            correct_count: 0,
            total,
            input: String::new(),
            feedback: None,
            answer_revealed: false,
            forms,
        }
    }

    pub fn current_card(&self) -> Option<&VerbCard> {
        self.deck.get(self.current)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    /// True once every card has been answered correctly.
    pub fn is_complete(&self) -> bool {
        self.deck.is_empty() && self.total > 0
    }

    /// True when the deck was empty to begin with (filters matched
    /// nothing).
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty() && self.total == 0
    }

    pub fn progress(&self) -> Progress {
        Progress {
            correct: self.correct_count,
            total: self.total,
        }
    }

    /// 1-based number of the question being asked.
    pub fn question_number(&self) -> usize {
        self.correct_count + 1
    }

    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    /// Apply a keystroke edit: convert the raw field value to hiragana and
    /// remap the cursor. The converted text becomes the current answer.
    pub fn input_changed(&mut self, raw_value: &str, cursor: usize) -> InputUpdate {
        let text = transliterate(raw_value);
        let cursor = remap_cursor(raw_value, cursor);
        self.input = text.clone();
        InputUpdate { text, cursor }
    }

    /// Validate the current input against the current card.
    ///
    /// `Invalid` leaves all quiz state untouched. `Correct` and
    /// `Incorrect` set feedback; the card itself only moves on the
    /// following `advance()`, mirroring the feedback-then-continue flow.
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(card) = self.deck.get(self.current) else {
            return SubmitOutcome::Invalid;
        };

        let trimmed = self.input.trim();
        if !is_hiragana_only(trimmed) {
            debug!("submission rejected by hiragana gate");
            return SubmitOutcome::Invalid;
        }

        if validate_answer(trimmed, card, self.forms) {
            self.feedback = Some(Feedback::Correct);
            SubmitOutcome::Correct
        } else {
            self.feedback = Some(Feedback::Incorrect);
            SubmitOutcome::Incorrect
        }
    }

    /// Move on from the current feedback state.
    ///
    /// After a correct answer the card leaves the deck and the score
    /// increments; after an incorrect one the card is re-queued at the
    /// back. Without feedback this is a no-op.
    pub fn advance(&mut self) {
        match self.feedback {
            Some(Feedback::Correct) => {
                let card = self.deck.remove(self.current);
                debug!(card = card.id, "card cleared");
                self.correct_count += 1;
                if self.current >= self.deck.len() {
                    self.current = 0;
                }
                self.clear_turn_state();
            }
            Some(Feedback::Incorrect) => {
                let card = self.deck.remove(self.current);
                debug!(card = card.id, "card re-queued");
                self.deck.push(card);
                self.clear_turn_state();
            }
            None => {}
        }
    }

    /// Try the current card again: feedback and input reset, card stays.
    pub fn retry(&mut self) {
        self.clear_turn_state();
    }

    /// Give up on the current card: mark it answered incorrectly and show
    /// the answer. The card is re-queued on the following `advance()`.
    /// No-op when no card is up.
    pub fn reveal(&mut self) {
        if self.current_card().is_none() {
            return;
        }
        self.feedback = Some(Feedback::Incorrect);
        self.answer_revealed = true;
    }

    /// Start over with a freshly built deck.
    pub fn restart(&mut self, deck: Vec<VerbCard>) {
        self.total = deck.len();
        self.deck = deck;
        self.current = 0;
        self.correct_count = 0;
        self.clear_turn_state();
    }

    fn clear_turn_state(&mut self) {
        self.input.clear();
        self.feedback = None;
        self.answer_revealed = false;
    }
}
