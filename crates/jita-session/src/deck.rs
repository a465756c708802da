//! Deck construction: filter by level and verb type, then order.

use jita_core::settings::FilterSettings;
use jita_core::verbs::VerbCard;
use rand::seq::SliceRandom;
use rand::Rng;

/// Build a quiz deck: keep cards matching the selected levels and types,
/// then sort ascending by id (fixed order) or shuffle with the caller's
/// rng. The rng is injected so sessions stay deterministic under test.
pub fn build_deck(cards: &[VerbCard], filter: &FilterSettings, rng: &mut impl Rng) -> Vec<VerbCard> {
    let mut deck: Vec<VerbCard> = cards
        .iter()
        .filter(|c| filter.levels.contains(&c.level) && filter.types.contains(&c.verb_type))
        .cloned()
        .collect();

    if filter.fixed_order {
        deck.sort_by_key(|c| c.id);
    } else {
        deck.shuffle(rng);
    }
    deck
}
