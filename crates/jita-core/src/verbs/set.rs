use std::sync::OnceLock;

use super::card::{VerbCard, VerbType};
use super::config::{parse_verbs_toml, VerbDataError};

/// Default dataset, embedded at compile time and validated by `build.rs`.
pub const DEFAULT_TOML: &str = include_str!("default_verbs.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// The loaded card set, shared read-only across all callers.
pub struct VerbSet {
    cards: Vec<VerbCard>,
}

impl VerbSet {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), VerbDataError> {
        // Validate eagerly
        parse_verbs_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| VerbDataError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static VerbSet {
        static INSTANCE: OnceLock<VerbSet> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let cards = parse_verbs_toml(toml_str).expect("verb TOML must be valid");
            VerbSet { cards }
        })
    }

    pub fn cards(&self) -> &[VerbCard] {
        &self.cards
    }

    pub fn get(&self, id: u32) -> Option<&VerbCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// The transitive/intransitive partner of a card. Cards are stored in
    /// adjacent pairs, odd id first, so the partner is id±1.
    pub fn pair_of(&self, card: &VerbCard) -> Option<&VerbCard> {
        let pair_id = if card.id % 2 == 1 {
            card.id + 1
        } else {
            card.id - 1
        };
        self.get(pair_id)
    }

    /// Cards matching any of `levels` and any of `types`, in document
    /// order. Ordering for play (fixed vs shuffled) is the session
    /// layer's business.
    pub fn filter(&self, levels: &[u8], types: &[VerbType]) -> Vec<VerbCard> {
        self.cards
            .iter()
            .filter(|c| levels.contains(&c.level) && types.contains(&c.verb_type))
            .cloned()
            .collect()
    }
}
