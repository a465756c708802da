use std::collections::BTreeSet;

use serde::Deserialize;

use super::card::VerbCard;

#[derive(Deserialize)]
struct VerbConfig {
    cards: Vec<VerbCard>,
}

#[derive(Debug, thiserror::Error)]
pub enum VerbDataError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[cards]] list is empty")]
    Empty,
    #[error("duplicate card id: {0}")]
    DuplicateId(u32),
    #[error("card {id}: {reason}")]
    Invalid { id: u32, reason: String },
    #[error("verb set already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into validated cards, in document order.
pub fn parse_verbs_toml(toml_str: &str) -> Result<Vec<VerbCard>, VerbDataError> {
    let config: VerbConfig =
        toml::from_str(toml_str).map_err(|e| VerbDataError::Parse(e.to_string()))?;

    if config.cards.is_empty() {
        return Err(VerbDataError::Empty);
    }

    let mut seen = BTreeSet::new();
    for card in &config.cards {
        if card.id == 0 {
            return Err(VerbDataError::Invalid {
                id: 0,
                reason: "id must be positive".to_string(),
            });
        }
        if !seen.insert(card.id) {
            return Err(VerbDataError::DuplicateId(card.id));
        }
        if !(1..=6).contains(&card.level) {
            return Err(VerbDataError::Invalid {
                id: card.id,
                reason: format!("level must be 1..=6, got {}", card.level),
            });
        }
        for (field, value) in [
            ("polite", &card.polite),
            ("polite_kana", &card.polite_kana),
            ("plain", &card.plain),
            ("plain_kana", &card.plain_kana),
        ] {
            if value.is_empty() {
                return Err(VerbDataError::Invalid {
                    id: card.id,
                    reason: format!("{field} must not be empty"),
                });
            }
        }
    }

    Ok(config.cards)
}
