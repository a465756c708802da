//! Romaji-to-hiragana transliteration.
//!
//! A longest-match-first rule list converts romanized input into hiragana,
//! with dedicated rewrite passes for sokuon (っ), hatsuon (ん), and the
//! explicit `nn` spelling running ahead of table lookup.

mod config;
mod convert;
mod rules;
mod table;

pub use config::{parse_romaji_toml, RomajiConfigError};
pub use convert::{remap_cursor, transliterate};
pub use rules::RomajiRules;
pub use table::DEFAULT_TOML;
