//! Static verb-pair dataset.
//!
//! Cards are loaded once from embedded TOML (or a custom document supplied
//! before first use) and shared read-only for the life of the process.

mod card;
mod config;
mod set;

pub use card::{RubySegment, VerbCard, VerbType};
pub use config::{parse_verbs_toml, VerbDataError};
pub use set::{VerbSet, DEFAULT_TOML};
