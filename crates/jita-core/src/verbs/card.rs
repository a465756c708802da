use serde::{Deserialize, Serialize};

/// Whether the verb takes a direct object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbType {
    Transitive,
    Intransitive,
}

/// One furigana segment: base text plus its reading (empty when the text
/// is already kana).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubySegment {
    pub text: String,
    #[serde(default)]
    pub rt: String,
}

/// An immutable quiz card: one noun+verb sentence in both registers.
///
/// Created at load time from the dataset, never mutated. The ruby fields
/// are display metadata for front ends that render furigana; validation
/// only reads the sentence and kana fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbCard {
    pub id: u32,
    pub level: u8,
    #[serde(rename = "type")]
    pub verb_type: VerbType,
    /// Polite-register sentence, kanji and all.
    pub polite: String,
    /// All-kana rendering of the polite sentence.
    pub polite_kana: String,
    /// Plain-register (dictionary form) sentence.
    pub plain: String,
    /// All-kana rendering of the plain sentence.
    pub plain_kana: String,
    pub english: String,
    pub noun: String,
    pub noun_ruby: Vec<RubySegment>,
    /// The verb stem shown in the prompt.
    pub verb_prompt: String,
    pub verb_ruby: Vec<RubySegment>,
    pub dictionary_ruby: Vec<RubySegment>,
}
