pub mod answer;
pub mod romaji;
pub mod settings;
pub mod unicode;
pub mod verbs;
