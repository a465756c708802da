/// Default romanization table, embedded at compile time and validated by
/// `build.rs`.
pub const DEFAULT_TOML: &str = include_str!("default_romaji.toml");
