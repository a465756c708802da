use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn romaji_export() {
    print!("{}", jita_core::romaji::DEFAULT_TOML);
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(jita_core::romaji::parse_romaji_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}

pub fn settings_export() {
    print!("{}", jita_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        jita_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: levels={:?}, fixed_order={}",
        s.filter.levels, s.filter.fixed_order
    );
}

pub fn verbs_export() {
    print!("{}", jita_core::verbs::DEFAULT_TOML);
}

pub fn verbs_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let cards = die!(jita_core::verbs::parse_verbs_toml(&content), "Error: {}");
    println!("OK: {} cards", cards.len());
}
