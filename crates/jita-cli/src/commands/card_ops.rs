use std::process;

use unicode_width::UnicodeWidthStr;

use jita_core::answer::{validate_answer, FormSet};
use jita_core::verbs::{VerbSet, VerbType};

pub fn check_cmd(id: u32, answer: &str, forms: FormSet, json: bool) {
    let set = VerbSet::global();
    let Some(card) = set.get(id) else {
        eprintln!("Error: no card with id {id}");
        process::exit(2);
    };

    let correct = validate_answer(answer, card, forms);
    if json {
        let obj = serde_json::json!({
            "id": id,
            "answer": answer,
            "correct": correct,
        });
        println!("{obj}");
    } else if correct {
        println!("correct: {}", card.polite);
    } else {
        println!(
            "wrong (accepted: {} / {})",
            card.polite_kana, card.plain_kana
        );
    }

    if !correct {
        process::exit(1);
    }
}

pub fn cards_cmd(levels: &[u8], types: &[VerbType], json: bool) {
    let set = VerbSet::global();
    let cards = set.filter(levels, types);

    if json {
        let out = serde_json::to_string_pretty(&cards).expect("cards serialize");
        println!("{out}");
        return;
    }

    for card in &cards {
        let type_tag = match card.verb_type {
            VerbType::Transitive => "vt",
            VerbType::Intransitive => "vi",
        };
        println!(
            "{:>3}  L{}  {}  {}{}  {}",
            card.id,
            card.level,
            type_tag,
            card.polite,
            pad_to(&card.polite, 22),
            card.english
        );
    }
    println!("{} cards", cards.len());
}

/// Space padding that accounts for double-width CJK glyphs.
fn pad_to(s: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(UnicodeWidthStr::width(s)))
}
