//! Interactive terminal drill over the verb-pair deck.

use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use unicode_width::UnicodeWidthStr;

use jita_core::answer::FormSet;
use jita_core::settings;
use jita_core::verbs::VerbSet;
use jita_session::{build_deck, QuizSession, SubmitOutcome};

#[derive(Parser)]
#[command(
    name = "jitadrill",
    about = "Transitive/intransitive verb-pair drill"
)]
struct Cli {
    /// Restrict to these levels (repeatable; default: settings)
    #[arg(short, long)]
    level: Vec<u8>,
    /// Present cards in id order instead of shuffling
    #[arg(long)]
    fixed: bool,
    /// Accept only the polite register
    #[arg(long)]
    polite: bool,
    /// Accept only the plain register (both when neither flag is given)
    #[arg(long)]
    plain: bool,
    /// Show English glosses with each prompt
    #[arg(long)]
    english: bool,
    /// Show the paired verb's dictionary form as a hint
    #[arg(long)]
    pairs: bool,
    /// Shuffle seed, for reproducible decks
    #[arg(long)]
    seed: Option<u64>,
}

const PROMPT_COLUMN: usize = 18;

fn main() {
    let cli = Cli::parse();

    let defaults = settings::settings();
    let mut filter = defaults.filter.clone();
    if !cli.level.is_empty() {
        filter.levels = cli.level.clone();
    }
    if cli.fixed {
        filter.fixed_order = true;
    }
    let show_english = cli.english || defaults.display.english;
    let show_pairs = cli.pairs || defaults.display.pairs;
    let forms = match (cli.polite, cli.plain) {
        (false, false) => filter.form_set(),
        (polite, plain) => FormSet { polite, plain },
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let deck = build_deck(VerbSet::global().cards(), &filter, &mut rng);
    if deck.is_empty() {
        println!("No cards match the selected levels and types.");
        return;
    }

    let mut session = QuizSession::new(deck, forms);
    println!(
        "{} cards. Type the full sentence; romaji converts as it is read.",
        session.remaining()
    );
    println!("Commands: :skip shows the answer, :quit ends the drill.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_complete() {
        let card = session.current_card().expect("deck is not empty").clone();
        let prompt = format!("{} + {}", card.noun, card.verb_prompt);
        let pad = " ".repeat(PROMPT_COLUMN.saturating_sub(UnicodeWidthStr::width(prompt.as_str())));
        print!(
            "[{:>2}/{}] {prompt}{pad}",
            session.question_number(),
            session.progress().total
        );
        if show_english {
            print!(" ({})", card.english);
        }
        if show_pairs {
            if let Some(pair) = VerbSet::global().pair_of(&card) {
                let dict: String = pair
                    .dictionary_ruby
                    .iter()
                    .map(|r| r.text.as_str())
                    .collect();
                print!("  [pair: {dict}]");
            }
        }
        print!("\n> ");
        io::stdout().flush().expect("stdout flush");

        let Some(line) = lines.next() else { break };
        let Ok(line) = line else { break };
        let line = line.trim();

        match line {
            ":quit" | ":q" => break,
            ":skip" | ":s" => {
                session.reveal();
                println!("answer: {} ({})\n", card.polite, card.polite_kana);
                session.advance();
                continue;
            }
            _ => {}
        }

        let update = session.input_changed(line, line.chars().count());
        match session.submit() {
            SubmitOutcome::Invalid => {
                println!("couldn't read that as hiragana: {}\n", update.text);
                session.retry();
            }
            SubmitOutcome::Correct => {
                println!("correct: {}\n", card.polite);
                session.advance();
            }
            SubmitOutcome::Incorrect => {
                println!(
                    "not quite. accepted: {} / {}\n",
                    card.polite_kana, card.plain_kana
                );
                session.advance();
            }
        }
    }

    let p = session.progress();
    println!("Done: {}/{} cleared ({:.0}%).", p.correct, p.total, p.percent());
}
