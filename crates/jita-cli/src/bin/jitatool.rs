use clap::{Parser, Subcommand, ValueEnum};

use jita_cli::commands::{card_ops, config_ops, convert_ops};
use jita_core::answer::FormSet;
use jita_core::verbs::VerbType;

#[derive(Parser)]
#[command(name = "jitatool", about = "Pair-drill engine diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert romanized text to hiragana
    Convert {
        /// Text to convert
        text: String,
        /// Cursor offset (in chars) to remap alongside the conversion
        #[arg(long)]
        cursor: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check an answer against a card
    Check {
        /// Card id
        id: u32,
        /// Answer text (hiragana or katakana)
        answer: String,
        /// Accept only the polite register
        #[arg(long)]
        polite: bool,
        /// Accept only the plain register (both registers when neither
        /// flag is given)
        #[arg(long)]
        plain: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List cards from the dataset
    Cards {
        /// Restrict to these levels (repeatable; default: all)
        #[arg(short, long)]
        level: Vec<u8>,
        /// Restrict to one verb type
        #[arg(long, value_enum)]
        r#type: Option<TypeArg>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print an embedded default document
    Export {
        #[arg(value_enum)]
        what: ConfigKind,
    },

    /// Validate a TOML document against the expected schema
    Validate {
        #[arg(value_enum)]
        what: ConfigKind,
        /// Path to the TOML file
        file: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ConfigKind {
    Romaji,
    Settings,
    Verbs,
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeArg {
    Transitive,
    Intransitive,
}

impl From<TypeArg> for VerbType {
    fn from(t: TypeArg) -> Self {
        match t {
            TypeArg::Transitive => VerbType::Transitive,
            TypeArg::Intransitive => VerbType::Intransitive,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { text, cursor, json } => convert_ops::convert_cmd(&text, cursor, json),

        Command::Check {
            id,
            answer,
            polite,
            plain,
            json,
        } => {
            let forms = match (polite, plain) {
                (false, false) => FormSet::all(),
                (polite, plain) => FormSet { polite, plain },
            };
            card_ops::check_cmd(id, &answer, forms, json);
        }

        Command::Cards {
            level,
            r#type,
            json,
        } => {
            let levels: Vec<u8> = if level.is_empty() {
                (1..=6).collect()
            } else {
                level
            };
            let types = match r#type {
                Some(t) => vec![t.into()],
                None => vec![VerbType::Transitive, VerbType::Intransitive],
            };
            card_ops::cards_cmd(&levels, &types, json);
        }

        Command::Export { what } => match what {
            ConfigKind::Romaji => config_ops::romaji_export(),
            ConfigKind::Settings => config_ops::settings_export(),
            ConfigKind::Verbs => config_ops::verbs_export(),
        },

        Command::Validate { what, file } => match what {
            ConfigKind::Romaji => config_ops::romaji_validate(&file),
            ConfigKind::Settings => config_ops::settings_validate(&file),
            ConfigKind::Verbs => config_ops::verbs_validate(&file),
        },
    }
}
