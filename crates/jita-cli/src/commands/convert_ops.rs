use serde::Serialize;

use jita_core::romaji::{remap_cursor, transliterate};

/// One conversion result (what `--json` prints).
#[derive(Debug, Serialize)]
struct ConvertReport<'a> {
    input: &'a str,
    output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<usize>,
}

pub fn convert_cmd(text: &str, cursor: Option<usize>, json: bool) {
    let report = ConvertReport {
        input: text,
        output: transliterate(text),
        cursor: cursor.map(|c| remap_cursor(text, c)),
    };

    if json {
        println!("{}", serde_json::to_string(&report).expect("report serialize"));
    } else {
        println!("{}", report.output);
        if let Some(c) = report.cursor {
            println!("cursor: {c}");
        }
    }
}
