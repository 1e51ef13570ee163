// turkmorph-stem: Stem running text.
//
// Reads text from stdin line by line and prints the stems of its words,
// space separated, one output line per input line.
//
// Usage:
//   turkmorph-stem [-l LEXICON] [--config FILE] [--positions] [--json] [TEXT...]
//
// Options:
//   -l, --lexicon PATH   Lexicon file (default: embedded lexicon)
//   --config FILE        JSON file with morphology options
//   --positions          Print each stem with its byte span in the line
//   --json               With --positions, print the spans as JSON
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use turkmorph_tr::Morphology;

#[derive(Clone, Copy)]
enum Output {
    Stems,
    Positions,
    Json,
}

fn main() {
    turkmorph_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let common = turkmorph_cli::parse_common_args(&args).unwrap_or_else(|e| turkmorph_cli::fatal(&e));

    if turkmorph_cli::wants_help(&common.rest) {
        println!("turkmorph-stem: Stem Turkish text.");
        println!();
        println!("Usage: turkmorph-stem [-l LEXICON] [--config FILE] [--positions] [--json] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, stems each one.");
        println!("Otherwise reads text from stdin and stems each line.");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Lexicon file (default: embedded lexicon)");
        println!("  --config FILE        JSON file with morphology options");
        println!("  --positions          Print each stem with its byte span");
        println!("  --json               With --positions, print the spans as JSON");
        println!("  -h, --help           Print this help");
        return;
    }

    let positions = common.rest.iter().any(|a| a == "--positions");
    let json = common.rest.iter().any(|a| a == "--json");
    let output = match (positions, json) {
        (true, true) => Output::Json,
        (true, false) => Output::Positions,
        (false, _) => Output::Stems,
    };
    let texts: Vec<String> = common
        .rest
        .iter()
        .filter(|a| !a.starts_with("--"))
        .cloned()
        .collect();

    let morphology =
        turkmorph_cli::load_morphology(&common).unwrap_or_else(|e| turkmorph_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if texts.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            stem_line(&line, &morphology, output, &mut out);
        }
    } else {
        for text in &texts {
            stem_line(text, &morphology, output, &mut out);
        }
    }
}

fn stem_line(line: &str, morphology: &Morphology, output: Output, out: &mut impl Write) {
    match output {
        Output::Stems => {
            let _ = writeln!(out, "{}", morphology.stem_text(line).join(" "));
        }
        Output::Positions => {
            for span in morphology.stem_text_with_positions(line) {
                let _ = writeln!(
                    out,
                    "{:>5}..{:<5} {:20} {}",
                    span.byte_start,
                    span.byte_end,
                    &line[span.byte_start..span.byte_end],
                    span.stem
                );
            }
            let _ = writeln!(out);
        }
        Output::Json => match serde_json::to_string(&morphology.stem_text_with_positions(line)) {
            Ok(spans) => {
                let _ = writeln!(out, "{spans}");
            }
            Err(e) => eprintln!("error serializing spans: {e}"),
        },
    }
}
