// turkmorph-analyze: Morphological analysis of words from stdin.
//
// Reads words from stdin (one per line) and prints every analysis of each
// word, marking the one picked by disambiguation.
//
// Usage:
//   turkmorph-analyze [-l LEXICON] [--config FILE] [--json] [WORD...]
//
// Options:
//   -l, --lexicon PATH   Lexicon file (default: embedded lexicon)
//   --config FILE        JSON file with morphology options
//   --json               One JSON object per word
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use turkmorph_tr::Morphology;

fn main() {
    turkmorph_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let common = turkmorph_cli::parse_common_args(&args).unwrap_or_else(|e| turkmorph_cli::fatal(&e));

    if turkmorph_cli::wants_help(&common.rest) {
        println!("turkmorph-analyze: Morphological analysis of Turkish words.");
        println!();
        println!("Usage: turkmorph-analyze [-l LEXICON] [--config FILE] [--json] [WORD...]");
        println!();
        println!("If WORD arguments are given, analyzes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!("The analysis chosen by disambiguation is marked with '*'.");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Lexicon file (default: embedded lexicon)");
        println!("  --config FILE        JSON file with morphology options");
        println!("  --json               One JSON object per word");
        println!("  -h, --help           Print this help");
        return;
    }

    let json = common.rest.iter().any(|a| a == "--json");
    let words: Vec<String> = common
        .rest
        .iter()
        .filter(|a| !a.starts_with('-'))
        .cloned()
        .collect();

    let morphology =
        turkmorph_cli::load_morphology(&common).unwrap_or_else(|e| turkmorph_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            analyze_word(word, &morphology, json, &mut out);
        }
    } else {
        for word in &words {
            analyze_word(word, &morphology, json, &mut out);
        }
    }
}

fn analyze_word(word: &str, morphology: &Morphology, json: bool, out: &mut impl Write) {
    let bundle = morphology.analyze(word);

    if json {
        match serde_json::to_string(&bundle) {
            Ok(line) => {
                let _ = writeln!(out, "{line}");
            }
            Err(e) => eprintln!("error serializing analyses of {word}: {e}"),
        }
        return;
    }

    if bundle.is_empty() {
        let _ = writeln!(out, "{word}: (no analysis)");
        return;
    }
    let _ = writeln!(out, "{word}:");
    for (i, analysis) in bundle.iter().enumerate() {
        let mark = if bundle.preferred == Some(i) { '*' } else { ' ' };
        let _ = writeln!(out, " {mark} {}", analysis.format_string());
        let _ = writeln!(out, "      {analysis}");
    }
}
