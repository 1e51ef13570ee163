// turkmorph-tokenize: Tokenize text from stdin.
//
// Reads text from stdin and prints tokens with their types and code point
// ranges.
//
// Usage:
//   turkmorph-tokenize [OPTIONS]
//
// Options:
//   --words              Print only word-like tokens
//   -h, --help           Print help

use std::io::{self, Read, Write};

use turkmorph_core::enums::TokenType;

fn main() {
    turkmorph_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if turkmorph_cli::wants_help(&args) {
        println!("turkmorph-tokenize: Tokenize Turkish text.");
        println!();
        println!("Usage: turkmorph-tokenize [OPTIONS]");
        println!();
        println!("Reads text from stdin, prints tokens with types:");
        println!("  WORD, ALNUM, ABBREV, NUMBER, PUNCT, URL, EMAIL, EMOTICON,");
        println!("  HASHTAG, MENTION, DATE, TIME, SPACE, UNKNOWN");
        println!();
        println!("Options:");
        println!("  --words              Print only word-like tokens");
        println!("  -h, --help           Print this help");
        return;
    }

    let words_only = args.iter().any(|a| a == "--words");

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| turkmorph_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for token in turkmorph_tr::tokenizer::tokenize_str(&input) {
        if words_only && !token.token_type.is_word_like() {
            continue;
        }
        let _ = writeln!(
            out,
            "{:9} [{:>4}..{:>4}]: {}",
            type_label(token.token_type),
            token.pos,
            token.end(),
            turkmorph_cli::escape_control(&token.text)
        );
    }
}

fn type_label(token_type: TokenType) -> &'static str {
    match token_type {
        TokenType::Word => "WORD",
        TokenType::WordAlphanumeric => "ALNUM",
        TokenType::Abbreviation => "ABBREV",
        TokenType::Number => "NUMBER",
        TokenType::Punctuation => "PUNCT",
        TokenType::Url => "URL",
        TokenType::Email => "EMAIL",
        TokenType::Emoticon => "EMOTICON",
        TokenType::HashTag => "HASHTAG",
        TokenType::Mention => "MENTION",
        TokenType::Date => "DATE",
        TokenType::Time => "TIME",
        TokenType::Whitespace => "SPACE",
        TokenType::Unknown => "UNKNOWN",
    }
}
