// Stemmer driver: tokenize text, keep word-like tokens, stem each one and
// report its byte span in the original input.

pub mod cache;

use std::time::Instant;

use tracing::trace;
use turkmorph_core::case::turkish_lower;
use turkmorph_core::character::is_apostrophe;
use turkmorph_core::enums::TokenType;
use turkmorph_core::token::Token;

use crate::morphology::{Analyzer, TurkishAnalyzer};
use crate::tokenizer;

pub use cache::{DEFAULT_CACHE_CAPACITY, StemCache};

/// One stemmed token: its stem and its byte range in the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StemSpan {
    pub stem: String,
    pub byte_start: usize,
    pub byte_end: usize,
}

/// Converts increasing code point offsets to byte offsets in one pass.
struct ByteAligner<'a> {
    chars: std::str::Chars<'a>,
    code_point: usize,
    byte: usize,
}

impl<'a> ByteAligner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            code_point: 0,
            byte: 0,
        }
    }

    /// Byte offset of code point `target`. Targets must not decrease.
    fn byte_offset(&mut self, target: usize) -> usize {
        while self.code_point < target {
            let Some(c) = self.chars.next() else {
                break;
            };
            self.byte += c.len_utf8();
            self.code_point += 1;
        }
        self.byte
    }
}

/// The text a word-like token is stemmed from. Abbreviations lose their dot.
fn stem_source(token: &Token) -> &str {
    if token.token_type == TokenType::Abbreviation {
        token.text.strip_suffix('.').unwrap_or(&token.text)
    } else {
        &token.text
    }
}

/// Analyzer plus stem cache and the stemming policy.
#[derive(Debug)]
pub struct Stemmer {
    analyzer: TurkishAnalyzer,
    cache: StemCache,
    apostrophe_fallback: bool,
    lowercase_stems: bool,
}

impl Stemmer {
    pub fn new(
        analyzer: TurkishAnalyzer,
        cache_capacity: usize,
        apostrophe_fallback: bool,
        lowercase_stems: bool,
    ) -> Self {
        Self {
            analyzer,
            cache: StemCache::new(cache_capacity),
            apostrophe_fallback,
            lowercase_stems,
        }
    }

    pub fn analyzer(&self) -> &TurkishAnalyzer {
        &self.analyzer
    }

    pub fn cache(&self) -> &StemCache {
        &self.cache
    }

    /// Give up the cache and policy, keeping the analyzer.
    pub fn into_analyzer(self) -> TurkishAnalyzer {
        self.analyzer
    }

    /// Stem of one word: the preferred analysis' root, or the word itself
    /// when nothing matches.
    pub fn stem_word(&self, word: &str) -> String {
        let key = if self.lowercase_stems {
            turkish_lower(word)
        } else {
            word.to_string()
        };
        let mut analyzed = false;
        let stem = self.cache.get_or_insert_with(&key, || {
            analyzed = true;
            match self.analyzer.analyze(word).preferred() {
                Some(analysis) => analysis.stem().to_string(),
                None => self.unknown_stem(&key),
            }
        });
        trace!(word, cache_hit = !analyzed, "stemmed");
        stem
    }

    fn unknown_stem(&self, key: &str) -> String {
        if self.apostrophe_fallback {
            if let Some((base, _)) = key.split_once(is_apostrophe) {
                if !base.is_empty() {
                    return base.to_string();
                }
            }
        }
        key.to_string()
    }

    /// Stems of the word-like tokens of `text`, in order.
    pub fn stem_text(&self, text: &str) -> Vec<String> {
        tokenizer::tokenize_str(text)
            .iter()
            .filter(|t| t.token_type.is_word_like())
            .map(|t| self.stem_word(stem_source(t)))
            .collect()
    }

    /// Stems with byte spans into `text`.
    pub fn stem_text_with_positions(&self, text: &str) -> Vec<StemSpan> {
        self.stem_spans(text, None).0
    }

    /// Like [`stem_text_with_positions`](Self::stem_text_with_positions),
    /// but stops before the first token reached at or after `deadline`.
    /// The flag is `true` when the output was cut short.
    pub fn stem_text_with_positions_until(
        &self,
        text: &str,
        deadline: Instant,
    ) -> (Vec<StemSpan>, bool) {
        self.stem_spans(text, Some(deadline))
    }

    fn stem_spans(&self, text: &str, deadline: Option<Instant>) -> (Vec<StemSpan>, bool) {
        let chars: Vec<char> = text.chars().collect();
        let mut aligner = ByteAligner::new(text);
        let mut spans = Vec::new();
        for token in tokenizer::tokenize(&chars) {
            if !token.token_type.is_word_like() {
                continue;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                trace!(stemmed = spans.len(), "deadline reached");
                return (spans, true);
            }
            let byte_start = aligner.byte_offset(token.pos);
            let byte_end = aligner.byte_offset(token.end());
            spans.push(StemSpan {
                stem: self.stem_word(stem_source(&token)),
                byte_start,
                byte_end,
            });
        }
        (spans, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::morphotactics::TurkishMorphotactics;
    use std::time::Duration;

    const LEXICON: &str = "\
kitap
dosya
mahkeme
ankara
okumak
doktor
";

    fn stemmer(capacity: usize) -> Stemmer {
        let analyzer = TurkishAnalyzer::new(
            Lexicon::parse(LEXICON).unwrap(),
            TurkishMorphotactics::new().unwrap(),
        );
        Stemmer::new(analyzer, capacity, true, true)
    }

    #[test]
    fn aligner_counts_multibyte_chars() {
        let mut aligner = ByteAligner::new("ışık var");
        assert_eq!(aligner.byte_offset(0), 0);
        assert_eq!(aligner.byte_offset(4), 7);
        assert_eq!(aligner.byte_offset(5), 8);
        assert_eq!(aligner.byte_offset(8), 11);
        assert_eq!(aligner.byte_offset(100), 11);
    }

    #[test]
    fn stems_known_and_unknown_words() {
        let s = stemmer(16);
        assert_eq!(s.stem_word("kitapları"), "kitap");
        assert_eq!(s.stem_word("Mahkemesi"), "mahkeme");
        assert_eq!(s.stem_word("xyzzy"), "xyzzy");
        assert_eq!(s.stem_word("XYZZY"), "xyzzy");
    }

    #[test]
    fn apostrophe_fallback() {
        let s = stemmer(16);
        assert_eq!(s.stem_word("Ankara'da"), "ankara");
        assert_eq!(s.stem_word("Berlin'de"), "berlin");

        let analyzer = TurkishAnalyzer::new(
            Lexicon::parse(LEXICON).unwrap(),
            TurkishMorphotactics::new().unwrap(),
        );
        let strict = Stemmer::new(analyzer, 16, false, true);
        assert_eq!(strict.stem_word("Berlin'de"), "berlin'de");
    }

    #[test]
    fn cache_is_filled_and_consistent() {
        let s = stemmer(16);
        let cold = s.stem_word("dosyadaki");
        assert_eq!(s.cache().len(), 1);
        assert_eq!(s.stem_word("dosyadaki"), cold);
        assert_eq!(s.stem_word("DOSYADAKİ"), cold);
        assert_eq!(s.cache().len(), 1);

        let uncached = stemmer(0);
        assert_eq!(uncached.stem_word("dosyadaki"), cold);
        assert!(uncached.cache().is_empty());
    }

    #[test]
    fn text_positions() {
        let s = stemmer(16);
        let spans = s.stem_text_with_positions("Kitapları okuyorum");
        assert_eq!(
            spans,
            [
                StemSpan { stem: "kitap".into(), byte_start: 0, byte_end: 10 },
                StemSpan { stem: "oku".into(), byte_start: 11, byte_end: 19 },
            ]
        );
    }

    #[test]
    fn non_words_are_skipped() {
        let s = stemmer(16);
        let text = "Dr. 12.05.2024 tarihinde kitapları, @ali ile okuyor :)";
        let stems = s.stem_text(text);
        assert_eq!(stems, ["dr", "tarihinde", "kitap", "ile", "oku"]);
        let spans = s.stem_text_with_positions(text);
        assert_eq!(&text[spans[0].byte_start..spans[0].byte_end], "Dr.");
        assert_eq!(&text[spans[2].byte_start..spans[2].byte_end], "kitapları");
    }

    #[test]
    fn deadline_truncates() {
        let s = stemmer(16);
        let (spans, truncated) = s.stem_text_with_positions_until("kitap dosya", Instant::now());
        assert!(spans.is_empty());
        assert!(truncated);

        let future = Instant::now() + Duration::from_secs(60);
        let (spans, truncated) = s.stem_text_with_positions_until("kitap dosya", future);
        assert_eq!(spans.len(), 2);
        assert!(!truncated);
    }
}
