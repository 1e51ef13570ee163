// Morphology: top-level handle for Turkish analysis and stemming.
//
// Owns the analyzer (lexicon, stem index, morphotactics graph) and the stem
// cache. Everything past construction takes `&self`; the graph and lexicon
// are immutable and the cache synchronizes itself, so one handle can be
// shared across threads behind an `Arc`.

use std::path::Path;
use std::time::Instant;

use tracing::debug;
use turkmorph_core::analysis::AnalysisBundle;
use turkmorph_core::token::Token;
use turkmorph_graph::GraphBuildError;

use crate::lexicon::{Lexicon, LexiconLoadError};
use crate::morphology::{Analyzer, TurkishAnalyzer};
use crate::morphotactics::TurkishMorphotactics;
use crate::stemmer::{DEFAULT_CACHE_CAPACITY, StemCache, StemSpan, Stemmer};
use crate::tokenizer;

/// The lexicon shipped with the crate.
pub const DEFAULT_LEXICON: &str = include_str!("../data/lexicon.dict");

/// Error type for `Morphology` construction and byte input.
#[derive(Debug, thiserror::Error)]
pub enum MorphologyError {
    #[error("failed to load lexicon: {0}")]
    Lexicon(#[from] LexiconLoadError),

    #[error("failed to build morphotactics: {0}")]
    Graph(#[from] GraphBuildError),

    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Stemming options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct MorphologyOptions {
    /// Stem cache capacity in entries; 0 disables the cache.
    pub cache_capacity: usize,

    /// Stem an unknown `Ankara'da` to the part before the apostrophe.
    pub apostrophe_fallback: bool,

    /// Lowercase words before caching and when passing unknown words through.
    pub lowercase_stems: bool,
}

impl Default for MorphologyOptions {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            apostrophe_fallback: true,
            lowercase_stems: true,
        }
    }
}

/// Turkish morphological analyzer and stemmer.
#[derive(Debug)]
pub struct Morphology {
    stemmer: Stemmer,
    options: MorphologyOptions,
}

impl Morphology {
    /// Build with the embedded lexicon and default options.
    pub fn create_default() -> Result<Self, MorphologyError> {
        Self::from_lexicon_str(DEFAULT_LEXICON, MorphologyOptions::default())
    }

    /// Build from lexicon text.
    pub fn from_lexicon_str(
        lexicon: &str,
        options: MorphologyOptions,
    ) -> Result<Self, MorphologyError> {
        Self::with_lexicon(Lexicon::parse(lexicon)?, options)
    }

    /// Build from a lexicon file.
    pub fn from_lexicon_file(
        path: impl AsRef<Path>,
        options: MorphologyOptions,
    ) -> Result<Self, MorphologyError> {
        Self::with_lexicon(Lexicon::from_file(path)?, options)
    }

    /// Build from a parsed lexicon.
    pub fn with_lexicon(lexicon: Lexicon, options: MorphologyOptions) -> Result<Self, MorphologyError> {
        let morphotactics = TurkishMorphotactics::new()?;
        debug!(
            states = morphotactics.graph().state_count(),
            roots = lexicon.len(),
            cache_capacity = options.cache_capacity,
            "morphology ready"
        );
        let analyzer = TurkishAnalyzer::new(lexicon, morphotactics);
        Ok(Self::with_analyzer(analyzer, options))
    }

    fn with_analyzer(analyzer: TurkishAnalyzer, options: MorphologyOptions) -> Self {
        let stemmer = Stemmer::new(
            analyzer,
            options.cache_capacity,
            options.apostrophe_fallback,
            options.lowercase_stems,
        );
        Self { stemmer, options }
    }

    /// Same analyzer with different options. The cache starts empty.
    pub fn with_options(self, options: MorphologyOptions) -> Self {
        let Self { stemmer, .. } = self;
        Self::with_analyzer(stemmer.into_analyzer(), options)
    }

    pub fn options(&self) -> &MorphologyOptions {
        &self.options
    }

    pub fn analyzer(&self) -> &TurkishAnalyzer {
        self.stemmer.analyzer()
    }

    pub fn cache(&self) -> &StemCache {
        self.stemmer.cache()
    }

    // =========================================================================
    // Analysis and stemming
    // =========================================================================

    /// All analyses of a word, with the preferred one marked.
    pub fn analyze(&self, word: &str) -> AnalysisBundle {
        self.stemmer.analyzer().analyze(word)
    }

    /// Stem of one word, or the (lowercased) word itself if it is unknown.
    pub fn stem_word(&self, word: &str) -> String {
        self.stemmer.stem_word(word)
    }

    /// Stems of the word-like tokens of `text`.
    pub fn stem_text(&self, text: &str) -> Vec<String> {
        self.stemmer.stem_text(text)
    }

    /// Stems with byte spans into `text`, in text order.
    pub fn stem_text_with_positions(&self, text: &str) -> Vec<StemSpan> {
        self.stemmer.stem_text_with_positions(text)
    }

    /// Stems with byte spans, stopping at `deadline`. The flag reports
    /// whether tokens were left unstemmed.
    pub fn stem_text_with_positions_until(
        &self,
        text: &str,
        deadline: Instant,
    ) -> (Vec<StemSpan>, bool) {
        self.stemmer.stem_text_with_positions_until(text, deadline)
    }

    /// Stems with byte spans for raw bytes, which must be UTF-8.
    pub fn stem_bytes_with_positions(&self, bytes: &[u8]) -> Result<Vec<StemSpan>, MorphologyError> {
        let text = std::str::from_utf8(bytes).map_err(|e| MorphologyError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;
        Ok(self.stem_text_with_positions(text))
    }

    /// Stem many documents; output order follows input order.
    #[cfg(feature = "parallel")]
    pub fn stem_texts<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Vec<String>> {
        use rayon::prelude::*;
        texts.par_iter().map(|t| self.stem_text(t.as_ref())).collect()
    }

    /// Stem many documents; output order follows input order.
    #[cfg(not(feature = "parallel"))]
    pub fn stem_texts<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vec<String>> {
        texts.iter().map(|t| self.stem_text(t.as_ref())).collect()
    }

    /// Tokenize text into typed tokens with code point positions.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        tokenizer::tokenize_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEXICON: &str = "\
kitap
mahkeme
dosya
okumak
";

    fn morphology() -> Morphology {
        Morphology::from_lexicon_str(LEXICON, MorphologyOptions::default()).unwrap()
    }

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Morphology>();
    }

    #[test]
    fn default_options() {
        let options = MorphologyOptions::default();
        assert_eq!(options.cache_capacity, 50_000);
        assert!(options.apostrophe_fallback);
        assert!(options.lowercase_stems);
    }

    #[test]
    fn bad_lexicon_fails() {
        let err = Morphology::from_lexicon_str("kitap Noun NoSuchAttribute\n", MorphologyOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            MorphologyError::Lexicon(LexiconLoadError::UnknownAttribute { line: 1, .. })
        ));
    }

    #[test]
    fn missing_lexicon_file_fails() {
        let err = Morphology::from_lexicon_file("/nonexistent/turkmorph.dict", MorphologyOptions::default())
            .unwrap_err();
        assert!(matches!(err, MorphologyError::Lexicon(LexiconLoadError::Io(_))));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let m = morphology();
        let err = m.stem_bytes_with_positions(b"kitap \xff").unwrap_err();
        assert!(matches!(err, MorphologyError::InvalidUtf8 { valid_up_to: 6 }));
        let spans = m.stem_bytes_with_positions("kitapları".as_bytes()).unwrap();
        assert_eq!(spans[0].stem, "kitap");
    }

    #[test]
    fn with_options_resets_cache() {
        let m = morphology();
        m.stem_word("kitapları");
        assert_eq!(m.cache().len(), 1);
        let m = m.with_options(MorphologyOptions {
            cache_capacity: 0,
            ..MorphologyOptions::default()
        });
        assert_eq!(m.stem_word("kitapları"), "kitap");
        assert!(m.cache().is_empty());
        assert_eq!(m.options().cache_capacity, 0);
    }

    #[test]
    fn stem_texts_keeps_order() {
        let m = morphology();
        let stems = m.stem_texts(&["mahkemesi dosyadaki", "", "kitapları"]);
        assert_eq!(
            stems,
            vec![vec!["mahkeme".to_string(), "dosya".to_string()], vec![], vec!["kitap".to_string()]]
        );
    }

    #[test]
    fn tokens_cover_the_text() {
        let m = morphology();
        let text = "Kitabı okudum, teşekkürler!";
        let joined: String = m.tokens(text).into_iter().map(|t| t.text).collect();
        assert_eq!(joined, text);
    }
}
