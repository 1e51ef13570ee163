// Morphological analysis: stem lookup, graph search and disambiguation.

pub mod disambiguator;

use tracing::trace;
use turkmorph_core::analysis::{Analysis, AnalysisBundle, MorphemeData};
use turkmorph_core::case::turkish_lower;
use turkmorph_core::character::is_apostrophe;
use turkmorph_graph::{Path, RootInfo, SearchConfig, Seed};

use crate::lexicon::{Lexicon, StemIndex};
use crate::morphotactics::TurkishMorphotactics;

/// Words longer than this (in code points) are not analyzed.
pub const MAX_WORD_CHARS: usize = 255;

/// Trait for morphological analyzers.
pub trait Analyzer {
    /// Analyze a word and return all valid analyses, with the preferred
    /// one marked.
    fn analyze(&self, word: &str) -> AnalysisBundle;
}

/// Turkish-lowercase a word and drop its apostrophes: "Ankara'da" → "ankarada".
pub fn normalize(word: &str) -> String {
    turkish_lower(word).chars().filter(|&c| !is_apostrophe(c)).collect()
}

/// Analyzer over a root lexicon and the Turkish morphotactics graph.
///
/// Immutable once built; `analyze` allocates its search buffers per call,
/// so one analyzer can serve many threads.
#[derive(Debug, Clone)]
pub struct TurkishAnalyzer {
    lexicon: Lexicon,
    index: StemIndex,
    morphotactics: TurkishMorphotactics,
}

impl TurkishAnalyzer {
    pub fn new(lexicon: Lexicon, morphotactics: TurkishMorphotactics) -> Self {
        let index = StemIndex::build(&lexicon);
        Self {
            lexicon,
            index,
            morphotactics,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn stem_index(&self) -> &StemIndex {
        &self.index
    }

    pub fn morphotactics(&self) -> &TurkishMorphotactics {
        &self.morphotactics
    }

    /// All analyses of an already normalized word, in enumeration order:
    /// longer stem forms first, lexicon order within one length, graph
    /// construction order within one stem.
    pub fn analyze_normalized(&self, input: &str) -> Vec<Analysis> {
        if input.is_empty() || input.chars().count() > MAX_WORD_CHARS {
            return Vec::new();
        }

        let graph = self.morphotactics.graph();
        let mut config = SearchConfig::new();
        let mut paths = Vec::new();
        for form_id in self.index.prefix_ids_of(input) {
            let form = self.index.form(form_id);
            let Some(item) = self.lexicon.get(form.item) else {
                continue;
            };
            let seed = Seed {
                state: self.morphotactics.root_state(item.pos, form.slot),
                stem_len: form.surface.len(),
                attributes: form.attributes,
                root: RootInfo {
                    root: &item.root,
                    pos: item.pos,
                    attributes: item.attributes,
                },
                tag: form_id as usize,
            };
            graph.search(input, &seed, &mut config, &mut paths);
        }

        let results: Vec<Analysis> = paths
            .iter()
            .filter_map(|path| self.to_analysis(input, path))
            .collect();
        trace!(input, analyses = results.len(), "analyzed");
        results
    }

    fn to_analysis(&self, input: &str, path: &Path) -> Option<Analysis> {
        let form = self.index.form(path.tag as u32);
        let item = self.lexicon.get(form.item)?;
        let morphemes = self.morphotactics.graph().morphemes();
        let morpheme_data = path
            .steps
            .iter()
            .map(|step| {
                let m = morphemes.get(step.morpheme);
                MorphemeData::new(m.id, m.derivational, step.surface(input))
            })
            .collect();
        Some(Analysis {
            lemma: item.lemma.clone(),
            root: item.root.clone(),
            category: item.pos,
            morpheme_data,
            root_index: item.index,
        })
    }
}

impl Analyzer for TurkishAnalyzer {
    fn analyze(&self, word: &str) -> AnalysisBundle {
        let input = normalize(word);
        let results = self.analyze_normalized(&input);
        let preferred = disambiguator::preferred_index(&results);
        AnalysisBundle {
            input,
            results,
            preferred,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEXICON: &str = "\
kitap
dosya
ev
mahkeme
ağız Noun LastVowelDrop
saat Noun InverseHarmony,NoVoicing
okumak
gelmek Verb Aorist_I
ben Pron ModifiedPronoun
güzel Adj
";

    fn analyzer() -> TurkishAnalyzer {
        TurkishAnalyzer::new(
            Lexicon::parse(LEXICON).unwrap(),
            TurkishMorphotactics::new().unwrap(),
        )
    }

    fn ids(a: &Analysis) -> Vec<&'static str> {
        a.morpheme_data.iter().map(|m| m.morpheme_id).collect()
    }

    #[test]
    fn normalizes_case_and_apostrophes() {
        assert_eq!(normalize("KİTAP"), "kitap");
        assert_eq!(normalize("Işık"), "ışık");
        assert_eq!(normalize("Ankara'da"), "ankarada");
        assert_eq!(normalize("Ankara’da"), "ankarada");
    }

    #[test]
    fn bare_noun() {
        let bundle = analyzer().analyze("kitap");
        assert_eq!(bundle.len(), 1);
        let a = &bundle.results[0];
        assert_eq!(a.root_lemma(), "kitap");
        assert_eq!(a.category, turkmorph_core::enums::PrimaryPos::Noun);
        assert_eq!(ids(a), ["Noun", "A3sg", "Pnon", "Nom"]);
        assert_eq!(bundle.preferred, Some(0));
    }

    #[test]
    fn voiced_stem_surface() {
        let bundle = analyzer().analyze("Kitabı");
        assert_eq!(bundle.input, "kitabı");
        let preferred = bundle.preferred().unwrap();
        assert_eq!(preferred.stem_surface(), "kitab");
        assert_eq!(preferred.stem(), "kitap");
        assert_eq!(preferred.format_string(), "kitab:Noun|+ı:P3sg");
    }

    #[test]
    fn surfaces_concatenate_to_input() {
        let analyzer = analyzer();
        for word in ["kitapları", "dosyadaki", "ağzımız", "saatler", "okuyorum", "bana", "güzeller"] {
            let bundle = analyzer.analyze(word);
            assert!(!bundle.is_empty(), "{word}");
            for a in &bundle {
                assert_eq!(a.surface_form(), word);
            }
        }
    }

    #[test]
    fn inverse_harmony_uses_front_vowels() {
        let bundle = analyzer().analyze("saatler");
        assert!(bundle.iter().any(|a| ids(a) == ["Noun", "A3pl", "Pnon", "Nom"]));
        assert!(analyzer().analyze("saatlar").is_empty());
    }

    #[test]
    fn unknown_word() {
        let bundle = analyzer().analyze("xyzzy");
        assert!(bundle.is_empty());
        assert_eq!(bundle.preferred, None);
        assert!(analyzer().analyze("").is_empty());
    }

    #[test]
    fn progressive_verb() {
        let bundle = analyzer().analyze("okuyorum");
        let a = bundle.preferred().unwrap();
        assert_eq!(a.root_lemma(), "okumak");
        assert_eq!(a.stem(), "oku");
        assert_eq!(ids(a), ["Verb", "Prog1", "A1sg"]);
    }
}
