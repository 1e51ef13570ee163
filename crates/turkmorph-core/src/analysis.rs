// Morphological analysis result types.

use std::fmt;

use crate::enums::PrimaryPos;

/// One morpheme of an analysis with the surface it realized as.
///
/// The first entry of every analysis is the root morpheme (its id is the
/// category's short form, e.g. `Noun`) carrying the stem surface.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MorphemeData {
    pub morpheme_id: &'static str,
    /// Derivational morphemes start a new inflectional group.
    pub derivational: bool,
    /// Realized surface; empty for zero morphs such as A3sg, Pnon, Nom.
    pub surface: String,
}

impl MorphemeData {
    pub fn new(morpheme_id: &'static str, derivational: bool, surface: impl Into<String>) -> Self {
        Self {
            morpheme_id,
            derivational,
            surface: surface.into(),
        }
    }
}

/// A single analysis: a dictionary root plus its morpheme sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Analysis {
    /// Dictionary lemma as written in the lexicon ("okumak").
    pub lemma: String,
    /// Dictionary root, the stem reported by the stemmer ("oku").
    pub root: String,
    pub category: PrimaryPos,
    pub morpheme_data: Vec<MorphemeData>,
    /// Position of the root in lexicon order; used as the final tie-break.
    pub root_index: u32,
}

impl Analysis {
    /// The lemma of the root entry.
    pub fn root_lemma(&self) -> &str {
        &self.lemma
    }

    /// The stem a stemmer reports for this analysis.
    pub fn stem(&self) -> &str {
        &self.root
    }

    /// Surface of the root morpheme ("kitab" in "kitabı").
    pub fn stem_surface(&self) -> &str {
        self.morpheme_data
            .first()
            .map(|m| m.surface.as_str())
            .unwrap_or("")
    }

    /// Concatenated surfaces of every morpheme after the root.
    pub fn ending(&self) -> String {
        self.morpheme_data
            .iter()
            .skip(1)
            .map(|m| m.surface.as_str())
            .collect()
    }

    /// Concatenation of all surfaces; equals the analyzed input.
    pub fn surface_form(&self) -> String {
        self.morpheme_data.iter().map(|m| m.surface.as_str()).collect()
    }

    /// Number of morphemes after the root.
    pub fn morpheme_count(&self) -> usize {
        self.morpheme_data.len().saturating_sub(1)
    }

    pub fn derivation_count(&self) -> usize {
        self.morpheme_data.iter().filter(|m| m.derivational).count()
    }

    pub fn contains_morpheme(&self, id: &str) -> bool {
        self.morpheme_data.iter().any(|m| m.morpheme_id == id)
    }

    /// Split the morpheme sequence at derivational morphemes. The first
    /// group starts with the root; every later group starts with the
    /// derivational morpheme that opened it.
    pub fn inflectional_groups(&self) -> Vec<&[MorphemeData]> {
        let mut groups = Vec::new();
        let mut start = 0;
        for (i, m) in self.morpheme_data.iter().enumerate() {
            if m.derivational && i > start {
                groups.push(&self.morpheme_data[start..i]);
                start = i;
            }
        }
        if start < self.morpheme_data.len() {
            groups.push(&self.morpheme_data[start..]);
        }
        groups
    }

    /// Compact form listing morphemes with a non-empty surface:
    /// `kitap:Noun|+lar:A3pl|+da:Loc`.
    pub fn format_string(&self) -> String {
        let mut out = String::new();
        out.push_str(self.stem_surface());
        out.push(':');
        out.push_str(self.category.short_form());
        for m in self.morpheme_data.iter().skip(1) {
            if m.surface.is_empty() {
                continue;
            }
            out.push_str("|+");
            out.push_str(&m.surface);
            out.push(':');
            out.push_str(m.morpheme_id);
        }
        out
    }
}

/// Long form listing every morpheme, derivations marked with `|`:
/// `[kitap:Noun] kitap:Noun+lar:A3pl+Pnon+da:Loc`.
impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}] ", self.lemma, self.category)?;
        for (i, m) in self.morpheme_data.iter().enumerate() {
            if i > 0 {
                f.write_str(if m.derivational { "|" } else { "+" })?;
            }
            if !m.surface.is_empty() {
                write!(f, "{}:", m.surface)?;
            }
            f.write_str(m.morpheme_id)?;
        }
        Ok(())
    }
}

/// All analyses of one input word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnalysisBundle {
    /// The normalized (lowercased, apostrophe-free) input that was analyzed.
    pub input: String,
    /// Analyses in enumeration order.
    pub results: Vec<Analysis>,
    /// Index into `results` of the analysis picked by disambiguation.
    pub preferred: Option<usize>,
}

impl AnalysisBundle {
    pub fn unknown(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            results: Vec::new(),
            preferred: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Analysis> {
        self.results.iter()
    }

    pub fn preferred(&self) -> Option<&Analysis> {
        self.preferred.and_then(|i| self.results.get(i))
    }
}

impl<'a> IntoIterator for &'a AnalysisBundle {
    type Item = &'a Analysis;
    type IntoIter = std::slice::Iter<'a, Analysis>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
