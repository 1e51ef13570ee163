// Root lexicon: text format parsing and load-time attribute inference.
//
// One entry per line, whitespace-separated:
//
//     lemma [category] [attr1,attr2,...]
//
// `#` starts a comment line. A missing category defaults to Verb for
// `-mak/-mek` infinitives and to Noun otherwise. With two fields the second
// is read as an attribute list when it contains a comma or names a known
// attribute, as a category otherwise.

pub mod stems;

use std::path::Path;

use tracing::{debug, warn};
use turkmorph_core::attributes::{RootAttribute, RootAttributes};
use turkmorph_core::case::turkish_lower;
use turkmorph_core::character::{is_vowel, is_voiceless_stop, vowel_count};
use turkmorph_core::enums::PrimaryPos;

pub use stems::{RootSlot, StemForm, StemFormKind, StemIndex};

/// Error raised while loading a lexicon. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum LexiconLoadError {
    #[error("line {line}: malformed entry: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("line {line}: unknown category '{name}'")]
    UnknownCategory { line: usize, name: String },
    #[error("line {line}: unknown attribute '{name}'")]
    UnknownAttribute { line: usize, name: String },
    #[error("failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),
}

/// A dictionary root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryItem {
    /// Lemma as written in the lexicon ("okumak").
    pub lemma: String,
    /// Lowercased root the stem forms derive from ("oku").
    pub root: String,
    pub pos: PrimaryPos,
    /// Declared plus inferred attributes.
    pub attributes: RootAttributes,
    /// Position in the lexicon.
    pub index: u32,
}

impl DictionaryItem {
    pub fn has_attribute(&self, attr: RootAttribute) -> bool {
        self.attributes.contains(attr)
    }
}

/// All dictionary roots in file order.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    items: Vec<DictionaryItem>,
}

impl Lexicon {
    /// Parse lexicon text.
    pub fn parse(text: &str) -> Result<Self, LexiconLoadError> {
        let mut items: Vec<DictionaryItem> = Vec::new();
        let mut seen = hashbrown::HashSet::new();
        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some(entry) = parse_line(line, line_no)? else {
                continue;
            };
            if !seen.insert((entry.root.clone(), entry.pos)) {
                warn!(line = line_no, lemma = %entry.lemma, "duplicate lexicon entry ignored");
                continue;
            }
            items.push(DictionaryItem {
                index: items.len() as u32,
                ..entry
            });
        }
        debug!(items = items.len(), "lexicon parsed");
        Ok(Self { items })
    }

    /// Read and parse a lexicon file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LexiconLoadError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn items(&self) -> &[DictionaryItem] {
        &self.items
    }

    pub fn get(&self, index: u32) -> Option<&DictionaryItem> {
        self.items.get(index as usize)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn parse_attributes(field: &str, line: usize) -> Result<RootAttributes, LexiconLoadError> {
    let mut attrs = RootAttributes::empty();
    for name in field.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let attr = RootAttribute::from_name(name).ok_or_else(|| LexiconLoadError::UnknownAttribute {
            line,
            name: name.to_string(),
        })?;
        attrs.insert(attr);
    }
    Ok(attrs)
}

fn parse_category(field: &str, line: usize) -> Result<PrimaryPos, LexiconLoadError> {
    PrimaryPos::from_short_form(field).ok_or_else(|| LexiconLoadError::UnknownCategory {
        line,
        name: field.to_string(),
    })
}

fn is_infinitive(lemma: &str) -> bool {
    (lemma.ends_with("mak") || lemma.ends_with("mek")) && lemma.chars().count() > 3
}

fn parse_line(line: &str, line_no: usize) -> Result<Option<DictionaryItem>, LexiconLoadError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (lemma, pos, declared) = match fields.as_slice() {
        [] => return Ok(None),
        [lemma] => (*lemma, None, RootAttributes::empty()),
        [lemma, second] => {
            if second.contains(',') || RootAttribute::from_name(second).is_some() {
                (*lemma, None, parse_attributes(second, line_no)?)
            } else {
                (*lemma, Some(parse_category(second, line_no)?), RootAttributes::empty())
            }
        }
        [lemma, category, attrs] => (
            *lemma,
            Some(parse_category(category, line_no)?),
            parse_attributes(attrs, line_no)?,
        ),
        _ => {
            return Err(LexiconLoadError::Malformed {
                line: line_no,
                reason: format!("expected at most 3 fields, found {}", fields.len()),
            });
        }
    };

    let lower = turkish_lower(lemma);
    let pos = pos.unwrap_or(if is_infinitive(&lower) {
        PrimaryPos::Verb
    } else {
        PrimaryPos::Noun
    });

    let root = if pos == PrimaryPos::Verb && is_infinitive(&lower) {
        lower[..lower.len() - 3].to_string()
    } else {
        lower
    };
    if root.is_empty() {
        return Err(LexiconLoadError::Malformed {
            line: line_no,
            reason: "empty root".to_string(),
        });
    }

    let attributes = infer_attributes(&root, pos, declared);
    Ok(Some(DictionaryItem {
        lemma: lemma.to_string(),
        root,
        pos,
        attributes,
        index: 0,
    }))
}

/// Add the attributes implied by a root's spelling to the declared ones.
pub fn infer_attributes(root: &str, pos: PrimaryPos, declared: RootAttributes) -> RootAttributes {
    use RootAttribute::*;

    let mut attrs = declared;
    let Some(last) = root.chars().next_back() else {
        return attrs;
    };
    let vowels = vowel_count(root);

    match pos {
        PrimaryPos::Noun | PrimaryPos::Adjective => {
            if vowels > 1
                && is_voiceless_stop(last)
                && !attrs.contains(NoVoicing)
                && !attrs.contains(InverseHarmony)
            {
                attrs.insert(Voicing);
            }
        }
        PrimaryPos::Verb => {
            if is_vowel(last) && root.chars().count() > 1 {
                attrs.insert(ProgressiveVowelDrop);
            }
            if !attrs.contains(AoristA) && !attrs.contains(AoristI) {
                attrs.insert(if vowels > 1 { AoristI } else { AoristA });
            }
        }
        _ => {}
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use RootAttribute::*;

    #[test]
    fn parses_fields_and_comments() {
        let lex = Lexicon::parse(
            "# comment\n\
             kitap\n\
             \n\
             güzel Adj\n\
             ağız Noun LastVowelDrop\n\
             saat InverseHarmony,NoVoicing\n",
        )
        .unwrap();
        assert_eq!(lex.len(), 4);
        let items = lex.items();
        assert_eq!(items[0].pos, PrimaryPos::Noun);
        assert!(items[0].has_attribute(Voicing));
        assert_eq!(items[1].pos, PrimaryPos::Adjective);
        assert!(items[2].has_attribute(LastVowelDrop));
        assert_eq!(items[3].pos, PrimaryPos::Noun);
        assert!(items[3].has_attribute(InverseHarmony));
        assert!(!items[3].has_attribute(Voicing));
        assert_eq!(items[3].index, 3);
    }

    #[test]
    fn infinitives_become_verbs() {
        let lex = Lexicon::parse("okumak\ngelmek Verb Aorist_I\nyapmak Verb\n").unwrap();
        let items = lex.items();
        assert_eq!(items[0].pos, PrimaryPos::Verb);
        assert_eq!(items[0].lemma, "okumak");
        assert_eq!(items[0].root, "oku");
        assert!(items[0].has_attribute(ProgressiveVowelDrop));
        assert!(items[0].has_attribute(AoristI));
        assert_eq!(items[1].root, "gel");
        assert!(items[1].has_attribute(AoristI));
        assert!(!items[1].has_attribute(AoristA));
        assert!(items[2].has_attribute(AoristA));
    }

    #[test]
    fn lemma_lowercased_for_matching() {
        let lex = Lexicon::parse("Istanbul Noun").unwrap();
        assert_eq!(lex.items()[0].lemma, "Istanbul");
        assert_eq!(lex.items()[0].root, "ıstanbul");
    }

    #[test]
    fn errors_carry_line_numbers() {
        match Lexicon::parse("kitap\nev Nown\n") {
            Err(LexiconLoadError::UnknownCategory { line, name }) => {
                assert_eq!(line, 2);
                assert_eq!(name, "Nown");
            }
            other => panic!("unexpected {other:?}"),
        }
        match Lexicon::parse("ev Noun Voicing,Bogus\n") {
            Err(LexiconLoadError::UnknownAttribute { line, name }) => {
                assert_eq!(line, 1);
                assert_eq!(name, "Bogus");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            Lexicon::parse("a b c d\n"),
            Err(LexiconLoadError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn duplicates_skipped() {
        let lex = Lexicon::parse("ev\nev Noun\nev Verb\n").unwrap();
        assert_eq!(lex.len(), 2);
    }

    #[test]
    fn voicing_inference_needs_two_vowels() {
        assert!(!infer_attributes("top", PrimaryPos::Noun, RootAttributes::empty()).contains(Voicing));
        assert!(infer_attributes("ağaç", PrimaryPos::Noun, RootAttributes::empty()).contains(Voicing));
        let declared = RootAttributes::of(&[NoVoicing]);
        assert!(!infer_attributes("kitap", PrimaryPos::Noun, declared).contains(Voicing));
    }
}
