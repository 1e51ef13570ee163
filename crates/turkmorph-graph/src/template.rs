// Surface templates: parsing, harmony-driven expansion and the conditions
// a template implies about the surface it attaches to.
//
// Template language:
//   A        low vowel, a/e by backness harmony
//   I, H     high vowel, ı/i/u/ü by backness and rounding harmony
//   +x       x is emitted only after a vowel (buffer letter: +y, +n, +s)
//   +A, +I   same as A, I
//   >x       x devoices (d→t, c→ç, g/ğ→k, b→p) after a voiceless letter
//   ~x       emit x; the next suffix must start with a consonant
//   !x       emit x; the next suffix must start with a vowel
//   others   lowercase letters are literals
//
// A vowel placeholder in first position is dropped when the surface so far
// ends in a vowel.

use std::fmt;

use turkmorph_core::attributes::{PhoneticAttribute, PhoneticAttributes, morphemic_attributes};
use turkmorph_core::character::{devoice, is_turkish_letter, is_vowel};

use crate::condition::Condition;

/// Template parse failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unknown template character '{0}'")]
    UnknownCharacter(char),
    #[error("metacharacter '{0}' at end of template")]
    DanglingMetacharacter(char),
    #[error("metacharacter '{meta}' cannot apply to '{operand}'")]
    InvalidOperand { meta: char, operand: char },
}

/// One parsed template instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOp {
    Letter(char),
    LowVowel,
    HighVowel,
    Buffer(char),
    Devoice(char),
    ExpectsConsonant(char),
    ExpectsVowel(char),
}

impl TemplateOp {
    /// True when the instruction always yields a vowel (or nothing).
    fn is_vowel_like(self) -> bool {
        match self {
            TemplateOp::LowVowel | TemplateOp::HighVowel => true,
            TemplateOp::Letter(c) => is_vowel(c),
            _ => false,
        }
    }
}

/// Attribute change requested by a template's final character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalMarker {
    /// `~x`: next suffix must start with a consonant.
    ExpectsConsonant,
    /// `!x`: next suffix must start with a vowel; the path cannot end here.
    ExpectsVowel,
}

impl FinalMarker {
    pub fn apply(self, attrs: &mut PhoneticAttributes) {
        match self {
            FinalMarker::ExpectsConsonant => attrs.insert(PhoneticAttribute::ExpectsConsonant),
            FinalMarker::ExpectsVowel => {
                attrs.insert(PhoneticAttribute::ExpectsVowel);
                attrs.insert(PhoneticAttribute::CannotTerminate);
            }
        }
    }
}

/// A parsed surface template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: Box<str>,
    ops: Box<[TemplateOp]>,
}

fn is_literal(c: char) -> bool {
    is_turkish_letter(c) && c.is_lowercase()
}

impl Template {
    /// The empty template (epsilon transition).
    pub fn empty() -> Self {
        Self {
            source: "".into(),
            ops: Box::new([]),
        }
    }

    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut ops = Vec::with_capacity(source.len());
        let mut chars = source.chars();
        while let Some(c) = chars.next() {
            let op = match c {
                '+' | '>' | '~' | '!' => {
                    let operand = chars
                        .next()
                        .ok_or(TemplateError::DanglingMetacharacter(c))?;
                    match (c, operand) {
                        ('+', 'A') => TemplateOp::LowVowel,
                        ('+', 'I' | 'H') => TemplateOp::HighVowel,
                        ('+', x) if is_literal(x) => TemplateOp::Buffer(x),
                        ('>', x) if is_literal(x) => TemplateOp::Devoice(x),
                        ('~', x) if is_literal(x) => TemplateOp::ExpectsConsonant(x),
                        ('!', x) if is_literal(x) => TemplateOp::ExpectsVowel(x),
                        (meta, operand) => {
                            return Err(TemplateError::InvalidOperand { meta, operand });
                        }
                    }
                }
                'A' => TemplateOp::LowVowel,
                'I' | 'H' => TemplateOp::HighVowel,
                c if is_literal(c) => TemplateOp::Letter(c),
                c => return Err(TemplateError::UnknownCharacter(c)),
            };
            ops.push(op);
        }
        Ok(Self {
            source: source.into(),
            ops: ops.into_boxed_slice(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ops(&self) -> &[TemplateOp] {
        &self.ops
    }

    /// False for epsilon transitions. A template with instructions may
    /// still expand to an empty string (`+A` after a vowel).
    #[inline]
    pub fn has_surface(&self) -> bool {
        !self.ops.is_empty()
    }

    /// Expand against the attributes of the surface accumulated so far,
    /// writing the result into `out` (cleared first).
    pub fn expand(&self, pred: PhoneticAttributes, out: &mut String) {
        use PhoneticAttribute::*;

        out.clear();
        for (i, &op) in self.ops.iter().enumerate() {
            let attrs = morphemic_attributes(out, pred);
            match op {
                TemplateOp::Letter(c)
                | TemplateOp::ExpectsConsonant(c)
                | TemplateOp::ExpectsVowel(c) => out.push(c),
                TemplateOp::LowVowel => {
                    if i == 0 && attrs.contains(LastLetterVowel) {
                        continue;
                    }
                    out.push(if attrs.contains(LastVowelFrontal) { 'e' } else { 'a' });
                }
                TemplateOp::HighVowel => {
                    if i == 0 && attrs.contains(LastLetterVowel) {
                        continue;
                    }
                    let front = attrs.contains(LastVowelFrontal);
                    let rounded = attrs.contains(LastVowelRounded);
                    out.push(match (front, rounded) {
                        (true, true) => 'ü',
                        (true, false) => 'i',
                        (false, true) => 'u',
                        (false, false) => 'ı',
                    });
                }
                TemplateOp::Buffer(c) => {
                    if attrs.contains(LastLetterVowel) {
                        out.push(c);
                    }
                }
                TemplateOp::Devoice(c) => {
                    out.push(if attrs.contains(LastLetterVoiceless) { devoice(c) } else { c });
                }
            }
        }
    }

    /// Convenience wrapper around [`expand`](Self::expand).
    pub fn expand_to_string(&self, pred: PhoneticAttributes) -> String {
        let mut out = String::new();
        self.expand(pred, &mut out);
        out
    }

    /// Condition the first character imposes on the preceding surface:
    /// a vowel-initial template cannot follow a stem expecting a consonant,
    /// a consonant-initial one cannot follow a stem expecting a vowel.
    pub fn implied_condition(&self) -> Option<Condition> {
        let first = *self.ops.first()?;
        let vowel_initial = first.is_vowel_like()
            || (matches!(first, TemplateOp::Buffer(_))
                && self.ops.get(1).is_some_and(|op| op.is_vowel_like()));
        Some(if vowel_initial {
            Condition::not_has(PhoneticAttribute::ExpectsConsonant)
        } else {
            Condition::not_has(PhoneticAttribute::ExpectsVowel)
        })
    }

    pub fn final_marker(&self) -> Option<FinalMarker> {
        match self.ops.last()? {
            TemplateOp::ExpectsConsonant(_) => Some(FinalMarker::ExpectsConsonant),
            TemplateOp::ExpectsVowel(_) => Some(FinalMarker::ExpectsVowel),
            _ => None,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.source.is_empty() {
            f.write_str("ε")
        } else {
            f.write_str(&self.source)
        }
    }
}
