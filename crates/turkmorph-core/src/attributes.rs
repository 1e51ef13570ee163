// Phonetic and root attribute sets.
//
// Phonetic attributes describe the surface accumulated so far on a search
// path (last letter, last vowel, ...) plus a few control markers set by stem
// modifiers and template final markers. Root attributes are the irregular
// behaviors declared for a dictionary root.

use std::fmt;
use std::marker::PhantomData;

use crate::character::{
    is_front_vowel, is_rounded_vowel, is_voiceless, is_voiceless_stop, is_vowel, last_vowel,
};

/// A closed set of attributes that fits in a 32-bit mask.
pub trait Attribute: Copy + fmt::Debug + 'static {
    const ALL: &'static [Self];
    fn bit(self) -> u32;
}

/// Bit set over an [`Attribute`] enum.
pub struct AttributeSet<A: Attribute> {
    bits: u32,
    _marker: PhantomData<A>,
}

impl<A: Attribute> AttributeSet<A> {
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _marker: PhantomData,
        }
    }

    pub fn of(attrs: &[A]) -> Self {
        let mut set = Self::empty();
        for &a in attrs {
            set.insert(a);
        }
        set
    }

    #[inline]
    pub fn contains(&self, attr: A) -> bool {
        self.bits & attr.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, attr: A) {
        self.bits |= attr.bit();
    }

    #[inline]
    pub fn remove(&mut self, attr: A) {
        self.bits &= !attr.bit();
    }

    #[inline]
    pub fn with(mut self, attr: A) -> Self {
        self.insert(attr);
        self
    }

    #[inline]
    pub fn without(mut self, attr: A) -> Self {
        self.remove(attr);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
            _marker: PhantomData,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = A> + '_ {
        A::ALL.iter().copied().filter(|&a| self.contains(a))
    }
}

impl<A: Attribute> Clone for AttributeSet<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Attribute> Copy for AttributeSet<A> {}

impl<A: Attribute> PartialEq for AttributeSet<A> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<A: Attribute> Eq for AttributeSet<A> {}

impl<A: Attribute> std::hash::Hash for AttributeSet<A> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<A: Attribute> Default for AttributeSet<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: Attribute> fmt::Debug for AttributeSet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<A: Attribute> FromIterator<A> for AttributeSet<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let mut set = Self::empty();
        for a in iter {
            set.insert(a);
        }
        set
    }
}

// ---------------------------------------------------------------------------
// Phonetic attributes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneticAttribute {
    LastLetterVowel,
    LastLetterConsonant,
    LastVowelFrontal,
    LastVowelBack,
    LastVowelRounded,
    LastVowelUnrounded,
    LastLetterVoiceless,
    LastLetterVoiced,
    LastLetterVoicelessStop,
    FirstLetterVowel,
    FirstLetterConsonant,
    HasNoVowel,
    /// The next suffix must start with a vowel (voiced or doubled stems).
    ExpectsVowel,
    /// The next suffix must start with a consonant (unvoiced stems).
    ExpectsConsonant,
    ModifiedPronoun,
    UnModifiedPronoun,
    /// Stem lost its final vowel before `-Iyor`.
    LastLetterDropped,
    /// The path may not end here even in a terminal state.
    CannotTerminate,
}

impl Attribute for PhoneticAttribute {
    const ALL: &'static [Self] = &[
        PhoneticAttribute::LastLetterVowel,
        PhoneticAttribute::LastLetterConsonant,
        PhoneticAttribute::LastVowelFrontal,
        PhoneticAttribute::LastVowelBack,
        PhoneticAttribute::LastVowelRounded,
        PhoneticAttribute::LastVowelUnrounded,
        PhoneticAttribute::LastLetterVoiceless,
        PhoneticAttribute::LastLetterVoiced,
        PhoneticAttribute::LastLetterVoicelessStop,
        PhoneticAttribute::FirstLetterVowel,
        PhoneticAttribute::FirstLetterConsonant,
        PhoneticAttribute::HasNoVowel,
        PhoneticAttribute::ExpectsVowel,
        PhoneticAttribute::ExpectsConsonant,
        PhoneticAttribute::ModifiedPronoun,
        PhoneticAttribute::UnModifiedPronoun,
        PhoneticAttribute::LastLetterDropped,
        PhoneticAttribute::CannotTerminate,
    ];

    #[inline]
    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

pub type PhoneticAttributes = AttributeSet<PhoneticAttribute>;

/// Compute the phonetic attributes after appending `seq` to a surface whose
/// attributes were `pred`.
///
/// When `seq` contains a vowel the vowel-related attributes are recomputed
/// from `seq` alone and the control markers of `pred` are dropped. When it
/// has no vowel, `pred` is carried forward with the last-letter attributes
/// updated. An empty `seq` returns `pred` unchanged.
pub fn morphemic_attributes(seq: &str, pred: PhoneticAttributes) -> PhoneticAttributes {
    use PhoneticAttribute::*;

    let Some(last) = seq.chars().next_back() else {
        return pred;
    };

    let mut attrs;
    if let Some(vowel) = last_vowel(seq) {
        attrs = PhoneticAttributes::empty();
        attrs.insert(if is_vowel(last) { LastLetterVowel } else { LastLetterConsonant });
        attrs.insert(if is_front_vowel(vowel) { LastVowelFrontal } else { LastVowelBack });
        attrs.insert(if is_rounded_vowel(vowel) {
            LastVowelRounded
        } else {
            LastVowelUnrounded
        });
        let first_is_vowel = seq.chars().next().is_some_and(is_vowel);
        attrs.insert(if first_is_vowel { FirstLetterVowel } else { FirstLetterConsonant });
    } else {
        attrs = pred;
        attrs.insert(LastLetterConsonant);
        attrs.insert(FirstLetterConsonant);
        attrs.insert(HasNoVowel);
        attrs.remove(LastLetterVowel);
        attrs.remove(ExpectsConsonant);
        attrs.remove(LastLetterVoiceless);
        attrs.remove(LastLetterVoicelessStop);
        attrs.remove(LastLetterVoiced);
    }

    if is_voiceless(last) {
        attrs.insert(LastLetterVoiceless);
        if is_voiceless_stop(last) {
            attrs.insert(LastLetterVoicelessStop);
        }
    } else {
        attrs.insert(LastLetterVoiced);
    }
    attrs
}

// ---------------------------------------------------------------------------
// Root attributes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootAttribute {
    /// Final voiceless stop voices before a vowel: kitap → kitabı.
    Voicing,
    /// Suppresses inferred voicing: top → topu.
    NoVoicing,
    /// Last vowel drops before a vowel: ağız → ağzı.
    LastVowelDrop,
    /// Final consonant doubles before a vowel: hak → hakkı.
    Doubling,
    /// Suffixes take front vowels after a back-vowel root: saat → saati.
    InverseHarmony,
    /// Final vowel drops before -Iyor: ara → arıyor.
    ProgressiveVowelDrop,
    /// Lemma already ends in a 3sg possessive: zeytinyağı.
    CompoundP3sg,
    AoristA,
    AoristI,
    Reflexive,
    /// Pronoun with a vowel-changed dative stem: ben → bana.
    ModifiedPronoun,
}

impl Attribute for RootAttribute {
    const ALL: &'static [Self] = &[
        RootAttribute::Voicing,
        RootAttribute::NoVoicing,
        RootAttribute::LastVowelDrop,
        RootAttribute::Doubling,
        RootAttribute::InverseHarmony,
        RootAttribute::ProgressiveVowelDrop,
        RootAttribute::CompoundP3sg,
        RootAttribute::AoristA,
        RootAttribute::AoristI,
        RootAttribute::Reflexive,
        RootAttribute::ModifiedPronoun,
    ];

    #[inline]
    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

impl RootAttribute {
    /// Name used in lexicon files.
    pub fn name(self) -> &'static str {
        match self {
            RootAttribute::Voicing => "Voicing",
            RootAttribute::NoVoicing => "NoVoicing",
            RootAttribute::LastVowelDrop => "LastVowelDrop",
            RootAttribute::Doubling => "Doubling",
            RootAttribute::InverseHarmony => "InverseHarmony",
            RootAttribute::ProgressiveVowelDrop => "ProgressiveVowelDrop",
            RootAttribute::CompoundP3sg => "CompoundP3sg",
            RootAttribute::AoristA => "Aorist_A",
            RootAttribute::AoristI => "Aorist_I",
            RootAttribute::Reflexive => "Reflexive",
            RootAttribute::ModifiedPronoun => "ModifiedPronoun",
        }
    }

    /// Parse a lexicon attribute name. `VoicingRoot` is accepted for
    /// `Voicing`.
    pub fn from_name(s: &str) -> Option<Self> {
        if s == "VoicingRoot" {
            return Some(RootAttribute::Voicing);
        }
        Self::ALL.iter().copied().find(|a| a.name() == s)
    }
}

pub type RootAttributes = AttributeSet<RootAttribute>;
