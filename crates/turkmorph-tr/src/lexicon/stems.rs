// Stem forms and the prefix index over them.
//
// Every dictionary root yields its original surface plus, for irregular
// roots, one modified surface (kitap → kitab, ağız → ağz, hak → hakk,
// ara → ar, zeytinyağı → zeytinyağ, ben → ban). Each form carries the
// phonetic attributes the search starts from and the kind of root state it
// attaches to.

use hashbrown::HashMap;
use tracing::debug;
use turkmorph_core::attributes::{
    PhoneticAttribute, PhoneticAttributes, RootAttribute, morphemic_attributes,
};
use turkmorph_core::character::{is_vowel, voice};
use turkmorph_core::enums::PrimaryPos;

use super::{DictionaryItem, Lexicon};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemFormKind {
    Original,
    Modified,
}

/// Which root state of the item's category a form enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootSlot {
    /// The category's ordinary root state.
    Default,
    /// Verb stem without its final vowel, only followed by `-Iyor`.
    ProgressiveDrop,
    /// Compound whose lemma already carries the 3sg possessive.
    CompoundP3sg,
    /// Compound stem without its possessive, only followed by `-lAr`.
    CompoundPlural,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemForm {
    /// Index of the dictionary item.
    pub item: u32,
    pub surface: String,
    pub attributes: PhoneticAttributes,
    pub kind: StemFormKind,
    pub slot: RootSlot,
}

fn apply_inverse_harmony(attrs: &mut PhoneticAttributes) {
    attrs.insert(PhoneticAttribute::LastVowelFrontal);
    attrs.remove(PhoneticAttribute::LastVowelBack);
}

fn without_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

fn voiced(root: &str) -> String {
    let mut out = without_last_char(root).to_string();
    if root.ends_with("nk") {
        out.push('g');
    } else if let Some(last) = root.chars().next_back() {
        out.push(voice(last));
    }
    out
}

/// Remove the second-to-last letter: ağız → ağz.
fn drop_last_vowel(root: &str) -> String {
    let chars: Vec<char> = root.chars().collect();
    if chars.len() < 2 {
        return root.to_string();
    }
    let n = chars.len();
    chars[..n - 2].iter().chain(std::iter::once(&chars[n - 1])).collect()
}

/// Strip the possessive ending of a compound: zeytinyağı → zeytinyağ,
/// hanımeli → hanımel, ayakkabısı → ayakkabı.
fn strip_p3sg(root: &str) -> Option<&str> {
    for ending in ["sı", "si", "su", "sü"] {
        if let Some(stem) = root.strip_suffix(ending) {
            if stem.chars().next_back().is_some_and(is_vowel) {
                return Some(stem);
            }
        }
    }
    for ending in ["ı", "i", "u", "ü"] {
        if let Some(stem) = root.strip_suffix(ending) {
            return Some(stem);
        }
    }
    None
}

fn modified_pronoun(root: &str) -> String {
    match root.rfind('e') {
        Some(i) => format!("{}a{}", &root[..i], &root[i + 1..]),
        None => root.to_string(),
    }
}

/// Generate the stem forms of one dictionary item, original first.
pub fn stem_forms(item: &DictionaryItem) -> Vec<StemForm> {
    use PhoneticAttribute::*;
    use RootAttribute as R;

    let root = item.root.as_str();
    let mut original = morphemic_attributes(root, PhoneticAttributes::empty());
    let mut modified: Option<String> = None;
    let mut markers = PhoneticAttributes::empty();
    let mut slot = RootSlot::Default;
    let mut modified_slot = RootSlot::Default;

    if item.has_attribute(R::Voicing) {
        modified = Some(voiced(root));
        original.insert(ExpectsConsonant);
        markers.insert(ExpectsVowel);
        markers.insert(CannotTerminate);
    }
    if item.has_attribute(R::Doubling) {
        let base = modified.as_deref().unwrap_or(root);
        if let Some(last) = base.chars().next_back() {
            modified = Some(format!("{base}{last}"));
        }
        original.insert(ExpectsConsonant);
        markers.insert(ExpectsVowel);
        markers.insert(CannotTerminate);
    }
    if item.has_attribute(R::LastVowelDrop) {
        if root.chars().next_back().is_some_and(is_vowel) {
            modified = Some(without_last_char(root).to_string());
            markers.insert(ExpectsConsonant);
        } else {
            modified = Some(drop_last_vowel(modified.as_deref().unwrap_or(root)));
            if item.pos != PrimaryPos::Verb {
                original.insert(ExpectsConsonant);
            }
            markers.insert(ExpectsVowel);
        }
        markers.insert(CannotTerminate);
    }
    if item.has_attribute(R::ProgressiveVowelDrop) && item.pos == PrimaryPos::Verb {
        modified = Some(without_last_char(root).to_string());
        markers.insert(LastLetterDropped);
        modified_slot = RootSlot::ProgressiveDrop;
    }
    if item.has_attribute(R::CompoundP3sg) {
        if let Some(stem) = strip_p3sg(root) {
            modified = Some(stem.to_string());
            markers.insert(CannotTerminate);
            slot = RootSlot::CompoundP3sg;
            modified_slot = RootSlot::CompoundPlural;
        }
    }
    if item.has_attribute(R::ModifiedPronoun) {
        modified = Some(modified_pronoun(root));
        original.insert(UnModifiedPronoun);
        markers.insert(PhoneticAttribute::ModifiedPronoun);
        markers.insert(CannotTerminate);
    }

    let inverse = item.has_attribute(R::InverseHarmony);
    if inverse {
        apply_inverse_harmony(&mut original);
    }

    let mut forms = vec![StemForm {
        item: item.index,
        surface: root.to_string(),
        attributes: original,
        kind: StemFormKind::Original,
        slot,
    }];

    if let Some(surface) = modified.filter(|m| !m.is_empty() && m != root) {
        let mut attributes = morphemic_attributes(&surface, PhoneticAttributes::empty()).union(markers);
        if inverse {
            apply_inverse_harmony(&mut attributes);
        }
        forms.push(StemForm {
            item: item.index,
            surface,
            attributes,
            kind: StemFormKind::Modified,
            slot: modified_slot,
        });
    }
    forms
}

/// All stem forms of a lexicon, indexed by surface.
#[derive(Debug, Clone, Default)]
pub struct StemIndex {
    forms: Vec<StemForm>,
    by_surface: HashMap<String, Vec<u32>>,
    /// Longest surface in bytes; bounds prefix probing.
    max_len: usize,
}

impl StemIndex {
    pub fn build(lexicon: &Lexicon) -> Self {
        let mut index = Self::default();
        for item in lexicon.items() {
            for form in stem_forms(item) {
                let id = index.forms.len() as u32;
                index.max_len = index.max_len.max(form.surface.len());
                index
                    .by_surface
                    .entry(form.surface.clone())
                    .or_default()
                    .push(id);
                index.forms.push(form);
            }
        }
        debug!(
            forms = index.forms.len(),
            surfaces = index.by_surface.len(),
            "stem index built"
        );
        index
    }

    pub fn form(&self, id: u32) -> &StemForm {
        &self.forms[id as usize]
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    fn ids(&self, surface: &str) -> &[u32] {
        self.by_surface.get(surface).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Forms whose surface equals `surface`.
    pub fn lookup(&self, surface: &str) -> impl Iterator<Item = &StemForm> + '_ {
        self.ids(surface).iter().map(|&id| self.form(id))
    }

    /// Ids of the forms whose surface is a prefix of `input`, longest
    /// first, in lexicon order within one length.
    pub fn prefix_ids_of<'a>(&'a self, input: &'a str) -> impl Iterator<Item = u32> + 'a {
        let limit = self.max_len.min(input.len());
        input
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .take_while(move |&end| end <= limit)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .flat_map(move |end| self.ids(&input[..end]).iter().copied())
    }

    /// Forms whose surface is a prefix of `input`; see [`prefix_ids_of`](Self::prefix_ids_of).
    pub fn prefixes_of<'a>(&'a self, input: &'a str) -> impl Iterator<Item = &'a StemForm> + 'a {
        self.prefix_ids_of(input).map(move |id| self.form(id))
    }
}
