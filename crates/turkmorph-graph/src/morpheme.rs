// Morpheme descriptors and the id-to-index table.

use crate::GraphBuildError;
use hashbrown::HashMap;

/// A morpheme known to the graph.
///
/// `id` is the short tag used in analysis output (`A3pl`, `Loc`, `Rel`).
/// Derivational morphemes open a new inflectional group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Morpheme {
    pub id: &'static str,
    pub name: &'static str,
    pub derivational: bool,
}

impl Morpheme {
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            derivational: false,
        }
    }

    pub const fn derivational(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            derivational: true,
        }
    }
}

/// Index of a morpheme in its [`MorphemeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MorphemeId(pub u16);

/// Morphemes in declaration order plus an id lookup.
#[derive(Debug, Clone)]
pub struct MorphemeTable {
    morphemes: &'static [Morpheme],
    by_id: HashMap<&'static str, MorphemeId>,
}

impl MorphemeTable {
    /// Index a static morpheme list. Ids must be unique.
    pub fn new(morphemes: &'static [Morpheme]) -> Result<Self, GraphBuildError> {
        let mut by_id = HashMap::with_capacity(morphemes.len());
        for (i, m) in morphemes.iter().enumerate() {
            if by_id.insert(m.id, MorphemeId(i as u16)).is_some() {
                return Err(GraphBuildError::DuplicateMorpheme(m.id));
            }
        }
        Ok(Self { morphemes, by_id })
    }

    /// Morpheme for an id handed out by this table.
    ///
    /// Panics on an id from another table; ids are only produced by
    /// [`lookup`](Self::lookup) and the graph built over this table.
    #[inline]
    pub fn get(&self, id: MorphemeId) -> &Morpheme {
        &self.morphemes[id.0 as usize]
    }

    pub fn lookup(&self, id: &str) -> Option<MorphemeId> {
        self.by_id.get(id).copied()
    }

    #[inline]
    pub fn is_derivational(&self, id: MorphemeId) -> bool {
        self.get(id).derivational
    }

    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MorphemeId, &Morpheme)> + '_ {
        self.morphemes
            .iter()
            .enumerate()
            .map(|(i, m)| (MorphemeId(i as u16), m))
    }
}
