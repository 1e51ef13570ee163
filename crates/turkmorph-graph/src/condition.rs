// Transition conditions.
//
// A condition is a predicate over the search path reaching the transition:
// the phonetic attributes of the surface so far, the root being extended,
// and the morphemes already on the path.

use std::ops::Not;

use turkmorph_core::attributes::{PhoneticAttribute, PhoneticAttributes, RootAttribute, RootAttributes};
use turkmorph_core::enums::PrimaryPos;

use crate::morpheme::{MorphemeId, MorphemeTable};
use crate::search::Step;

/// The dictionary root a search path started from.
#[derive(Debug, Clone, Copy)]
pub struct RootInfo<'a> {
    /// Lowercased dictionary root ("oku" for "okumak").
    pub root: &'a str,
    pub pos: PrimaryPos,
    pub attributes: RootAttributes,
}

/// Everything a condition may inspect.
pub struct PathContext<'a> {
    /// Full (normalized) input word.
    pub input: &'a str,
    /// Bytes of `input` consumed so far.
    pub consumed: usize,
    pub phonetic: PhoneticAttributes,
    pub root: RootInfo<'a>,
    /// Steps taken so far, root step first.
    pub steps: &'a [Step],
    pub morphemes: &'a MorphemeTable,
}

impl PathContext<'_> {
    /// Input still to be consumed.
    pub fn tail(&self) -> &str {
        &self.input[self.consumed..]
    }

    fn suffix_steps(&self) -> &[Step] {
        self.steps.get(1..).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Has(PhoneticAttribute),
    RootHas(RootAttribute),
    RootIs(&'static str),
    RootIsAny(&'static [&'static str]),
    RootCategory(PrimaryPos),
    /// The morpheme of the current state.
    PreviousMorphemeIs(MorphemeId),
    ContainsMorpheme(MorphemeId),
    /// Latest derivational morpheme on the path.
    LastDerivationIs(MorphemeId),
    /// No suffix on the path has produced any surface yet.
    NoSurface,
    /// No surface since the last derivation (or since the root).
    CurrentGroupEmpty,
    /// Input remains after the current position.
    HasTail,
    /// The surface so far ends in this letter.
    LastLetterIs(char),
    Not(Box<Condition>),
    All(Vec<Condition>),
    Any(Vec<Condition>),
}

impl Condition {
    pub fn has_attr(attr: PhoneticAttribute) -> Self {
        Condition::Has(attr)
    }

    pub fn not_has(attr: PhoneticAttribute) -> Self {
        !Condition::Has(attr)
    }

    pub fn root_has(attr: RootAttribute) -> Self {
        Condition::RootHas(attr)
    }

    pub fn root_is(pos: PrimaryPos) -> Self {
        Condition::RootCategory(pos)
    }

    pub fn root_lemma_is(root: &'static str) -> Self {
        Condition::RootIs(root)
    }

    pub fn root_lemma_in(roots: &'static [&'static str]) -> Self {
        Condition::RootIsAny(roots)
    }

    pub fn previous_morpheme_is(id: MorphemeId) -> Self {
        Condition::PreviousMorphemeIs(id)
    }

    pub fn contains_morpheme(id: MorphemeId) -> Self {
        Condition::ContainsMorpheme(id)
    }

    pub fn last_derivation_is(id: MorphemeId) -> Self {
        Condition::LastDerivationIs(id)
    }

    pub fn no_surface() -> Self {
        Condition::NoSurface
    }

    pub fn current_group_empty() -> Self {
        Condition::CurrentGroupEmpty
    }

    pub fn has_tail() -> Self {
        Condition::HasTail
    }

    pub fn last_letter_is(c: char) -> Self {
        Condition::LastLetterIs(c)
    }

    /// Conjunction, flattening nested `All`.
    pub fn and(self, other: Condition) -> Self {
        match (self, other) {
            (Condition::All(mut a), Condition::All(b)) => {
                a.extend(b);
                Condition::All(a)
            }
            (Condition::All(mut a), c) => {
                a.push(c);
                Condition::All(a)
            }
            (c, Condition::All(mut b)) => {
                b.insert(0, c);
                Condition::All(b)
            }
            (a, b) => Condition::All(vec![a, b]),
        }
    }

    /// Disjunction, flattening nested `Any`.
    pub fn or(self, other: Condition) -> Self {
        match (self, other) {
            (Condition::Any(mut a), Condition::Any(b)) => {
                a.extend(b);
                Condition::Any(a)
            }
            (Condition::Any(mut a), c) => {
                a.push(c);
                Condition::Any(a)
            }
            (c, Condition::Any(mut b)) => {
                b.insert(0, c);
                Condition::Any(b)
            }
            (a, b) => Condition::Any(vec![a, b]),
        }
    }

    pub fn evaluate(&self, ctx: &PathContext<'_>) -> bool {
        match self {
            Condition::Has(attr) => ctx.phonetic.contains(*attr),
            Condition::RootHas(attr) => ctx.root.attributes.contains(*attr),
            Condition::RootIs(root) => ctx.root.root == *root,
            Condition::RootIsAny(roots) => roots.contains(&ctx.root.root),
            Condition::RootCategory(pos) => ctx.root.pos == *pos,
            Condition::PreviousMorphemeIs(id) => {
                ctx.steps.last().is_some_and(|s| s.morpheme == *id)
            }
            Condition::ContainsMorpheme(id) => ctx.steps.iter().any(|s| s.morpheme == *id),
            Condition::LastDerivationIs(id) => ctx
                .suffix_steps()
                .iter()
                .rev()
                .find(|s| ctx.morphemes.is_derivational(s.morpheme))
                .is_some_and(|s| s.morpheme == *id),
            Condition::NoSurface => ctx.suffix_steps().iter().all(|s| s.is_empty()),
            Condition::CurrentGroupEmpty => {
                for step in ctx.suffix_steps().iter().rev() {
                    if ctx.morphemes.is_derivational(step.morpheme) {
                        return true;
                    }
                    if !step.is_empty() {
                        return false;
                    }
                }
                true
            }
            Condition::HasTail => ctx.consumed < ctx.input.len(),
            Condition::LastLetterIs(c) => {
                ctx.input[..ctx.consumed].chars().next_back() == Some(*c)
            }
            Condition::Not(inner) => !inner.evaluate(ctx),
            Condition::All(all) => all.iter().all(|c| c.evaluate(ctx)),
            Condition::Any(any) => any.iter().any(|c| c.evaluate(ctx)),
        }
    }
}

impl Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        match self {
            Condition::Not(inner) => *inner,
            other => Condition::Not(Box::new(other)),
        }
    }
}
