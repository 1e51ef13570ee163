// Turkish morphotactics: the hand-authored graph over the morpheme
// inventory and the mapping from dictionary categories to root states.

pub mod morphemes;
mod nominal;
mod verbal;

use turkmorph_core::enums::PrimaryPos;
use turkmorph_graph::{Graph, GraphBuildError, GraphBuilder, MorphemeTable, StateId};

use crate::lexicon::RootSlot;
use nominal::NominalStates;
use verbal::VerbalStates;

pub use morphemes::MORPHEMES;

/// Root states indexed by category and stem slot.
#[derive(Debug, Clone, Copy)]
struct RootStates {
    noun: StateId,
    noun_compound: StateId,
    noun_compound_plural: StateId,
    verb: StateId,
    verb_progressive_drop: StateId,
    adjective: StateId,
    adverb: StateId,
    pronoun: StateId,
    numeral: StateId,
    conjunction: StateId,
    interjection: StateId,
    determiner: StateId,
    postpositive: StateId,
    punctuation: StateId,
}

/// The Turkish morphotactics graph.
#[derive(Debug, Clone)]
pub struct TurkishMorphotactics {
    graph: Graph,
    roots: RootStates,
}

impl TurkishMorphotactics {
    /// Build and validate the graph.
    pub fn new() -> Result<Self, GraphBuildError> {
        let mut b = GraphBuilder::new(MorphemeTable::new(MORPHEMES)?);

        let n = NominalStates::declare(&mut b);
        let v = VerbalStates::declare(&mut b);
        nominal::connect(&mut b, &n, &v);
        verbal::connect(&mut b, &v, &n);

        let roots = RootStates {
            noun: n.noun,
            noun_compound: n.noun_compound,
            noun_compound_plural: n.noun_compound_plural,
            verb: v.verb,
            verb_progressive_drop: v.verb_progressive_drop,
            adjective: n.adjective,
            adverb: n.adverb,
            pronoun: n.pronoun,
            numeral: n.numeral,
            conjunction: n.conjunction,
            interjection: n.interjection,
            determiner: n.determiner,
            postpositive: n.postpositive,
            punctuation: n.punctuation,
        };
        Ok(Self {
            graph: b.build()?,
            roots,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Root state a stem form of category `pos` enters.
    pub fn root_state(&self, pos: PrimaryPos, slot: RootSlot) -> StateId {
        let r = &self.roots;
        match (pos, slot) {
            (PrimaryPos::Noun, RootSlot::CompoundP3sg) => r.noun_compound,
            (PrimaryPos::Noun, RootSlot::CompoundPlural) => r.noun_compound_plural,
            (PrimaryPos::Noun, _) => r.noun,
            (PrimaryPos::Verb, RootSlot::ProgressiveDrop) => r.verb_progressive_drop,
            (PrimaryPos::Verb, _) => r.verb,
            (PrimaryPos::Adjective, _) => r.adjective,
            (PrimaryPos::Adverb, _) => r.adverb,
            (PrimaryPos::Pronoun, _) => r.pronoun,
            (PrimaryPos::Numeral, _) => r.numeral,
            (PrimaryPos::Conjunction, _) => r.conjunction,
            (PrimaryPos::Interjection, _) => r.interjection,
            (PrimaryPos::Determiner, _) => r.determiner,
            (PrimaryPos::PostPositive, _) => r.postpositive,
            (PrimaryPos::Punctuation, _) => r.punctuation,
        }
    }
}
