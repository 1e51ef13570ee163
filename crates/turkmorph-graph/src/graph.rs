// Arena morphotactics graph and its builder.
//
// States and transitions are stored in two flat vectors and addressed by
// index. The builder collects states and edges in any order, then lays the
// transitions out contiguously per state, parses every template and checks
// that each state is reachable from a root state.

use std::collections::VecDeque;

use hashbrown::HashMap;
use tracing::debug;

use crate::GraphBuildError;
use crate::condition::Condition;
use crate::morpheme::{MorphemeId, MorphemeTable};
use crate::template::Template;
use crate::transition::Transition;

/// Index of a state in its [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub u32);

#[derive(Debug, Clone)]
pub struct State {
    pub name: String,
    pub morpheme: MorphemeId,
    /// A path may end in this state.
    pub terminal: bool,
    /// Dictionary stems attach here.
    pub root: bool,
    first: u32,
    count: u32,
}

/// Immutable morphotactics graph.
#[derive(Debug, Clone)]
pub struct Graph {
    states: Vec<State>,
    transitions: Vec<Transition>,
    morphemes: MorphemeTable,
    by_name: HashMap<String, StateId>,
}

impl Graph {
    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0 as usize]
    }

    /// Outgoing transitions in construction order.
    #[inline]
    pub fn outgoing(&self, id: StateId) -> &[Transition] {
        let s = self.state(id);
        &self.transitions[s.first as usize..(s.first + s.count) as usize]
    }

    /// Transition-table range owned by a state.
    #[inline]
    pub(crate) fn transition_range(&self, id: StateId) -> (u32, u32) {
        let s = self.state(id);
        (s.first, s.first + s.count)
    }

    #[inline]
    pub(crate) fn transition(&self, index: u32) -> &Transition {
        &self.transitions[index as usize]
    }

    pub fn find_state(&self, name: &str) -> Option<StateId> {
        self.by_name.get(name).copied()
    }

    pub fn morphemes(&self) -> &MorphemeTable {
        &self.morphemes
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (StateId(i as u32), s))
    }

    pub fn root_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states().filter(|(_, s)| s.root).map(|(id, _)| id)
    }
}

struct StateDef {
    name: String,
    morpheme: MorphemeId,
    terminal: bool,
    root: bool,
}

struct EdgeDef {
    from: StateId,
    to: StateId,
    template: String,
    condition: Option<Condition>,
}

/// Collects states and edges, then validates them into a [`Graph`].
pub struct GraphBuilder {
    morphemes: MorphemeTable,
    states: Vec<StateDef>,
    edges: Vec<EdgeDef>,
    names: HashMap<String, StateId>,
    errors: Vec<GraphBuildError>,
}

impl GraphBuilder {
    pub fn new(morphemes: MorphemeTable) -> Self {
        Self {
            morphemes,
            states: Vec::new(),
            edges: Vec::new(),
            names: HashMap::new(),
            errors: Vec::new(),
        }
    }

    pub fn morphemes(&self) -> &MorphemeTable {
        &self.morphemes
    }

    /// Resolve a morpheme id. An unknown id is reported by [`build`](Self::build).
    pub fn morpheme(&mut self, id: &str) -> MorphemeId {
        match self.morphemes.lookup(id) {
            Some(m) => m,
            None => {
                self.errors.push(GraphBuildError::UnknownMorpheme(id.to_string()));
                MorphemeId(0)
            }
        }
    }

    fn add_state(&mut self, name: &str, morpheme: MorphemeId, terminal: bool, root: bool) -> StateId {
        if let Some(&existing) = self.names.get(name) {
            self.errors.push(GraphBuildError::DuplicateState(name.to_string()));
            return existing;
        }
        let id = StateId(self.states.len() as u32);
        self.states.push(StateDef {
            name: name.to_string(),
            morpheme,
            terminal,
            root,
        });
        self.names.insert(name.to_string(), id);
        id
    }

    /// A suffix state.
    pub fn state(&mut self, name: &str, morpheme: MorphemeId, terminal: bool) -> StateId {
        self.add_state(name, morpheme, terminal, false)
    }

    /// A state dictionary stems attach to.
    pub fn root_state(&mut self, name: &str, morpheme: MorphemeId, terminal: bool) -> StateId {
        self.add_state(name, morpheme, terminal, true)
    }

    /// Start adding transitions out of `from`.
    pub fn from(&mut self, from: StateId) -> Edges<'_> {
        Edges { builder: self, from }
    }

    fn check_id(&self, id: StateId) -> Result<(), GraphBuildError> {
        if (id.0 as usize) < self.states.len() {
            Ok(())
        } else {
            Err(GraphBuildError::UnknownState(id.0))
        }
    }

    pub fn build(mut self) -> Result<Graph, GraphBuildError> {
        if let Some(err) = self.errors.drain(..).next() {
            return Err(err);
        }

        let n = self.states.len();
        let mut per_state: Vec<Vec<Transition>> = (0..n).map(|_| Vec::new()).collect();
        let edges = std::mem::take(&mut self.edges);
        for edge in edges {
            self.check_id_pair(edge.from, edge.to)?;
            let template = Template::parse(&edge.template).map_err(|source| {
                GraphBuildError::InvalidTemplate {
                    from: self.states[edge.from.0 as usize].name.clone(),
                    to: self.states[edge.to.0 as usize].name.clone(),
                    template: edge.template.clone(),
                    source,
                }
            })?;
            per_state[edge.from.0 as usize].push(Transition::new(edge.to, template, edge.condition));
        }

        // reachability from root states
        let mut seen = vec![false; n];
        let mut queue: VecDeque<usize> = VecDeque::new();
        for (i, s) in self.states.iter().enumerate() {
            if s.root {
                seen[i] = true;
                queue.push_back(i);
            }
        }
        if queue.is_empty() {
            return Err(GraphBuildError::NoRootState);
        }
        while let Some(i) = queue.pop_front() {
            for t in &per_state[i] {
                let j = t.to.0 as usize;
                if !seen[j] {
                    seen[j] = true;
                    queue.push_back(j);
                }
            }
        }
        if let Some(i) = seen.iter().position(|&r| !r) {
            return Err(GraphBuildError::UnreachableState(self.states[i].name.clone()));
        }

        let mut states = Vec::with_capacity(n);
        let mut transitions = Vec::new();
        for (def, outgoing) in self.states.into_iter().zip(per_state) {
            let first = transitions.len() as u32;
            let count = outgoing.len() as u32;
            transitions.extend(outgoing);
            states.push(State {
                name: def.name,
                morpheme: def.morpheme,
                terminal: def.terminal,
                root: def.root,
                first,
                count,
            });
        }

        debug!(
            states = states.len(),
            transitions = transitions.len(),
            "morphotactics graph built"
        );

        Ok(Graph {
            states,
            transitions,
            morphemes: self.morphemes,
            by_name: self.names,
        })
    }

    fn check_id_pair(&self, from: StateId, to: StateId) -> Result<(), GraphBuildError> {
        self.check_id(from)?;
        self.check_id(to)
    }
}

/// Transition adder for one source state; calls chain.
pub struct Edges<'b> {
    builder: &'b mut GraphBuilder,
    from: StateId,
}

impl Edges<'_> {
    fn push(self, to: StateId, template: &str, condition: Option<Condition>) -> Self {
        self.builder.edges.push(EdgeDef {
            from: self.from,
            to,
            template: template.to_string(),
            condition,
        });
        self
    }

    pub fn add(self, to: StateId, template: &str) -> Self {
        self.push(to, template, None)
    }

    pub fn add_if(self, to: StateId, template: &str, condition: Condition) -> Self {
        self.push(to, template, Some(condition))
    }

    pub fn add_empty(self, to: StateId) -> Self {
        self.push(to, "", None)
    }

    pub fn add_empty_if(self, to: StateId, condition: Condition) -> Self {
        self.push(to, "", Some(condition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morpheme::Morpheme;

    static MORPHEMES: &[Morpheme] = &[
        Morpheme::new("Noun", "Noun"),
        Morpheme::new("A3sg", "A3sg"),
        Morpheme::new("A3pl", "A3pl"),
        Morpheme::new("Loc", "Locative"),
    ];

    fn builder() -> GraphBuilder {
        GraphBuilder::new(MorphemeTable::new(MORPHEMES).unwrap())
    }

    #[test]
    fn builds_contiguous_transition_slices() {
        let mut b = builder();
        let noun = b.root_state("noun_S", MorphemeId(0), false);
        let a3sg = b.state("a3sg_S", MorphemeId(1), true);
        let a3pl = b.state("a3pl_S", MorphemeId(2), true);
        let loc = b.state("loc_ST", MorphemeId(3), true);
        b.from(a3sg).add(loc, ">dA");
        b.from(noun).add_empty(a3sg).add(a3pl, "lAr");
        b.from(a3pl).add(loc, ">dA");
        let graph = b.build().unwrap();

        assert_eq!(graph.state_count(), 4);
        assert_eq!(graph.transition_count(), 4);
        let out = graph.outgoing(noun);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].to, a3sg);
        assert!(out[0].is_epsilon());
        assert_eq!(out[1].template.source(), "lAr");
        assert_eq!(graph.outgoing(loc).len(), 0);
        assert_eq!(graph.find_state("a3pl_S"), Some(a3pl));
        assert_eq!(graph.root_states().collect::<Vec<_>>(), vec![noun]);
    }

    #[test]
    fn rejects_bad_template() {
        let mut b = builder();
        let noun = b.root_state("noun_S", MorphemeId(0), false);
        let a3pl = b.state("a3pl_S", MorphemeId(2), true);
        b.from(noun).add(a3pl, "lAR");
        match b.build() {
            Err(GraphBuildError::InvalidTemplate { from, to, template, .. }) => {
                assert_eq!(from, "noun_S");
                assert_eq!(to, "a3pl_S");
                assert_eq!(template, "lAR");
            }
            other => panic!("expected template error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unreachable_state() {
        let mut b = builder();
        b.root_state("noun_S", MorphemeId(0), true);
        b.state("orphan_S", MorphemeId(3), true);
        assert!(matches!(
            b.build(),
            Err(GraphBuildError::UnreachableState(name)) if name == "orphan_S"
        ));
    }

    #[test]
    fn rejects_duplicate_state_and_missing_root() {
        let mut b = builder();
        b.root_state("noun_S", MorphemeId(0), true);
        b.state("noun_S", MorphemeId(1), true);
        assert!(matches!(b.build(), Err(GraphBuildError::DuplicateState(_))));

        let mut b = builder();
        b.state("a3sg_S", MorphemeId(1), true);
        assert!(matches!(b.build(), Err(GraphBuildError::NoRootState)));
    }

    #[test]
    fn unknown_morpheme_fails_build() {
        let mut b = builder();
        let noun = b.morpheme("Noun");
        assert_eq!(noun, MorphemeId(0));
        let bogus = b.morpheme("Bogus");
        b.root_state("noun_S", noun, true);
        b.state("bogus_S", bogus, true);
        assert!(matches!(
            b.build(),
            Err(GraphBuildError::UnknownMorpheme(id)) if id == "Bogus"
        ));
    }

    #[test]
    fn rejects_foreign_state_id() {
        let mut b = builder();
        let noun = b.root_state("noun_S", MorphemeId(0), true);
        b.from(noun).add(StateId(42), "lAr");
        assert!(matches!(b.build(), Err(GraphBuildError::UnknownState(42))));
    }
}
