// Depth-first path search over a morphotactics graph.
//
// The search keeps an explicit frame stack instead of recursing: each frame
// holds a state, how much input is consumed, the phonetic attributes of the
// surface so far and a cursor into the state's transition slice. Advancing
// the cursor of the top frame either pushes a new frame (the transition
// matched) or moves on; an exhausted frame is popped.

use tracing::warn;
use turkmorph_core::attributes::{PhoneticAttribute, PhoneticAttributes, morphemic_attributes};

use crate::condition::{PathContext, RootInfo};
use crate::graph::{Graph, StateId};
use crate::morpheme::MorphemeId;
use crate::{MAX_EMPTY_RUN, MAX_LOOP_COUNT};

/// One morpheme on a path and the input byte range it realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub state: StateId,
    pub morpheme: MorphemeId,
    pub start: usize,
    pub end: usize,
}

impl Step {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn surface<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }
}

/// Starting point of a search: a stem surface matched at the input start.
#[derive(Debug, Clone, Copy)]
pub struct Seed<'a> {
    pub state: StateId,
    /// Byte length of the stem surface.
    pub stem_len: usize,
    pub attributes: PhoneticAttributes,
    pub root: RootInfo<'a>,
    /// Caller-defined tag copied into every result.
    pub tag: usize,
}

/// A complete path: root step first, then one step per morpheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub tag: usize,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    state: StateId,
    consumed: usize,
    attrs: PhoneticAttributes,
    next: u32,
    end: u32,
    /// Consecutive empty-surface steps leading to this frame.
    empty_run: usize,
}

/// Reusable scratch buffers for [`Graph::search`].
#[derive(Debug, Default)]
pub struct SearchConfig {
    frames: Vec<Frame>,
    steps: Vec<Step>,
    surface: String,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.frames.clear();
        self.steps.clear();
        self.surface.clear();
    }
}

impl Graph {
    #[inline]
    fn accepts(&self, state: StateId, consumed: usize, input_len: usize, attrs: PhoneticAttributes) -> bool {
        consumed == input_len
            && self.state(state).terminal
            && !attrs.contains(PhoneticAttribute::CannotTerminate)
    }

    /// Enumerate every complete path from `seed` that consumes all of
    /// `input`, appending them to `results` in depth-first order.
    ///
    /// A path is complete when the whole input is consumed, the state is
    /// terminal and the surface is not marked as unable to terminate.
    /// Complete paths are not extended further.
    pub fn search(&self, input: &str, seed: &Seed<'_>, config: &mut SearchConfig, results: &mut Vec<Path>) {
        config.reset();
        if seed.stem_len > input.len() || !input.is_char_boundary(seed.stem_len) {
            return;
        }

        let root_state = self.state(seed.state);
        config.steps.push(Step {
            state: seed.state,
            morpheme: root_state.morpheme,
            start: 0,
            end: seed.stem_len,
        });
        if self.accepts(seed.state, seed.stem_len, input.len(), seed.attributes) {
            results.push(Path {
                tag: seed.tag,
                steps: config.steps.clone(),
            });
            return;
        }
        let (first, end) = self.transition_range(seed.state);
        config.frames.push(Frame {
            state: seed.state,
            consumed: seed.stem_len,
            attrs: seed.attributes,
            next: first,
            end,
            empty_run: 0,
        });

        let mut loop_count: u32 = 0;
        while !config.frames.is_empty() {
            loop_count += 1;
            if loop_count > MAX_LOOP_COUNT {
                warn!(input, "path search hit the loop limit");
                break;
            }

            let depth = config.frames.len() - 1;
            let frame = &mut config.frames[depth];
            if frame.next == frame.end {
                config.frames.pop();
                config.steps.pop();
                continue;
            }
            let transition = self.transition(frame.next);
            frame.next += 1;
            let Frame {
                consumed,
                attrs,
                empty_run,
                ..
            } = *frame;

            let tail = &input[consumed..];
            if tail.is_empty() && transition.template.has_surface() {
                continue;
            }
            transition.template.expand(attrs, &mut config.surface);
            if !tail.starts_with(config.surface.as_str()) {
                continue;
            }
            let ctx = PathContext {
                input,
                consumed,
                phonetic: attrs,
                root: seed.root,
                steps: &config.steps,
                morphemes: self.morphemes(),
            };
            if !transition.can_pass(&ctx) {
                continue;
            }

            let target = transition.to;
            let len = config.surface.len();
            let next_run = if len == 0 {
                // bound runs of empty steps: no state repeats inside one run
                let run_start = depth - empty_run.min(depth);
                if empty_run >= MAX_EMPTY_RUN
                    || config.frames[run_start..].iter().any(|f| f.state == target)
                {
                    continue;
                }
                empty_run + 1
            } else {
                0
            };

            let next_attrs = if transition.is_epsilon() {
                attrs
            } else {
                let mut a = morphemic_attributes(&config.surface, attrs);
                a.remove(PhoneticAttribute::CannotTerminate);
                if let Some(marker) = transition.final_marker() {
                    marker.apply(&mut a);
                }
                a
            };

            let next_consumed = consumed + len;
            config.steps.push(Step {
                state: target,
                morpheme: self.state(target).morpheme,
                start: consumed,
                end: next_consumed,
            });
            if self.accepts(target, next_consumed, input.len(), next_attrs) {
                results.push(Path {
                    tag: seed.tag,
                    steps: config.steps.clone(),
                });
                config.steps.pop();
                continue;
            }

            let (first, end) = self.transition_range(target);
            config.frames.push(Frame {
                state: target,
                consumed: next_consumed,
                attrs: next_attrs,
                next: first,
                end,
                empty_run: next_run,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;
    use crate::graph::GraphBuilder;
    use crate::morpheme::{Morpheme, MorphemeTable};
    use turkmorph_core::attributes::RootAttributes;
    use turkmorph_core::enums::PrimaryPos;

    static MORPHEMES: &[Morpheme] = &[
        Morpheme::new("Noun", "Noun"),
        Morpheme::new("A3sg", "A3sg"),
        Morpheme::new("A3pl", "A3pl"),
        Morpheme::new("Pnon", "Pnon"),
        Morpheme::new("P3sg", "P3sg"),
        Morpheme::new("Nom", "Nominative"),
        Morpheme::new("Loc", "Locative"),
        Morpheme::derivational("Rel", "Relative"),
        Morpheme::new("Adj", "Adjective"),
        Morpheme::derivational("Zero", "Zero"),
    ];

    fn m(table: &MorphemeTable, id: &str) -> MorphemeId {
        table.lookup(id).unwrap()
    }

    // noun -> A3sg|A3pl -> Pnon|P3sg -> Nom|Loc, Loc -> Rel -> Adj -> Zero -> noun
    fn small_graph() -> (Graph, StateId) {
        let table = MorphemeTable::new(MORPHEMES).unwrap();
        let ids: Vec<MorphemeId> = ["Noun", "A3sg", "A3pl", "Pnon", "P3sg", "Nom", "Loc", "Rel", "Adj", "Zero"]
            .iter()
            .map(|id| m(&table, id))
            .collect();
        let mut b = GraphBuilder::new(table);
        let noun = b.root_state("noun_S", ids[0], false);
        let a3sg = b.state("a3sg_S", ids[1], false);
        let a3pl = b.state("a3pl_S", ids[2], false);
        let pnon = b.state("pnon_S", ids[3], false);
        let p3sg = b.state("p3sg_S", ids[4], false);
        let nom = b.state("nom_ST", ids[5], true);
        let loc = b.state("loc_ST", ids[6], true);
        let rel = b.state("rel_S", ids[7], false);
        let adj = b.state("adj_ST", ids[8], true);
        let zero = b.state("zero_S", ids[9], false);
        b.from(noun).add_empty(a3sg).add(a3pl, "lAr");
        b.from(a3sg).add_empty(pnon).add(p3sg, "+sI");
        b.from(a3pl).add_empty(pnon).add(p3sg, "I");
        b.from(pnon).add_empty(nom).add(loc, ">dA");
        b.from(p3sg).add_empty(nom).add(loc, "ndA");
        b.from(loc).add(rel, "ki");
        b.from(rel).add_empty(adj);
        b.from(adj).add_empty_if(zero, Condition::has_tail());
        b.from(zero).add_empty(noun);
        (b.build().unwrap(), noun)
    }

    fn run(graph: &Graph, noun: StateId, input: &str, stem: &str) -> Vec<Vec<&'static str>> {
        let seed = Seed {
            state: noun,
            stem_len: stem.len(),
            attributes: morphemic_attributes(stem, PhoneticAttributes::empty()),
            root: RootInfo {
                root: stem,
                pos: PrimaryPos::Noun,
                attributes: RootAttributes::empty(),
            },
            tag: 7,
        };
        let mut config = SearchConfig::new();
        let mut results = Vec::new();
        graph.search(input, &seed, &mut config, &mut results);
        assert!(results.iter().all(|p| p.tag == 7));
        results
            .iter()
            .map(|p| {
                p.steps
                    .iter()
                    .map(|s| graph.morphemes().get(s.morpheme).id)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn bare_stem_stops_at_first_terminal() {
        let (graph, noun) = small_graph();
        let paths = run(&graph, noun, "dosya", "dosya");
        assert_eq!(paths, vec![vec!["Noun", "A3sg", "Pnon", "Nom"]]);
    }

    #[test]
    fn suffixes_consume_input() {
        let (graph, noun) = small_graph();
        assert_eq!(
            run(&graph, noun, "dosyalarda", "dosya"),
            vec![vec!["Noun", "A3pl", "Pnon", "Loc"]]
        );
        assert_eq!(
            run(&graph, noun, "dosyasında", "dosya"),
            vec![vec!["Noun", "A3sg", "P3sg", "Loc"]]
        );
    }

    #[test]
    fn derivation_then_terminal() {
        let (graph, noun) = small_graph();
        let paths = run(&graph, noun, "dosyadaki", "dosya");
        assert_eq!(paths, vec![vec!["Noun", "A3sg", "Pnon", "Loc", "Rel", "Adj"]]);
    }

    #[test]
    fn empty_cycle_is_bounded() {
        let (graph, noun) = small_graph();
        // Adj -> Zero -> Noun -> A3sg -> Pnon -> Nom loops back only through
        // empty steps once the input is exhausted; the search must finish.
        let paths = run(&graph, noun, "dosyadakiler", "dosya");
        assert_eq!(
            paths,
            vec![vec![
                "Noun", "A3sg", "Pnon", "Loc", "Rel", "Adj", "Zero", "Noun", "A3pl", "Pnon", "Nom"
            ]]
        );
    }

    #[test]
    fn no_match_yields_nothing() {
        let (graph, noun) = small_graph();
        assert!(run(&graph, noun, "dosyaxyz", "dosya").is_empty());
        assert!(run(&graph, noun, "dos", "dosya").is_empty());
    }

    #[test]
    fn step_surfaces() {
        let (graph, noun) = small_graph();
        let seed = Seed {
            state: noun,
            stem_len: 5,
            attributes: morphemic_attributes("dosya", PhoneticAttributes::empty()),
            root: RootInfo {
                root: "dosya",
                pos: PrimaryPos::Noun,
                attributes: RootAttributes::empty(),
            },
            tag: 0,
        };
        let mut results = Vec::new();
        graph.search("dosyalarda", &seed, &mut SearchConfig::new(), &mut results);
        let surfaces: Vec<_> = results[0].steps.iter().map(|s| s.surface("dosyalarda")).collect();
        assert_eq!(surfaces, ["dosya", "lar", "", "da"]);
    }
}
