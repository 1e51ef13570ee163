//! Morphotactics graph engine.
//!
//! A morphotactics graph is a set of states, each tagged with the morpheme it
//! represents, connected by transitions that carry a surface template and a
//! condition. Analysis is a depth-first walk that consumes the input word
//! one template expansion at a time. The engine knows nothing about any
//! particular language's suffix inventory; `turkmorph-tr` authors the graph.
//!
//! # Architecture
//!
//! - [`morpheme`] -- Morpheme descriptors and the id table
//! - [`template`] -- Surface template parsing and expansion
//! - [`condition`] -- Transition conditions evaluated against a search path
//! - [`transition`] -- Transition table entries
//! - [`graph`] -- Arena graph and its builder with validation
//! - [`search`] -- Explicit-stack depth-first path search

pub mod condition;
pub mod graph;
pub mod morpheme;
pub mod search;
pub mod template;
pub mod transition;

pub use condition::{Condition, PathContext, RootInfo};
pub use graph::{Graph, GraphBuilder, State, StateId};
pub use morpheme::{Morpheme, MorphemeId, MorphemeTable};
pub use search::{Path, SearchConfig, Seed, Step};
pub use template::{FinalMarker, Template, TemplateError};
pub use transition::Transition;

/// Error type for graph construction.
#[derive(Debug, thiserror::Error)]
pub enum GraphBuildError {
    #[error("duplicate morpheme id: {0}")]
    DuplicateMorpheme(&'static str),
    #[error("unknown morpheme id: {0}")]
    UnknownMorpheme(String),
    #[error("duplicate state name: {0}")]
    DuplicateState(String),
    #[error("state id {0} does not belong to this builder")]
    UnknownState(u32),
    #[error("invalid template '{template}' on {from} -> {to}: {source}")]
    InvalidTemplate {
        from: String,
        to: String,
        template: String,
        #[source]
        source: TemplateError,
    },
    #[error("graph has no root state")]
    NoRootState,
    #[error("state {0} is not reachable from any root state")]
    UnreachableState(String),
}

/// Maximum number of outer-loop iterations of one path search.
/// Acts as a safety limit against runaway graphs.
pub const MAX_LOOP_COUNT: u32 = 200_000;

/// Maximum number of consecutive empty-surface steps on one path.
pub const MAX_EMPTY_RUN: usize = 8;
