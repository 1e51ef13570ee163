// Transition table entries.
//
// Transitions of all states live in one flat table; a state owns the
// contiguous slice `[first, first + count)`, in the order they were added.

use crate::condition::{Condition, PathContext};
use crate::graph::StateId;
use crate::template::{FinalMarker, Template};

#[derive(Debug, Clone)]
pub struct Transition {
    pub to: StateId,
    pub template: Template,
    /// Explicit condition ANDed with the template's implied condition.
    pub condition: Option<Condition>,
    pub(crate) final_marker: Option<FinalMarker>,
}

impl Transition {
    pub fn new(to: StateId, template: Template, explicit: Option<Condition>) -> Self {
        let condition = match (template.implied_condition(), explicit) {
            (Some(implied), Some(explicit)) => Some(implied.and(explicit)),
            (implied, explicit) => implied.or(explicit),
        };
        let final_marker = template.final_marker();
        Self {
            to,
            template,
            condition,
            final_marker,
        }
    }

    #[inline]
    pub fn is_epsilon(&self) -> bool {
        !self.template.has_surface()
    }

    pub fn final_marker(&self) -> Option<FinalMarker> {
        self.final_marker
    }

    #[inline]
    pub fn can_pass(&self, ctx: &PathContext<'_>) -> bool {
        self.condition.as_ref().is_none_or(|c| c.evaluate(ctx))
    }
}
