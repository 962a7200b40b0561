//! The ordered rules deciding whether an actor may move an item from one
//! state to another.
//!
//! Rules are evaluated in order and the first one to reach a verdict
//! wins.  The admin bypass must stay ahead of the editor restriction,
//! which in turn must stay ahead of the plain table lookup.

use crate::workflow::{
    State,
    StateTransitions,
    TRANSITIONS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Verdict {
    Permit,
    Deny,
}

type Check = fn(&StateTransitions, State, State, bool) -> Option<Verdict>;

pub struct Rule {
    pub name: &'static str,
    check: Check,
}

impl Rule {
    pub fn check(
        &self,
        table: &StateTransitions,
        current: State,
        target: State,
        is_admin: bool,
    ) -> Option<Verdict> {
        (self.check)(table, current, target, is_admin)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .finish()
    }
}

pub static RULES: [Rule; 3] = [
    Rule {
        name: "admin_publish_bypass",
        check: |_, _, target, is_admin| {
            (is_admin && target == State::Published)
                .then_some(Verdict::Permit)
        },
    },
    Rule {
        name: "editor_draft_publish_restriction",
        check: |_, current, target, is_admin| {
            (!is_admin && current == State::Draft && target == State::Published)
                .then_some(Verdict::Deny)
        },
    },
    Rule {
        name: "transition_table",
        check: |table, current, target, _| {
            Some(if table.contains(current, target) {
                Verdict::Permit
            } else {
                Verdict::Deny
            })
        },
    },
];

/// Whether the transition is permitted under the shared table.
pub fn permits(current: State, target: State, is_admin: bool) -> bool {
    TRANSITIONS.permits(current, target, is_admin)
}
