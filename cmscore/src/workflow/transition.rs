use serde::{
    Deserialize,
    Serialize,
};
use std::{
    collections::HashMap,
    sync::LazyLock,
};

use crate::workflow::State;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Transition {
    /// The target workflow state
    pub target: State,
    /// A description of the goal of this transition, suitable as the
    /// label of the control that triggers it.
    pub description: String,
}

/// Adjacency list of the legal single-step moves between states.
///
/// The order of the transitions for each state is the order they are
/// offered in.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StateTransitions(HashMap<State, Vec<Transition>>);

/// The transition table shared by every content kind.
pub static TRANSITIONS: LazyLock<StateTransitions> = LazyLock::new(|| {
    StateTransitions::default()
});

mod impls;
