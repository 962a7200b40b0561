use enumset::{EnumSet, EnumSetType};
use serde::{Deserialize, Serialize};

mod descriptor;
mod impls;
pub mod policy;
pub mod transition;

pub use descriptor::StatusDescriptor;
pub use policy::{Rule, Verdict};
pub use transition::{StateTransitions, Transition, TRANSITIONS};

/// Workflow state of a content item
///
/// Every content item holds exactly one of these at any time.  New
/// items start as `Draft`; the content-service is the only authority
/// that changes it.
#[derive(Debug, Default, EnumSetType, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
#[enumset(serialize_repr = "list")]
pub enum State {
    #[default]
    Draft,
    Review,
    Published,
}

pub type States = EnumSet<State>;
