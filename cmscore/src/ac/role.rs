use enumset::{EnumSet, EnumSetType};
use serde::{Deserialize, Serialize};

/// The roles an authenticated actor may hold within the dashboard.
///
/// Viewers never reach the workflow, so they are not represented.
#[derive(Debug, EnumSetType, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
#[enumset(serialize_repr = "list")]
pub enum Role {
    Admin,
    Editor,
}

pub type Roles = EnumSet<Role>;

mod impls;
