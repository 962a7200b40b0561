use serde::{Deserialize, Serialize};

use super::role::{Role, Roles};

/// The authenticated user attempting a workflow action.
///
/// For the purpose of the workflow an actor is distinguished only by
/// whether the admin role is held.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Actor {
    pub name: String,
    pub roles: Roles,
}

impl Actor {
    pub fn new(name: impl Into<String>, roles: impl Into<Roles>) -> Self {
        Self {
            name: name.into(),
            roles: roles.into(),
        }
    }

    pub fn admin(name: impl Into<String>) -> Self {
        Self::new(name, Role::Admin | Role::Editor)
    }

    pub fn editor(name: impl Into<String>) -> Self {
        Self::new(name, Role::Editor)
    }

    pub fn is_admin(&self) -> bool {
        self.roles.contains(Role::Admin)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn admin_flag() -> anyhow::Result<()> {
        assert!(Actor::admin("alice").is_admin());
        assert!(!Actor::editor("bob").is_admin());
        assert!(Actor::new("cathy", Role::Admin).is_admin());

        let actor: Actor = serde_json::from_str(r#"{
            "name": "dave",
            "roles": ["editor"]
        }"#)?;
        assert_eq!(actor, Actor::editor("dave"));
        Ok(())
    }
}
