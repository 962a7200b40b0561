use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::Role;

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl From<Role> for &'static str {
    fn from(role: Role) -> &'static str {
        match role {
            Role::Admin => "admin",
            Role::Editor => "editor",
        }
    }
}

impl FromStr for Role {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            _ => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}
