use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::{
    State,
    StatusDescriptor,
};

impl State {
    /// The descriptive metadata for this state; defined for every state.
    pub fn descriptor(&self) -> &'static StatusDescriptor {
        StatusDescriptor::of(*self)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl From<State> for String {
    fn from(state: State) -> String {
        format!("{state}")
    }
}

impl From<State> for &'static str {
    fn from(state: State) -> &'static str {
        match state {
            State::Draft => "draft",
            State::Review => "review",
            State::Published => "published",
        }
    }
}

impl FromStr for State {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "draft" => Ok(State::Draft),
            "review" => Ok(State::Review),
            "published" => Ok(State::Published),
            _ => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

#[cfg(feature = "clap")]
mod clap {
    use ::clap::{
        ValueEnum,
        builder::PossibleValue,
    };
    use super::*;

    impl ValueEnum for State {
        fn value_variants<'a>() -> &'a [Self] {
            &[
                State::Draft,
                State::Review,
                State::Published,
            ]
        }

        fn to_possible_value(&self) -> Option<PossibleValue> {
            Some(PossibleValue::new(<&'static str>::from(*self)))
        }
    }
}
