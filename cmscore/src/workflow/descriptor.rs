use serde::Serialize;

use super::State;

/// Human-facing label and description for a workflow state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusDescriptor {
    pub label: &'static str,
    pub description: &'static str,
}

static DRAFT: StatusDescriptor = StatusDescriptor {
    label: "Draft",
    description: "Content is being written and is not visible to the public.",
};

static REVIEW: StatusDescriptor = StatusDescriptor {
    label: "In Review",
    description: "Content is awaiting editorial review before publication.",
};

static PUBLISHED: StatusDescriptor = StatusDescriptor {
    label: "Published",
    description: "Content is live and publicly visible.",
};

impl StatusDescriptor {
    pub fn of(state: State) -> &'static StatusDescriptor {
        match state {
            State::Draft => &DRAFT,
            State::Review => &REVIEW,
            State::Published => &PUBLISHED,
        }
    }
}

#[cfg(test)]
mod test {
    use enumset::EnumSet;
    use super::*;

    #[test]
    fn total() {
        for state in EnumSet::<State>::all() {
            let descriptor = state.descriptor();
            assert!(!descriptor.label.is_empty());
            assert!(!descriptor.description.is_empty());
        }
        assert_eq!(State::Review.descriptor().label, "In Review");
    }
}
