use enumset::EnumSet;
use std::collections::HashMap;

use crate::workflow::{
    State,
    States,
    policy::{
        RULES,
        Rule,
        Verdict,
    },
};
use super::*;

impl Transition {
    fn new(target: State, description: &str) -> Self {
        Self {
            target,
            description: description.to_string(),
        }
    }
}

impl Default for StateTransitions {
    fn default() -> Self {
        Self(HashMap::from([
            (State::Draft, vec![
                Transition::new(State::Review, "Submit for Review"),
                Transition::new(State::Published, "Publish Now"),
            ]),
            (State::Review, vec![
                Transition::new(State::Draft, "Revert to Draft"),
                Transition::new(State::Published, "Publish Now"),
            ]),
            (State::Published, vec![
                Transition::new(State::Draft, "Unpublish"),
            ]),
        ]))
    }
}

impl StateTransitions {
    /// The transitions listed for `from`, in table order.
    pub fn get(&self, from: State) -> &[Transition] {
        self.0.get(&from)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The set of states reachable from `from` in one step according
    /// to the table alone, without regard to the actor.
    pub fn targets(&self, from: State) -> States {
        self.get(from)
            .iter()
            .map(|transition| transition.target)
            .collect()
    }

    pub fn contains(&self, from: State, to: State) -> bool {
        self.targets(from).contains(to)
    }

    /// Evaluates the ordered policy rules, returning the first rule that
    /// reached a verdict along with that verdict.
    pub fn decide(
        &self,
        current: State,
        target: State,
        is_admin: bool,
    ) -> (&'static Rule, Verdict) {
        RULES.iter()
            .find_map(|rule| rule.check(self, current, target, is_admin)
                .map(|verdict| (rule, verdict))
            )
            .expect("the final rule always reaches a verdict")
    }

    pub fn permits(
        &self,
        current: State,
        target: State,
        is_admin: bool,
    ) -> bool {
        let (rule, verdict) = self.decide(current, target, is_admin);
        log::trace!(
            "{current} -> {target} (admin: {is_admin}): {verdict:?} by {}",
            rule.name,
        );
        verdict == Verdict::Permit
    }

    /// The states an actor may move an item into from `current`;
    /// never includes `current` itself.
    pub fn available(&self, current: State, is_admin: bool) -> States {
        EnumSet::<State>::all()
            .iter()
            .filter(|target| *target != current)
            .filter(|target| self.permits(current, *target, is_admin))
            .collect()
    }

    /// The transitions that may be offered to an actor, in table order.
    ///
    /// A permitted target with no entry in the table (only reachable
    /// through the admin bypass) is appended with a generic description.
    pub fn transitions_for(&self, current: State, is_admin: bool) -> Vec<Transition> {
        let available = self.available(current, is_admin);
        let mut result = self.get(current)
            .iter()
            .filter(|transition| available.contains(transition.target))
            .cloned()
            .collect::<Vec<_>>();
        let listed = result.iter()
            .map(|transition| transition.target)
            .collect::<States>();
        result.extend((available - listed)
            .iter()
            .map(|target| Transition {
                target,
                description: format!("Move to {}", target.descriptor().label),
            })
        );
        result
    }

    /// Validates whether the transition is permitted for the actor.
    pub fn validate(&self, current: State, target: State, is_admin: bool) -> bool {
        self.available(current, is_admin).contains(target)
    }
}

#[cfg(test)]
mod test {
    use enumset::EnumSet;
    use crate::workflow::{
        State,
        TRANSITIONS,
    };

    #[test]
    fn table() {
        assert_eq!(
            TRANSITIONS.targets(State::Draft),
            State::Review | State::Published,
        );
        assert_eq!(
            TRANSITIONS.targets(State::Review),
            State::Draft | State::Published,
        );
        assert_eq!(
            TRANSITIONS.targets(State::Published),
            EnumSet::only(State::Draft),
        );
    }

    #[test]
    fn editor_actions() {
        assert_eq!(
            TRANSITIONS.available(State::Draft, false),
            EnumSet::only(State::Review),
        );
        assert_eq!(
            TRANSITIONS.available(State::Review, false),
            State::Draft | State::Published,
        );
        assert_eq!(
            TRANSITIONS.available(State::Published, false),
            EnumSet::only(State::Draft),
        );
    }

    #[test]
    fn admin_actions() {
        assert_eq!(
            TRANSITIONS.available(State::Draft, true),
            State::Review | State::Published,
        );
        assert_eq!(
            TRANSITIONS.available(State::Review, true),
            State::Draft | State::Published,
        );
        assert_eq!(
            TRANSITIONS.available(State::Published, true),
            EnumSet::only(State::Draft),
        );
    }

    #[test]
    fn invariants() {
        for is_admin in [false, true] {
            for current in EnumSet::<State>::all() {
                let available = TRANSITIONS.available(current, is_admin);
                assert!(!available.contains(current));
                // reverting to draft from published is open to all
                if current == State::Published {
                    assert!(available.contains(State::Draft));
                }
                if is_admin && current != State::Published {
                    assert!(available.contains(State::Published));
                }
                if !is_admin && current == State::Draft {
                    assert!(!available.contains(State::Published));
                }
            }
        }
    }

    #[test]
    fn transitions_for() {
        let editor = TRANSITIONS.transitions_for(State::Draft, false);
        assert_eq!(editor.len(), 1);
        assert_eq!(editor[0].target, State::Review);
        assert_eq!(editor[0].description, "Submit for Review");

        let admin = TRANSITIONS.transitions_for(State::Draft, true)
            .into_iter()
            .map(|t| (t.target, t.description))
            .collect::<Vec<_>>();
        assert_eq!(admin, vec![
            (State::Review, "Submit for Review".to_string()),
            (State::Published, "Publish Now".to_string()),
        ]);

        let published = TRANSITIONS.transitions_for(State::Published, false);
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].description, "Unpublish");
    }

    #[test]
    fn validate() {
        assert!(TRANSITIONS.validate(State::Draft, State::Review, false));
        assert!(!TRANSITIONS.validate(State::Draft, State::Published, false));
        assert!(TRANSITIONS.validate(State::Draft, State::Published, true));
        assert!(!TRANSITIONS.validate(State::Draft, State::Draft, true));
        assert!(!TRANSITIONS.validate(State::Published, State::Published, true));
        assert!(!TRANSITIONS.validate(State::Published, State::Review, true));
    }
}
