//! State transition history tracking.
//!
//! Every time a context replaces its active state, the replacement is
//! recorded here. The discarded state instance itself is not kept, only
//! which variant it was.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single replacement of the active state.
///
/// # Example
///
/// ```rust
/// use statecraft::core::StateTransition;
/// use statecraft::{ConcreteStateA, ConcreteStateB};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: ConcreteStateA.into(),
///     to: ConcreteStateB.into(),
///     timestamp: Utc::now(),
/// };
/// assert!(transition.is_switch());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state that was discarded
    pub from: State,
    /// The state that became active
    pub to: State,
    /// When the replacement happened
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    /// Whether the active variant actually changed.
    ///
    /// A state may transition its context to a fresh instance of its own
    /// variant; that is still recorded but is not a switch.
    pub fn is_switch(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of the states a context has been in.
///
/// `record` is immutable and returns a new history with the transition
/// added. The owning context appends in place instead.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{StateHistory, StateTransition};
/// use statecraft::{ConcreteStateA, ConcreteStateB, State};
/// use chrono::Utc;
///
/// let history = StateHistory::new(ConcreteStateA.into());
/// let history = history.record(StateTransition {
///     from: ConcreteStateA.into(),
///     to: ConcreteStateB.into(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![State::A(ConcreteStateA), State::B(ConcreteStateB)]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory {
    initial: State,
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    /// Create a history starting in `initial` with no transitions.
    pub fn new(initial: State) -> Self {
        Self {
            initial,
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place.
    ///
    /// Used by the owning context so a long-running cycle does not copy the
    /// whole history on every transition.
    pub(crate) fn push(&mut self, transition: StateTransition) {
        tracing::debug!(
            from = transition.from.name(),
            to = transition.to.name(),
            "recording transition"
        );
        self.transitions.push(transition);
    }

    /// The state the history started in.
    pub fn initial(&self) -> State {
        self.initial
    }

    /// The most recently entered state.
    pub fn current(&self) -> State {
        self.transitions
            .last()
            .map_or(self.initial, |transition| transition.to)
    }

    /// Get the path of states traversed: the initial state, then the `to`
    /// state of each transition.
    pub fn get_path(&self) -> Vec<State> {
        std::iter::once(self.initial)
            .chain(self.transitions.iter().map(|transition| transition.to))
            .collect()
    }

    /// Number of transitions that changed the active variant.
    pub fn switch_count(&self) -> usize {
        self.transitions
            .iter()
            .filter(|transition| transition.is_switch())
            .count()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::{ConcreteStateA, ConcreteStateB};

    fn a() -> State {
        ConcreteStateA.into()
    }

    fn b() -> State {
        ConcreteStateB.into()
    }

    fn transition(from: State, to: State) -> StateTransition {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new(a());
        assert!(history.transitions().is_empty());
        assert_eq!(history.get_path(), vec![a()]);
        assert_eq!(history.current(), a());
        assert_eq!(history.switch_count(), 0);
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new(a());
        let new_history = history.record(transition(a(), b()));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
        assert_eq!(new_history.current(), b());
        assert_eq!(new_history.initial(), a());
    }

    #[test]
    fn push_appends_without_reallocating_spare_capacity() {
        let mut history = StateHistory::new(a());
        history.push(transition(a(), b()));

        let buffer = history.transitions.as_ptr();
        while history.transitions.len() < history.transitions.capacity() {
            history.push(transition(b(), a()));
            assert_eq!(history.transitions.as_ptr(), buffer);
        }
        assert_eq!(history.current(), a());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new(a())
            .record(transition(a(), b()))
            .record(transition(b(), a()));

        assert_eq!(history.get_path(), vec![a(), b(), a()]);
    }

    #[test]
    fn switch_count_ignores_same_variant_transitions() {
        let history = StateHistory::new(a())
            .record(transition(a(), a()))
            .record(transition(a(), b()));

        assert_eq!(history.transitions().len(), 2);
        assert_eq!(history.switch_count(), 1);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = StateHistory::new(a()).record(transition(a(), b()));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(transition(b(), a()));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new(a()).record(transition(a(), b()));
        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new(a()).record(transition(a(), b()));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.get_path(), history.get_path());
        assert_eq!(deserialized.transitions(), history.transitions());
    }
}
