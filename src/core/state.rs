//! The closed set of states a [`Context`] can delegate to.
//!
//! Every state implements [`Handler`], and [`State`] is the sum over the
//! implementers. The context handle is passed into each operation instead
//! of being stored on the state, so a state can never run without a bound
//! context.

use crate::context::{Context, ContextId};
use crate::observer::Observer;
use crate::states::{ConcreteStateA, ConcreteStateB};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Behavior of a single concrete state.
///
/// Both operations receive the context currently hosting the state. An
/// operation may emit trace events and may call
/// [`Context::transition_to`] to replace the active state.
pub trait Handler {
    /// Variant name used in trace output.
    const NAME: &'static str;

    /// React to [`Context::request1`].
    fn handle1<O: Observer>(&self, context: &mut Context<O>);

    /// React to [`Context::request2`].
    fn handle2<O: Observer>(&self, context: &mut Context<O>);
}

/// A state the context can hold.
///
/// Serializes as its variant name.
///
/// # Example
///
/// ```rust
/// use statecraft::{ConcreteStateA, State};
///
/// let state: State = ConcreteStateA.into();
/// assert_eq!(state.name(), "ConcreteStateA");
/// assert_eq!("ConcreteStateA".parse::<State>().unwrap(), state);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum State {
    A(ConcreteStateA),
    B(ConcreteStateB),
}

impl State {
    /// Name of the concrete state behind this value.
    pub fn name(&self) -> &'static str {
        match self {
            Self::A(_) => ConcreteStateA::NAME,
            Self::B(_) => ConcreteStateB::NAME,
        }
    }

    pub fn handle1<O: Observer>(self, context: &mut Context<O>) {
        match self {
            Self::A(state) => state.handle1(context),
            Self::B(state) => state.handle1(context),
        }
    }

    pub fn handle2<O: Observer>(self, context: &mut Context<O>) {
        match self {
            Self::A(state) => state.handle2(context),
            Self::B(state) => state.handle2(context),
        }
    }
}

impl From<ConcreteStateA> for State {
    fn from(state: ConcreteStateA) -> Self {
        Self::A(state)
    }
}

impl From<ConcreteStateB> for State {
    fn from(state: ConcreteStateB) -> Self {
        Self::B(state)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not match any known state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown state '{0}'")]
pub struct UnknownState(pub String);

impl FromStr for State {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ConcreteStateA::NAME {
            Ok(Self::A(ConcreteStateA))
        } else if s == ConcreteStateB::NAME {
            Ok(Self::B(ConcreteStateB))
        } else {
            Err(UnknownState(s.to_string()))
        }
    }
}

impl From<State> for String {
    fn from(state: State) -> Self {
        state.name().to_string()
    }
}

impl TryFrom<String> for State {
    type Error = UnknownState;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The state a context is currently delegating to, bound to that context.
///
/// Only [`Context`] creates values of this type, once per activation, so
/// the back-reference is always the context that most recently activated
/// the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveState {
    state: State,
    context: ContextId,
}

impl ActiveState {
    pub(crate) fn bind(state: State, context: ContextId) -> Self {
        Self { state, context }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The context hosting this state.
    pub fn context(&self) -> ContextId {
        self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(State::A(ConcreteStateA).name(), "ConcreteStateA");
        assert_eq!(State::B(ConcreteStateB).name(), "ConcreteStateB");
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(State::B(ConcreteStateB).to_string(), "ConcreteStateB");
    }

    #[test]
    fn from_concrete_states() {
        assert_eq!(State::from(ConcreteStateA), State::A(ConcreteStateA));
        assert_eq!(State::from(ConcreteStateB), State::B(ConcreteStateB));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "ConcreteStateC".parse::<State>().unwrap_err();
        assert_eq!(err, UnknownState("ConcreteStateC".to_string()));
        assert_eq!(err.to_string(), "Unknown state 'ConcreteStateC'");
    }

    #[test]
    fn state_serializes_as_name() {
        let json = serde_json::to_string(&State::A(ConcreteStateA)).unwrap();
        assert_eq!(json, "\"ConcreteStateA\"");

        let deserialized: State = serde_json::from_str("\"ConcreteStateB\"").unwrap();
        assert_eq!(deserialized, State::B(ConcreteStateB));
    }

    #[test]
    fn state_deserialize_fails_for_unknown_name() {
        let result = serde_json::from_str::<State>("\"Nope\"");
        assert!(result.is_err());
    }

    #[test]
    fn active_state_keeps_binding() {
        let id = ContextId::new();
        let active = ActiveState::bind(ConcreteStateB.into(), id);

        assert_eq!(active.state(), State::B(ConcreteStateB));
        assert_eq!(active.context(), id);
    }
}
