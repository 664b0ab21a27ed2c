//! Builder API for constructing a context.
//!
//! [`Context::new`](crate::Context::new) already takes the initial state,
//! so it cannot be forgotten. The builder is for callers that assemble a
//! context step by step, and it reports a missing initial state as an
//! error instead.

pub mod error;

pub use error::BuildError;

use crate::context::{Context, ContextId};
use crate::core::State;
use crate::observer::{Observer, TracingObserver};

/// Fluent builder for [`Context`].
///
/// # Example
///
/// ```rust
/// use statecraft::observer::RecordingObserver;
/// use statecraft::{ConcreteStateA, Context, State};
///
/// let context = Context::builder()
///     .initial(ConcreteStateA)
///     .observer(RecordingObserver::default())
///     .build()
///     .unwrap();
///
/// assert_eq!(context.state(), State::A(ConcreteStateA));
/// ```
#[derive(Debug)]
pub struct ContextBuilder<O: Observer = TracingObserver> {
    initial: Option<State>,
    id: Option<ContextId>,
    observer: O,
}

impl ContextBuilder<TracingObserver> {
    /// Create a builder with no initial state and the tracing observer.
    pub fn new() -> Self {
        Self {
            initial: None,
            id: None,
            observer: TracingObserver,
        }
    }
}

impl Default for ContextBuilder<TracingObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Observer> ContextBuilder<O> {
    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<State>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Use a fixed identity instead of a random one.
    pub fn id(mut self, id: ContextId) -> Self {
        self.id = Some(id);
        self
    }

    /// Replace the observer that receives trace events.
    pub fn observer<P: Observer>(self, observer: P) -> ContextBuilder<P> {
        ContextBuilder {
            initial: self.initial,
            id: self.id,
            observer,
        }
    }

    /// Build the context, transitioning it into the initial state.
    pub fn build(self) -> Result<Context<O>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let id = self.id.unwrap_or_default();
        Ok(Context::from_parts(id, initial, self.observer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{NullObserver, RecordingObserver};
    use crate::states::{ConcreteStateA, ConcreteStateB};

    #[test]
    fn builder_validates_required_fields() {
        let result = ContextBuilder::new().observer(NullObserver).build();
        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn missing_initial_state_message() {
        assert_eq!(
            BuildError::MissingInitialState.to_string(),
            "Initial state not specified. Call .initial(state) before .build()"
        );
    }

    #[test]
    fn builder_uses_given_id() {
        let id = ContextId::new();
        let context = ContextBuilder::new()
            .initial(ConcreteStateB)
            .id(id)
            .observer(NullObserver)
            .build()
            .unwrap();

        assert_eq!(context.id(), id);
        assert_eq!(context.active().context(), id);
    }

    #[test]
    fn builder_emits_initial_transition() {
        let context = ContextBuilder::new()
            .observer(RecordingObserver::default())
            .initial(ConcreteStateA)
            .build()
            .unwrap();

        assert_eq!(
            context.observer().lines(),
            vec!["Context: Transition to ConcreteStateA"]
        );
    }

    #[test]
    fn later_initial_overrides_earlier() {
        let context = Context::builder()
            .initial(ConcreteStateA)
            .initial(ConcreteStateB)
            .observer(NullObserver)
            .build()
            .unwrap();

        assert_eq!(context.state(), State::B(ConcreteStateB));
    }
}
