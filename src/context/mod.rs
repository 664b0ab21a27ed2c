//! The context whose behavior is delegated to its active state.

use crate::builder::ContextBuilder;
use crate::core::{ActiveState, Request, State, StateHistory, StateTransition};
use crate::observer::{Observer, TraceEvent, TracingObserver};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a [`Context`].
///
/// The active state refers back to its context through this handle; it
/// never owns or borrows the context itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextId(Uuid);

impl ContextId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Holds exactly one active state and forwards requests to it.
///
/// The context is driven through `&mut self`, so a single caller drives it
/// at a time. Sharing one context between threads is not supported.
///
/// # Example
///
/// ```rust
/// use statecraft::observer::RecordingObserver;
/// use statecraft::{ConcreteStateA, ConcreteStateB, Context, State};
///
/// let mut context = Context::with_observer(ConcreteStateA, RecordingObserver::default());
///
/// context.request1();
/// assert_eq!(context.state(), State::B(ConcreteStateB));
///
/// context.request2();
/// assert_eq!(context.state(), State::A(ConcreteStateA));
/// ```
///
/// Trace events come only from the context and its states; callers cannot
/// report a transition that did not happen:
///
/// ```compile_fail
/// use statecraft::observer::NullObserver;
/// use statecraft::{ConcreteStateA, ConcreteStateB, Context, TraceEvent};
///
/// let mut context = Context::with_observer(ConcreteStateA, NullObserver);
/// let id = context.id();
/// context.emit(TraceEvent::Transition { context: id, to: ConcreteStateB.into() });
/// ```
pub struct Context<O: Observer = TracingObserver> {
    id: ContextId,
    active: ActiveState,
    history: StateHistory,
    observer: O,
}

impl Context<TracingObserver> {
    /// Create a context in `initial`, logging its trace through `tracing`.
    pub fn new(initial: impl Into<State>) -> Self {
        Self::with_observer(initial, TracingObserver)
    }

    /// Start a [`ContextBuilder`] with the default observer.
    pub fn builder() -> ContextBuilder<TracingObserver> {
        ContextBuilder::new()
    }
}

impl<O: Observer> Context<O> {
    /// Create a context in `initial` that reports to `observer`.
    pub fn with_observer(initial: impl Into<State>, observer: O) -> Self {
        Self::from_parts(ContextId::new(), initial.into(), observer)
    }

    pub(crate) fn from_parts(id: ContextId, initial: State, observer: O) -> Self {
        let mut context = Self {
            id,
            active: ActiveState::bind(initial, id),
            history: StateHistory::new(initial),
            observer,
        };
        context.emit(TraceEvent::Transition { context: id, to: initial });
        context
    }

    /// Replace the active state with `state` and bind it to this context.
    ///
    /// The previous state is dropped. Any state may transition to any other.
    pub fn transition_to(&mut self, state: impl Into<State>) {
        let state = state.into();
        let previous = std::mem::replace(&mut self.active, ActiveState::bind(state, self.id));

        self.history.push(StateTransition {
            from: previous.state(),
            to: state,
            timestamp: Utc::now(),
        });
        self.emit(TraceEvent::Transition {
            context: self.id,
            to: state,
        });
    }

    /// Forward `request1` to the active state's `handle1`.
    pub fn request1(&mut self) {
        self.request(Request::Request1);
    }

    /// Forward `request2` to the active state's `handle2`.
    pub fn request2(&mut self) {
        self.request(Request::Request2);
    }

    /// Forward `request` to the active state.
    pub fn request(&mut self, request: Request) {
        let state = self.active.state();
        tracing::debug!(
            context = %self.id,
            state = state.name(),
            request = %request,
            "dispatching request"
        );
        match request {
            Request::Request1 => state.handle1(self),
            Request::Request2 => state.handle2(self),
        }
    }

    /// Forward each request in order.
    pub fn drive<I>(&mut self, requests: I)
    where
        I: IntoIterator<Item = Request>,
    {
        for request in requests {
            self.request(request);
        }
    }

    /// Identity the active state refers back to.
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// The variant of the active state.
    pub fn state(&self) -> State {
        self.active.state()
    }

    /// The active state together with its back-reference.
    pub fn active(&self) -> &ActiveState {
        &self.active
    }

    /// Every replacement of the active state since construction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statecraft::observer::NullObserver;
    /// use statecraft::{ConcreteStateA, Context};
    ///
    /// let mut context = Context::with_observer(ConcreteStateA, NullObserver);
    /// context.request1();
    /// context.request1();
    ///
    /// assert_eq!(context.history().switch_count(), 1);
    /// ```
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// The observer receiving this context's trace.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Drop the context, keeping its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Report `event` to the observer.
    pub(crate) fn emit(&mut self, event: TraceEvent) {
        self.observer.on_event(&event);
    }
}

impl<O: Observer> fmt::Debug for Context<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("id", &self.id)
            .field("state", &self.active.state())
            .field("transitions", &self.history.transitions().len())
            .finish_non_exhaustive()
    }
}
