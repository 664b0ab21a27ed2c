//! Trace events and the observers that receive them.
//!
//! A [`Context`](crate::Context) never prints. Every transition and every
//! handled request is reported as a [`TraceEvent`] to the context's
//! observer, which decides where the event goes.

use crate::context::ContextId;
use crate::core::{Request, State};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something observable that happened inside a context.
///
/// The `Display` rendering is the console line for the event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    /// The context activated a new state.
    Transition { context: ContextId, to: State },

    /// A state handled a request.
    Handled { state: State, request: Request },

    /// A state is about to transition its context.
    WantsTransition { state: State },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transition { to, .. } => write!(f, "Context: Transition to {to}"),
            Self::Handled { state, request } => write!(f, "{state} handles {request}."),
            Self::WantsTransition { state } => {
                write!(f, "{state} wants to change the state of the context.")
            }
        }
    }
}

/// Receiver of trace events.
pub trait Observer {
    fn on_event(&mut self, event: &TraceEvent);
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_event(&mut self, event: &TraceEvent) {
        (**self).on_event(event);
    }
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn on_event(&mut self, event: &TraceEvent) {
        (**self).on_event(event);
    }
}

/// Logs every event through `tracing` at `INFO` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_event(&mut self, event: &TraceEvent) {
        match event {
            TraceEvent::Transition { context, to } => {
                tracing::info!(context = %context, state = to.name(), "{event}")
            }
            TraceEvent::Handled { state, request } => {
                tracing::info!(state = state.name(), request = %request, "{event}")
            }
            TraceEvent::WantsTransition { state } => {
                tracing::info!(state = state.name(), "{event}")
            }
        }
    }
}

/// Keeps every event in memory, in order.
///
/// # Example
///
/// ```rust
/// use statecraft::observer::RecordingObserver;
/// use statecraft::{ConcreteStateB, Context};
///
/// let mut context = Context::with_observer(ConcreteStateB, RecordingObserver::default());
/// context.request1();
///
/// assert_eq!(
///     context.observer().lines(),
///     vec![
///         "Context: Transition to ConcreteStateB",
///         "ConcreteStateB handles request1.",
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Vec<TraceEvent>,
}

impl RecordingObserver {
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Rendered console lines, one per event.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Number of transition events seen so far.
    pub fn transition_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, TraceEvent::Transition { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Observer for RecordingObserver {
    fn on_event(&mut self, event: &TraceEvent) {
        self.events.push(event.clone());
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn on_event(&mut self, _event: &TraceEvent) {}
}
