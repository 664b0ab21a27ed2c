//! Statecraft: a context that delegates its behavior to an interchangeable state
//!
//! A [`Context`] holds exactly one active [`State`] and forwards each request
//! to it. The active state decides how to respond, and may replace itself by
//! calling [`Context::transition_to`].
//!
//! # Core Concepts
//!
//! - **State**: closed set of concrete states, each implementing [`Handler`]
//! - **Context**: owns the active state and performs transitions
//! - **Observer**: receives a [`TraceEvent`] for every transition and handled request
//! - **History**: ordered record of the transitions a context has made
//!
//! # Example
//!
//! ```rust
//! use statecraft::observer::RecordingObserver;
//! use statecraft::{ConcreteStateA, Context};
//!
//! let mut context = Context::with_observer(ConcreteStateA, RecordingObserver::default());
//! context.request1();
//! context.request2();
//!
//! assert_eq!(
//!     context.observer().lines(),
//!     vec![
//!         "Context: Transition to ConcreteStateA",
//!         "ConcreteStateA handles request1.",
//!         "ConcreteStateA wants to change the state of the context.",
//!         "Context: Transition to ConcreteStateB",
//!         "ConcreteStateB handles request2.",
//!         "ConcreteStateB wants to change the state of the context.",
//!         "Context: Transition to ConcreteStateA",
//!     ]
//! );
//! ```

pub mod builder;
pub mod context;
pub mod core;
pub mod observer;
pub mod states;

// Re-export commonly used types
pub use builder::{BuildError, ContextBuilder};
pub use context::{Context, ContextId};
pub use self::core::{ActiveState, Handler, Request, State, StateHistory, StateTransition};
pub use observer::{Observer, TraceEvent};
pub use states::{ConcreteStateA, ConcreteStateB};
