//! Core state types.
//!
//! This module contains the closed set of states, the requests a context
//! forwards to them, and the record of transitions a context has made.

mod history;
mod request;
mod state;

pub use history::{StateHistory, StateTransition};
pub use request::Request;
pub use state::{ActiveState, Handler, State, UnknownState};
