//! The concrete states.
//!
//! `ConcreteStateA` switches to `ConcreteStateB` on `request1`, and
//! `ConcreteStateB` switches back on `request2`. Every other request leaves
//! the context where it is.

mod a;
mod b;

pub use a::ConcreteStateA;
pub use b::ConcreteStateB;
