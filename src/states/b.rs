use crate::context::Context;
use crate::core::{Handler, Request, State};
use crate::observer::{Observer, TraceEvent};
use crate::states::ConcreteStateA;
use serde::{Deserialize, Serialize};

/// Switches back to [`ConcreteStateA`] when handling `request2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConcreteStateB;

impl Handler for ConcreteStateB {
    const NAME: &'static str = "ConcreteStateB";

    fn handle1<O: Observer>(&self, context: &mut Context<O>) {
        context.emit(TraceEvent::Handled {
            state: State::B(*self),
            request: Request::Request1,
        });
    }

    fn handle2<O: Observer>(&self, context: &mut Context<O>) {
        context.emit(TraceEvent::Handled {
            state: State::B(*self),
            request: Request::Request2,
        });
        context.emit(TraceEvent::WantsTransition {
            state: State::B(*self),
        });
        context.transition_to(ConcreteStateA);
    }
}
