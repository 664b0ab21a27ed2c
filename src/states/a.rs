use crate::context::Context;
use crate::core::{Handler, Request, State};
use crate::observer::{Observer, TraceEvent};
use crate::states::ConcreteStateB;
use serde::{Deserialize, Serialize};

/// Switches to [`ConcreteStateB`] when handling `request1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConcreteStateA;

impl Handler for ConcreteStateA {
    const NAME: &'static str = "ConcreteStateA";

    fn handle1<O: Observer>(&self, context: &mut Context<O>) {
        context.emit(TraceEvent::Handled {
            state: State::A(*self),
            request: Request::Request1,
        });
        context.emit(TraceEvent::WantsTransition {
            state: State::A(*self),
        });
        context.transition_to(ConcreteStateB);
    }

    fn handle2<O: Observer>(&self, context: &mut Context<O>) {
        context.emit(TraceEvent::Handled {
            state: State::A(*self),
            request: Request::Request2,
        });
    }
}
