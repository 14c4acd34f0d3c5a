//! Borrowed runtime state handed to resolution and accessor calls.

use crate::engine::EngineState;
use crate::keyboard::KeyboardState;

/// The external state an [`Event`](crate::Event) reads at call time.
///
/// The keyboard reference is optional; without one, resolution behaves as if
/// no modifier or case context exists. Neither reference is owned or written.
#[derive(Clone, Copy)]
pub struct EventContext<'a> {
    pub keyboard: Option<&'a dyn KeyboardState>,
    pub engine: &'a dyn EngineState,
}

impl<'a> EventContext<'a> {
    pub fn new(engine: &'a dyn EngineState) -> Self {
        Self {
            keyboard: None,
            engine,
        }
    }

    pub fn with_keyboard(engine: &'a dyn EngineState, keyboard: &'a dyn KeyboardState) -> Self {
        Self {
            keyboard: Some(keyboard),
            engine,
        }
    }
}
