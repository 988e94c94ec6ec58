use yewdux::prelude::*;

/// Global app state.
#[derive(Clone, PartialEq, Store)]
pub struct State {
    pub counter: i64,
}

impl Default for State {
    fn default() -> Self {
        Self { counter: 1 }
    }
}

impl State {
    pub fn double_count(&self) -> i64 {
        self.counter * 2
    }
}
