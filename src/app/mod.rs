mod controller;
mod state;

pub use controller::{Controller, Exchange, RoutineError};
pub use state::AppState;
