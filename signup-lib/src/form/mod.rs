//! Field/Error stores and the submission controller.

mod controller;
mod fields;
mod state;
mod tasks;

pub use controller::*;
pub use fields::*;
pub use state::State;
pub use tasks::TaskQueue;
