//! Propagation Service - drives operations through the domain state machine.

mod core;
mod outcome;

pub use self::core::PropagationService;
pub use outcome::{Completed, PropagationError};
