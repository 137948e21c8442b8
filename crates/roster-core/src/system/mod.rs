//! Modern student system interface
//!
//! Client code is written against [`StudentSystem`]. The production
//! implementation is [`crate::StudentSystemAdapter`], which forwards to the
//! legacy store; tests are free to plug in their own.

mod error;
mod traits;

pub use error::{RosterError, RosterResult};
pub use traits::{Outcome, StudentSystem};
