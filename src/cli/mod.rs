//! Command dispatch tree built on the flag engine.
//!
//! Each level of the tree runs one flag-parse pass with a handler that
//! recognizes exactly that level's flags, then the first remaining token
//! selects the next level or the terminal action. Leaves that take no
//! free-form trailing arguments fail on leftovers.

mod dispatch;
mod error;
mod settings;
pub mod usage;

pub use dispatch::{dispatch, Outcome};
pub use error::DispatchError;
pub use settings::Settings;
