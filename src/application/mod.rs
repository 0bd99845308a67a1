// Application layer - the session owns all mutable state, the forms hold
// draft input on its behalf. Any front end (CLI, TUI, tests) drives these.

pub mod error;
pub mod forms;
pub mod session;

pub use error::*;
pub use forms::*;
pub use session::*;
