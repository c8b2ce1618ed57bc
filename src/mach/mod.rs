/*!
## Machine Module

This module assembles validated programs and executes them.

*/

mod program;
mod runtime;
mod var;

pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::STEP_LIMIT;
pub use var::Var;
