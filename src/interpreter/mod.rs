//! Interpreter module
//!
//! Runs single command lines against a session, and stored scripts line by
//! line on top of that.

pub mod interpreter;
pub mod script_runner;

pub use interpreter::Interpreter;
pub use script_runner::ScriptRunner;
