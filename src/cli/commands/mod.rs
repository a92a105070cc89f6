//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands reach
//! the host only through a [`CommandRunner`](crate::shell::CommandRunner),
//! so the dispatcher can hand them a mock.

pub mod clean;
pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod run;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
