//! External command execution.
//!
//! Every side effect the installer has on the system goes through the
//! [`CommandRunner`] trait, so the install workflow can be exercised with
//! [`MockRunner`] without touching the host.

pub mod command;
pub mod mock;
pub mod path;
pub mod platform;

pub use command::{CommandRunner, ExternalCommand, SystemRunner};
pub use mock::MockRunner;
pub use path::{is_executable, parse_system_path, resolve_tool_path};
pub use platform::{is_ci, is_elevated};
