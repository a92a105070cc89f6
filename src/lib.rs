//! install-tools - pinned installer for kubectl, helm, minikube and argo.
//!
//! Checks each tool's installed version, asks before replacing a different
//! one, downloads the pinned release and installs it under `/usr/local/bin`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`environment`] - Distribution, kernel and architecture probe
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External command execution
//! - [`tools`] - Tool catalog, installer, version reporter and cleanup
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use install_tools::tools::{decide, find, Decision};
//!
//! let helm = find("helm").unwrap();
//! assert_eq!(decide(Some("v3.14.1+ge4b5d6a"), helm.target_version), Decision::UpToDate);
//! ```

pub mod cli;
pub mod environment;
pub mod error;
pub mod shell;
pub mod tools;
pub mod ui;

pub use error::{InstallError, Result};
