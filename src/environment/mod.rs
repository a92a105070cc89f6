//! Host environment probe.
//!
//! Collects the distribution name, kernel and architecture shown before
//! anything is installed. Every lookup degrades to a placeholder instead
//! of failing.

pub mod probe;

pub use probe::{
    distro_name, gather, parse_os_release, SystemInfo, OS_RELEASE_PATH, UNKNOWN, UNKNOWN_DISTRO,
};
