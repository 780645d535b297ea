//! Fact resolution submodule.
//!
//! Internal building blocks for turning a version command into a fact value:
//!
//! - `find_executable`: PATH-based executable lookup with fallbacks
//! - `run_version_command`: async command execution with timeout
//! - `extract_version` / `normalize`: first-line token extraction

mod command;
mod parser;
mod path_finder;

pub(crate) use command::run_version_command;
pub use parser::{extract_version, normalize};
pub(crate) use path_finder::find_executable;
