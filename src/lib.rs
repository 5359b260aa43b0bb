pub mod arguments;
pub mod bump;
pub mod command;
pub mod decider;
pub mod error;
pub mod git;
mod http;
pub mod manifest;
pub mod package_index;
pub mod release_host;
pub mod version;
