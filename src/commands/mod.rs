//! Command implementations for qt-settings CLI

pub mod completions;
mod helpers;
pub mod install;
pub mod locate;
pub mod version;
