//! Staff Roster CLI - the interactive shell over the roster

pub mod interactive;
pub mod parse;
pub mod prompt;
pub mod render;
