pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
pub mod highlight;
pub mod process;
pub mod prompt;
pub mod repo;
