//! Command handlers.  Each submodule exposes a single `execute` function
//! taking parsed arguments and the shared CLI context.

pub mod completions;
pub mod init;
pub mod new;
