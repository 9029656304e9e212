//! Command modules for the stencilt CLI.
//!
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod traits;
pub mod common;

pub mod check;
pub mod init;
pub mod tokens;

pub use check::{CheckArgs, run_check};
pub use init::{InitArgs, run_init};
pub use tokens::{TokensArgs, run_tokens};
