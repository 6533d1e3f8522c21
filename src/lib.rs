//! dots: a small dotfiles manager.
//!
//! Dotfiles are copied into a managed directory (`~/.dots`), recorded in a
//! TOML manifest, and symlinked back to where they live.  `dots status`
//! reports, for every tracked file, whether the live location is linked,
//! missing, diverged in content, or occupied by something else.
//!
//! The public API is organised into four layers:
//!
//! - **[`resources`]**: filesystem primitives and status resolution
//! - **[`config`]**: managed-directory paths and the manifest store
//! - **[`commands`]**: subcommand workflows (`init`, `add`, `status`, ...)
//! - **[`logging`]**: console and per-command log file output
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod resources;
