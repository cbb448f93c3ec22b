//! Permissive command-line token classifier.
//!
//! ```text
//! argv → Lex (per token) → Arguments { flags, options, positional } → Query
//! ```
//!
//! Every argument token lands in exactly one bucket. Nothing the user types is
//! rejected; anything that is not `-abc` or `--name[=value]` is positional.

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod term;

pub use args::{lex, Arguments, CommandForm, OptionQuery, Token, Tracked, Unused};
pub use error::ArgsError;
