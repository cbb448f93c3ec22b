//! Argument classification.
//!
//! ```text
//! argv → lex each token → Arguments → queries (optionally Tracked → verify)
//! ```
//!
//! Each stage is a pure function over owned data and can be unit-tested
//! independently.

mod classifier;
mod grammar;
mod query;
mod tracking;

pub use classifier::{Arguments, CommandForm};
pub use grammar::{lex, Token};
pub use query::OptionQuery;
pub use tracking::{Tracked, Unused};
