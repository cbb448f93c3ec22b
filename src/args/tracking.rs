//! Consumption tracking — which supplied arguments did the caller ask about?
//!
//! Classification stays permissive. A caller that wants to reject extraneous
//! arguments wraps its [`Arguments`] in [`Tracked`], queries through it, and
//! calls [`Tracked::verify`] once it is done.

use std::collections::HashSet;

use parking_lot::Mutex;

use crate::args::classifier::{single_char, Arguments};
use crate::args::grammar::{lex, Token};
use crate::args::query::OptionQuery;
use crate::error::ArgsError;

/// Names and indices queried so far.
#[derive(Debug, Default)]
struct Ledger {
    flags: HashSet<char>,
    options: HashSet<String>,
    positional: HashSet<usize>,
    all_positional: bool,
}

impl Ledger {
    /// A bare name counts as its flag (single character) and as an option, so
    /// `has_any(["v", "verbose"])` consumes both spellings.
    fn record_name(&mut self, name: &str) {
        if let Some(c) = single_char(name) {
            self.flags.insert(c);
        }
        self.options.insert(name.to_string());
    }

    fn saw_positional(&self, index: usize) -> bool {
        self.all_positional || self.positional.contains(&index)
    }
}

/// Supplied arguments that were never queried, in command-line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unused {
    pub flags: Vec<char>,
    /// Name and final value of each unqueried option.
    pub options: Vec<(String, Option<String>)>,
    pub positional: Vec<String>,
}

impl Unused {
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.options.is_empty() && self.positional.is_empty()
    }

    /// Render as command-line tokens: `-x`, `--name[=value]`, positional text.
    pub fn to_tokens(&self) -> Vec<String> {
        let flags = self.flags.iter().map(|c| format!("-{c}"));
        let options = self.options.iter().map(|(name, value)| match value {
            Some(value) => format!("--{name}={value}"),
            None => format!("--{name}"),
        });
        let positional = self.positional.iter().cloned();
        flags.chain(options).chain(positional).collect()
    }
}

/// Query view over [`Arguments`] that records what was asked for.
///
/// Queries mirror those on [`Arguments`]. The ledger sits behind a mutex, so a
/// `Tracked` can be shared by reference across threads.
#[derive(Debug)]
pub struct Tracked<'a> {
    args: &'a Arguments,
    ledger: Mutex<Ledger>,
}

impl Arguments {
    /// Start tracking which arguments get queried.
    pub fn track(&self) -> Tracked<'_> {
        Tracked::new(self)
    }
}

impl<'a> Tracked<'a> {
    pub fn new(args: &'a Arguments) -> Self {
        Self {
            args,
            ledger: Mutex::new(Ledger::default()),
        }
    }

    /// Underlying classification. Reads through it are not recorded.
    pub fn arguments(&self) -> &'a Arguments {
        self.args
    }

    pub fn command(&self) -> &'a str {
        self.args.command()
    }

    pub fn has_flag(&self, name: char) -> bool {
        self.ledger.lock().flags.insert(name);
        self.args.has_flag(name)
    }

    pub fn flag<T>(&self, name: char, yes: T, no: T) -> T {
        self.ledger.lock().flags.insert(name);
        self.args.flag(name, yes, no)
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.ledger.lock().options.insert(name.to_string());
        self.args.has_option(name)
    }

    pub fn option<'q>(&'q self, name: &'q str) -> OptionQuery<'q> {
        self.ledger.lock().options.insert(name.to_string());
        self.args.option(name)
    }

    /// # Panics
    ///
    /// If `index` is out of range, like [`Arguments::index`].
    pub fn index(&self, index: usize) -> &'a str {
        self.ledger.lock().positional.insert(index);
        self.args.index(index)
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.ledger.lock().positional.insert(index);
        self.args.get(index)
    }

    /// All positional arguments; marks every one of them consumed.
    pub fn positional(&self) -> &'a [String] {
        self.ledger.lock().all_positional = true;
        self.args.positional()
    }

    pub fn has_any<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = self.record_names(names);
        self.args.has_any(&names)
    }

    pub fn has_all<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = self.record_names(names);
        self.args.has_all(&names)
    }

    /// Record every name up front; `has_any`/`has_all` short-circuit.
    fn record_names<I, S>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        let mut ledger = self.ledger.lock();
        for name in &names {
            ledger.record_name(name);
        }
        names
    }

    /// Everything supplied but never queried.
    pub fn unused(&self) -> Unused {
        let ledger = self.ledger.lock();
        let mut unused = Unused::default();
        let mut seen_flags = HashSet::new();
        let mut seen_options = HashSet::new();

        for token in self.args.tokens() {
            match lex(token) {
                Token::Flags(chars) => {
                    for c in chars {
                        if !ledger.flags.contains(&c) && seen_flags.insert(c) {
                            unused.flags.push(c);
                        }
                    }
                }
                Token::Option { name, .. } => {
                    if !ledger.options.contains(&name) && seen_options.insert(name.clone()) {
                        let value = self.args.options().get(&name).cloned().flatten();
                        unused.options.push((name, value));
                    }
                }
                Token::Positional(_) => {}
            }
        }

        unused.positional = self
            .args
            .positional()
            .iter()
            .enumerate()
            .filter(|(index, _)| !ledger.saw_positional(*index))
            .map(|(_, arg)| arg.clone())
            .collect();

        unused
    }

    /// Fail if any supplied argument was never queried.
    pub fn verify(&self) -> Result<(), ArgsError> {
        let unused = self.unused();
        if unused.is_empty() {
            return Ok(());
        }

        tracing::debug!(?unused, "unconsumed arguments");
        Err(ArgsError::Unconsumed {
            tokens: unused.to_tokens(),
        })
    }
}
