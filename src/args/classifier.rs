//! Argument classifier — invocation vector → flags, options, positional.

use std::collections::HashMap;
use std::path::Path;

use crate::args::grammar::{lex, Token};
use crate::args::query::OptionQuery;
use crate::error::ArgsError;

/// Which form of the command name to return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandForm {
    /// Exactly as invoked (e.g. `/usr/local/bin/prog`).
    #[default]
    Full,
    /// Final path segment only (e.g. `prog`).
    Stripped,
}

/// Classified invocation. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    command: String,
    tokens: Vec<String>,
    flags: Vec<char>,
    options: HashMap<String, Option<String>>,
    positional: Vec<String>,
}

impl Arguments {
    /// Classify an invocation vector. The first element is the command name.
    pub fn from_invocation<I, S>(invocation: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut invocation = invocation.into_iter().map(Into::into);
        let command = invocation.next().ok_or(ArgsError::EmptyInvocation)?;
        let tokens: Vec<String> = invocation.collect();

        let mut flags = Vec::new();
        let mut options = HashMap::new();
        let mut positional = Vec::new();

        for token in &tokens {
            let lexed = lex(token);
            tracing::trace!(token = %token, class = ?lexed, "classified token");

            match lexed {
                Token::Flags(chars) => flags.extend(chars),
                Token::Option { name, value } => {
                    if let Some(previous) = options.insert(name.clone(), value) {
                        tracing::debug!(name = %name, ?previous, "option given twice, keeping the later value");
                    }
                }
                Token::Positional(arg) => positional.push(arg),
            }
        }

        tracing::debug!(
            command = %command,
            flags = flags.len(),
            options = options.len(),
            positional = positional.len(),
            "classified invocation"
        );

        Ok(Self {
            command,
            tokens,
            flags,
            options,
            positional,
        })
    }

    /// Classify this process's own invocation.
    pub fn from_env() -> Result<Self, ArgsError> {
        Self::from_invocation(std::env::args())
    }

    /// Command name as invoked.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Command name without leading directories.
    pub fn command_stripped(&self) -> &str {
        Path::new(&self.command)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.command)
    }

    pub fn command_as(&self, form: CommandForm) -> &str {
        match form {
            CommandForm::Full => self.command(),
            CommandForm::Stripped => self.command_stripped(),
        }
    }

    /// Argument tokens as given, command excluded.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of argument tokens, command excluded.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Flags in encounter order. May contain duplicates.
    pub fn flags(&self) -> &[char] {
        &self.flags
    }

    /// Option name → value. `None` means the option was given without `=`.
    pub fn options(&self) -> &HashMap<String, Option<String>> {
        &self.options
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn has_flag(&self, name: char) -> bool {
        self.flags.contains(&name)
    }

    /// `yes` if the flag is present, `no` otherwise.
    pub fn flag<T>(&self, name: char, yes: T, no: T) -> T {
        if self.has_flag(name) {
            yes
        } else {
            no
        }
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Start an option lookup. See [`OptionQuery`] for defaults, allowed
    /// values and casting.
    pub fn option<'a>(&'a self, name: &'a str) -> OptionQuery<'a> {
        OptionQuery::new(name, self.options.get(name).map(|value| value.as_deref()))
    }

    /// Positional argument at `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of range. Use [`Arguments::get`] when the caller
    /// cannot guarantee the argument exists.
    pub fn index(&self, index: usize) -> &str {
        match self.positional.get(index) {
            Some(arg) => arg,
            None => panic!(
                "positional index {index} out of range: {} positional argument(s)",
                self.positional.len()
            ),
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    pub fn first(&self) -> &str {
        self.index(0)
    }

    pub fn second(&self) -> &str {
        self.index(1)
    }

    pub fn third(&self) -> &str {
        self.index(2)
    }

    /// True if any name is a present flag or option.
    pub fn has_any<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().any(|name| self.is_present(name.as_ref()))
    }

    /// True if every name is a present flag or option.
    pub fn has_all<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().all(|name| self.is_present(name.as_ref()))
    }

    fn is_present(&self, name: &str) -> bool {
        single_char(name).is_some_and(|c| self.has_flag(c)) || self.has_option(name)
    }
}

/// `Some(c)` if `name` is exactly one character.
pub(crate) fn single_char(name: &str) -> Option<char> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
