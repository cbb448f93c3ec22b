//! Token grammar — one raw argument → one lexical class.
//!
//! Both patterns are anchored at the start of the token only, so trailing text
//! after a match is ignored (`-ab=c` is the flags `a` and `b`).

use regex::Regex;
use std::sync::LazyLock;

/// `-` followed by a run of word characters. The second character must be a
/// word character, so a token starting with `--` can never match.
static FLAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-(\w+)").expect("flag pattern compiles"));

/// `--name` with an optional `=value`.
static OPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--(\w+)(?:=(\S*))?").expect("option pattern compiles"));

/// Lexical class of a single argument token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `-abc` — each character is an independent flag.
    Flags(Vec<char>),
    /// `--name` or `--name=value`.
    Option {
        name: String,
        /// `None` for `--name`, `Some("")` for `--name=`.
        value: Option<String>,
    },
    /// Anything else, verbatim.
    Positional(String),
}

/// Classify one token. Tried in the order flag → option → positional.
pub fn lex(token: &str) -> Token {
    if let Some(caps) = FLAG_PATTERN.captures(token) {
        return Token::Flags(caps[1].chars().collect());
    }

    if let Some(caps) = OPTION_PATTERN.captures(token) {
        return Token::Option {
            name: caps[1].to_string(),
            value: caps.get(2).map(|m| m.as_str().to_string()),
        };
    }

    Token::Positional(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str, value: Option<&str>) -> Token {
        Token::Option {
            name: name.to_string(),
            value: value.map(String::from),
        }
    }

    #[test]
    fn single_flag() {
        assert_eq!(lex("-v"), Token::Flags(vec!['v']));
    }

    #[test]
    fn grouped_flags_split_per_character() {
        assert_eq!(lex("-abc"), Token::Flags(vec!['a', 'b', 'c']));
    }

    #[test]
    fn digits_and_underscore_are_flags() {
        assert_eq!(lex("-1_x"), Token::Flags(vec!['1', '_', 'x']));
    }

    #[test]
    fn flag_ignores_trailing_text() {
        assert_eq!(lex("-ab=c"), Token::Flags(vec!['a', 'b']));
    }

    #[test]
    fn option_without_value() {
        assert_eq!(lex("--third"), option("third", None));
    }

    #[test]
    fn option_with_value() {
        assert_eq!(lex("--first=1.2"), option("first", Some("1.2")));
        assert_eq!(lex("--second=!?"), option("second", Some("!?")));
    }

    #[test]
    fn option_with_empty_value_is_not_absent() {
        assert_eq!(lex("--name="), option("name", Some("")));
    }

    #[test]
    fn option_value_keeps_later_equals() {
        assert_eq!(lex("--expr=a=b"), option("expr", Some("a=b")));
    }

    #[test]
    fn option_name_stops_at_non_word_character() {
        assert_eq!(lex("--na-me=x"), option("na", None));
    }

    #[test]
    fn double_dash_never_lexes_as_flag() {
        for token in ["--a", "--abc", "--a=b", "--_"] {
            assert!(
                !matches!(lex(token), Token::Flags(_)),
                "{token} lexed as flags"
            );
        }
    }

    #[test]
    fn bare_dashes_are_positional() {
        assert_eq!(lex("-"), Token::Positional("-".into()));
        assert_eq!(lex("--"), Token::Positional("--".into()));
        assert_eq!(lex("---x"), Token::Positional("---x".into()));
        assert_eq!(lex("--=x"), Token::Positional("--=x".into()));
    }

    #[test]
    fn plain_words_are_positional() {
        assert_eq!(lex("first"), Token::Positional("first".into()));
        assert_eq!(lex(""), Token::Positional(String::new()));
        assert_eq!(lex("a-b"), Token::Positional("a-b".into()));
    }
}
