//! Option lookup — default, allowed values, cast.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use crate::error::ArgsError;

/// Pending lookup of one option, created by [`Arguments::option`].
///
/// The default only applies when the option is absent. `--name` given without
/// a value is present, and yields `None`.
///
/// [`Arguments::option`]: crate::Arguments::option
#[derive(Debug, Clone, Copy)]
#[must_use = "an option query does nothing until it is resolved"]
pub struct OptionQuery<'a> {
    name: &'a str,
    /// `None` = absent, `Some(None)` = `--name`, `Some(Some(v))` = `--name=v`.
    raw: Option<Option<&'a str>>,
    default: Option<&'a str>,
}

impl<'a> OptionQuery<'a> {
    pub(crate) fn new(name: &'a str, raw: Option<Option<&'a str>>) -> Self {
        Self {
            name,
            raw,
            default: None,
        }
    }

    /// Fallback used when the option was not given at all.
    pub fn default(mut self, default: &'a str) -> Self {
        self.default = Some(default);
        self
    }

    pub fn is_present(&self) -> bool {
        self.raw.is_some()
    }

    /// Raw value, or the default if the option is absent.
    pub fn value(self) -> Option<&'a str> {
        match self.raw {
            Some(raw) => raw,
            None => self.default,
        }
    }

    /// Apply `cast` to the raw-or-default value.
    pub fn cast<T, F>(self, cast: F) -> T
    where
        F: FnOnce(Option<&'a str>) -> T,
    {
        cast(self.value())
    }

    /// Resolve against a closed set of values.
    ///
    /// Absent options resolve to `allowed[0]`. Present options are cast and
    /// must land in `allowed`.
    ///
    /// # Panics
    ///
    /// If `allowed` is empty, or the cast value is not a member of `allowed`.
    /// Both mean the caller declared an inconsistent contract.
    pub fn one_of<T, F>(self, allowed: &[T], cast: F) -> T
    where
        T: PartialEq + Clone + Debug,
        F: FnOnce(Option<&'a str>) -> T,
    {
        assert!(
            !allowed.is_empty(),
            "option '--{}': allowed values must not be empty",
            self.name
        );

        let Some(raw) = self.raw else {
            return allowed[0].clone();
        };

        let value = cast(raw);
        assert!(
            allowed.contains(&value),
            "option '--{}': {:?} is not one of {:?}",
            self.name,
            value,
            allowed
        );
        value
    }

    /// Parse the raw-or-default value. A value that does not parse is a user
    /// input problem and comes back as [`ArgsError::InvalidValue`].
    pub fn parse<T>(self) -> Result<Option<T>, ArgsError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let name = self.name;
        let Some(raw) = self.value() else {
            return Ok(None);
        };

        raw.parse()
            .map(Some)
            .map_err(|e: T::Err| ArgsError::InvalidValue {
                name: name.to_string(),
                value: raw.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_uses_default() {
        let query = OptionQuery::new("level", None).default("info");
        assert!(!query.is_present());
        assert_eq!(query.value(), Some("info"));
    }

    #[test]
    fn bare_option_ignores_default() {
        let query = OptionQuery::new("level", Some(None)).default("info");
        assert!(query.is_present());
        assert_eq!(query.value(), None);
    }

    #[test]
    fn cast_sees_default() {
        let len = OptionQuery::new("n", None)
            .default("abc")
            .cast(|v| v.map_or(0, str::len));
        assert_eq!(len, 3);
    }

    #[test]
    fn one_of_absent_takes_first_allowed() {
        let mode = OptionQuery::new("mode", None).one_of(&["fast", "slow"], |v| v.unwrap_or(""));
        assert_eq!(mode, "fast");
    }

    #[test]
    fn one_of_accepts_member() {
        let mode =
            OptionQuery::new("mode", Some(Some("slow"))).one_of(&["fast", "slow"], |v| v.unwrap_or(""));
        assert_eq!(mode, "slow");
    }

    #[test]
    #[should_panic(expected = "is not one of")]
    fn one_of_rejects_non_member() {
        let _ = OptionQuery::new("mode", Some(Some("warp")))
            .one_of(&["fast", "slow"], |v| v.unwrap_or(""));
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn one_of_rejects_empty_allowed() {
        let _ = OptionQuery::new("mode", None).one_of::<&str, _>(&[], |v| v.unwrap_or(""));
    }

    #[test]
    fn parse_reports_bad_value() {
        let result = OptionQuery::new("count", Some(Some("ten"))).parse::<u32>();
        match result {
            Err(ArgsError::InvalidValue { name, value, .. }) => {
                assert_eq!(name, "count");
                assert_eq!(value, "ten");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn parse_absent_is_none() {
        let result = OptionQuery::new("count", None).parse::<u32>().unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn parse_default() {
        let result = OptionQuery::new("count", None).default("7").parse::<u32>().unwrap();
        assert_eq!(result, Some(7));
    }
}
