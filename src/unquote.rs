//! Stripping quotes from tag and parameter values.

use crate::options::TAG_QUOTE;
use crate::{Error, Result};

/// Removes the double quotes wrapping a top-level tag value.
///
/// `name` is only used to build the error.
///
/// # Examples
///
/// ```rust
/// use tagspec::unquote_tag_value;
///
/// assert_eq!(unquote_tag_value("gorm", r#""not null""#).unwrap(), "not null");
/// assert!(unquote_tag_value("gorm", "not null").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::MissingTagValue`] if `content` is shorter than two characters,
/// and [`Error::UnquotedTagValue`] if it does not start and end with `"`.
pub fn unquote_tag_value<'a>(name: &str, content: &'a str) -> Result<&'a str> {
    if content.chars().nth(1).is_none() {
        return Err(Error::missing_tag_value(name));
    }
    content
        .strip_prefix(TAG_QUOTE)
        .and_then(|rest| rest.strip_suffix(TAG_QUOTE))
        .ok_or_else(|| Error::unquoted_tag_value(name))
}

/// Removes one pair of matching `'` or `"` quotes around a parameter value.
///
/// Values that are not wrapped in matching quotes are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use tagspec::unquote_param_value;
///
/// assert_eq!(unquote_param_value("'value'"), "value");
/// assert_eq!(unquote_param_value("'unmatched"), "'unmatched");
/// ```
#[must_use]
pub fn unquote_param_value(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if value.len() >= 2 {
            if let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
            {
                return inner;
            }
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquote_tag_value() {
        assert_eq!(unquote_tag_value("", r#""content""#).unwrap(), "content");
        assert_eq!(unquote_tag_value("", r#""""#).unwrap(), "");
        assert_eq!(
            unquote_tag_value("", "\"").unwrap_err(),
            Error::missing_tag_value("")
        );
        assert_eq!(
            unquote_tag_value("", "").unwrap_err(),
            Error::missing_tag_value("")
        );
        assert_eq!(
            unquote_tag_value("", "value").unwrap_err(),
            Error::unquoted_tag_value("")
        );
        assert_eq!(
            unquote_tag_value("gorm", "'value'").unwrap_err(),
            Error::unquoted_tag_value("gorm")
        );
    }

    #[test]
    fn test_unquote_param_value() {
        let cases = [
            ("'value'", "value"),
            (r#""value""#, "value"),
            ("value", "value"),
            ("'unmatched", "'unmatched"),
            (r#""unmatched"#, r#""unmatched"#),
            (r#"'mixed""#, r#"'mixed""#),
            ("'", "'"),
            ("''", ""),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(unquote_param_value(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_unquote_param_value_strips_once() {
        assert_eq!(unquote_param_value("''x''"), "'x'");
        assert_eq!(unquote_param_value("x"), unquote_param_value(unquote_param_value("x")));
    }
}
