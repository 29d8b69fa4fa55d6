//! Error types for tag parsing.
//!
//! Every error is a syntax error in the input string. Parsing is fail-fast: the
//! first problem found in left-to-right order is reported and nothing else is
//! returned.
//!
//! ## Examples
//!
//! ```rust
//! use tagspec::{parse, Error};
//!
//! let result = parse(r#"gorm:"not null" gorm:"unique""#);
//! assert!(matches!(result, Err(Error::DuplicateTag { .. })));
//!
//! if let Err(err) = result {
//!     assert_eq!(err.to_string(), r#"duplicated tags with name "gorm""#);
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while parsing tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A quote character was opened and never closed.
    ///
    /// `partial` holds the items collected before the end of input. They are
    /// only useful for diagnostics and must not be treated as a parse result.
    #[error("unclosed quote in tag")]
    UnclosedQuote { partial: Vec<String> },

    /// A `key:value` item whose key is empty after trimming.
    #[error("invalid param with empty name and value \"{value}\"")]
    EmptyParameterName { value: String },

    /// The same parameter name appeared twice within one tag.
    #[error("duplicated param \"{name}\" in tag")]
    DuplicateParameter { name: String },

    /// The same top-level tag name appeared twice within one input.
    #[error("duplicated tags with name \"{name}\"")]
    DuplicateTag { name: String },

    /// A top-level tag has no value, or a value too short to be quoted.
    #[error("invalid `{name}` tag syntax")]
    MissingTagValue { name: String },

    /// A top-level tag value is not wrapped in double quotes.
    #[error("`{name}` tag value must be in quotation marks")]
    UnquotedTagValue { name: String },

    /// A deserialized map entry whose key differs from the name it holds.
    #[error("entry \"{key}\" holds mismatched name \"{name}\"")]
    MismatchedName { key: String, name: String },
}

impl Error {
    /// Creates an unclosed quote error carrying the items split so far.
    pub fn unclosed_quote(partial: Vec<String>) -> Self {
        Error::UnclosedQuote { partial }
    }

    /// Creates an empty parameter name error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagspec::Error;
    ///
    /// let err = Error::empty_parameter_name("value2");
    /// assert!(err.to_string().contains("value2"));
    /// ```
    pub fn empty_parameter_name(value: &str) -> Self {
        Error::EmptyParameterName {
            value: value.to_string(),
        }
    }

    /// Creates a duplicate parameter error.
    pub fn duplicate_parameter(name: &str) -> Self {
        Error::DuplicateParameter {
            name: name.to_string(),
        }
    }

    /// Creates a duplicate tag error.
    pub fn duplicate_tag(name: &str) -> Self {
        Error::DuplicateTag {
            name: name.to_string(),
        }
    }

    pub fn missing_tag_value(name: &str) -> Self {
        Error::MissingTagValue {
            name: name.to_string(),
        }
    }

    pub fn unquoted_tag_value(name: &str) -> Self {
        Error::UnquotedTagValue {
            name: name.to_string(),
        }
    }

    pub fn mismatched_name(key: &str, name: &str) -> Self {
        Error::MismatchedName {
            key: key.to_string(),
            name: name.to_string(),
        }
    }

    /// Returns the diagnostic items of an [`Error::UnclosedQuote`], if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagspec::{split_items, SplitOptions};
    ///
    /// let err = split_items("a;'b;c", &SplitOptions::subtag()).unwrap_err();
    /// assert_eq!(err.partial_items(), Some(&["a".to_string(), "'b;c".to_string()][..]));
    /// ```
    #[must_use]
    pub fn partial_items(&self) -> Option<&[String]> {
        match self {
            Error::UnclosedQuote { partial } => Some(partial),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
