//! Configuration for the delimiter splitter.
//!
//! This module provides [`SplitOptions`], the value passed to
//! [`split_items`](crate::split_items) to choose quote characters, delimiter
//! characters and whitespace/escape handling. Two presets cover the two levels
//! of the tag syntax:
//!
//! - [`SplitOptions::top_level`]: splits `name:"content"` tags on spaces
//! - [`SplitOptions::subtag`]: splits tag content on `;`
//!
//! ## Examples
//!
//! ```rust
//! use tagspec::{split_items, SplitOptions};
//!
//! let options = SplitOptions::new()
//!     .with_quotes(['\''])
//!     .with_delimiters([';']);
//! let items = split_items("not null;default:'a;b'", &options).unwrap();
//! assert_eq!(items, vec!["not null", "default:'a;b'"]);
//! ```

/// Separates a parameter's arguments inside its value.
pub const ARGS_DELIMITER: char = ',';

/// Separates a parameter key from its value, and a tag name from its content.
pub const PARAM_SEPARATOR: char = ':';

/// Quote character required around a top-level tag value.
pub const TAG_QUOTE: char = '"';

/// Options controlling how [`split_items`](crate::split_items) tokenizes a string.
///
/// # Examples
///
/// ```rust
/// use tagspec::SplitOptions;
///
/// let options = SplitOptions::subtag();
/// assert_eq!(options.quotes, vec!['\'', '"']);
/// assert_eq!(options.delimiters, vec![';']);
/// assert!(options.delete_escapes);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitOptions {
    /// Characters that open and close a protected region.
    pub quotes: Vec<char>,
    /// Characters that separate items outside protected regions.
    pub delimiters: Vec<char>,
    /// Trim surrounding whitespace from every item.
    pub trim_spaces: bool,
    /// Drop the backslash of an escaped quote or escaped backslash.
    pub delete_escapes: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        SplitOptions {
            quotes: Vec::new(),
            delimiters: Vec::new(),
            trim_spaces: true,
            delete_escapes: false,
        }
    }
}

impl SplitOptions {
    /// Creates options with no quotes, no delimiters, trimming on and escapes kept.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for the content of a single tag: `'` and `"` quote, `;` delimits,
    /// escapes are resolved.
    #[must_use]
    pub fn subtag() -> Self {
        SplitOptions {
            quotes: vec!['\'', '"'],
            delimiters: vec![';'],
            trim_spaces: true,
            delete_escapes: true,
        }
    }

    /// Options for a whole tag string: `"` quotes, space delimits, escapes are
    /// kept so the nested parse can interpret them.
    #[must_use]
    pub fn top_level() -> Self {
        SplitOptions {
            quotes: vec![TAG_QUOTE],
            delimiters: vec![' '],
            trim_spaces: true,
            delete_escapes: false,
        }
    }

    /// Sets the characters that open and close protected regions.
    #[must_use]
    pub fn with_quotes(mut self, quotes: impl IntoIterator<Item = char>) -> Self {
        self.quotes = quotes.into_iter().collect();
        self
    }

    /// Sets the characters items are split on.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: impl IntoIterator<Item = char>) -> Self {
        self.delimiters = delimiters.into_iter().collect();
        self
    }

    /// Sets whether items are trimmed of surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagspec::SplitOptions;
    ///
    /// let options = SplitOptions::subtag().with_trim_spaces(false);
    /// assert!(!options.trim_spaces);
    /// ```
    #[must_use]
    pub fn with_trim_spaces(mut self, trim_spaces: bool) -> Self {
        self.trim_spaces = trim_spaces;
        self
    }

    /// Sets whether escaped quotes and backslashes lose their escaping backslash.
    #[must_use]
    pub fn with_delete_escapes(mut self, delete_escapes: bool) -> Self {
        self.delete_escapes = delete_escapes;
        self
    }

    pub(crate) fn is_quote(&self, ch: char) -> bool {
        self.quotes.contains(&ch)
    }

    pub(crate) fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(&ch)
    }
}
