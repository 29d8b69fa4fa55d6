//! # tagspec
//!
//! A parser for compact struct-tag style mini-languages, such as the tags ORMs and
//! serializers attach to struct fields:
//!
//! ```text
//! gorm:"default:'x';index:,unique;not null" json:"name"
//! ```
//!
//! ## What is parsed?
//!
//! The input is a space-separated list of `name:"content"` tags. The content of
//! each tag is a `;`-separated list of items:
//!
//! - **Options**: keyless items such as `not null`
//! - **Parameters**: `key:value` items such as `column:user_id`, whose value is
//!   further split on `,` into arguments (`index:,unique` has args `""` and `unique`)
//! - **Primary value**: the first option of a tag, e.g. `name` in `json:"name"`
//!
//! Values may be protected with `'` or `"` quotes, so `check:'a;b'` keeps its
//! semicolon, and quotes or delimiters may be escaped with a backslash. See the
//! [`syntax`] module for the full rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use tagspec::parse;
//!
//! let store = parse(r#"gorm:"default:'ui\\path';index:,unique;not null;foreignKey:Customer\"Id""#).unwrap();
//! let gorm = store.get_tag("gorm").unwrap();
//!
//! assert_eq!(gorm.value(), "not null");
//! assert_eq!(gorm.get_param_or("default", ""), r"ui\path");
//! assert_eq!(gorm.get_param_or("foreignKey", ""), r#"Customer"Id"#);
//! assert_eq!(gorm.get_param("index").unwrap().args(), ["", "unique"]);
//! ```
//!
//! ### Parsing the content of a single tag
//!
//! ```rust
//! use tagspec::parse_subtag;
//!
//! let tag = parse_subtag("foo;omitempty", true).unwrap();
//! assert_eq!(tag.value(), "foo");
//! assert!(tag.has_option("omitempty"));
//! ```
//!
//! ## Building blocks
//!
//! The pipeline behind [`parse`] is public for callers with their own syntax:
//!
//! - [`scan_escaped_backslashes`]: locates `\\` pairs ahead of splitting
//! - [`split_items`]: quote-aware, escape-aware splitting driven by [`SplitOptions`]
//! - [`classify_items`]: turns items into options and [`Param`]s
//! - [`unquote_tag_value`] / [`unquote_param_value`]: quote stripping
//!
//! ## Errors
//!
//! Parsing stops at the first problem and returns a single [`Error`]; there are
//! no partial results.

pub mod classify;
pub mod error;
pub mod escape;
pub mod options;
pub mod param;
pub mod split;
pub mod store;
pub mod syntax;
pub mod tag;
mod unique;
pub mod unquote;

pub use classify::classify_items;
pub use error::{Error, Result};
pub use escape::{scan_escaped_backslashes, EscapedBackslashes};
pub use options::{SplitOptions, ARGS_DELIMITER, PARAM_SEPARATOR, TAG_QUOTE};
pub use param::Param;
pub use split::split_items;
pub use store::Store;
pub use tag::Tag;
pub use unquote::{unquote_param_value, unquote_tag_value};

/// Parse a whole tag string into a [`Store`].
///
/// # Examples
///
/// ```rust
/// use tagspec::parse;
///
/// let store = parse(r#"json:"id" gorm:"primaryKey""#).unwrap();
/// assert!(store.has_tag("json"));
/// assert!(store.get_tag("gorm").unwrap().has_option("primaryKey"));
/// ```
///
/// # Errors
///
/// Returns an error if quoting is unbalanced, a tag value is missing or not
/// double-quoted, a tag's content is malformed, or a tag name repeats.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<Store> {
    let mut store = Store::new();

    for item in split_items(input, &SplitOptions::top_level())? {
        let Some((name, raw_value)) = item.split_once(PARAM_SEPARATOR) else {
            return Err(Error::missing_tag_value(&item));
        };
        let content = unquote_tag_value(name, raw_value)?;

        let mut tag = parse_subtag(content, true)?;
        tag.name = name.to_string();
        store.insert(tag)?;
    }

    Ok(store)
}

/// Parse the content of one tag into an anonymous [`Tag`].
///
/// `trim_spaces` controls whether whitespace around items, keys and values
/// is removed.
///
/// # Examples
///
/// ```rust
/// use tagspec::parse_subtag;
///
/// let tag = parse_subtag(r#"default:'\"SomeValue';foreignKey:CustomerId;"#, true).unwrap();
/// assert_eq!(tag.name(), "");
/// assert_eq!(tag.value(), "");
/// assert_eq!(tag.get_param_or("default", ""), "\"SomeValue");
/// assert_eq!(tag.get_param_or("foreignKey", ""), "CustomerId");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnclosedQuote`], [`Error::EmptyParameterName`] or
/// [`Error::DuplicateParameter`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_subtag(content: &str, trim_spaces: bool) -> Result<Tag> {
    let options = SplitOptions::subtag().with_trim_spaces(trim_spaces);
    let items = split_items(content, &options)?;

    let mut tag = classify_items("", &items, ARGS_DELIMITER, trim_spaces)?;
    if let Some(first) = tag.options.first() {
        tag.value = first.clone();
    }

    Ok(tag)
}
