//! Tag Syntax Reference
//!
//! This module documents the tag syntax accepted by [`parse`](crate::parse) and
//! [`parse_subtag`](crate::parse_subtag).
//!
//! # Overview
//!
//! A tag string holds one or more tags separated by spaces. Each tag is a name,
//! a colon and a double-quoted content:
//!
//! ```text
//! gorm:"column:id;primaryKey" json:"id,omitempty"
//! ```
//!
//! **Rules**:
//! - Tags are split on spaces that are outside double quotes
//! - The name ends at the first `:`; the rest must be wrapped in `"`
//! - A tag name may appear only once per string
//!
//! # Tag Content
//!
//! The content of a tag is split on `;` outside quotes. Empty items are skipped,
//! so a trailing `;` is harmless, but a blank item such as the middle of `a; ;b`
//! is kept and becomes the empty option `""`:
//!
//! ```text
//! default:'x';index:,unique;not null;
//! ```
//!
//! | Item | Kind | Result |
//! |------|------|--------|
//! | `not null` | Option | `options = ["not null"]` |
//! | `column:user_id` | Parameter | `value = "user_id"`, `args = ["user_id"]` |
//! | `index:,unique` | Parameter | `value = ",unique"`, `args = ["", "unique"]` |
//! | `check:'a > 1; b'` | Parameter | `value = "a > 1; b"` |
//! | `type:decimal:10,2` | Parameter | `value = "decimal:10,2"` (split on the first `:` only) |
//!
//! The first option also becomes the tag's primary value, so `json:"name,omitempty"`
//! has the value `name,omitempty`.
//!
//! Parameter names must be non-empty and unique within a tag. Parameter values
//! lose one pair of surrounding `'` or `"` quotes.
//!
//! # Quotes
//!
//! Inside tag content both `'` and `"` protect a region from splitting. Quotes
//! nest: an opening quote of a different kind starts a new level, and only the
//! same character closes it.
//!
//! ```text
//! a:'x "y;z" w';b     -> ["a:'x \"y;z\" w'", "b"]
//! a:'it"s';b          -> error: unclosed quote
//! ```
//!
//! # Escapes
//!
//! | Sequence | Meaning |
//! |----------|---------|
//! | `\'`, `\"` | Literal quote, does not open or close a region |
//! | `\;` | Literal `;`, does not split |
//! | `\\` | Literal backslash; a quote after it is *not* escaped |
//!
//! A lone trailing backslash is kept as is.
//!
//! Escapes are resolved in two passes. At the top level, escaped quotes and
//! backslashes are kept verbatim so that the content of each tag still carries
//! them. When the content is parsed, `\'`, `\"` and `\\` are collapsed:
//!
//! ```text
//! gorm:"default:'ui\\path';foreignKey:Customer\"Id"
//!   default    -> ui\path
//!   foreignKey -> Customer"Id
//! ```
//!
//! # Whitespace
//!
//! [`parse`](crate::parse) trims whitespace around every item, key and value.
//! [`parse_subtag`](crate::parse_subtag) with `trim_spaces = false` keeps it, so
//! ` key : v ` yields the parameter `" key "` with value `" v "`.
//!
//! # Limitations
//!
//! - One delimiter level per split; there is no recursive grammar
//! - Option and parameter names are not validated beyond being non-empty
//! - Parsing stops at the first error

// This module contains only documentation; no implementation code
