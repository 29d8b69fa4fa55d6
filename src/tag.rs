//! The parsed form of a single tag.
//!
//! A [`Tag`] is built once from the content of one tag, for example the
//! `default:'x';index:,unique;not null` part of `gorm:"..."`, and is read-only
//! afterwards.
//!
//! ## Examples
//!
//! ```rust
//! use tagspec::parse_subtag;
//!
//! let tag = parse_subtag("column:user_id;not null;index:,unique", true).unwrap();
//!
//! assert_eq!(tag.value(), "not null");
//! assert!(tag.has_option("not null"));
//! assert_eq!(tag.get_param_or("column", "id"), "user_id");
//! assert_eq!(tag.get_param_or("size", "255"), "255");
//! assert!(tag.get_param("index").is_some_and(|p| p.has_arg("unique")));
//! ```

use crate::{Error, Param, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One tag: a name, its primary value, boolean options and parameters.
///
/// Parameter names are unique within a tag. Options keep their source order and
/// may repeat. The primary value is the first option, or empty when there is none.
///
/// Deserialization checks the same invariants and recomputes the primary value
/// from the options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TagRepr")]
pub struct Tag {
    pub(crate) name: String,
    pub(crate) value: String,
    pub(crate) params: IndexMap<String, Param>,
    pub(crate) options: Vec<String>,
}

impl Tag {
    pub(crate) fn anonymous() -> Self {
        Tag::default()
    }

    /// The tag name, empty for a tag parsed on its own with
    /// [`parse_subtag`](crate::parse_subtag).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The primary value: the first option of the tag, or `""`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn has_option(&self, name: &str) -> bool {
        self.options.iter().any(|option| option == name)
    }

    #[must_use]
    pub fn has_param(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Param> {
        self.params.get(name)
    }

    /// Returns the value of parameter `name`, or `default` if it is absent.
    #[must_use]
    pub fn get_param_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.params.get(name).map_or(default, Param::value)
    }

    /// Options in source order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Parameters in source order.
    pub fn params(&self) -> indexmap::map::Values<'_, String, Param> {
        self.params.values()
    }
}

#[derive(Deserialize)]
struct TagRepr {
    name: String,
    #[serde(deserialize_with = "crate::unique::unique_params")]
    params: IndexMap<String, Param>,
    options: Vec<String>,
}

impl TryFrom<TagRepr> for Tag {
    type Error = Error;

    fn try_from(repr: TagRepr) -> Result<Self> {
        for (key, param) in &repr.params {
            if key.is_empty() {
                return Err(Error::empty_parameter_name(param.value()));
            }
            if key != param.name() {
                return Err(Error::mismatched_name(key, param.name()));
            }
        }

        Ok(Tag {
            name: repr.name,
            value: repr.options.first().cloned().unwrap_or_default(),
            params: repr.params,
            options: repr.options,
        })
    }
}
