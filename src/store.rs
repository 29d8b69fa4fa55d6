//! Name-keyed collection of parsed tags.
//!
//! This module provides [`Store`], the result of [`parse`](crate::parse). It wraps
//! an [`IndexMap`] so that tags iterate in the order they appeared in the input.
//!
//! ## Examples
//!
//! ```rust
//! use tagspec::Store;
//!
//! let store: Store = r#"json:"name,omitempty" gorm:"column:name;not null""#.parse().unwrap();
//!
//! assert_eq!(store.len(), 2);
//! assert!(store.has_tag("gorm"));
//! assert_eq!(store.names().collect::<Vec<_>>(), vec!["json", "gorm"]);
//! assert_eq!(store.get_tag("json").map(|tag| tag.value()), Some("name,omitempty"));
//! ```

use crate::{Error, Result, Tag};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// All top-level tags parsed from one input string, keyed by tag name.
///
/// Tag names are unique: a repeated name fails the whole parse. Deserializing
/// rejects repeated keys and keys that differ from the tag's own name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Store(IndexMap<String, Tag>);

impl Store {
    /// Creates an empty `Store`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagspec::Store;
    ///
    /// let store = Store::new();
    /// assert!(store.is_empty());
    /// assert!(!store.has_tag("gorm"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Store(IndexMap::new())
    }

    /// Adds `tag` under its own name.
    pub(crate) fn insert(&mut self, tag: Tag) -> Result<()> {
        if self.0.contains_key(tag.name()) {
            return Err(Error::duplicate_tag(tag.name()));
        }
        log::debug!("storing tag {:?}", tag.name());
        self.0.insert(tag.name().to_string(), tag);
        Ok(())
    }

    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn get_tag(&self, name: &str) -> Option<&Tag> {
        self.0.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over tag names, in input order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over the tags, in input order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Tag> {
        self.0.values()
    }
}

impl<'de> Deserialize<'de> for Store {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tags: IndexMap<String, Tag> = crate::unique::unique_tags(deserializer)?;
        for (key, tag) in &tags {
            if key != tag.name() {
                return Err(serde::de::Error::custom(Error::mismatched_name(
                    key,
                    tag.name(),
                )));
            }
        }
        Ok(Store(tags))
    }
}

impl FromStr for Store {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s)
    }
}

impl IntoIterator for Store {
    type Item = Tag;
    type IntoIter = indexmap::map::IntoValues<String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_values()
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a Tag;
    type IntoIter = indexmap::map::Values<'a, String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}
