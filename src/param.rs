//! Key/value parameters of a tag.

use crate::options::ARGS_DELIMITER;
use serde::{Deserialize, Serialize};

/// One `name:value` entry of a tag.
///
/// `args` is always `value` split on [`ARGS_DELIMITER`], so it holds at least
/// one element (the empty string for an empty value).
///
/// # Examples
///
/// ```rust
/// use tagspec::Param;
///
/// let param = Param::new("index", ",unique");
/// assert_eq!(param.args(), ["", "unique"]);
/// assert!(param.has_arg("unique"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ParamRepr")]
pub struct Param {
    name: String,
    value: String,
    args: Vec<String>,
}

impl Param {
    /// Creates a parameter, computing its arguments from `value`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let args = value.split(ARGS_DELIMITER).map(str::to_string).collect();
        Param {
            name: name.into(),
            value,
            args,
        }
    }

    pub(crate) fn with_args(name: &str, value: &str, args: Vec<String>) -> Self {
        Param {
            name: name.to_string(),
            value: value.to_string(),
            args,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns `true` if `arg` is one of the comma-separated arguments.
    #[must_use]
    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }
}

// Arguments are recomputed on deserialization rather than trusted.
#[derive(Deserialize)]
struct ParamRepr {
    name: String,
    value: String,
}

impl From<ParamRepr> for Param {
    fn from(repr: ParamRepr) -> Self {
        Param::new(repr.name, repr.value)
    }
}
