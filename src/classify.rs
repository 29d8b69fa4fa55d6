//! Sorting split items into options and parameters.

use crate::options::PARAM_SEPARATOR;
use crate::unquote::unquote_param_value;
use crate::{Error, Param, Result, Tag};

/// Builds a [`Tag`] named `name` from already split items.
///
/// An item containing `:` becomes a parameter: it is cut at the first `:`, the
/// value is unquoted once and split on `args_delimiter`. Any other item is an
/// option. The tag's primary value is left empty.
///
/// # Examples
///
/// ```rust
/// use tagspec::classify_items;
///
/// let tag = classify_items("", &["option1", "param1:'a,b'", "option2"], ',', true).unwrap();
/// assert_eq!(tag.options(), ["option1", "option2"]);
/// assert_eq!(tag.get_param("param1").unwrap().args(), ["a", "b"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyParameterName`] for an item like `:value`, and
/// [`Error::DuplicateParameter`] when a parameter name repeats.
pub fn classify_items<S: AsRef<str>>(
    name: &str,
    items: &[S],
    args_delimiter: char,
    trim_spaces: bool,
) -> Result<Tag> {
    let mut tag = Tag::anonymous();
    tag.name = name.to_string();

    for item in items {
        let item = item.as_ref();

        let Some((key, value)) = item.split_once(PARAM_SEPARATOR) else {
            let option = if trim_spaces { item.trim() } else { item };
            tag.options.push(option.to_string());
            continue;
        };

        let (key, value) = if trim_spaces {
            (key.trim(), value.trim())
        } else {
            (key, value)
        };
        let value = unquote_param_value(value);

        if key.is_empty() {
            return Err(Error::empty_parameter_name(value));
        }
        if tag.params.contains_key(key) {
            return Err(Error::duplicate_parameter(key));
        }

        let args = value.split(args_delimiter).map(str::to_string).collect();
        log::trace!("param {key:?} = {value:?}");
        tag.params
            .insert(key.to_string(), Param::with_args(key, value, args));
    }

    Ok(tag)
}
