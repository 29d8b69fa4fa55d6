//! Quote-aware delimiter splitting.
//!
//! [`split_items`] walks a string one character at a time and cuts it on
//! delimiter characters that are neither quoted nor escaped. Quote characters
//! open and close protected regions using a stack, so `'a "b" c'` nests while
//! `'a;b'` keeps its semicolon.
//!
//! ## Escapes
//!
//! A backslash escapes the character after it. Pairs of backslashes are found
//! up front by [`scan_escaped_backslashes`], so in `\\'` the quote is *not*
//! escaped: the two backslashes form a literal backslash and the quote still
//! toggles the nesting state.
//!
//! With [`SplitOptions::delete_escapes`] set, escaped quotes and escaped
//! backslashes lose their escaping backslash. Escaped delimiters are always
//! un-escaped once splitting is done.

use crate::escape::scan_escaped_backslashes;
use crate::{Error, Result, SplitOptions};

/// Splits `content` into items according to `options`.
///
/// Empty items are skipped; a whitespace-only item is kept, and becomes `""`
/// when trimming is on. If a quote is left open at the end of input,
/// [`Error::UnclosedQuote`] is returned with the items collected so far.
///
/// # Examples
///
/// ```rust
/// use tagspec::{split_items, SplitOptions};
///
/// let options = SplitOptions::new()
///     .with_quotes(['\''])
///     .with_delimiters([';'])
///     .with_delete_escapes(true);
/// let items = split_items("not null;default:'one';check:', n > 1'", &options).unwrap();
/// assert_eq!(items, vec!["not null", "default:'one'", "check:', n > 1'"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::UnclosedQuote`] when quoting is unbalanced.
pub fn split_items(content: &str, options: &SplitOptions) -> Result<Vec<String>> {
    let backslashes = scan_escaped_backslashes(content);

    let mut items = Vec::new();
    let mut open_quotes: Vec<char> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<(usize, char)> = None;

    for (pos, ch) in content.char_indices() {
        let prior = prev.replace((pos, ch));

        if backslashes.is_escaped(pos) {
            current.push(ch);
            continue;
        }
        if backslashes.is_ignored(pos) {
            if !options.delete_escapes {
                current.push(ch);
            }
            continue;
        }

        let prior_backslash = matches!(prior, Some((p, '\\')) if !backslashes.is_ignored(p));

        if prior_backslash && options.delete_escapes && options.is_quote(ch) {
            if current.ends_with('\\') {
                current.pop();
            }
            current.push(ch);
            continue;
        }

        if options.is_quote(ch) && !prior_backslash {
            if open_quotes.last() == Some(&ch) {
                open_quotes.pop();
            } else {
                open_quotes.push(ch);
            }
            current.push(ch);
            continue;
        }

        if options.is_delimiter(ch) && open_quotes.is_empty() && !prior_backslash {
            log::trace!("split point at byte {pos}");
            flush_item(&mut current, &mut items, options.trim_spaces);
        } else {
            current.push(ch);
        }
    }
    flush_item(&mut current, &mut items, options.trim_spaces);

    if !open_quotes.is_empty() {
        log::debug!("unclosed quote(s) {open_quotes:?} in {content:?}");
        return Err(Error::unclosed_quote(items));
    }

    for item in &mut items {
        unescape_delimiters(item, &options.delimiters);
    }

    log::trace!("split {content:?} into {items:?}");
    Ok(items)
}

// Emptiness is checked before trimming, so `a; ;b` keeps a blank middle item.
fn flush_item(current: &mut String, items: &mut Vec<String>, trim_spaces: bool) {
    let item = std::mem::take(current);
    if item.is_empty() {
        return;
    }
    if trim_spaces {
        items.push(item.trim().to_string());
    } else {
        items.push(item);
    }
}

// Escaped quotes are left alone here: they were either resolved during the
// walk or must survive for a nested parse.
fn unescape_delimiters(item: &mut String, delimiters: &[char]) {
    for &delimiter in delimiters {
        let escaped: String = ['\\', delimiter].iter().collect();
        if item.contains(&escaped) {
            *item = item.replace(&escaped, &delimiter.to_string());
        }
    }
}
