//! Pre-pass locating escaped backslash pairs.

/// Byte offsets of every non-overlapping `\\` pair in a string.
///
/// For pair `k`, `escaped[k]` is the first backslash (kept literally) and
/// `ignored[k] == escaped[k] + 1` is the second one, which must never be read as
/// the start of another escape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EscapedBackslashes {
    pub escaped: Vec<usize>,
    pub ignored: Vec<usize>,
}

impl EscapedBackslashes {
    pub fn is_escaped(&self, pos: usize) -> bool {
        self.escaped.binary_search(&pos).is_ok()
    }

    pub fn is_ignored(&self, pos: usize) -> bool {
        self.ignored.binary_search(&pos).is_ok()
    }
}

/// Scans `s` left to right for `\\` pairs, resuming after each match.
///
/// A lone trailing backslash is not a pair and is not recorded.
///
/// # Examples
///
/// ```rust
/// use tagspec::scan_escaped_backslashes;
///
/// let found = scan_escaped_backslashes(r"a\\\b");
/// assert_eq!(found.escaped, vec![1]);
/// assert_eq!(found.ignored, vec![2]);
/// ```
pub fn scan_escaped_backslashes(s: &str) -> EscapedBackslashes {
    const PAIR: &str = r"\\";

    let mut found = EscapedBackslashes::default();
    let mut cursor = 0;

    while let Some(offset) = s[cursor..].find(PAIR) {
        let index = cursor + offset;
        found.escaped.push(index);
        found.ignored.push(index + 1);
        cursor = index + PAIR.len();
    }

    found
}
