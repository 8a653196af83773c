//! Index-addressed editing of separator-delimited style values.
//!
//! A value such as `1px solid rgba(0,0,0,.5)` is decomposed into entries on
//! its top-level separator. Separators nested inside function calls or
//! quotes never split an entry.

use std::fmt;

use crate::extract::{extract_separator, split_top_level};

/// Separator used when a value has none of its own and the caller gave none.
pub const DEFAULT_SEPARATOR: char = ' ';

/// A decomposition of one value into its entries.
///
/// A view is never cached: it is rebuilt from the current string by every
/// editing call. Entries are trimmed and never empty, so joining then
/// re-parsing a view yields the same entries.
///
/// ```
/// use style_grammar::list::ListView;
///
/// let mut view = ListView::parse("1px solid rgba(0,0,0,.5)", None);
/// assert_eq!(view.parts(), ["1px", "solid", "rgba(0,0,0,.5)"]);
///
/// view.replace(0, "2px");
/// assert_eq!(view.join(), "2px solid rgba(0,0,0,.5)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    parts: Vec<String>,
    separator: char,
}

impl ListView {
    /// Decompose `value`.
    ///
    /// Without an explicit separator the value's own top-level separator is
    /// detected, falling back to [`DEFAULT_SEPARATOR`].
    pub fn parse(value: &str, separator: Option<char>) -> Self {
        let separator = separator
            .or_else(|| extract_separator(value))
            .unwrap_or(DEFAULT_SEPARATOR);

        Self {
            parts: split_multi_value(value, separator),
            separator,
        }
    }

    /// The entries, in order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// The separator entries are joined with.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if the view has no entries.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Replace the entry at `index`.
    ///
    /// An index equal to [`len`](Self::len) appends. A blank replacement
    /// removes the entry instead. Returns `false` when the index is out of
    /// range, leaving the view untouched.
    pub fn replace(&mut self, index: usize, value: impl AsRef<str>) -> bool {
        if index > self.parts.len() {
            return false;
        }

        let value = value.as_ref().trim();
        if value.is_empty() {
            if index < self.parts.len() {
                self.parts.remove(index);
            }
        } else if index == self.parts.len() {
            self.parts.push(value.to_string());
        } else {
            self.parts[index] = value.to_string();
        }

        true
    }

    /// Insert an entry before `index`; `index == len` appends.
    ///
    /// Blank entries and out-of-range indices are refused.
    pub fn insert(&mut self, index: usize, value: impl AsRef<str>) -> bool {
        let value = value.as_ref().trim();
        if value.is_empty() || index > self.parts.len() {
            return false;
        }
        self.parts.insert(index, value.to_string());
        true
    }

    /// Remove and return the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.parts.len()).then(|| self.parts.remove(index))
    }

    /// Serialize the entries back into one value.
    pub fn join(&self) -> String {
        let mut buf = [0u8; 4];
        let separator: &str = self.separator.encode_utf8(&mut buf);
        self.parts.join(separator)
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

/// Split `value` into its entries on `separator`.
///
/// Only separators at parenthesis depth zero and outside quotes count.
/// Entries are trimmed and empty entries are dropped.
///
/// ```
/// use style_grammar::list::split_multi_value;
///
/// assert_eq!(
///     split_multi_value("minmax(0px, 1fr) , 10px", ','),
///     ["minmax(0px, 1fr)", "10px"]
/// );
/// ```
pub fn split_multi_value(value: &str, separator: char) -> Vec<String> {
    split_top_level(value, separator)
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replace entry `index` of `value` with `new_part`.
///
/// `index == entries` appends a new entry; any larger index returns `value`
/// unchanged.
///
/// ```
/// use style_grammar::list::update_multi_value;
///
/// assert_eq!(update_multi_value("1px 2px 3px", "4px", 1, Some(' ')), "1px 4px 3px");
/// assert_eq!(update_multi_value("a b c", "x", 5, Some(' ')), "a b c");
/// ```
pub fn update_multi_value(
    value: &str,
    new_part: &str,
    index: usize,
    separator: Option<char>,
) -> String {
    let mut view = ListView::parse(value, separator);
    if view.replace(index, new_part) {
        view.join()
    } else {
        tracing::trace!("Update index {} out of range for '{}'", index, value);
        value.to_string()
    }
}

/// Delete entry `index` of `value`.
///
/// Empty entries already present in `value` are collapsed as well, since a
/// list never keeps empty slots. An out-of-range index returns `value`
/// unchanged.
///
/// ```
/// use style_grammar::list::delete_multi_value;
///
/// assert_eq!(delete_multi_value("single", 0, Some(' ')), "");
/// assert_eq!(
///     delete_multi_value("rgba(255,0,0,1) 0px 0px", 1, Some(' ')),
///     "rgba(255,0,0,1) 0px"
/// );
/// ```
pub fn delete_multi_value(value: &str, index: usize, separator: Option<char>) -> String {
    let mut view = ListView::parse(value, separator);
    match view.remove(index) {
        Some(_) => view.join(),
        None => {
            tracing::trace!("Delete index {} out of range for '{}'", index, value);
            value.to_string()
        }
    }
}
