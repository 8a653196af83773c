//! Nesting-aware scanning shared by the extractors, the list editor and the
//! validator.

/// Characters that can delimit the entries of a multi-value list.
pub const SEPARATORS: [char; 4] = [' ', ',', '/', '|'];

/// Parenthesis depth and quote state while walking a value left to right.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Nesting {
    depth: usize,
    quote: Option<char>,
    underflow: bool,
}

impl Nesting {
    /// Consume one character and report whether it sits at the top level.
    ///
    /// Parentheses and quote characters are never top level themselves.
    pub(crate) fn step(&mut self, c: char) -> bool {
        if let Some(open) = self.quote {
            if c == open {
                self.quote = None;
            }
            return false;
        }

        match c {
            '"' | '\'' => {
                self.quote = Some(c);
                false
            }
            '(' => {
                self.depth += 1;
                false
            }
            ')' => {
                match self.depth.checked_sub(1) {
                    Some(depth) => self.depth = depth,
                    None => self.underflow = true,
                }
                false
            }
            _ => self.depth == 0,
        }
    }

    /// Current parenthesis depth.
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Whether every `(` seen so far was closed and no `)` came unopened.
    pub(crate) fn is_balanced(&self) -> bool {
        self.depth == 0 && !self.underflow
    }
}

/// Check that the parentheses in `value` are balanced.
///
/// Parentheses inside quotes are ignored.
///
/// ```
/// use style_grammar::extract::parens_balanced;
///
/// assert!(parens_balanced("minmax(min(0px,1px),2px)"));
/// assert!(!parens_balanced("minmax(0px,"));
/// assert!(!parens_balanced("a)b("));
/// ```
pub fn parens_balanced(value: &str) -> bool {
    let mut nesting = Nesting::default();
    for c in value.chars() {
        nesting.step(c);
    }
    nesting.is_balanced()
}

/// Byte index of the `)` closing the group opened at byte `open`.
pub(crate) fn closing_paren(value: &str, open: usize) -> Option<usize> {
    let mut nesting = Nesting::default();
    for (i, c) in value[open..].char_indices() {
        nesting.step(c);
        if c == ')' && nesting.depth() == 0 {
            return Some(open + i);
        }
    }
    None
}

/// Split `value` on every top-level occurrence of `separator`.
///
/// Parts are trimmed but empty parts are kept, so callers can decide whether
/// an empty slot is an error or just a run of whitespace.
pub(crate) fn split_top_level(value: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut nesting = Nesting::default();
    let mut start = 0;

    for (i, c) in value.char_indices() {
        if nesting.step(c) && c == separator {
            parts.push(value[start..i].trim());
            start = i + c.len_utf8();
        }
    }
    parts.push(value[start..].trim());

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nesting_tracks_depth() {
        let mut nesting = Nesting::default();
        assert!(nesting.step('a'));
        assert!(!nesting.step('('));
        assert!(!nesting.step(','));
        assert!(!nesting.step(')'));
        assert!(nesting.step(','));
        assert!(nesting.is_balanced());
    }

    #[test]
    fn nesting_ignores_quoted_parens() {
        assert!(parens_balanced("url(\"a(b.png\")"));
        assert!(parens_balanced("'('"));
    }

    #[test]
    fn closing_paren_finds_matching_group() {
        let value = "repeat(1,minmax(0px,1fr))";
        assert_eq!(closing_paren(value, 6), Some(value.len() - 1));
        assert_eq!(closing_paren(value, 15), Some(value.len() - 2));
        assert_eq!(closing_paren("f(a", 1), None);
    }

    #[test]
    fn split_keeps_empty_slots() {
        assert_eq!(split_top_level("a,,b", ','), vec!["a", "", "b"]);
        assert_eq!(
            split_top_level("rgba(0,0,0,.5) 1px", ' '),
            vec!["rgba(0,0,0,.5)", "1px"]
        );
        assert_eq!(split_top_level("'a b' c", ' '), vec!["'a b'", "c"]);
    }
}
