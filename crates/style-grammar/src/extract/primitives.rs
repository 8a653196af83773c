//! Lexical extractors.
//!
//! Every function here is total: malformed input yields an empty or absent
//! result, never a panic.

use super::scan::{Nesting, SEPARATORS, closing_paren, parens_balanced};

/// Extract the signed decimal literal at the very start of `value`.
///
/// Only `-?digits(.digits)?` is recognized. A leading `+`, a leading `.` or a
/// doubled `-` yields an empty string.
///
/// ```
/// use style_grammar::extract::extract_number;
///
/// assert_eq!(extract_number("10px"), "10");
/// assert_eq!(extract_number("-2.5em"), "-2.5");
/// assert_eq!(extract_number("10.10.10px"), "10.10");
/// assert_eq!(extract_number("--10px"), "");
/// assert_eq!(extract_number(".5"), "");
/// ```
pub fn extract_number(value: &str) -> &str {
    let bytes = value.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));

    let integer_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == integer_start {
        return "";
    }

    if bytes.get(end) == Some(&b'.') {
        let mut fraction_end = end + 1;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        if fraction_end > end + 1 {
            end = fraction_end;
        }
    }

    &value[..end]
}

/// Extract the unit or keyword part of a length-like value.
///
/// Returns the first run of letters and `%`, including hyphenated segments.
/// When `value` also holds a balanced parenthesis group the result carries a
/// `()` suffix, marking a function-shaped unit.
///
/// ```
/// use style_grammar::extract::extract_length;
///
/// assert_eq!(extract_length("10px"), "px");
/// assert_eq!(extract_length("50%"), "%");
/// assert_eq!(extract_length("fit-content(10px)"), "fit-content()");
/// assert_eq!(extract_length("12"), "");
/// ```
pub fn extract_length(value: &str) -> String {
    let chars: Vec<(usize, char)> = value.char_indices().collect();
    let is_unit_char = |c: char| c.is_ascii_alphabetic() || c == '%';
    let hyphen_joins = |i: usize| {
        chars[i].1 == '-' && chars.get(i + 1).is_some_and(|(_, c)| c.is_ascii_alphabetic())
    };

    let start = (0..chars.len()).find(|&i| {
        is_unit_char(chars[i].1)
            || (hyphen_joins(i) && (i == 0 || !chars[i - 1].1.is_ascii_alphanumeric()))
    });
    let Some(start) = start else {
        return String::new();
    };

    let mut end = start;
    while end < chars.len() && (is_unit_char(chars[end].1) || hyphen_joins(end)) {
        end += 1;
    }

    let byte_start = chars[start].0;
    let byte_end = chars.get(end).map_or(value.len(), |(i, _)| *i);
    let mut unit = value[byte_start..byte_end].to_string();

    if value.contains('(') && parens_balanced(value) {
        unit.push_str("()");
    }

    unit
}

/// Split a dimension such as `12.5rem` into its number and unit.
///
/// Returns `None` unless the value is exactly a number followed by a unit.
///
/// ```
/// use style_grammar::extract::split_dimension;
///
/// assert_eq!(split_dimension("12.5rem"), Some(("12.5", "rem")));
/// assert_eq!(split_dimension("auto"), None);
/// assert_eq!(split_dimension("10"), None);
/// ```
pub fn split_dimension(value: &str) -> Option<(&str, &str)> {
    let value = value.trim();
    let number = extract_number(value);
    if number.is_empty() {
        return None;
    }

    let unit = &value[number.len()..];
    let valid_unit = !unit.is_empty() && unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%');
    valid_unit.then_some((number, unit))
}

/// Extract the argument blob of a value that is one whole function call.
///
/// * `Some(inner)` when the trimmed value is `name(inner)`.
/// * `Some(value)` unchanged when it is not a single call.
/// * `None` when the parentheses are unbalanced.
///
/// ```
/// use style_grammar::extract::extract_value;
///
/// assert_eq!(extract_value("minmax(0px,1fr)"), Some("0px,1fr"));
/// assert_eq!(extract_value("10px"), Some("10px"));
/// assert_eq!(extract_value("minmax(0px,1fr"), None);
/// ```
pub fn extract_value(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if !parens_balanced(trimmed) {
        return None;
    }

    let name = extract_function(trimmed);
    if name.is_empty() {
        return Some(value);
    }

    Some(&trimmed[name.len() + 1..trimmed.len() - 1])
}

/// Extract the name of a value that is one whole function call.
///
/// The call's parenthesis group must be balanced and close at the exact end
/// of the trimmed value; otherwise the result is empty.
///
/// ```
/// use style_grammar::extract::extract_function;
///
/// assert_eq!(extract_function("repeat(1,minmax(min(var(--x),0px),0px))"), "repeat");
/// assert_eq!(extract_function("name(valid)extra"), "");
/// assert_eq!(extract_function("10px"), "");
/// ```
pub fn extract_function(value: &str) -> &str {
    let trimmed = value.trim();
    let name_len = identifier_len(trimmed);
    if name_len == 0 || !trimmed[name_len..].starts_with('(') {
        return "";
    }

    match closing_paren(trimmed, name_len) {
        Some(close) if close == trimmed.len() - 1 => &trimmed[..name_len],
        _ => "",
    }
}

/// Detect the first top-level list separator in `value`.
///
/// Looks for one of space, `,`, `/` or `|` outside parentheses and quotes.
/// Empty and URL-shaped values have no separator.
///
/// ```
/// use style_grammar::extract::extract_separator;
///
/// assert_eq!(extract_separator("1px solid rgba(0,0,0,.5)"), Some(' '));
/// assert_eq!(extract_separator("a,b"), Some(','));
/// assert_eq!(extract_separator("rgba(0,0,0,.5)"), None);
/// assert_eq!(extract_separator("https://example.com/a b"), None);
/// ```
pub fn extract_separator(value: &str) -> Option<char> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains("://") {
        return None;
    }

    let mut nesting = Nesting::default();
    trimmed
        .chars()
        .find(|&c| nesting.step(c) && SEPARATORS.contains(&c))
}

/// Length in bytes of the CSS-style identifier at the start of `value`.
///
/// An identifier is made of ASCII letters, digits, `-` and `_`, may not start
/// with a digit, and must contain at least one letter.
fn identifier_len(value: &str) -> usize {
    let mut len = 0;
    let mut has_letter = false;

    for (i, c) in value.char_indices() {
        let allowed = match c {
            'a'..='z' | 'A'..='Z' => {
                has_letter = true;
                true
            }
            '-' | '_' => true,
            '0'..='9' => i > 0,
            _ => false,
        };
        if !allowed {
            break;
        }
        len = i + 1;
    }

    if has_letter { len } else { 0 }
}
