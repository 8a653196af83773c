//! Leaf checks for primitive grammar nodes.

use std::sync::OnceLock;

use regex::Regex;

use crate::extract::{
    extract_function, extract_number, extract_separator, extract_value, split_top_level,
};

fn scalable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^-?[0-9]+(\.[0-9]+)?[a-zA-Z%]+$").expect("scalable length pattern is valid")
    })
}

fn variable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^var\(--[A-Za-z][A-Za-z0-9-]*(?:,(.*))?\)$")
            .expect("variable reference pattern is valid")
    })
}

/// A plain decimal literal spanning the whole value.
pub fn is_number(value: &str) -> bool {
    !value.is_empty() && extract_number(value).len() == value.len()
}

/// A number immediately followed by a unit, e.g. `10px`, `-1.5em` or `50%`.
///
/// Whitespace anywhere invalidates the value.
pub fn is_scalable(value: &str) -> bool {
    scalable_pattern().is_match(value)
}

/// A custom property reference `var(--name)` or `var(--name,fallback)`.
///
/// No whitespace may surround the name; a fallback must not be blank.
pub fn is_variable(value: &str) -> bool {
    if extract_function(value) != "var" {
        return false;
    }

    match variable_pattern().captures(value) {
        Some(captures) => captures
            .get(1)
            .is_none_or(|fallback| !fallback.as_str().trim().is_empty()),
        None => false,
    }
}

/// A `name(...)` call, checked for outer shape only.
pub fn is_expression(value: &str, name: &str) -> bool {
    !name.is_empty() && extract_function(value) == name
}

/// A hex color, an `rgb()`/`rgba()` call or a named color.
pub fn is_color(value: &str) -> bool {
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit());
    }

    match extract_function(value) {
        "" => is_named_color(value),
        "rgb" | "rgba" => extract_value(value).is_some_and(is_rgb_arguments),
        _ => false,
    }
}

/// An absolute URL with a scheme and host, optionally quoted and optionally
/// wrapped in `url(...)`.
pub fn is_url(value: &str) -> bool {
    let mut candidate = value.trim();
    if extract_function(candidate) == "url" {
        match extract_value(candidate) {
            Some(inner) => candidate = inner.trim(),
            None => return false,
        }
    }

    let Some(candidate) = strip_quotes(candidate) else {
        return false;
    };

    candidate.contains("://")
        && !candidate.chars().any(char::is_whitespace)
        && url::Url::parse(candidate).is_ok_and(|url| url.has_host())
}

fn is_named_color(value: &str) -> bool {
    value.eq_ignore_ascii_case("transparent")
        || value.eq_ignore_ascii_case("currentcolor")
        || cssparser::color::parse_named_color(value).is_ok()
}

/// Legacy `r,g,b[,a]` or modern `r g b[ / a]` channel lists.
fn is_rgb_arguments(inner: &str) -> bool {
    let inner = inner.trim();
    let (channels, alpha) = match extract_separator(inner) {
        Some(',') => {
            let mut parts = split_top_level(inner, ',');
            let alpha = if parts.len() == 4 { parts.pop() } else { None };
            (parts, alpha)
        }
        Some(' ') | Some('/') => {
            let halves = split_top_level(inner, '/');
            if halves.len() > 2 {
                return false;
            }
            let channels = split_top_level(halves[0], ' ')
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect();
            (channels, halves.get(1).copied())
        }
        _ => return false,
    };

    channels.len() == 3
        && channels.iter().all(|channel| is_channel(channel))
        && alpha.is_none_or(is_alpha)
}

fn is_channel(value: &str) -> bool {
    if is_variable(value) {
        return true;
    }
    match value.strip_suffix('%') {
        Some(percent) => in_range(percent, 100.0),
        None => in_range(value, 255.0),
    }
}

fn is_alpha(value: &str) -> bool {
    if is_variable(value) {
        return true;
    }
    if let Some(percent) = value.strip_suffix('%') {
        return in_range(percent, 100.0);
    }
    match value.strip_prefix('.') {
        Some(fraction) => {
            !fraction.is_empty() && fraction.bytes().all(|b| b.is_ascii_digit())
        }
        None => in_range(value, 1.0),
    }
}

fn in_range(value: &str, max: f64) -> bool {
    is_number(value) && value.parse::<f64>().is_ok_and(|n| (0.0..=max).contains(&n))
}

/// Strip one pair of matching quotes. Mismatched quoting yields `None`.
fn strip_quotes(value: &str) -> Option<&str> {
    let quoted = |q: char| value.starts_with(q) || value.ends_with(q);
    for q in ['"', '\''] {
        if quoted(q) {
            return value
                .strip_prefix(q)
                .and_then(|v| v.strip_suffix(q))
                .filter(|v| !v.contains(q));
        }
    }
    Some(value)
}
