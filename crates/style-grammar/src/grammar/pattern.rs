//! Pattern grammars: alternatives of primitive sequences.

use std::fmt;

use crate::{Error, Result};

/// A primitive value type usable inside a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTag {
    /// A dimension, bare number, keyword or function-shaped value.
    Length,
    /// A plain decimal number.
    Number,
    /// A color.
    Color,
    /// One of the keywords of the surrounding option set.
    Keyword,
    /// An absolute URL.
    Url,
}

impl PrimitiveTag {
    /// Parse a tag name, tolerating `<angle>` brackets.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name
            .strip_prefix('<')
            .and_then(|n| n.strip_suffix('>'))
            .unwrap_or(name);

        match name {
            "length" => Some(Self::Length),
            "number" => Some(Self::Number),
            "color" => Some(Self::Color),
            "keyword" => Some(Self::Keyword),
            "url" => Some(Self::Url),
            _ => None,
        }
    }

    /// The tag's name as written in pattern syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Number => "number",
            Self::Color => "color",
            Self::Keyword => "keyword",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for PrimitiveTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One alternative of a pattern: an ordered list of primitive tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    tags: Vec<PrimitiveTag>,
}

impl Sequence {
    /// Create a sequence from tags.
    pub fn new(tags: impl IntoIterator<Item = PrimitiveTag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }

    /// A sequence of `count` repetitions of one tag.
    pub fn repeated(tag: PrimitiveTag, count: usize) -> Self {
        Self {
            tags: vec![tag; count],
        }
    }

    /// The tags, in positional order.
    pub fn tags(&self) -> &[PrimitiveTag] {
        &self.tags
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if the sequence has no positions.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}

/// A pattern grammar such as `length | length length`.
///
/// The syntax is parsed once, when the grammar is built.
///
/// ```
/// use style_grammar::grammar::{PatternGrammar, PrimitiveTag};
///
/// let pattern = PatternGrammar::parse("length | length color").unwrap();
/// assert_eq!(pattern.alternatives().len(), 2);
/// assert_eq!(pattern.alternatives()[1].tags(), [PrimitiveTag::Length, PrimitiveTag::Color]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGrammar {
    syntax: String,
    alternatives: Vec<Sequence>,
}

impl PatternGrammar {
    /// Parse a pattern syntax description.
    ///
    /// Alternatives are separated by `|`; the tags of one alternative by
    /// spaces, commas or slashes.
    pub fn parse(syntax: &str) -> Result<Self> {
        let alternatives = syntax
            .split('|')
            .map(|alternative| parse_sequence(syntax, alternative))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            syntax: syntax.trim().to_string(),
            alternatives,
        })
    }

    /// Build a pattern from already-typed alternatives.
    pub fn from_alternatives(alternatives: impl IntoIterator<Item = Sequence>) -> Self {
        let alternatives: Vec<Sequence> = alternatives.into_iter().collect();
        let syntax = alternatives
            .iter()
            .map(Sequence::to_string)
            .collect::<Vec<_>>()
            .join(" | ");

        Self {
            syntax,
            alternatives,
        }
    }

    /// Alternatives of one to `max` repetitions of `tag`, e.g. the
    /// `margin` shorthand is `up_to(Length, 4)`.
    pub fn up_to(tag: PrimitiveTag, max: usize) -> Self {
        Self::from_alternatives((1..=max).map(|count| Sequence::repeated(tag, count)))
    }

    /// The syntax description, normalized.
    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    /// The parsed alternatives.
    pub fn alternatives(&self) -> &[Sequence] {
        &self.alternatives
    }
}

fn parse_sequence(syntax: &str, alternative: &str) -> Result<Sequence> {
    let tags = alternative
        .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
        .filter(|token| !token.is_empty())
        .map(|token| {
            PrimitiveTag::from_name(token).ok_or_else(|| Error::unknown_primitive(syntax, token))
        })
        .collect::<Result<Vec<_>>>()?;

    if tags.is_empty() {
        return Err(Error::EmptyAlternative {
            syntax: syntax.to_string(),
        });
    }

    Ok(Sequence { tags })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mixed_joiners() {
        let pattern = PatternGrammar::parse("length,length | length/number color").unwrap();
        assert_eq!(pattern.alternatives()[0].len(), 2);
        assert_eq!(
            pattern.alternatives()[1].tags(),
            [PrimitiveTag::Length, PrimitiveTag::Number, PrimitiveTag::Color]
        );
    }

    #[test]
    fn parse_angle_brackets() {
        let pattern = PatternGrammar::parse("<length> <color>").unwrap();
        assert_eq!(
            pattern.alternatives()[0].tags(),
            [PrimitiveTag::Length, PrimitiveTag::Color]
        );
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        let err = PatternGrammar::parse("length | size").unwrap_err();
        assert!(matches!(err, Error::UnknownPrimitive { ref tag, .. } if tag == "size"));
    }

    #[test]
    fn parse_rejects_empty_alternative() {
        assert!(matches!(
            PatternGrammar::parse("length ||"),
            Err(Error::EmptyAlternative { .. })
        ));
        assert!(PatternGrammar::parse("").is_err());
    }

    #[test]
    fn up_to_builds_syntax() {
        let pattern = PatternGrammar::up_to(PrimitiveTag::Length, 3);
        assert_eq!(pattern.syntax(), "length | length length | length length length");
        assert_eq!(PatternGrammar::parse(pattern.syntax()).unwrap(), pattern);
    }
}
