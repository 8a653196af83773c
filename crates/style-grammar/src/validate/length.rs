//! Ordered dispatch for the `length` primitive.

use super::engine::Matcher;
use super::leaf;
use crate::grammar::{GrammarNode, function_options, keyword_literals};

/// One way a `length` position can be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthStrategy {
    /// A number with a unit, e.g. `10px`.
    Scalable,
    /// A bare number, e.g. `0`.
    Number,
    /// A keyword declared by the surrounding options, e.g. `auto`.
    Keyword,
    /// A function-shaped option declared by the surrounding options, e.g.
    /// `fit-content(10px)` or `var(--gap)`.
    Function,
}

/// Strategies in precedence order; the first that accepts wins.
pub const LENGTH_STRATEGIES: [LengthStrategy; 4] = [
    LengthStrategy::Scalable,
    LengthStrategy::Number,
    LengthStrategy::Keyword,
    LengthStrategy::Function,
];

impl LengthStrategy {
    pub(crate) fn accepts(
        self,
        matcher: &mut Matcher,
        value: &str,
        options: &[GrammarNode],
    ) -> bool {
        match self {
            LengthStrategy::Scalable => leaf::is_scalable(value),
            LengthStrategy::Number => leaf::is_number(value),
            LengthStrategy::Keyword => keyword_literals(options).any(|literal| literal == value),
            LengthStrategy::Function => function_options(options)
                .into_iter()
                .any(|node| matcher.matches(value, node, options)),
        }
    }
}

/// Find the first strategy accepting `value` as a length.
pub(crate) fn resolve(
    matcher: &mut Matcher,
    value: &str,
    options: &[GrammarNode],
) -> Option<LengthStrategy> {
    let strategy = LENGTH_STRATEGIES
        .into_iter()
        .find(|strategy| strategy.accepts(matcher, value, options));
    tracing::trace!("Length '{}' resolved by {:?}", value, strategy);
    strategy
}

/// Classify `value` as a length given the options it may borrow keywords and
/// functions from.
///
/// ```
/// use style_grammar::grammar::GrammarNode;
/// use style_grammar::validate::{LengthStrategy, classify_length};
///
/// let options = [GrammarNode::keyword("auto"), GrammarNode::expression("calc")];
///
/// assert_eq!(classify_length("10px", &options), Some(LengthStrategy::Scalable));
/// assert_eq!(classify_length("0", &options), Some(LengthStrategy::Number));
/// assert_eq!(classify_length("auto", &options), Some(LengthStrategy::Keyword));
/// assert_eq!(classify_length("calc(1px + 2px)", &options), Some(LengthStrategy::Function));
/// assert_eq!(classify_length("huge", &options), None);
/// ```
pub fn classify_length(value: &str, options: &[GrammarNode]) -> Option<LengthStrategy> {
    resolve(&mut Matcher::default(), value.trim(), options)
}
