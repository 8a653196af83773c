//! The recursive grammar interpreter.
//!
//! [`Matcher`] walks a [`GrammarNode`] against a value, splitting function
//! arguments and pattern positions with the nesting-aware extractors and
//! recursing into itself for nested calls. Every nested call works on a
//! strictly shorter slice of the value, so recursion terminates on finite
//! input; [`ValidatorConfig::max_depth`] bounds it regardless.

use std::slice;

use super::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
use super::{leaf, length};
use crate::Rejection;
use crate::extract::{extract_function, extract_separator, extract_value, split_top_level};
use crate::grammar::{
    ArgumentOrder, FunctionGrammar, GrammarNode, PatternGrammar, PrimitiveTag, keyword_literals,
};
use crate::registry::GrammarRegistry;

/// Tunables for a [`Validator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Deepest grammar nesting followed before a value is rejected.
    pub max_depth: usize,
}

impl ValidatorConfig {
    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 32;
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

static TRACING_SINK: TracingSink = TracingSink;

/// Validates property values against a registry.
///
/// A validator only borrows its registry and sink, so it is cheap to create
/// per call and safe to use from many threads at once.
///
/// # Example
///
/// ```
/// use style_grammar::prelude::*;
///
/// let registry = GrammarRegistry::builder()
///     .property("width", [GrammarNode::keyword("auto"), GrammarNode::length()])
///     .build();
/// let validator = Validator::new(&registry);
///
/// assert!(validator.is_valid("width", "10px"));
/// assert!(validator.is_valid("width", "auto"));
/// assert!(validator.validate("width", "wide").is_err());
/// ```
pub struct Validator<'a> {
    registry: &'a GrammarRegistry,
    config: ValidatorConfig,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Validator<'a> {
    /// Create a validator reporting to `tracing`.
    pub fn new(registry: &'a GrammarRegistry) -> Self {
        Self {
            registry,
            config: ValidatorConfig::default(),
            sink: &TRACING_SINK,
        }
    }

    /// Use a custom configuration.
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Report diagnostics to `sink` instead of `tracing`.
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    /// Check `value` against every option registered for `property`.
    ///
    /// Surrounding whitespace is ignored. Succeeds as soon as one option
    /// matches.
    pub fn validate(&self, property: &str, value: &str) -> Result<(), Rejection> {
        let Some(options) = self.registry.lookup(property) else {
            self.report(DiagnosticKind::UnknownProperty, property, "", value);
            return Err(Rejection::UnknownProperty {
                property: property.to_string(),
            });
        };

        let value = value.trim();
        let mut matcher = Matcher::new(self.config.max_depth);
        let matched = options
            .iter()
            .any(|option| matcher.matches(value, option, options));

        if matcher.depth_exceeded() {
            self.report(DiagnosticKind::DepthExceeded, property, &describe(options), value);
        }

        if matched {
            Ok(())
        } else {
            self.report(DiagnosticKind::Mismatch, property, &describe(options), value);
            Err(Rejection::Mismatch {
                property: property.to_string(),
                value: value.to_string(),
            })
        }
    }

    /// Boolean form of [`validate`](Self::validate).
    pub fn is_valid(&self, property: &str, value: &str) -> bool {
        self.validate(property, value).is_ok()
    }

    fn report(&self, kind: DiagnosticKind, property: &str, pattern: &str, value: &str) {
        self.sink.report(&Diagnostic {
            kind,
            property: property.to_string(),
            pattern: pattern.to_string(),
            value: value.to_string(),
        });
    }
}

/// Check `value` against the options registered for `property` in
/// `registry`, reporting rejections to `tracing`.
pub fn is_value_valid(property: &str, value: &str, registry: &GrammarRegistry) -> bool {
    Validator::new(registry).is_valid(property, value)
}

/// Check `value` against a single grammar node.
///
/// The node is its own option set: keywords and functions it declares are
/// the only ones a nested `length` position may borrow.
///
/// ```
/// use style_grammar::grammar::GrammarNode;
/// use style_grammar::validate::is_option_valid;
///
/// assert!(is_option_valid("var(--name,16px)", &GrammarNode::Variable));
/// assert!(!is_option_valid("var(--name, )", &GrammarNode::Variable));
/// ```
pub fn is_option_valid(value: &str, node: &GrammarNode) -> bool {
    Matcher::default().matches(value.trim(), node, slice::from_ref(node))
}

fn describe(options: &[GrammarNode]) -> String {
    options
        .iter()
        .map(GrammarNode::to_string)
        .collect::<Vec<_>>()
        .join(" || ")
}

/// Recursive matching state for one validation.
#[derive(Debug)]
pub(crate) struct Matcher {
    max_depth: usize,
    depth: usize,
    exceeded: bool,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(ValidatorConfig::DEFAULT_MAX_DEPTH)
    }
}

impl Matcher {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            depth: 0,
            exceeded: false,
        }
    }

    pub(crate) fn depth_exceeded(&self) -> bool {
        self.exceeded
    }

    /// Match `value` against `node`.
    ///
    /// `options` is the option set `node` was declared in; pattern positions
    /// borrow its keywords and function-shaped grammars.
    pub(crate) fn matches(&mut self, value: &str, node: &GrammarNode, options: &[GrammarNode]) -> bool {
        if self.depth >= self.max_depth {
            self.exceeded = true;
            return false;
        }

        self.depth += 1;
        let matched = match node {
            GrammarNode::Keyword { value: literal, .. } => value == literal,
            GrammarNode::Number => leaf::is_number(value),
            GrammarNode::Color => leaf::is_color(value),
            GrammarNode::Url => leaf::is_url(value),
            GrammarNode::Variable => leaf::is_variable(value),
            GrammarNode::Expression { name } => leaf::is_expression(value, name),
            GrammarNode::Function(function) => self.matches_function(value, function),
            GrammarNode::Pattern(pattern) => self.matches_pattern(value, pattern, options),
            GrammarNode::OneOf(nested) => nested
                .iter()
                .any(|option| self.matches(value, option, nested)),
        };
        self.depth -= 1;

        matched
    }

    fn matches_function(&mut self, value: &str, function: &FunctionGrammar) -> bool {
        if extract_function(value) != function.name {
            return false;
        }
        let Some(inner) = extract_value(value) else {
            return false;
        };

        if inner.trim().is_empty() {
            return function.arguments.is_empty();
        }
        let Some(arguments) = split_slots(inner, function.separator) else {
            return false;
        };

        let declared = &function.arguments;
        match function.order {
            ArgumentOrder::Any => arguments.iter().all(|argument| {
                declared
                    .iter()
                    .any(|candidate| self.matches(argument, candidate, declared))
            }),
            ArgumentOrder::Positional => {
                arguments.len() == declared.len()
                    && arguments
                        .iter()
                        .zip(declared)
                        .all(|(argument, candidate)| self.matches(argument, candidate, declared))
            }
        }
    }

    fn matches_pattern(&mut self, value: &str, pattern: &PatternGrammar, options: &[GrammarNode]) -> bool {
        let parts = match extract_separator(value) {
            Some(separator) => split_slots(value, separator),
            None => Some(vec![value]),
        };
        let Some(parts) = parts else {
            return false;
        };

        pattern.alternatives().iter().any(|sequence| {
            sequence.len() == parts.len()
                && sequence
                    .tags()
                    .iter()
                    .zip(&parts)
                    .all(|(tag, part)| self.matches_tag(part, *tag, options))
        })
    }

    fn matches_tag(&mut self, value: &str, tag: PrimitiveTag, options: &[GrammarNode]) -> bool {
        match tag {
            PrimitiveTag::Length => length::resolve(self, value, options).is_some(),
            PrimitiveTag::Number => leaf::is_number(value),
            PrimitiveTag::Color => leaf::is_color(value),
            PrimitiveTag::Keyword => keyword_literals(options).any(|literal| literal == value),
            PrimitiveTag::Url => leaf::is_url(value),
        }
    }
}

/// Split on a top-level separator, rejecting empty slots.
///
/// Runs of whitespace are not empty slots when splitting on a space.
fn split_slots(value: &str, separator: char) -> Option<Vec<&str>> {
    let mut slots = split_top_level(value, separator);
    if separator.is_whitespace() {
        slots.retain(|slot| !slot.is_empty());
    }
    (!slots.is_empty() && slots.iter().all(|slot| !slot.is_empty())).then_some(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::FunctionGrammar;
    use crate::validate::CollectingSink;

    fn registry() -> GrammarRegistry {
        GrammarRegistry::builder()
            .property(
                "margin",
                [
                    GrammarNode::keyword("auto"),
                    GrammarNode::pattern(PatternGrammar::up_to(PrimitiveTag::Length, 4)),
                    GrammarNode::Variable,
                ],
            )
            .property("opacity", [GrammarNode::Number])
            .build()
    }

    #[test]
    fn validate_reports_unknown_property() {
        let registry = registry();
        let sink = CollectingSink::new();
        let validator = Validator::new(&registry).with_sink(&sink);

        assert_eq!(
            validator.validate("colour", "red"),
            Err(Rejection::UnknownProperty {
                property: "colour".into()
            })
        );
        assert_eq!(sink.take()[0].kind, DiagnosticKind::UnknownProperty);
    }

    #[test]
    fn validate_trims_and_matches_any_option() {
        let registry = registry();
        let validator = Validator::new(&registry);

        assert!(validator.is_valid("margin", " auto "));
        assert!(validator.is_valid("margin", "1px 2px auto 0"));
        assert!(validator.is_valid("margin", "var(--m)"));
        assert!(validator.is_valid("margin", "var(--m) 1px"));
        assert!(!validator.is_valid("margin", "1px 2px 3px 4px 5px"));
        assert!(!validator.is_valid("margin", "1px,"));
        assert!(validator.is_valid("opacity", "0.5"));
        assert!(!validator.is_valid("opacity", "50%"));
    }

    #[test]
    fn mismatch_reports_once_with_pattern() {
        let registry = registry();
        let sink = CollectingSink::new();
        let validator = Validator::new(&registry).with_sink(&sink);

        assert!(!validator.is_valid("margin", "wide"));
        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::Mismatch);
        assert_eq!(diagnostics[0].value, "wide");
        assert!(diagnostics[0].pattern.starts_with("auto || length"));
    }

    #[test]
    fn diagnostics_do_not_change_results() {
        let registry = registry();
        let sink = CollectingSink::new();
        let quiet = Validator::new(&registry).with_sink(&sink);
        let loud = Validator::new(&registry);

        for value in ["1px", "wide", "", "var(--x, )", "auto auto"] {
            assert_eq!(quiet.is_valid("margin", value), loud.is_valid("margin", value));
        }
    }

    #[test]
    fn positional_arguments() {
        let translate = GrammarNode::from(
            FunctionGrammar::new("translate")
                .with_arguments([GrammarNode::length(), GrammarNode::Number])
                .positional(),
        );

        assert!(is_option_valid("translate(10px,2)", &translate));
        assert!(!is_option_valid("translate(2,10px)", &translate));
        assert!(!is_option_valid("translate(10px)", &translate));
        assert!(!is_option_valid("translate(10px,2,3)", &translate));
    }

    #[test]
    fn space_separated_arguments() {
        let node = GrammarNode::from(
            FunctionGrammar::new("pair")
                .with_separator(' ')
                .with_arguments([GrammarNode::Number]),
        );

        assert!(is_option_valid("pair(1  2)", &node));
        assert!(!is_option_valid("pair(1,2)", &node));
    }

    #[test]
    fn empty_argument_slots_are_rejected() {
        let node = GrammarNode::function("minmax", [GrammarNode::length()]);

        assert!(is_option_valid("minmax(0px,1px)", &node));
        assert!(!is_option_valid("minmax(0px,,1px)", &node));
        assert!(!is_option_valid("minmax()", &node));
        assert!(is_option_valid("now()", &GrammarNode::function("now", [])));
    }

    #[test]
    fn depth_limit_rejects_and_reports() {
        let mut node = GrammarNode::Number;
        let mut value = String::from("1");
        for _ in 0..5 {
            node = GrammarNode::function("f", [node]);
            value = format!("f({})", value);
        }
        let registry = GrammarRegistry::builder().property("deep", [node]).build();
        let sink = CollectingSink::new();

        let shallow = Validator::new(&registry)
            .with_config(ValidatorConfig { max_depth: 3 })
            .with_sink(&sink);
        assert!(!shallow.is_valid("deep", &value));
        let kinds: Vec<_> = sink.take().into_iter().map(|d| d.kind).collect();
        assert_eq!(kinds, [DiagnosticKind::DepthExceeded, DiagnosticKind::Mismatch]);

        assert!(Validator::new(&registry).is_valid("deep", &value));
    }

    #[test]
    fn pattern_keyword_tag_uses_sibling_keywords() {
        let registry = GrammarRegistry::builder()
            .property(
                "border",
                [
                    GrammarNode::one_of(GrammarNode::keywords(["solid", "dashed", "none"])),
                    GrammarNode::pattern(
                        PatternGrammar::parse("length keyword color | keyword").unwrap(),
                    ),
                ],
            )
            .build();
        let validator = Validator::new(&registry);

        assert!(validator.is_valid("border", "1px solid rgba(0,0,0,.5)"));
        assert!(validator.is_valid("border", "none"));
        assert!(!validator.is_valid("border", "1px groovy red"));
        assert!(!validator.is_valid("border", "1px solid"));
    }
}
