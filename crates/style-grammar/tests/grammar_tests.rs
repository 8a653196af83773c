//! Tests for grammar validation of nested function values.

use style_grammar::extract::{extract_function, extract_number, extract_separator};
use style_grammar::prelude::*;
use style_grammar::validate::{LengthStrategy, classify_length};

/// `repeat(<number>, <track>)` where a track is `minmax(...)`,
/// `fit-content(...)` or a variable.
fn repeat_node() -> GrammarNode {
    let breadth = || {
        vec![
            GrammarNode::keyword("auto"),
            GrammarNode::length(),
            GrammarNode::expression("min"),
            GrammarNode::expression("max"),
            GrammarNode::Variable,
        ]
    };

    GrammarNode::function(
        "repeat",
        [
            GrammarNode::Number,
            GrammarNode::one_of([
                GrammarNode::Function(FunctionGrammar::new("minmax").with_arguments(breadth())),
                GrammarNode::function("fit-content", breadth()),
                GrammarNode::Variable,
            ]),
        ],
    )
}

#[test]
fn test_extractors() {
    assert_eq!(extract_number("10px"), "10");
    assert_eq!(extract_number("--10px"), "");
    assert_eq!(extract_number("10.10.10px"), "10.10");
    assert_eq!(extract_function("repeat(1,minmax(min(var(--x),0px),0px))"), "repeat");
    assert_eq!(extract_function("name(valid)extra"), "");
    assert_eq!(extract_separator("\"a b\",c"), Some(','));
}

#[test]
fn test_repeat_accepts_nested_tracks() {
    let node = repeat_node();

    assert!(is_option_valid("repeat(1,minmax(0px,0px))", &node));
    assert!(is_option_valid("repeat(3, fit-content(20%))", &node));
    assert!(is_option_valid("repeat(1,minmax(min(var(--x),0px),0px))", &node));
    assert!(is_option_valid("repeat(2,minmax(auto,1fr))", &node));
}

#[test]
fn test_repeat_rejects_unknown_function() {
    let node = repeat_node();

    assert!(!is_option_valid("repeat(1,unknown(0px))", &node));
    assert!(!is_option_valid("repeat(1,minmax(0px,0px)", &node));
    assert!(!is_option_valid("repeat(1,minmax(wide,0px))", &node));
    assert!(!is_option_valid("rpt(1,minmax(0px,0px))", &node));
}

#[test]
fn test_repeat_accepts_variable_argument() {
    assert!(is_option_valid("repeat(1,var(--placeholder))", &repeat_node()));
}

#[test]
fn test_variable_fallback() {
    assert!(!is_option_valid("var(--name, )", &GrammarNode::Variable));
    assert!(is_option_valid("var(--name,16px)", &GrammarNode::Variable));
    assert!(is_option_valid("var(--name)", &GrammarNode::Variable));
    assert!(!is_option_valid("var( --name)", &GrammarNode::Variable));
    assert!(!is_option_valid("var(--1st)", &GrammarNode::Variable));
}

#[test]
fn test_expression_checks_shape_only() {
    let calc = GrammarNode::expression("calc");

    assert!(is_option_valid("calc(100% - 2rem)", &calc));
    assert!(is_option_valid("calc(anything at all)", &calc));
    assert!(!is_option_valid("calc(1px", &calc));
    assert!(!is_option_valid("min(1px,2px)", &calc));
}

#[test]
fn test_length_strategy_priority() {
    let options = [
        GrammarNode::keyword("auto"),
        GrammarNode::pattern(PatternGrammar::up_to(PrimitiveTag::Length, 2)),
        GrammarNode::expression("calc"),
    ];

    assert_eq!(classify_length("10px", &options), Some(LengthStrategy::Scalable));
    assert_eq!(classify_length("0", &options), Some(LengthStrategy::Number));
    assert_eq!(classify_length("auto", &options), Some(LengthStrategy::Keyword));
    assert_eq!(classify_length("calc(1px + 2px)", &options), Some(LengthStrategy::Function));
    assert_eq!(classify_length("wide", &options), None);
}

#[test]
fn test_pattern_alternatives_and_arity() {
    let pattern = PatternGrammar::parse("length | length length / length").expect("valid syntax");
    let node = GrammarNode::pattern(pattern);

    assert!(is_option_valid("10px", &node));
    assert!(!is_option_valid("1px 2px 3px 4px", &node));
    assert!(!is_option_valid("", &node));
}

#[test]
fn test_colors() {
    let color = GrammarNode::Color;

    for value in ["#fff", "#1A2b3C", "red", "RebeccaPurple", "transparent", "rgb(0,128,255)", "rgba(0,0,0,.5)", "rgb(0 128 255 / 50%)"] {
        assert!(is_option_valid(value, &color), "{} should be a color", value);
    }
    for value in ["#ffff", "#ggg", "rgb(0,0)", "hsl(0,0%,0%)", "reddish"] {
        assert!(!is_option_valid(value, &color), "{} should not be a color", value);
    }
}

#[test]
fn test_urls() {
    let url = GrammarNode::Url;

    assert!(is_option_valid("https://example.com/a.png", &url));
    assert!(is_option_valid("url('https://example.com/a.png')", &url));
    assert!(!is_option_valid("/a.png", &url));
    assert!(!is_option_valid("url(https://example.com/a b.png)", &url));
}
