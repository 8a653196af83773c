//! Built-in grammars for common style properties.

use std::sync::OnceLock;

use super::GrammarRegistry;
use crate::grammar::{FunctionGrammar, GrammarNode, PatternGrammar, PrimitiveTag, Sequence};

static BUILTIN: OnceLock<GrammarRegistry> = OnceLock::new();

impl GrammarRegistry {
    /// The process-wide built-in registry.
    ///
    /// Built on first use and immutable afterwards.
    ///
    /// ```
    /// use style_grammar::prelude::*;
    ///
    /// let registry = GrammarRegistry::builtin();
    /// assert!(is_value_valid("grid-template-columns", "repeat(2,minmax(0px,1fr))", registry));
    /// assert!(is_value_valid("margin", "0 auto", registry));
    /// ```
    pub fn builtin() -> &'static GrammarRegistry {
        BUILTIN.get_or_init(|| {
            let registry = create_builtin();
            tracing::debug!("Built-in grammar registry ready ({} properties)", registry.len());
            registry
        })
    }
}

const GLOBAL_KEYWORDS: [&str; 4] = ["inherit", "initial", "unset", "revert"];

fn lengths(max: usize) -> GrammarNode {
    GrammarNode::pattern(PatternGrammar::up_to(PrimitiveTag::Length, max))
}

fn math_functions() -> Vec<GrammarNode> {
    ["calc", "min", "max", "clamp"]
        .into_iter()
        .map(GrammarNode::expression)
        .collect()
}

/// Options shared by every sizing property.
fn size_options() -> Vec<GrammarNode> {
    let mut options = GrammarNode::keywords(["auto", "min-content", "max-content", "fit-content"]);
    options.push(lengths(1));
    options.push(GrammarNode::function("fit-content", [GrammarNode::length()]));
    options.extend(math_functions());
    options.push(GrammarNode::Variable);
    options
}

/// A grid track: `1fr`, `auto`, `minmax(...)`, `fit-content(...)`, `var(...)`.
fn track_size() -> Vec<GrammarNode> {
    let breadth = || {
        let mut breadth = GrammarNode::keywords(["auto", "min-content", "max-content"]);
        breadth.push(GrammarNode::length());
        breadth.extend(math_functions());
        breadth.push(GrammarNode::Variable);
        breadth
    };

    let mut track = breadth();
    track.push(GrammarNode::Function(
        FunctionGrammar::new("minmax").with_arguments(breadth()),
    ));
    track.push(GrammarNode::function("fit-content", [GrammarNode::length(), GrammarNode::Variable]));
    track
}

fn grid_template() -> Vec<GrammarNode> {
    let mut repeat_arguments = GrammarNode::keywords(["auto-fill", "auto-fit"]);
    repeat_arguments.push(GrammarNode::Number);
    repeat_arguments.extend(track_size());

    let mut options = GrammarNode::keywords(["none", "auto", "min-content", "max-content"]);
    options.push(lengths(12));
    options.push(GrammarNode::function("repeat", repeat_arguments));
    options.extend(track_size().into_iter().filter(GrammarNode::is_function_shaped));
    options
}

fn color_options() -> Vec<GrammarNode> {
    vec![GrammarNode::Color, GrammarNode::Variable]
}

fn transform_functions() -> Vec<GrammarNode> {
    let lengths_fn = |name: &str, count: usize| {
        GrammarNode::from(
            FunctionGrammar::new(name)
                .with_arguments(vec![GrammarNode::length(); count])
                .positional(),
        )
    };

    let mut options = GrammarNode::keywords(["none"]);
    options.push(GrammarNode::function("translate", [GrammarNode::length()]));
    options.push(lengths_fn("translateX", 1));
    options.push(lengths_fn("translateY", 1));
    options.push(GrammarNode::function("scale", [GrammarNode::Number]));
    options.push(GrammarNode::function("rotate", [GrammarNode::length()]));
    options.push(GrammarNode::function("skew", [GrammarNode::length()]));
    options.push(GrammarNode::function("matrix", [GrammarNode::Number]));
    options.push(GrammarNode::Variable);
    options
}

fn create_builtin() -> GrammarRegistry {
    let border_styles = GrammarNode::keywords([
        "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset",
        "outset",
    ]);
    let border_pattern = GrammarNode::pattern(PatternGrammar::from_alternatives([
        Sequence::new([PrimitiveTag::Length, PrimitiveTag::Keyword, PrimitiveTag::Color]),
        Sequence::new([PrimitiveTag::Length, PrimitiveTag::Keyword]),
        Sequence::new([PrimitiveTag::Keyword, PrimitiveTag::Color]),
        Sequence::new([PrimitiveTag::Length]),
        Sequence::new([PrimitiveTag::Keyword]),
    ]));

    GrammarRegistry::builder()
        // === Box Model ===
        .property("margin", [lengths(4), GrammarNode::keyword("auto"), GrammarNode::Variable])
        .properties(
            ["margin-top", "margin-right", "margin-bottom", "margin-left"],
            &[lengths(1), GrammarNode::keyword("auto"), GrammarNode::Variable],
        )
        .property("padding", [lengths(4), GrammarNode::Variable])
        .properties(
            ["padding-top", "padding-right", "padding-bottom", "padding-left", "gap", "row-gap", "column-gap"],
            &[lengths(1), GrammarNode::Variable],
        )
        .property("border-width", [lengths(4), GrammarNode::Variable])
        .property("border-radius", [lengths(4), GrammarNode::Variable])
        .property("border-style", border_styles.clone())
        .property("border", border_styles.into_iter().chain([border_pattern, GrammarNode::Variable]))
        // === Size ===
        .properties(
            ["width", "height", "min-width", "min-height", "max-width", "max-height", "flex-basis"],
            &size_options(),
        )
        // === Grid ===
        .properties(["grid-template-columns", "grid-template-rows"], &grid_template())
        // === Color & Background ===
        .properties(["color", "background-color", "border-color", "outline-color"], &color_options())
        .property(
            "background-image",
            [GrammarNode::keyword("none"), GrammarNode::Url, GrammarNode::Variable],
        )
        .property(
            "background-repeat",
            GrammarNode::keywords(["repeat", "repeat-x", "repeat-y", "no-repeat", "space", "round"]),
        )
        // === Typography ===
        .property(
            "font-size",
            GrammarNode::keywords(["small", "medium", "large", "x-large", "smaller", "larger"])
                .into_iter()
                .chain([lengths(1), GrammarNode::Variable])
                .chain(math_functions()),
        )
        .property(
            "font-weight",
            GrammarNode::keywords(["normal", "bold", "lighter", "bolder"])
                .into_iter()
                .chain([GrammarNode::Number, GrammarNode::Variable]),
        )
        .property(
            "line-height",
            [GrammarNode::keyword("normal"), GrammarNode::Number, lengths(1), GrammarNode::Variable],
        )
        .property(
            "text-align",
            GrammarNode::keywords(["left", "right", "center", "justify", "start", "end"]),
        )
        // === Effects ===
        .property("opacity", [GrammarNode::Number, GrammarNode::Variable])
        .property("z-index", [GrammarNode::keyword("auto"), GrammarNode::Number, GrammarNode::Variable])
        .property("transform", transform_functions())
        // === Flex ===
        .property(
            "flex",
            [
                GrammarNode::keyword("none"),
                GrammarNode::keyword("auto"),
                GrammarNode::pattern(PatternGrammar::from_alternatives([
                    Sequence::new([PrimitiveTag::Number]),
                    Sequence::new([PrimitiveTag::Number, PrimitiveTag::Number]),
                    Sequence::new([PrimitiveTag::Number, PrimitiveTag::Number, PrimitiveTag::Length]),
                ])),
                GrammarNode::Variable,
            ],
        )
        .property(
            "display",
            GrammarNode::keywords(["block", "inline", "inline-block", "flex", "grid", "none", "contents"]),
        )
        .extend_all(&GrammarNode::keywords(GLOBAL_KEYWORDS))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::is_value_valid;

    fn valid(property: &str, value: &str) -> bool {
        is_value_valid(property, value, GrammarRegistry::builtin())
    }

    #[test]
    fn builtin_is_shared() {
        assert!(std::ptr::eq(GrammarRegistry::builtin(), GrammarRegistry::builtin()));
        assert!(GrammarRegistry::builtin().contains("margin"));
    }

    #[test]
    fn global_keywords_everywhere() {
        let registry = GrammarRegistry::builtin();
        for key in registry.keys() {
            assert!(valid(key, "inherit"), "{} should accept inherit", key);
        }
    }

    #[test]
    fn box_model() {
        assert!(valid("margin", "0 auto"));
        assert!(valid("margin", "1px 2px 3px 4px"));
        assert!(valid("padding", "var(--space) 8px"));
        assert!(!valid("padding", "auto"));
        assert!(!valid("margin", "1px 2px 3px 4px 5px"));
    }

    #[test]
    fn sizes() {
        assert!(valid("width", "100%"));
        assert!(valid("width", "calc(100% - 2rem)"));
        assert!(valid("max-width", "fit-content(20em)"));
        assert!(!valid("width", "fit-content(wide)"));
        assert!(!valid("width", "10px 20px"));
    }

    #[test]
    fn grid_templates() {
        assert!(valid("grid-template-columns", "repeat(2,minmax(0px,1fr))"));
        assert!(valid("grid-template-columns", "repeat(auto-fill, minmax(100px, 1fr))"));
        assert!(valid("grid-template-columns", "1fr 2fr minmax(0,1fr)"));
        assert!(valid("grid-template-columns", "repeat(1,minmax(min(0px,var(--x)),0px))"));
        assert!(!valid("grid-template-columns", "repeat(1,unknown(0px))"));
    }

    #[test]
    fn borders() {
        assert!(valid("border", "1px solid rgba(0,0,0,.5)"));
        assert!(valid("border", "none"));
        assert!(valid("border", "2px dashed"));
        assert!(!valid("border", "1px wavy red"));
    }

    #[test]
    fn colors_and_images() {
        assert!(valid("color", "#336699"));
        assert!(valid("background-color", "var(--surface)"));
        assert!(valid("background-image", "url(\"https://example.com/bg.png\")"));
        assert!(!valid("background-image", "url(/bg.png)"));
    }

    #[test]
    fn transforms() {
        assert!(valid("transform", "translate(10px,20px)"));
        assert!(valid("transform", "rotate(45deg)"));
        assert!(!valid("transform", "translateX(1px,2px)"));
    }
}
