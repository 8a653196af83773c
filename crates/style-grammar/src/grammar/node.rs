//! The recursive grammar tree.

use std::fmt;

use super::{PatternGrammar, PrimitiveTag};

/// One rule of a value grammar.
///
/// Grammars nest through [`GrammarNode::Function`] arguments and
/// [`GrammarNode::OneOf`] groups, so a single property can describe values
/// like `repeat(2,minmax(min(0px,var(--gap)),1fr))`.
///
/// # Example
///
/// ```
/// use style_grammar::grammar::GrammarNode;
///
/// let minmax = GrammarNode::function("minmax", [GrammarNode::length(), GrammarNode::Variable]);
/// let repeat = GrammarNode::function("repeat", [GrammarNode::Number, minmax]);
///
/// assert_eq!(repeat.to_string(), "repeat(number, minmax(length, var()))");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum GrammarNode {
    /// An exact literal.
    Keyword {
        /// Display label.
        name: String,
        /// The literal the value must equal.
        value: String,
    },
    /// A plain decimal number without unit.
    Number,
    /// A hex, `rgb()`/`rgba()` or named color.
    Color,
    /// An absolute URL, optionally quoted or `url()`-wrapped.
    Url,
    /// A custom property reference `var(--name[, fallback])`.
    Variable,
    /// A free-form call such as `calc(...)`, checked for outer shape only.
    Expression {
        /// The wrapper function name.
        name: String,
    },
    /// A named call with typed arguments.
    Function(FunctionGrammar),
    /// Alternatives of primitive sequences.
    Pattern(PatternGrammar),
    /// Any one of several grammars.
    OneOf(Vec<GrammarNode>),
}

impl GrammarNode {
    /// A keyword whose label is its literal.
    pub fn keyword(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::Keyword {
            name: value.clone(),
            value,
        }
    }

    /// Several keywords at once.
    pub fn keywords<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<Self> {
        values.into_iter().map(Self::keyword).collect()
    }

    /// A free-form expression wrapped in `name(...)`.
    pub fn expression(name: impl Into<String>) -> Self {
        Self::Expression { name: name.into() }
    }

    /// A comma-separated function accepting arguments in any order.
    pub fn function(
        name: impl Into<String>,
        arguments: impl IntoIterator<Item = GrammarNode>,
    ) -> Self {
        Self::Function(FunctionGrammar::new(name).with_arguments(arguments))
    }

    /// A single-length pattern.
    pub fn length() -> Self {
        Self::Pattern(PatternGrammar::up_to(PrimitiveTag::Length, 1))
    }

    /// A pattern node.
    pub fn pattern(pattern: PatternGrammar) -> Self {
        Self::Pattern(pattern)
    }

    /// An alternation node.
    pub fn one_of(options: impl IntoIterator<Item = GrammarNode>) -> Self {
        Self::OneOf(options.into_iter().collect())
    }

    /// The kind of this node, as named in grammar definitions.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Keyword { .. } => "keyword",
            Self::Number => "number",
            Self::Color => "color",
            Self::Url => "url",
            Self::Variable => "variable",
            Self::Expression { .. } => "expression",
            Self::Function(_) => "function",
            Self::Pattern(_) => "pattern",
            Self::OneOf(_) => "one-of",
        }
    }

    /// Whether values of this node look like `name(...)`.
    pub fn is_function_shaped(&self) -> bool {
        matches!(
            self,
            Self::Function(_) | Self::Expression { .. } | Self::Variable
        )
    }
}

impl fmt::Display for GrammarNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword { value, .. } => f.write_str(value),
            Self::Number | Self::Color | Self::Url => f.write_str(self.kind()),
            Self::Variable => f.write_str("var()"),
            Self::Expression { name } => write!(f, "{}()", name),
            Self::Function(function) => write!(f, "{}", function),
            Self::Pattern(pattern) => f.write_str(pattern.syntax()),
            Self::OneOf(options) => write_joined(f, options, " || "),
        }
    }
}

/// How a function's arguments are matched against its declared grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgumentOrder {
    /// Every argument must satisfy some declared grammar.
    #[default]
    Any,
    /// Argument `i` must satisfy declared grammar `i`, and the counts match.
    Positional,
}

/// A named call whose arguments must satisfy declared grammars.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionGrammar {
    /// The function name.
    pub name: String,
    /// The character separating arguments.
    pub separator: char,
    /// Grammars for the arguments.
    pub arguments: Vec<GrammarNode>,
    /// How arguments line up with `arguments`.
    pub order: ArgumentOrder,
}

impl FunctionGrammar {
    /// Create a comma-separated function grammar with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            separator: ',',
            arguments: Vec::new(),
            order: ArgumentOrder::Any,
        }
    }

    /// Set the argument separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the argument grammars.
    pub fn with_arguments(mut self, arguments: impl IntoIterator<Item = GrammarNode>) -> Self {
        self.arguments = arguments.into_iter().collect();
        self
    }

    /// Match arguments positionally.
    pub fn positional(mut self) -> Self {
        self.order = ArgumentOrder::Positional;
        self
    }
}

impl From<FunctionGrammar> for GrammarNode {
    fn from(function: FunctionGrammar) -> Self {
        GrammarNode::Function(function)
    }
}

impl fmt::Display for FunctionGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        let separator = match self.separator {
            ' ' => " ".to_string(),
            c => format!("{} ", c),
        };
        write_joined(f, &self.arguments, &separator)?;
        f.write_str(")")
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, nodes: &[GrammarNode], separator: &str) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", node)?;
    }
    Ok(())
}

/// Keyword literals declared among `options`, looking through `OneOf` groups.
pub(crate) fn keyword_literals(options: &[GrammarNode]) -> impl Iterator<Item = &str> {
    let mut literals = Vec::new();
    collect_keywords(options, &mut literals);
    literals.into_iter()
}

fn collect_keywords<'a>(options: &'a [GrammarNode], out: &mut Vec<&'a str>) {
    for option in options {
        match option {
            GrammarNode::Keyword { value, .. } => out.push(value),
            GrammarNode::OneOf(nested) => collect_keywords(nested, out),
            _ => {}
        }
    }
}

/// Function-shaped options among `options`, looking through `OneOf` groups.
pub(crate) fn function_options(options: &[GrammarNode]) -> Vec<&GrammarNode> {
    let mut found = Vec::new();
    collect_functions(options, &mut found);
    found
}

fn collect_functions<'a>(options: &'a [GrammarNode], out: &mut Vec<&'a GrammarNode>) {
    for option in options {
        match option {
            GrammarNode::OneOf(nested) => collect_functions(nested, out),
            node if node.is_function_shaped() => out.push(node),
            _ => {}
        }
    }
}
