//! Declarative value grammars.

mod node;
mod pattern;

pub use node::{ArgumentOrder, FunctionGrammar, GrammarNode};
pub use pattern::{PatternGrammar, PrimitiveTag, Sequence};

pub(crate) use node::{function_options, keyword_literals};
