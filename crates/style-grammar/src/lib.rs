//! Grammar-driven validation and editing of style property values.
//!
//! This crate checks raw property strings such as `1px solid red` or
//! `repeat(2, minmax(0px, 1fr))` against declarative grammars, featuring:
//!
//! - **Extractors**: Lexical helpers for numbers, lengths, function names and separators
//! - **List Editing**: Update and delete entries of multi-value lists
//! - **Grammars**: Keywords, primitives, functions and positional patterns
//! - **Validation**: Recursive matching with pluggable diagnostics
//! - **Registries**: Built-in grammars, or grammars loaded from JSON/TOML
//!
//! # Example
//!
//! ```
//! use style_grammar::prelude::*;
//!
//! let registry = GrammarRegistry::builder()
//!     .property("margin", [
//!         GrammarNode::pattern(PatternGrammar::up_to(PrimitiveTag::Length, 4)),
//!         GrammarNode::keyword("auto"),
//!     ])
//!     .build();
//!
//! assert!(is_value_valid("margin", "0 auto", &registry));
//! assert!(!is_value_valid("margin", "0 wide", &registry));
//!
//! // Edit one entry of a space-separated list
//! assert_eq!(update_multi_value("1px 2px 3px", "8px", 1, None), "1px 8px 3px");
//! ```

pub mod extract;
pub mod grammar;
pub mod list;
pub mod registry;
pub mod validate;

mod error;

pub use error::{Error, Rejection, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::extract::{
        extract_function, extract_length, extract_number, extract_separator, extract_value,
    };
    pub use crate::grammar::{
        ArgumentOrder, FunctionGrammar, GrammarNode, PatternGrammar, PrimitiveTag, Sequence,
    };
    pub use crate::list::{ListView, delete_multi_value, split_multi_value, update_multi_value};
    pub use crate::registry::{GrammarRegistry, RawDefinition, RawOption, RegistryBuilder};
    pub use crate::validate::{
        CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, NullSink, TracingSink,
        Validator, ValidatorConfig, is_option_valid, is_value_valid,
    };
    pub use crate::{Error, Rejection};
}
