//! Building a registry from plain configuration data.
//!
//! Definitions are loose data as they come out of configuration tables: every
//! field except `type` is optional. Conversion into [`GrammarNode`] checks
//! that each kind carries the fields it needs.
//!
//! # JSON
//!
//! ```
//! use style_grammar::registry::GrammarRegistry;
//!
//! let registry = GrammarRegistry::from_json(r#"[
//!     { "key": "grid-template-columns", "options": [
//!         { "type": "keyword", "value": "none" },
//!         { "type": "function", "name": "repeat", "arguments": [
//!             { "type": "number" },
//!             { "type": "pattern", "syntax": "length" }
//!         ] }
//!     ] }
//! ]"#).unwrap();
//!
//! assert!(registry.contains("grid-template-columns"));
//! ```
//!
//! # TOML
//!
//! ```
//! use style_grammar::registry::GrammarRegistry;
//!
//! let registry = GrammarRegistry::from_toml(r#"
//!     [[property]]
//!     key = "opacity"
//!     options = [{ type = "number" }, { type = "variable" }]
//! "#).unwrap();
//!
//! assert_eq!(registry.lookup("opacity").map(<[_]>::len), Some(2));
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use super::GrammarRegistry;
use crate::grammar::{ArgumentOrder, FunctionGrammar, GrammarNode, PatternGrammar};
use crate::{Error, Result};

/// One property's grammar definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDefinition {
    /// The property key, e.g. `margin`.
    pub key: String,
    /// The property's independent options.
    #[serde(default)]
    pub options: Vec<RawOption>,
}

/// One loosely typed grammar option.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawOption {
    /// The option kind: `keyword`, `number`, `color`, `url`, `variable`,
    /// `expression`, `function`, `pattern` or `one-of`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Keyword label, expression wrapper or function name.
    pub name: Option<String>,
    /// Keyword literal.
    pub value: Option<String>,
    /// Pattern syntax, e.g. `length | length length`.
    pub syntax: Option<String>,
    /// Function argument separator; defaults to `,`.
    pub separator: Option<String>,
    /// Match function arguments positionally.
    #[serde(default)]
    pub ordered: bool,
    /// Function argument grammars.
    #[serde(alias = "nestedOptions")]
    pub arguments: Option<Vec<RawOption>>,
    /// Alternatives of a `one-of` group.
    pub options: Option<Vec<RawOption>>,
}

impl RawOption {
    /// Convert into a typed grammar node.
    pub fn to_node(&self) -> Result<GrammarNode> {
        let kind = self.kind.as_str();
        let node = match kind {
            "keyword" => {
                let value = self
                    .value
                    .as_ref()
                    .or(self.name.as_ref())
                    .ok_or_else(|| Error::missing_field(kind, "value"))?;
                GrammarNode::Keyword {
                    name: self.name.clone().unwrap_or_else(|| value.clone()),
                    value: value.clone(),
                }
            }
            "number" => GrammarNode::Number,
            "color" => GrammarNode::Color,
            "url" => GrammarNode::Url,
            "variable" | "var" => GrammarNode::Variable,
            "expression" => GrammarNode::Expression {
                name: self.required_name()?,
            },
            "function" => {
                let arguments = self
                    .arguments
                    .as_deref()
                    .ok_or_else(|| Error::missing_field(kind, "arguments"))?;
                GrammarNode::Function(FunctionGrammar {
                    name: self.required_name()?,
                    separator: parse_separator(self.separator.as_deref())?,
                    arguments: convert_all(arguments)?,
                    order: if self.ordered {
                        ArgumentOrder::Positional
                    } else {
                        ArgumentOrder::Any
                    },
                })
            }
            "pattern" => {
                let syntax = self
                    .syntax
                    .as_deref()
                    .ok_or_else(|| Error::missing_field(kind, "syntax"))?;
                GrammarNode::Pattern(PatternGrammar::parse(syntax)?)
            }
            "one-of" | "oneOf" => {
                let options = self
                    .options
                    .as_deref()
                    .ok_or_else(|| Error::missing_field(kind, "options"))?;
                GrammarNode::OneOf(convert_all(options)?)
            }
            _ => {
                return Err(Error::UnknownKind {
                    kind: self.kind.clone(),
                });
            }
        };

        Ok(node)
    }

    fn required_name(&self) -> Result<String> {
        self.name
            .clone()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::missing_field(self.kind.as_str(), "name"))
    }
}

fn convert_all(options: &[RawOption]) -> Result<Vec<GrammarNode>> {
    options.iter().map(RawOption::to_node).collect()
}

fn parse_separator(raw: Option<&str>) -> Result<char> {
    let Some(raw) = raw else {
        return Ok(',');
    };

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidSeparator {
            value: raw.to_string(),
        }),
    }
}

/// Build a registry from plain definitions.
///
/// Fails on the first malformed option, duplicated key or property without
/// options; the error names the offending definition.
pub fn load_grammar_registry(
    definitions: impl IntoIterator<Item = RawDefinition>,
) -> Result<GrammarRegistry> {
    let mut properties = HashMap::new();

    for definition in definitions {
        if definition.options.is_empty() {
            return Err(Error::EmptyOptions {
                key: definition.key,
            });
        }

        let options = convert_all(&definition.options).inspect_err(|e| {
            tracing::warn!("Invalid grammar for property '{}': {}", definition.key, e);
        })?;

        if properties.contains_key(&definition.key) {
            return Err(Error::DuplicateProperty {
                key: definition.key,
            });
        }
        properties.insert(definition.key, options);
    }

    tracing::debug!("Loaded grammar for {} properties", properties.len());
    Ok(GrammarRegistry::from_map(properties))
}

#[derive(Deserialize)]
struct RawTable {
    #[serde(default, rename = "property")]
    properties: Vec<RawDefinition>,
}

impl GrammarRegistry {
    /// Build a registry from plain definitions.
    pub fn from_definitions(definitions: impl IntoIterator<Item = RawDefinition>) -> Result<Self> {
        load_grammar_registry(definitions)
    }

    /// Build a registry from a JSON array of definitions.
    pub fn from_json(json: &str) -> Result<Self> {
        let definitions: Vec<RawDefinition> = serde_json::from_str(json)?;
        load_grammar_registry(definitions)
    }

    /// Build a registry from TOML `[[property]]` tables.
    pub fn from_toml(text: &str) -> Result<Self> {
        let table: RawTable = toml::from_str(text)?;
        load_grammar_registry(table.properties)
    }
}
