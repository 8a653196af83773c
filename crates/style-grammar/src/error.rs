//! Error types for the grammar engine.

/// Result type alias for grammar loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a grammar registry.
///
/// These always point at a bug in the grammar data, never at user input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed JSON grammar definitions.
    #[error("Invalid JSON grammar definitions: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML grammar definitions.
    #[error("Invalid TOML grammar definitions: {0}")]
    Toml(#[from] toml::de::Error),

    /// An option is missing a sub-field its kind requires.
    #[error("Grammar option '{kind}' is missing required field '{field}'")]
    MissingField {
        kind: String,
        field: &'static str,
    },

    /// An option declares a kind the engine does not know.
    #[error("Unknown grammar option kind '{kind}'")]
    UnknownKind { kind: String },

    /// A pattern names a primitive that does not exist.
    #[error("Unknown primitive '{tag}' in pattern '{syntax}'")]
    UnknownPrimitive { syntax: String, tag: String },

    /// A pattern contains an empty alternative.
    #[error("Empty alternative in pattern '{syntax}'")]
    EmptyAlternative { syntax: String },

    /// A function separator is not exactly one character.
    #[error("Argument separator must be a single character, got '{value}'")]
    InvalidSeparator { value: String },

    /// The same property key was defined twice.
    #[error("Property '{key}' is defined more than once")]
    DuplicateProperty { key: String },

    /// A property was defined without any options.
    #[error("Property '{key}' has no grammar options")]
    EmptyOptions { key: String },
}

impl Error {
    /// Create a missing-field error.
    pub fn missing_field(kind: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            kind: kind.into(),
            field,
        }
    }

    /// Create an unknown-primitive error.
    pub fn unknown_primitive(syntax: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::UnknownPrimitive {
            syntax: syntax.into(),
            tag: tag.into(),
        }
    }
}

/// Why a value was refused by [`Validator::validate`](crate::validate::Validator::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The property has no grammar in the registry.
    #[error("No grammar registered for property '{property}'")]
    UnknownProperty { property: String },

    /// The value matched none of the property's options.
    #[error("Invalid value for property '{property}': '{value}'")]
    Mismatch { property: String, value: String },
}

impl Rejection {
    /// The property the rejection refers to.
    pub fn property(&self) -> &str {
        match self {
            Rejection::UnknownProperty { property } | Rejection::Mismatch { property, .. } => {
                property
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = Error::missing_field("function", "name");
        assert_eq!(
            err.to_string(),
            "Grammar option 'function' is missing required field 'name'"
        );

        let err = Error::unknown_primitive("length | size", "size");
        assert_eq!(err.to_string(), "Unknown primitive 'size' in pattern 'length | size'");
    }

    #[test]
    fn rejection_property() {
        let rejection = Rejection::Mismatch {
            property: "width".into(),
            value: "10".into(),
        };
        assert_eq!(rejection.property(), "width");
    }
}
