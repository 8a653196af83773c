//! Property grammar registries.

mod builtin;
mod loader;
mod store;

pub use loader::{RawDefinition, RawOption, load_grammar_registry};
pub use store::{GrammarRegistry, RegistryBuilder};
