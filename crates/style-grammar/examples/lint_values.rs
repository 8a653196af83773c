//! Style value linting example.
//!
//! Validates a handful of declarations against the built-in grammars and
//! prints a report collected through a diagnostic sink.
//!
//! Run with: cargo run -p style-grammar --example lint_values

use style_grammar::prelude::*;

const DECLARATIONS: &[(&str, &str)] = &[
    ("margin", "0 auto"),
    ("padding", "auto"),
    ("grid-template-columns", "repeat(auto-fill, minmax(120px, 1fr))"),
    ("grid-template-columns", "repeat(2, unknown(0px))"),
    ("border", "1px solid rgba(0,0,0,.5)"),
    ("color", "var(--accent, )"),
    ("colour", "red"),
];

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Style value lint example");
    println!("========================");
    println!();

    let registry = GrammarRegistry::builtin();
    let sink = CollectingSink::new();
    let validator = Validator::new(registry).with_sink(&sink);

    for (property, value) in DECLARATIONS {
        let verdict = match validator.validate(property, value) {
            Ok(()) => "ok".to_string(),
            Err(rejection) => rejection.to_string(),
        };
        println!("{:<24} {:<42} {}", property, value, verdict);
    }

    println!();
    let diagnostics = sink.take();
    let configuration = diagnostics
        .iter()
        .filter(|d| d.kind.is_configuration())
        .count();
    println!(
        "{} diagnostics ({} configuration, {} input)",
        diagnostics.len(),
        configuration,
        diagnostics.len() - configuration
    );

    // Edit the margin shorthand in place
    let margin = update_multi_value("0 auto", "1rem", 0, None);
    println!("margin after edit: {}", margin);
    println!("margin after delete: {}", delete_multi_value(&margin, 1, None));
}
