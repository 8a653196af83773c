//! Lexical extractors for raw style values.

mod primitives;
mod scan;

pub use primitives::{
    extract_function, extract_length, extract_number, extract_separator, extract_value,
    split_dimension,
};
pub use scan::{SEPARATORS, parens_balanced};

pub(crate) use scan::split_top_level;
