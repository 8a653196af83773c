//! Multi-value list editing.

mod editor;

pub use editor::{
    DEFAULT_SEPARATOR, ListView, delete_multi_value, split_multi_value, update_multi_value,
};
