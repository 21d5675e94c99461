//! Argument-count dispatch emission.
//!
//! Two macros are generated once per header, independent of how many
//! struct macros precede them:
//!
//! - `MACRO_SELECT(_1, ..., _max, NAME, ...)` expands to `NAME`. Its
//!   fixed-parameter count MUST equal the maximum arity: the public macro
//!   pads the caller's arguments with the descending name list, so the
//!   name landing in the `NAME` slot is exactly the one whose arity
//!   matches the real argument count. A mismatch selects the wrong macro
//!   silently.
//! - `DECLARE_CHIBA_STRUCT(struct_name, ...)` forwards `__VA_ARGS__` into
//!   `MACRO_SELECT` with that padding and applies the selected macro.

use crate::generator::struct_macro_name;

/// Arity-macro names in strictly descending order,
/// `DECLARE_CHIBA_STRUCT_max .. DECLARE_CHIBA_STRUCT_1`. The descending
/// order is what makes fixed-position selection count arguments.
pub fn descending_macro_names(max_count: usize) -> Vec<String> {
    (1..=max_count).rev().map(struct_macro_name).collect()
}

/// Emits the `MACRO_SELECT` definition with exactly `max_count` fixed
/// positional placeholders.
pub fn selection_macro(max_count: usize) -> String {
    let placeholders = (1..=max_count)
        .map(|i| format!("_{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("#define MACRO_SELECT({placeholders}, NAME, ...) NAME\n")
}

/// Emits the public `DECLARE_CHIBA_STRUCT` entry point.
pub fn public_macro(max_count: usize) -> String {
    let names = descending_macro_names(max_count).join(", ");
    format!(
        "// Main macro - selects the right version by argument count
#define DECLARE_CHIBA_STRUCT(struct_name, ...)                                 \\
  MACRO_SELECT(__VA_ARGS__, {names})(struct_name, __VA_ARGS__)
"
    )
}
