//! The macro-family generator.
//!
//! The generated header gives C code a `DECLARE_CHIBA_STRUCT(name, ...)`
//! entry point that works for any field count up to a configured maximum.
//! C's preprocessor has no variadic struct declaration, so the header
//! contains one fully-specialized `DECLARE_CHIBA_STRUCT_N` macro per arity
//! plus a fixed-position selection macro that picks the right one from the
//! number of arguments actually supplied.
//!
//! Submodules, leaves first:
//! - [`body`] emits the per-arity struct macro (declaration, metadata
//!   table, constructors - all referencing the same N field slots),
//! - [`dispatch`] emits the shared selection machinery,
//! - [`assembler`] orders everything into the final header text and owns
//!   the range check and the file write.
//!
//! Generation is a pure function of the maximum field count: same count,
//! byte-identical output.

pub mod assembler;
pub mod body;
pub mod dispatch;

pub use assembler::{assemble, write_header};

/// Smallest supported maximum field count.
pub const MIN_FIELD_COUNT: i64 = 1;

/// Largest supported maximum field count. Anything above this makes the
/// selection macro unwieldy and has no known consumer.
pub const MAX_FIELD_COUNT: i64 = 256;

/// Where the header lands unless the caller overrides it. Relative to the
/// working directory, matching the layout of the chiba-utils C tree.
pub const DEFAULT_OUTPUT_PATH: &str = "include/utils/chiba_utils_refl_impl.h";

/// Name of an arity-specialized struct macro: `DECLARE_CHIBA_STRUCT_7`.
pub fn struct_macro_name(arity: usize) -> String {
    format!("DECLARE_CHIBA_STRUCT_{arity}")
}
