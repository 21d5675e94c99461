//! Placeholder field-slot naming.
//!
//! Every fragment of an arity-N struct macro (parameter list, field
//! expansions, metadata entries) must reference the same N slots in the
//! same left-to-right order. This module is the single source of those
//! names: `field1`, `field2`, ... `fieldN`.

/// Prefix shared by all positional field slots.
pub const FIELD_PREFIX: &str = "field";

/// Ordered placeholder names `field1..fieldN` for a given arity.
///
/// Callers are bounded by the assembler's range check; arity is always
/// at least 1 here.
pub fn field_slots(arity: usize) -> Vec<String> {
    debug_assert!(arity >= 1, "field slots are undefined for arity 0");
    (1..=arity).map(|i| format!("{FIELD_PREFIX}{i}")).collect()
}

/// Comma-joined slot list, as it appears in a macro parameter list:
/// `field1, field2, field3`.
pub fn parameter_list(arity: usize) -> String {
    field_slots(arity).join(", ")
}
