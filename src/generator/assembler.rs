//! Header assembly and the final file write.
//!
//! Output order is fixed: preamble, struct macros in ascending arity
//! order, the shared helper block, the public dispatch macro, and the
//! selection macro last. Identical counts yield byte-identical text; the
//! only inputs are the count and the two static blocks below.

use std::path::Path;

use crate::errors::{io_error, ChibaGenError, ErrorKind, ErrorReporting, InputContext};
use crate::generator::{body, dispatch, MAX_FIELD_COUNT, MIN_FIELD_COUNT};

/// Include-guard equivalent plus the declarations every generated macro
/// leans on (basic types, countof, visibility attributes).
const PREAMBLE: &str = "#pragma once
#include \"chiba_utils_basic_types.h\"
#include \"chiba_utils_math.h\"
#include \"chiba_utils_visibility.h\"

";

/// The arity-independent helper macros: field-expansion primitives, the
/// metadata-record macro, and the constructor pair. Emitted once, after
/// all struct macros.
const HELPER_MACROS: &str = r#"// Helper macros
#define DECLARE_CHIBA_STRUCT_FORWARD(struct_name)                              \
  struct CHIBA_##struct_name##_struct;

#define EXPAND_FIELD(field_name, field_type) field_type field_name;
#define EXPAND_FIELD_METADATA_WITH_OFFSET(struct_name, field)                                 \
{.offset = offsetof(struct_name, EXPAND_FIELD_EXTRACT_FIELD_NAME field), EXPAND_FIELD_METADATA field
#define EXPAND_FIELD_EXTRACT_FIELD_NAME(field_name, field_type) field_name
#define EXPAND_FIELD_METADATA(field_name, field_type)                          \
 .name = #field_name, .type = #field_type, .size = sizeof(field_type)},

#define DECLARE_CHIBA_METADATA(struct_name)                                    \
  const C8NS(ReflMetaInfo) CHIBA_##struct_name##_METAINFO = {                      \
      .fields = CHIBA_##struct_name##_FIELD_METAINFO,                          \
      .field_count = countof(CHIBA_##struct_name##_FIELD_METAINFO),            \
  };

#define DECLARE_CHIBA_CONSTRUCTORS(struct_name)                                \
  UTILS CHIBA_##struct_name _MK_CHIBA_##struct_name(CHIBA_##struct_name val) {  \
    val.metainfo = &CHIBA_##struct_name##_METAINFO;                            \
    return val;                                                                \
  }                                                                            \
  UTILS CHIBA_##struct_name *_NEW_CHIBA_##struct_name(CHIBA_##struct_name val,  \
                                                     void *(*alloc_f)(u64)) {  \
    CHIBA_##struct_name new_val = _MK_CHIBA_##struct_name(val);                 \
    CHIBA_##struct_name *p =                                                   \
        (CHIBA_##struct_name *)alloc_f(sizeof(CHIBA_##struct_name));           \
    *p = new_val;                                                              \
    return p;                                                                  \
  }

"#;

/// Validates the requested count against the supported range.
///
/// The raw value is kept as `i64` until here so that out-of-range input
/// (0, 257, negatives) reaches the diagnostic intact.
fn check_range(value: i64, ctx: &InputContext) -> Result<usize, ChibaGenError> {
    if !(MIN_FIELD_COUNT..=MAX_FIELD_COUNT).contains(&value) {
        return Err(ctx.count_out_of_range(value, ctx.source.full_span()));
    }
    Ok(value as usize)
}

/// Assembles the complete header text for counts in
/// [`MIN_FIELD_COUNT`]..=[`MAX_FIELD_COUNT`].
///
/// Pure in `max_count`: two calls with the same count return byte-equal
/// strings.
pub fn assemble(max_count: i64, ctx: &InputContext) -> Result<String, ChibaGenError> {
    let max_count = check_range(max_count, ctx)?;

    let mut out = String::with_capacity(PREAMBLE.len() + HELPER_MACROS.len() + max_count * 1024);
    out.push_str(PREAMBLE);

    for arity in 1..=max_count {
        out.push_str(&body::struct_macro(arity));
        out.push_str("\n\n");
    }

    out.push_str(HELPER_MACROS);
    out.push_str(&dispatch::public_macro(max_count));
    out.push('\n');
    out.push_str(&dispatch::selection_macro(max_count));
    Ok(out)
}

/// Assembles the header and writes it to `path` in one call.
///
/// The text is built fully in memory first, so a failed write never
/// leaves a half-generated header behind from this process. The file
/// handle lives only for the duration of the write.
pub fn write_header(max_count: i64, ctx: &InputContext, path: &Path) -> Result<(), ChibaGenError> {
    let text = assemble(max_count, ctx)?;
    fs_err::write(path, text).map_err(|source| {
        io_error(ErrorKind::Io {
            path: path.to_path_buf(),
            source,
        })
    })
}
