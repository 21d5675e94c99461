//! Per-arity struct macro emission.
//!
//! For arity N this produces one `DECLARE_CHIBA_STRUCT_N` definition whose
//! body stays internally consistent: the parameter list, the
//! `EXPAND_FIELD` run inside the struct, and the metadata-table entries
//! all reference `field1..fieldN` in the same order. The caller supplies
//! `(name, type)` pairs for each slot at use-time; this module only emits
//! the shape.

use crate::fields::{field_slots, parameter_list};
use crate::generator::struct_macro_name;

/// Metadata entries per continuation line in the field-metadata table.
/// Purely cosmetic, but reproduced exactly so regenerated headers stay
/// byte-identical to previously generated ones.
const ENTRIES_PER_LINE: usize = 3;

/// Emits the complete `DECLARE_CHIBA_STRUCT_{arity}` macro definition,
/// terminated by a newline.
pub fn struct_macro(arity: usize) -> String {
    let name = struct_macro_name(arity);
    let params = parameter_list(arity);
    let fields = expand_fields(arity);
    let metadata = metadata_entries(arity);

    format!(
        "#define {name}(struct_name, {params})  \\
  DECLARE_CHIBA_STRUCT_FORWARD(struct_name);                                   \\
  typedef struct __attribute__((aligned(8))) CHIBA_##struct_name##_struct {{                                \\
    const C8NS(ReflMetaInfo) *metainfo;                                            \\
    {fields}                \\
  }} CHIBA_##struct_name;                                                       \\
  const C8NS(ReflFieldMetaInfo) CHIBA_##struct_name##_FIELD_METAINFO[] = {{        \\
      {metadata}}};              \\
  DECLARE_CHIBA_METADATA(struct_name);                                         \\
  PRIVATE VHashTable *CHIBA_##struct_name##_dyn_vtable; \\
  BEFORE_START void init_CHIBA_##struct_name##_refl(void) {{ \\
  CHIBA_##struct_name##_dyn_vtable = vhashtable_create(); \\
  }} \\
  DECLARE_CHIBA_CONSTRUCTORS(struct_name)
"
    )
}

/// The struct-body field run: `EXPAND_FIELD field1 EXPAND_FIELD field2 ...`.
/// Each `EXPAND_FIELD` consumes one `(name, type)` pair at use-time.
pub fn expand_fields(arity: usize) -> String {
    field_slots(arity)
        .iter()
        .map(|slot| format!("EXPAND_FIELD {slot}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The metadata-table entries for `arity` slots, in declaration order,
/// wrapped onto a `\`-continued line every [`ENTRIES_PER_LINE`] entries.
pub fn metadata_entries(arity: usize) -> String {
    let parts: Vec<String> = field_slots(arity)
        .iter()
        .map(|slot| {
            format!("EXPAND_FIELD_METADATA_WITH_OFFSET(struct CHIBA_##struct_name##_struct, {slot})")
        })
        .collect();

    let mut lines = Vec::new();
    for (index, chunk) in parts.chunks(ENTRIES_PER_LINE).enumerate() {
        let mut line = chunk.join(" ");
        // Every line but the last needs a preprocessor continuation.
        if (index + 1) * ENTRIES_PER_LINE < parts.len() {
            line.push_str(" \\");
        }
        lines.push(line);
    }
    lines.join("\n      ")
}

#[cfg(test)]
mod body_tests {
    use super::*;

    #[test]
    fn arity_one_has_single_slot_everywhere() {
        let text = struct_macro(1);
        assert!(text.starts_with("#define DECLARE_CHIBA_STRUCT_1(struct_name, field1)"));
        assert_eq!(text.matches("EXPAND_FIELD field1").count(), 1);
        assert_eq!(
            text.matches("EXPAND_FIELD_METADATA_WITH_OFFSET").count(),
            1
        );
    }

    #[test]
    fn fragments_agree_on_slot_count_and_order() {
        for arity in [1, 2, 3, 4, 7, 32] {
            let text = struct_macro(arity);
            assert_eq!(
                text.matches("EXPAND_FIELD field").count(),
                arity,
                "field run for arity {arity}"
            );
            assert_eq!(
                text.matches("EXPAND_FIELD_METADATA_WITH_OFFSET").count(),
                arity,
                "metadata table for arity {arity}"
            );
            // Slots appear in ascending order within the metadata table.
            let meta = metadata_entries(arity);
            let mut last = 0;
            for slot in 1..=arity {
                let pos = meta
                    .find(&format!(", field{slot})"))
                    .unwrap_or_else(|| panic!("slot {slot} missing for arity {arity}"));
                assert!(pos >= last, "slot {slot} out of order for arity {arity}");
                last = pos;
            }
        }
    }

    #[test]
    fn metadata_wraps_every_three_entries() {
        assert_eq!(metadata_entries(3).lines().count(), 1);
        let four = metadata_entries(4);
        assert_eq!(four.lines().count(), 2);
        // Continuation backslash on every line but the last.
        let lines: Vec<&str> = four.lines().collect();
        assert!(lines[0].ends_with(" \\"));
        assert!(!lines[1].ends_with("\\"));
        assert_eq!(metadata_entries(9).lines().count(), 3);
        assert_eq!(metadata_entries(10).lines().count(), 4);
    }

    #[test]
    fn continuation_lines_are_indented_six_spaces() {
        let seven = metadata_entries(7);
        for line in seven.lines().skip(1) {
            assert!(line.starts_with("      EXPAND_FIELD_METADATA_WITH_OFFSET"));
            assert!(!line.starts_with("       "));
        }
    }

    #[test]
    fn every_body_line_except_last_continues() {
        // The macro must survive preprocessor line-splicing: every line of
        // the definition except the final one ends in a backslash.
        let text = struct_macro(5);
        let lines: Vec<&str> = text.trim_end().lines().collect();
        for line in &lines[..lines.len() - 1] {
            assert!(line.trim_end().ends_with('\\'), "unterminated line: {line}");
        }
        assert!(lines.last().unwrap().ends_with("DECLARE_CHIBA_CONSTRUCTORS(struct_name)"));
    }
}
