//! Field naming engine.
//!
//! Every identifier a field needs is derived from the single raw name the
//! caller supplied. Nothing here is independently settable.

use convert_case::{Boundary, Case, Casing};

/// Serialized name forced onto the document identifier field.
pub const IDENTIFIER_SERIALIZED_NAME: &str = "_id";

/// Exported form forced onto the document identifier field.
pub const IDENTIFIER_DISPLAY_NAME: &str = "ID";

/// Unexported form forced onto the document identifier field.
pub const IDENTIFIER_INTERNAL_NAME: &str = "id";

///
/// FieldNames
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldNames {
    pub display: String,
    pub internal: String,
    pub serialized: String,
}

/// Derive `(display, internal, serialized)` for a raw field name.
#[must_use]
pub fn derive_names(raw: &str) -> FieldNames {
    if is_identifier(raw) {
        return FieldNames {
            display: IDENTIFIER_DISPLAY_NAME.to_string(),
            internal: IDENTIFIER_INTERNAL_NAME.to_string(),
            serialized: IDENTIFIER_SERIALIZED_NAME.to_string(),
        };
    }

    let internal = internal_name(raw);

    FieldNames {
        display: display_name(raw),
        serialized: internal.clone(),
        internal,
    }
}

// is_identifier
// exact spellings only, "Id" and "iD" are ordinary fields
#[must_use]
pub fn is_identifier(raw: &str) -> bool {
    raw == "ID" || raw == "id"
}

/// First character upper-cased, the rest untouched.
#[must_use]
pub fn display_name(raw: &str) -> String {
    map_first(raw, |c| c.to_uppercase().collect())
}

/// First character lower-cased, the rest untouched.
#[must_use]
pub fn internal_name(raw: &str) -> String {
    map_first(raw, |c| c.to_lowercase().collect())
}

/// Word boundaries `rust_name` keeps out of the snake_case split. Digits
/// stay attached to the word before them (`address2`, `sha256_hash`).
const DIGIT_BOUNDARIES: [Boundary; 3] =
    [Boundary::LowerDigit, Boundary::UpperDigit, Boundary::DigitLower];

/// snake_case form used for Rust fields, accessors and setter suffixes.
#[must_use]
pub fn rust_name(name: &str) -> String {
    name.remove_boundaries(&DIGIT_BOUNDARIES).to_case(Case::Snake)
}

/// Interface name for an entity, `assetMetadata` becomes `AssetMetadata`.
#[must_use]
pub fn type_name(name: &str) -> String {
    display_name(name)
}

fn map_first(raw: &str, f: impl FnOnce(char) -> String) -> String {
    let mut chars = raw.chars();

    match chars.next() {
        Some(first) => {
            let mut out = f(first);
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identifier_spellings_use_sentinel() {
        for raw in ["ID", "id"] {
            let names = derive_names(raw);
            assert_eq!(names.display, "ID");
            assert_eq!(names.internal, "id");
            assert_eq!(names.serialized, "_id");
        }
    }

    #[test]
    fn mixed_case_identifier_is_an_ordinary_field() {
        let names = derive_names("Id");
        assert_eq!(names.display, "Id");
        assert_eq!(names.internal, "id");
        assert_eq!(names.serialized, "id");

        let names = derive_names("iD");
        assert_eq!(names.display, "ID");
        assert_eq!(names.internal, "iD");
        assert_eq!(names.serialized, "iD");
    }

    #[test]
    fn only_the_first_character_changes() {
        let names = derive_names("transpiledSource");
        assert_eq!(names.display, "TranspiledSource");
        assert_eq!(names.internal, "transpiledSource");
        assert_eq!(names.serialized, "transpiledSource");

        let names = derive_names("CanEvaluate");
        assert_eq!(names.display, "CanEvaluate");
        assert_eq!(names.internal, "canEvaluate");
    }

    #[test]
    fn empty_name_derives_empty_names() {
        let names = derive_names("");
        assert!(names.display.is_empty());
        assert!(names.internal.is_empty());
    }

    #[test]
    fn rust_names_are_snake_case() {
        assert_eq!(rust_name("ID"), "id");
        assert_eq!(rust_name("transpiledSource"), "transpiled_source");
        assert_eq!(rust_name("label"), "label");
    }

    #[test]
    fn rust_names_keep_digits_attached() {
        assert_eq!(rust_name("address2"), "address2");
        assert_eq!(rust_name("sha256Hash"), "sha256_hash");
        assert_eq!(rust_name("vector5d"), "vector5d");
        assert_eq!(rust_name("HTTPServer"), "http_server");
        assert_eq!(rust_name("iD"), "i_d");
    }

    proptest! {
        #[test]
        fn display_and_internal_differ_only_in_first_char(raw in "[a-zA-Z][a-zA-Z0-9]{0,16}") {
            prop_assume!(!is_identifier(&raw));

            let names = derive_names(&raw);
            prop_assert_eq!(&names.display[1..], &raw[1..]);
            prop_assert_eq!(&names.internal[1..], &raw[1..]);
            prop_assert!(names.display[..1].eq_ignore_ascii_case(&names.internal[..1]));
        }

        #[test]
        fn serialized_equals_internal_for_ordinary_fields(raw in "[a-zA-Z][a-zA-Z0-9]{0,16}") {
            prop_assume!(!is_identifier(&raw));

            let names = derive_names(&raw);
            prop_assert_eq!(names.serialized, names.internal);
        }

        #[test]
        fn derivation_is_deterministic(raw in "[a-zA-Z][a-zA-Z0-9_]{0,16}") {
            prop_assert_eq!(derive_names(&raw), derive_names(&raw));
        }
    }
}
