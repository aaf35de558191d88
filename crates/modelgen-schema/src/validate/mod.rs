//! Specification validation helpers.
//!
//! These only check what the emitters need to produce parseable source:
//! names become Rust identifiers and types parse as Rust types. Semantic
//! checks on user names and types are out of scope.

use crate::MAX_NAME_LEN;

/// Ensure a name is usable as a Rust identifier (non-empty, not a keyword).
pub(crate) fn validate_ident(ident: &str) -> Result<(), String> {
    if ident.is_empty() {
        return Err("ident is empty".to_string());
    }
    if ident.len() > MAX_NAME_LEN {
        return Err(format!("ident '{ident}' exceeds max length {MAX_NAME_LEN}"));
    }
    if !ident.is_ascii() {
        return Err(format!("ident '{ident}' must be ASCII"));
    }

    syn::parse_str::<syn::Ident>(ident)
        .map(|_| ())
        .map_err(|_| format!("'{ident}' is not a valid identifier"))
}

/// Ensure a type reference parses as a Rust type.
pub(crate) fn validate_type(ty: &str) -> Result<(), String> {
    if ty.trim().is_empty() {
        return Err("type is empty".to_string());
    }

    syn::parse_str::<syn::Type>(ty)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Ensure a module path (`crate::widgets`) parses.
pub(crate) fn validate_path(path: &str) -> Result<(), String> {
    syn::parse_str::<syn::Path>(path)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
