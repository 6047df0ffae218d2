use crate::{MAX_FIELD_NAME_LEN, err, error::ErrorTree, node::RecordModel};
use std::collections::BTreeMap;

/// Ensure an identifier is lowercase snake_case ASCII within the length cap.
///
/// Identifiers become SQL column names and document keys, so nothing that
/// would need quoting is accepted. A leading underscore is reserved for wire
/// bookkeeping keys.
pub(crate) fn validate_ident(ident: &str) -> Result<(), String> {
    if ident.is_empty() {
        return Err("ident is empty".to_string());
    }
    if ident.len() > MAX_FIELD_NAME_LEN {
        return Err(format!(
            "ident '{ident}' exceeds max length {MAX_FIELD_NAME_LEN}"
        ));
    }
    if ident.starts_with('_') {
        return Err(format!("ident '{ident}' uses the reserved '_' prefix"));
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(format!("ident '{ident}' starts with a digit"));
    }
    if !ident
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(format!("ident '{ident}' must be lowercase snake_case"));
    }

    Ok(())
}

pub(crate) fn validate_model_name(model: &RecordModel, errs: &mut ErrorTree) {
    if let Err(msg) = validate_ident(model.name) {
        err!(errs, "record name: {msg}");
    }
    if model.fields.is_empty() {
        err!(errs, "record '{}' declares no fields", model.name);
    }
}

/// Build the name → position index, reporting duplicates.
pub(crate) fn index_fields(
    model: &RecordModel,
    errs: &mut ErrorTree,
) -> BTreeMap<&'static str, usize> {
    let mut index = BTreeMap::new();

    for (i, field) in model.fields.iter().enumerate() {
        if let Some(prev) = index.insert(field.name, i) {
            err!(
                errs,
                "duplicate field name '{}' at positions {prev} and {i}",
                field.name
            );
        }
    }

    index
}
