//! Schema consistency checks, run once when a [`Schema`] is loaded.

pub mod document;
pub mod field;
pub mod naming;
pub mod options;

use crate::{error::ErrorTree, node::*};
use std::collections::BTreeMap;

/// Run every check in a fixed order and return the lookup index and shape.
pub(crate) fn validate_model(
    model: &RecordModel,
) -> Result<(BTreeMap<&'static str, usize>, Shape), ErrorTree> {
    // Phase 1: each descriptor on its own.
    let mut errs = ErrorTree::new();
    for f in model.fields {
        errs.merge_at(f.name, field::validate_field(f));
    }

    // Phase 2: model-wide invariants.
    naming::validate_model_name(model, &mut errs);
    let index = naming::index_fields(model, &mut errs);
    let shape = Shape::build(model.fields, &mut errs);
    document::validate_sort_key(model, &index, &mut errs);
    document::validate_indexes(model, &shape, &mut errs);

    errs.result()?;

    Ok((index, shape))
}
