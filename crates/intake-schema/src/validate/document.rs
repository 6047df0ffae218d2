use crate::{
    err,
    error::ErrorTree,
    node::{RecordModel, Shape},
};
use std::collections::BTreeMap;

/// Sort key members must be declared single-valued fields.
pub(crate) fn validate_sort_key(
    model: &RecordModel,
    index: &BTreeMap<&'static str, usize>,
    errs: &mut ErrorTree,
) {
    for name in model.sort_key {
        match index.get(name) {
            None => err!(errs, "sort key references unknown field '{name}'"),
            Some(&i) if model.fields[i].is_multiple() => {
                err!(errs, "sort key field '{name}' is multi-valued");
            }
            Some(_) => {}
        }
    }
}

/// Index projections must name leaves of the document shape.
pub(crate) fn validate_indexes(model: &RecordModel, shape: &Shape, errs: &mut ErrorTree) {
    let mut names = BTreeMap::new();

    for index in model.indexes {
        if names.insert(index.name, ()).is_some() {
            err!(errs, "duplicate document index '{}'", index.name);
        }

        for projected in index.projection {
            let path: Vec<&str> = projected.split('.').collect();

            if !shape.get(&path).is_some_and(Shape::is_leaf) {
                errs.add_at(
                    index.name,
                    format!("projection '{projected}' is not a document leaf"),
                );
            }
        }
    }
}
