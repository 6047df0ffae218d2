use crate::prelude::*;

///
/// Shape
///
/// The fixed structure of a nested document, derived from every
/// descriptor's `path`. Leaves hold the field's declaration index; branches
/// keep their keys in first-declared order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Shape {
    Leaf(usize),
    Branch(Vec<(&'static str, Self)>),
}

impl Shape {
    /// Build the shape, recording every path problem in `errs`.
    pub(crate) fn build(fields: &[FieldDescriptor], errs: &mut ErrorTree) -> Self {
        let mut root = Self::Branch(Vec::new());

        for (index, field) in fields.iter().enumerate() {
            if field.path.is_empty() {
                errs.add_at(field.name, "document path is empty");
                continue;
            }
            if let Err(msg) = root.insert(field.path, index) {
                errs.add_at(field.name, msg);
            }
        }

        root
    }

    fn insert(&mut self, path: &'static [&'static str], index: usize) -> Result<(), String> {
        let Self::Branch(children) = self else {
            return Err("document path passes through another field's leaf".to_string());
        };
        let Some((head, rest)) = path.split_first() else {
            return Err("document path is empty".to_string());
        };

        let existing = children.iter().position(|(key, _)| key == head);

        if rest.is_empty() {
            if existing.is_some() {
                return Err(format!("document key '{head}' is already declared"));
            }
            children.push((*head, Self::Leaf(index)));

            return Ok(());
        }

        let pos = existing.unwrap_or_else(|| {
            children.push((*head, Self::Branch(Vec::new())));
            children.len() - 1
        });

        children[pos].1.insert(rest, index)
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Walk `path` from this node.
    #[must_use]
    pub fn get(&self, path: &[&str]) -> Option<&Self> {
        let Some((head, rest)) = path.split_first() else {
            return Some(self);
        };

        match self {
            Self::Leaf(_) => None,
            Self::Branch(children) => children
                .iter()
                .find(|(key, _)| key == head)
                .and_then(|(_, child)| child.get(rest)),
        }
    }

    /// Immediate keys of a branch (empty for a leaf).
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        match self {
            Self::Leaf(_) => Vec::new(),
            Self::Branch(children) => children.iter().map(|(key, _)| *key).collect(),
        }
    }

    /// Every leaf as `(dotted path, field index)` in document order.
    #[must_use]
    pub fn leaves(&self) -> Vec<(String, usize)> {
        let mut out = Vec::new();
        self.collect_leaves(&mut Vec::new(), &mut out);

        out
    }

    fn collect_leaves(&self, prefix: &mut Vec<&'static str>, out: &mut Vec<(String, usize)>) {
        match self {
            Self::Leaf(index) => out.push((prefix.join("."), *index)),
            Self::Branch(children) => {
                for (key, child) in children {
                    prefix.push(*key);
                    child.collect_leaves(prefix, out);
                    prefix.pop();
                }
            }
        }
    }
}

///
/// TESTS
///
