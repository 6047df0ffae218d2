///
/// WireKey
///
/// One key of a form submission. Keys starting with `_` are bookkeeping
/// (csrf tokens, group markers) and never name a field. A trailing `[n]` or
/// `[]` marks one repetition of a multi-valued field.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WireKey<'a> {
    Bookkeeping(&'a str),
    Field { name: &'a str, index: Option<usize> },
}

impl<'a> WireKey<'a> {
    #[must_use]
    pub fn parse(key: &'a str) -> Self {
        if key.starts_with('_') {
            return Self::Bookkeeping(key);
        }

        match split_repetition(key) {
            Some((name, index)) => Self::Field { name, index },
            None => Self::Field {
                name: key,
                index: None,
            },
        }
    }

    /// Field name with any repetition suffix removed.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        match *self {
            Self::Bookkeeping(name) | Self::Field { name, .. } => name,
        }
    }
}

fn split_repetition(key: &str) -> Option<(&str, Option<usize>)> {
    let inner = key.strip_suffix(']')?;
    let open = inner.rfind('[')?;
    let (name, digits) = (&inner[..open], &inner[open + 1..]);
    if name.is_empty() {
        return None;
    }

    if digits.is_empty() {
        Some((name, None))
    } else {
        digits.parse().ok().map(|i| (name, Some(i)))
    }
}

///
/// TESTS
///
