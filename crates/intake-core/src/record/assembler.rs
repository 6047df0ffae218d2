use super::{Applied, Record, RecordDraft};
use crate::error::{CoercionError, SubmissionErrors};
use intake_schema::node::Schema;

///
/// Assembler
///
/// Turns flat wire pairs into a [`Record`] for one schema.
///

#[derive(Clone, Copy, Debug)]
pub struct Assembler {
    schema: &'static Schema,
}

impl Assembler {
    #[must_use]
    pub const fn new(schema: &'static Schema) -> Self {
        Self { schema }
    }

    #[must_use]
    pub const fn schema(&self) -> &'static Schema {
        self.schema
    }

    #[must_use]
    pub fn begin(&self) -> RecordDraft {
        RecordDraft::new(self.schema)
    }

    pub fn apply(
        &self,
        draft: &mut RecordDraft,
        key: &str,
        raw: &str,
    ) -> Result<Applied, CoercionError> {
        draft.apply(key, Some(raw))
    }

    #[must_use]
    pub fn finish(&self, draft: RecordDraft) -> Record {
        draft.finish()
    }

    /// Apply a whole submission in order. Every rejected pair is collected;
    /// a record is returned only when none were.
    pub fn assemble<I, K, V>(&self, pairs: I) -> Result<Record, SubmissionErrors>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut draft = self.begin();
        let mut errors = Vec::new();

        for (key, raw) in pairs {
            if let Err(err) = draft.apply(key.as_ref(), Some(raw.as_ref())) {
                errors.push(err);
            }
        }

        if errors.is_empty() {
            Ok(draft.finish())
        } else {
            let errors = SubmissionErrors::new(errors);
            log::warn!(target: "intake::record", "{} submission rejected: {errors}", self.schema.name());

            Err(errors)
        }
    }
}
