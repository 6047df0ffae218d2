//! Reading submissions that arrive as JSON instead of a form post.
//!
//! Two shapes are accepted: an array of `[key, value]` pairs (kept in
//! order, keys may repeat) or an object whose values are scalars or arrays
//! of scalars (an array becomes one pair per element).

use serde_json::Value as Json;
use thiserror::Error as ThisError;

///
/// SubmissionFormatError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum SubmissionFormatError {
    #[error("submission must be an object or an array of [key, value] pairs")]
    Shape,

    #[error("pair {0} is not a [key, value] array of two strings")]
    Pair(usize),

    #[error("value for '{0}' must be a string, number, boolean, or null")]
    Value(String),
}

/// Flatten a JSON submission into wire pairs.
pub fn pairs_from_json(json: &Json) -> Result<Vec<(String, String)>, SubmissionFormatError> {
    match json {
        Json::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item.as_array().map(Vec::as_slice) {
                Some([Json::String(key), value]) => scalar(key, value)
                    .map(|raw| (key.clone(), raw.unwrap_or_default()))
                    .map_err(|_| SubmissionFormatError::Pair(i)),
                _ => Err(SubmissionFormatError::Pair(i)),
            })
            .collect(),

        Json::Object(map) => {
            let mut pairs = Vec::new();
            for (key, value) in map {
                match value {
                    Json::Array(items) => {
                        for item in items {
                            if let Some(raw) = scalar(key, item)? {
                                pairs.push((key.clone(), raw));
                            }
                        }
                    }
                    value => {
                        if let Some(raw) = scalar(key, value)? {
                            pairs.push((key.clone(), raw));
                        }
                    }
                }
            }

            Ok(pairs)
        }

        _ => Err(SubmissionFormatError::Shape),
    }
}

// null and false mean "not submitted", like an unchecked checkbox
fn scalar(key: &str, value: &Json) -> Result<Option<String>, SubmissionFormatError> {
    match value {
        Json::Null | Json::Bool(false) => Ok(None),
        Json::Bool(true) => Ok(Some("on".to_string())),
        Json::Number(n) => Ok(Some(n.to_string())),
        Json::String(s) => Ok(Some(s.clone())),
        Json::Array(_) | Json::Object(_) => Err(SubmissionFormatError::Value(key.to_string())),
    }
}

///
/// TESTS
///
