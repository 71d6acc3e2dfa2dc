// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The answer set collected by the questionnaire.

use serde::{Deserialize, Deserializer, Serialize};

/// Answers to the commit questionnaire.
///
/// Every field is optional on disk so that swap files written by older
/// versions, or with fewer answered steps, still load. A `null` value reads
/// as the field's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerSet {
    /// Selected commit type (feat, fix, ...).
    #[serde(deserialize_with = "null_as_default")]
    pub commit_type: String,
    /// Scope, empty or `none` for no scope.
    #[serde(deserialize_with = "null_as_default")]
    pub scope: String,
    /// Single-line subject.
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    /// Optional body, trimmed as a block.
    #[serde(deserialize_with = "null_as_default")]
    pub long_description: String,
    /// Whether this is a breaking change.
    #[serde(deserialize_with = "null_as_default")]
    pub breaking_change: bool,
    /// Footer note. Kept even when `breaking_change` is later turned off.
    #[serde(deserialize_with = "null_as_default")]
    pub breaking_change_note: String,
}

impl AnswerSet {
    /// Whether nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(AnswerSet::default().is_empty());

        let answers = AnswerSet {
            breaking_change: true,
            ..AnswerSet::default()
        };
        assert!(!answers.is_empty());
    }

    #[test]
    fn test_field_tagged_encoding() {
        let answers = AnswerSet {
            commit_type: "feat".to_string(),
            ..AnswerSet::default()
        };
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["commit_type"], "feat");
        assert_eq!(json["breaking_change"], false);
    }

    #[test]
    fn test_missing_fields_default() {
        let answers: AnswerSet = serde_json::from_str(r#"{"scope": "api"}"#).unwrap();
        assert_eq!(answers.scope, "api");
        assert!(answers.commit_type.is_empty());
        assert!(!answers.breaking_change);
    }

    #[test]
    fn test_null_fields_default() {
        let answers: AnswerSet =
            serde_json::from_str(r#"{"commit_type": "feat", "scope": null, "breaking_change": null}"#)
                .unwrap();
        assert_eq!(answers.commit_type, "feat");
        assert!(answers.scope.is_empty());
        assert!(!answers.breaking_change);
    }
}
