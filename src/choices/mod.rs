// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Choice sets for the commit type and scope questions.
//!
//! A [`ChoiceSet`] is resolved once per run from configuration and then only
//! read. An empty scope list means the scope is entered as free text.

use std::collections::HashSet;

use crate::config::{GitCcConfig, DEFAULT_COMMIT_TYPES, NONE_SCOPE};

/// Resolved, duplicate-free lists of selectable values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChoiceSet {
    commit_types: Vec<String>,
    scopes: Vec<String>,
}

impl ChoiceSet {
    /// Merge the built-in defaults with user-declared types and scopes.
    pub fn resolve<T, S>(use_defaults: bool, extra_types: &[T], declared_scopes: &[S]) -> Self
    where
        T: AsRef<str>,
        S: AsRef<str>,
    {
        let extra_types = extra_types.iter().map(|t| t.as_ref().to_string());
        let user_scopes = declared_scopes.iter().map(|s| s.as_ref().to_string());

        let (commit_types, scopes): (Vec<String>, Vec<String>) = if use_defaults {
            let types = DEFAULT_COMMIT_TYPES
                .iter()
                .map(|t| t.to_string())
                .chain(extra_types)
                .collect();
            let scopes = if declared_scopes.is_empty() {
                Vec::new()
            } else {
                std::iter::once(NONE_SCOPE.to_string())
                    .chain(user_scopes)
                    .collect()
            };
            (types, scopes)
        } else {
            (extra_types.collect(), user_scopes.collect())
        };

        Self {
            commit_types: dedup_preserving_order(commit_types),
            scopes: dedup_preserving_order(scopes),
        }
    }

    /// Resolve from a loaded configuration.
    pub fn from_config(config: &GitCcConfig) -> Self {
        Self::resolve(
            config.use_defaults,
            &config.custom_commit_types,
            &config.scopes,
        )
    }

    /// Selectable commit types, in display order.
    pub fn commit_types(&self) -> &[String] {
        &self.commit_types
    }

    /// Selectable scopes, in display order. Empty means free-text entry.
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Whether the scope question is a selection rather than free text.
    pub fn has_scope_list(&self) -> bool {
        !self.scopes.is_empty()
    }
}

/// Keep the first occurrence of each value, preserving relative order.
pub fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
