// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in defaults.

/// Commit types offered when `use_defaults` is enabled, in display order.
pub const DEFAULT_COMMIT_TYPES: [&str; 8] =
    ["feat", "fix", "build", "chore", "ci", "docs", "refactor", "test"];

/// Scope value meaning "no scope annotation".
pub const NONE_SCOPE: &str = "none";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_types_are_unique() {
        let mut sorted = DEFAULT_COMMIT_TYPES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), DEFAULT_COMMIT_TYPES.len());
    }

    #[test]
    fn test_none_scope_is_not_a_default_type() {
        assert!(!DEFAULT_COMMIT_TYPES.contains(&NONE_SCOPE));
    }
}
