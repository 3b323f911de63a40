//! Error types for style resolution.

use thiserror::Error;

use crate::key::StyleKey;

/// A single validation failure: the offending key and what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The key whose value failed validation.
    pub key: StyleKey,
    /// What was expected and what was found.
    pub reason: String,
}

/// Errors raised by [`StyleResolver`](crate::StyleResolver) registration and
/// resolution.
///
/// Resolve-time errors list *every* offender found in one pass, not just the
/// first, so a caller can display the complete batch. No partial resolved
/// style is ever produced alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    /// The same key was registered twice in the base layer.
    #[error("default for '{key}' is already registered")]
    DuplicateKey {
        /// The key registered twice.
        key: StyleKey,
    },

    /// An override referenced keys absent from the schema. Caller-input
    /// error: unknown keys are rejected rather than silently ignored.
    #[error("unknown style key(s): {}", join_keys(.keys))]
    UnknownKeys {
        /// Every unknown key found, in sorted order.
        keys: Vec<StyleKey>,
    },

    /// One or more resolved values had the wrong variant or failed a
    /// declared constraint.
    #[error("invalid style value(s): {}", join_violations(.violations))]
    InvalidValues {
        /// Every violation found, in key order.
        violations: Vec<Violation>,
    },

    /// A registered layer contains keys with no schema entry at all.
    /// Configuration bug, caught when the layer is installed rather than
    /// deep inside a rendering pipeline.
    #[error("layer '{layer}' has no schema entry for: {}", join_keys(.keys))]
    SchemaMismatch {
        /// The layer that carried the undeclared keys.
        layer: String,
        /// Every undeclared key found, in sorted order.
        keys: Vec<StyleKey>,
    },
}

impl StyleError {
    /// Returns the `(key, reason)` pairs carried by this error, for batch
    /// display.
    pub fn violations(&self) -> Vec<(&StyleKey, String)> {
        match self {
            StyleError::DuplicateKey { key } => {
                vec![(key, "already registered in the base layer".to_string())]
            }
            StyleError::UnknownKeys { keys } => keys
                .iter()
                .map(|k| (k, "not present in the schema".to_string()))
                .collect(),
            StyleError::InvalidValues { violations } => violations
                .iter()
                .map(|v| (&v.key, v.reason.clone()))
                .collect(),
            StyleError::SchemaMismatch { keys, .. } => keys
                .iter()
                .map(|k| (k, "no schema entry".to_string()))
                .collect(),
        }
    }
}

fn join_keys(keys: &[StyleKey]) -> String {
    keys.iter()
        .map(|k| format!("'{}'", k))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("'{}' ({})", v.key, v.reason))
        .collect::<Vec<_>>()
        .join("; ")
}
