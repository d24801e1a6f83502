//! Textual substitutions recorded between the two snapshots

use serde::{Deserialize, Serialize};

/// Category of a recorded substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplacementType {
    /// A type name changed, e.g. `ArrayList` -> `LinkedList`.
    Type,
    VariableName,
    Argument,
    MethodInvocation,
    MethodInvocationName,
    MethodInvocationExpression,
    ClassInstanceCreation,
    StringLiteral,
    NumberLiteral,
    BooleanLiteral,
    ArrayAccess,
    InfixOperator,
    Other,
}

/// A `before` -> `after` text replacement found at corresponding positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Replacement {
    pub before: String,
    pub after: String,
    #[serde(rename = "type")]
    pub kind: ReplacementType,
}

impl Replacement {
    pub fn new(before: impl Into<String>, after: impl Into<String>, kind: ReplacementType) -> Self {
        Replacement {
            before: before.into(),
            after: after.into(),
            kind,
        }
    }
}

/// Replace every occurrence of `before` in `text` with `after`.
///
/// An empty `before` leaves the text unchanged.
pub fn perform_replacement(text: &str, before: &str, after: &str) -> String {
    if before.is_empty() {
        return text.to_string();
    }
    text.replace(before, after)
}
