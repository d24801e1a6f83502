//! Core data structures for call sites

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::replacement::{Replacement, ReplacementType, perform_replacement};

/// Syntactic role a call plays in its enclosing statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StatementCoverage {
    /// The call is nested inside a larger expression.
    #[default]
    None,
    /// The statement is the call itself, e.g. `foo(x);`.
    OnlyCall,
    /// `return foo(x);`
    ReturnCall,
    /// `throw new Foo(x);`
    ThrowCall,
    /// `(Bar) foo(x)`
    CastCall,
    /// `int y = foo(x);`
    VariableDeclarationInitializerCall,
}

/// Where in source a call site was found. Carried along, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct LocationInfo {
    pub file_path: PathBuf,
    pub start_line: u32,
    pub end_line: u32,
    pub start_column: u32,
    pub end_column: u32,
}

impl LocationInfo {
    pub fn new(file_path: impl Into<PathBuf>, start_line: u32, end_line: u32) -> Self {
        LocationInfo {
            file_path: file_path.into(),
            start_line,
            end_line,
            start_column: 0,
            end_column: 0,
        }
    }

    pub fn with_columns(mut self, start_column: u32, end_column: u32) -> Self {
        self.start_column = start_column;
        self.end_column = end_column;
        self
    }
}

/// The name-independent part of a call site: receiver, arguments and position.
///
/// Fields are private so an invocation cannot change after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Invocation {
    #[serde(default)]
    expression: Option<String>,
    #[serde(default)]
    arguments: Vec<String>,
    #[serde(default)]
    type_arguments: usize,
    #[serde(default)]
    location: LocationInfo,
    #[serde(default)]
    coverage: StatementCoverage,
}

impl Invocation {
    pub fn new<I, S>(expression: Option<&str>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation {
            expression: expression.map(str::to_string),
            arguments: arguments.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: LocationInfo) -> Self {
        self.location = location;
        self
    }

    pub fn with_coverage(mut self, coverage: StatementCoverage) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn with_type_arguments(mut self, type_arguments: usize) -> Self {
        self.type_arguments = type_arguments;
        self
    }

    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn type_arguments(&self) -> usize {
        self.type_arguments
    }

    pub fn location(&self) -> &LocationInfo {
        &self.location
    }

    pub fn coverage(&self) -> StatementCoverage {
        self.coverage
    }

    /// Both receivers are present and equal, or both are absent.
    pub fn identical_expression(&self, other: &Invocation) -> bool {
        self.expression == other.expression
    }

    /// Rewrites this receiver with every `Type` replacement, in the order
    /// given, and compares the result with the other receiver.
    ///
    /// Replacements are applied one after another, so an earlier `after`
    /// can be rewritten again by a later `before`.
    pub fn identical_expression_after_type_replacements(
        &self,
        other: &Invocation,
        replacements: &[Replacement],
    ) -> bool {
        let (Some(expression1), Some(expression2)) = (self.expression(), other.expression()) else {
            return false;
        };
        let mut rewritten = expression1.to_string();
        for replacement in replacements {
            if replacement.kind == ReplacementType::Type {
                rewritten = perform_replacement(&rewritten, &replacement.before, &replacement.after);
            }
        }
        rewritten == expression2
    }

    /// Plain receiver check, falling back to the type-replacement aware one.
    pub fn identical_expression_with(&self, other: &Invocation, replacements: &[Replacement]) -> bool {
        self.identical_expression(other)
            || self.identical_expression_after_type_replacements(other, replacements)
    }

    /// Strict positional equality of the argument lists.
    pub fn equal_arguments(&self, other: &Invocation) -> bool {
        self.arguments == other.arguments
    }

    /// Positional argument match that tolerates known renames: a position is
    /// accepted when the texts are equal, the other argument is in `set1`,
    /// or this argument is in `set2`.
    pub fn identical_arguments(
        &self,
        other: &Invocation,
        set1: &HashSet<String>,
        set2: &HashSet<String>,
    ) -> bool {
        if self.arguments.len() != other.arguments.len() {
            return false;
        }
        self.arguments
            .iter()
            .zip(&other.arguments)
            .all(|(argument1, argument2)| {
                argument1 == argument2 || set1.contains(argument2) || set2.contains(argument1)
            })
    }

    /// Positional argument match where a differing pair must be backed by a
    /// replacement of exactly that `before`/`after` text, of any kind.
    pub fn identical_or_replaced_arguments(&self, other: &Invocation, replacements: &[Replacement]) -> bool {
        if self.arguments.len() != other.arguments.len() {
            return false;
        }
        let pairs = replacement_pairs(replacements);
        self.arguments
            .iter()
            .zip(&other.arguments)
            .all(|(argument1, argument2)| {
                argument1 == argument2 || pairs.contains(&(argument1.as_str(), argument2.as_str()))
            })
    }

    /// True when every argument position is explained by some replacement,
    /// either directly or after resolving a parameter name through
    /// `parameter_to_argument`. An empty argument list never qualifies.
    pub fn all_arguments_replaced(
        &self,
        other: &Invocation,
        replacements: &[Replacement],
        parameter_to_argument: &HashMap<String, String>,
    ) -> bool {
        if self.arguments.is_empty() || self.arguments.len() != other.arguments.len() {
            return false;
        }
        let resolve = |argument: &str| parameter_to_argument.get(argument).map(String::as_str);
        self.arguments
            .iter()
            .zip(&other.arguments)
            .all(|(argument1, argument2)| {
                let bound1 = resolve(argument1);
                let bound2 = resolve(argument2);
                replacements.iter().any(|replacement| {
                    (replacement.before == *argument1 || Some(replacement.before.as_str()) == bound1)
                        && (replacement.after == *argument2 || Some(replacement.after.as_str()) == bound2)
                })
            })
    }

    /// Arguments present in both lists, in this invocation's order, without duplicates.
    pub fn argument_intersection(&self, other: &Invocation) -> Vec<String> {
        let theirs: HashSet<&str> = other.arguments.iter().map(String::as_str).collect();
        let mut seen = HashSet::new();
        self.arguments
            .iter()
            .filter(|argument| theirs.contains(argument.as_str()) && seen.insert(argument.as_str()))
            .cloned()
            .collect()
    }
}

fn replacement_pairs(replacements: &[Replacement]) -> HashSet<(&str, &str)> {
    replacements
        .iter()
        .map(|r| (r.before.as_str(), r.after.as_str()))
        .collect()
}
