//! Verdicts for a pair of call sites

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::call::Call;
use crate::config::MatchConfig;
use crate::replacement::Replacement;

/// Everything the diff pipeline knows about the surrounding change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchContext {
    /// Identifiers known to be renamed, checked against the "after" arguments.
    pub set1: HashSet<String>,
    /// Identifiers known to be renamed, checked against the "before" arguments.
    pub set2: HashSet<String>,
    /// Substitutions in discovery order. Order matters for type rewrites.
    pub replacements: Vec<Replacement>,
    /// Parameter name -> argument text bound to it at the call site.
    pub parameter_to_argument: HashMap<String, String>,
    #[serde(skip)]
    pub config: MatchConfig,
}

impl MatchContext {
    pub fn new(config: MatchConfig) -> Self {
        MatchContext {
            config,
            ..Default::default()
        }
    }

    pub fn with_replacements(mut self, replacements: impl IntoIterator<Item = Replacement>) -> Self {
        self.replacements.extend(replacements);
        self
    }

    /// Add identifiers known to be renamed; matched against the "after" arguments.
    pub fn with_set1<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.set1.extend(items.into_iter().map(Into::into));
        self
    }

    /// Add identifiers known to be renamed; matched against the "before" arguments.
    pub fn with_set2<S: Into<String>>(mut self, items: impl IntoIterator<Item = S>) -> Self {
        self.set2.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_binding(mut self, parameter: impl Into<String>, argument: impl Into<String>) -> Self {
        self.parameter_to_argument.insert(parameter.into(), argument.into());
        self
    }

    pub fn threshold(&self) -> f64 {
        self.config.name_distance_threshold()
    }
}

/// How the "after" call relates to the "before" call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallChange {
    Identical,
    OnlyArgumentsChanged,
    AllArgumentsReplaced,
    RenamedSameExpressionAndArguments,
    RenamedNoExpression,
    RenamedArgumentCountChanged,
    Unrelated,
}

/// Classify a pair, returning the first verdict that holds.
///
/// `Unrelated` only means none of the rename or argument patterns matched:
/// a call with the same name, receiver and argument count whose arguments
/// changed without a known rename or replacement also lands there.
pub fn classify<C: Call>(before: &C, after: &C, ctx: &MatchContext) -> CallChange {
    let replacements = ctx.replacements.as_slice();
    let verdict = if before.identical(after, &ctx.set1, &ctx.set2, replacements) {
        CallChange::Identical
    } else if before.only_arguments_changed(after, &ctx.set1, &ctx.set2, replacements) {
        CallChange::OnlyArgumentsChanged
    } else if before.identical_name(after)
        && before.identical_expression_with(after, replacements)
        && before.all_arguments_replaced(after, replacements, &ctx.parameter_to_argument)
    {
        CallChange::AllArgumentsReplaced
    } else if before.renamed_with_identical_expression_and_arguments(after, replacements) {
        CallChange::RenamedSameExpressionAndArguments
    } else if before.renamed_with_identical_arguments_and_no_expression(after, ctx.threshold()) {
        CallChange::RenamedNoExpression
    } else if before.renamed_with_identical_expression_and_different_number_of_arguments(
        after,
        &ctx.set1,
        &ctx.set2,
        replacements,
        ctx.threshold(),
    ) {
        CallChange::RenamedArgumentCountChanged
    } else {
        CallChange::Unrelated
    };
    tracing::trace!(?verdict, "Classified call pair");
    verdict
}

/// Classify many pairs in parallel. Output order follows `pairs`.
pub fn classify_all<C: Call + Sync>(pairs: &[(C, C)], ctx: &MatchContext) -> Vec<CallChange> {
    let verdicts: Vec<CallChange> = pairs
        .par_iter()
        .map(|(before, after)| classify(before, after, ctx))
        .collect();
    tracing::debug!("Classified {} call pairs", verdicts.len());
    verdicts
}

/// Verdict plus the primitive results that led to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallComparison {
    pub verdict: CallChange,
    pub identical_name: bool,
    pub name_distance: f64,
    pub identical_expression: bool,
    pub equal_arguments: bool,
    pub identical_arguments: bool,
    pub identical_or_replaced_arguments: bool,
    pub all_arguments_replaced: bool,
    pub argument_intersection: Vec<String>,
}

pub fn compare<C: Call>(before: &C, after: &C, ctx: &MatchContext) -> CallComparison {
    let replacements = ctx.replacements.as_slice();
    let name_distance = before.normalized_name_distance(after);
    tracing::debug!(name_distance, "Comparing call pair");
    CallComparison {
        verdict: classify(before, after, ctx),
        identical_name: before.identical_name(after),
        name_distance,
        identical_expression: before.identical_expression_with(after, replacements),
        equal_arguments: before.equal_arguments(after),
        identical_arguments: before.identical_arguments(after, &ctx.set1, &ctx.set2),
        identical_or_replaced_arguments: before.identical_or_replaced_arguments(after, replacements),
        all_arguments_replaced: before.all_arguments_replaced(after, replacements, &ctx.parameter_to_argument),
        argument_intersection: before.argument_intersection(after),
    }
}
