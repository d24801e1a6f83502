//! The `Call` capability trait and the composite rename/argument predicates

use std::collections::{HashMap, HashSet};

use crate::model::Invocation;
use crate::replacement::Replacement;

/// A call site that knows how to compare its own name.
///
/// Implementors supply name identity and name distance; every other
/// predicate is provided and works on the shared [`Invocation`] data.
pub trait Call {
    fn invocation(&self) -> &Invocation;

    /// Exact equality of the identifying name. Must be reflexive and symmetric.
    fn identical_name(&self, other: &Self) -> bool;

    /// Name distance in [0.0, 1.0]; 0.0 means identical names.
    fn normalized_name_distance(&self, other: &Self) -> f64;

    fn expression(&self) -> Option<&str> {
        self.invocation().expression()
    }

    fn arguments(&self) -> &[String] {
        self.invocation().arguments()
    }

    fn identical_expression(&self, other: &Self) -> bool {
        self.invocation().identical_expression(other.invocation())
    }

    fn identical_expression_after_type_replacements(&self, other: &Self, replacements: &[Replacement]) -> bool {
        self.invocation()
            .identical_expression_after_type_replacements(other.invocation(), replacements)
    }

    fn identical_expression_with(&self, other: &Self, replacements: &[Replacement]) -> bool {
        self.invocation()
            .identical_expression_with(other.invocation(), replacements)
    }

    fn equal_arguments(&self, other: &Self) -> bool {
        self.invocation().equal_arguments(other.invocation())
    }

    fn identical_arguments(&self, other: &Self, set1: &HashSet<String>, set2: &HashSet<String>) -> bool {
        self.invocation().identical_arguments(other.invocation(), set1, set2)
    }

    fn identical_or_replaced_arguments(&self, other: &Self, replacements: &[Replacement]) -> bool {
        self.invocation()
            .identical_or_replaced_arguments(other.invocation(), replacements)
    }

    fn all_arguments_replaced(
        &self,
        other: &Self,
        replacements: &[Replacement],
        parameter_to_argument: &HashMap<String, String>,
    ) -> bool {
        self.invocation()
            .all_arguments_replaced(other.invocation(), replacements, parameter_to_argument)
    }

    fn argument_intersection(&self, other: &Self) -> Vec<String> {
        self.invocation().argument_intersection(other.invocation())
    }

    /// Same receiver and arguments, different name. Both receivers must be present.
    fn renamed_with_identical_expression_and_arguments(&self, other: &Self, replacements: &[Replacement]) -> bool {
        self.expression().is_some()
            && other.expression().is_some()
            && self.identical_expression_with(other, replacements)
            && !self.identical_name(other)
            && self.equal_arguments(other)
    }

    /// No receiver on either side, same arguments, and a name within `distance`.
    fn renamed_with_identical_arguments_and_no_expression(&self, other: &Self, distance: f64) -> bool {
        self.expression().is_none()
            && other.expression().is_none()
            && !self.identical_name(other)
            && self.normalized_name_distance(other) <= distance
            && self.equal_arguments(other)
    }

    /// Same receiver, a name within `distance`, and a different argument count.
    fn renamed_with_identical_expression_and_different_number_of_arguments(
        &self,
        other: &Self,
        set1: &HashSet<String>,
        set2: &HashSet<String>,
        replacements: &[Replacement],
        distance: f64,
    ) -> bool {
        self.expression().is_some()
            && other.expression().is_some()
            && self.identical_expression_with(other, replacements)
            && self.normalized_name_distance(other) <= distance
            && !self.identical_arguments(other, set1, set2)
            && self.arguments().len() != other.arguments().len()
    }

    fn only_arguments_changed(
        &self,
        other: &Self,
        set1: &HashSet<String>,
        set2: &HashSet<String>,
        replacements: &[Replacement],
    ) -> bool {
        self.identical_expression_with(other, replacements)
            && self.identical_name(other)
            && !self.identical_arguments(other, set1, set2)
            && self.arguments().len() != other.arguments().len()
    }

    /// Same receiver (modulo type replacements), same name, and arguments
    /// equal up to the known renames in `set1`/`set2`.
    fn identical(
        &self,
        other: &Self,
        set1: &HashSet<String>,
        set2: &HashSet<String>,
        replacements: &[Replacement],
    ) -> bool {
        self.identical_expression_with(other, replacements)
            && self.identical_name(other)
            && self.identical_arguments(other, set1, set2)
    }
}
