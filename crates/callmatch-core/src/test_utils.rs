//! Test utilities for callmatch-core

use std::collections::HashSet;

use crate::call::Call;
use crate::kinds::{MethodCall, ObjectCreation};
use crate::model::Invocation;

/// `expression.name(arguments)`
pub fn method(expression: Option<&str>, name: &str, arguments: &[&str]) -> MethodCall {
    MethodCall::new(name, Invocation::new(expression, arguments.iter().copied()))
}

/// `new type_name(arguments)`
pub fn creation(type_name: &str, arguments: &[&str]) -> ObjectCreation {
    ObjectCreation::new(type_name, Invocation::new(None, arguments.iter().copied()))
}

pub fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A call kind whose name distance is fixed, for exercising threshold gates.
#[derive(Debug, Clone)]
pub struct FixedDistanceCall {
    pub name: String,
    pub distance: f64,
    pub invocation: Invocation,
}

impl FixedDistanceCall {
    pub fn new(name: &str, distance: f64, expression: Option<&str>, arguments: &[&str]) -> Self {
        FixedDistanceCall {
            name: name.to_string(),
            distance,
            invocation: Invocation::new(expression, arguments.iter().copied()),
        }
    }
}

impl Call for FixedDistanceCall {
    fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    fn identical_name(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn normalized_name_distance(&self, other: &Self) -> f64 {
        if self.name == other.name { 0.0 } else { self.distance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_builder() {
        let call = method(Some("list"), "add", &["x", "y"]);
        assert_eq!(call.method_name, "add");
        assert_eq!(call.expression(), Some("list"));
        assert_eq!(call.arguments().len(), 2);
    }
}
