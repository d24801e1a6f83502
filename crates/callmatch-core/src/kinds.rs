//! Concrete call kinds: method calls and object creations

use serde::{Deserialize, Serialize};

use crate::call::Call;
use crate::distance::normalized_distance;
use crate::model::Invocation;

/// `receiver.method(args)` or `method(args)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method_name: String,
    #[serde(flatten)]
    pub invocation: Invocation,
}

impl MethodCall {
    pub fn new(method_name: impl Into<String>, invocation: Invocation) -> Self {
        MethodCall {
            method_name: method_name.into(),
            invocation,
        }
    }
}

impl Call for MethodCall {
    fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    fn identical_name(&self, other: &Self) -> bool {
        self.method_name == other.method_name
    }

    fn normalized_name_distance(&self, other: &Self) -> f64 {
        normalized_distance(&self.method_name, &other.method_name)
    }
}

/// `new Type(args)`, or `new Type[n]` when `is_array` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectCreation {
    pub type_name: String,
    #[serde(default)]
    pub is_array: bool,
    #[serde(flatten)]
    pub invocation: Invocation,
}

impl ObjectCreation {
    pub fn new(type_name: impl Into<String>, invocation: Invocation) -> Self {
        ObjectCreation {
            type_name: type_name.into(),
            is_array: false,
            invocation,
        }
    }

    pub fn array(type_name: impl Into<String>, invocation: Invocation) -> Self {
        ObjectCreation {
            is_array: true,
            ..Self::new(type_name, invocation)
        }
    }
}

impl Call for ObjectCreation {
    fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    fn identical_name(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.is_array == other.is_array
    }

    fn normalized_name_distance(&self, other: &Self) -> f64 {
        normalized_distance(&self.type_name, &other.type_name)
    }
}

/// Either kind of call site, for pipelines that compare them side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallSite {
    Method(MethodCall),
    Creation(ObjectCreation),
}

impl CallSite {
    /// The method or type name.
    pub fn name(&self) -> &str {
        match self {
            CallSite::Method(call) => &call.method_name,
            CallSite::Creation(call) => &call.type_name,
        }
    }
}

impl From<MethodCall> for CallSite {
    fn from(call: MethodCall) -> Self {
        CallSite::Method(call)
    }
}

impl From<ObjectCreation> for CallSite {
    fn from(call: ObjectCreation) -> Self {
        CallSite::Creation(call)
    }
}

impl Call for CallSite {
    fn invocation(&self) -> &Invocation {
        match self {
            CallSite::Method(call) => call.invocation(),
            CallSite::Creation(call) => call.invocation(),
        }
    }

    fn identical_name(&self, other: &Self) -> bool {
        match (self, other) {
            (CallSite::Method(a), CallSite::Method(b)) => a.identical_name(b),
            (CallSite::Creation(a), CallSite::Creation(b)) => a.identical_name(b),
            _ => false,
        }
    }

    fn normalized_name_distance(&self, other: &Self) -> f64 {
        match (self, other) {
            (CallSite::Method(a), CallSite::Method(b)) => a.normalized_name_distance(b),
            (CallSite::Creation(a), CallSite::Creation(b)) => a.normalized_name_distance(b),
            _ => 1.0,
        }
    }
}
