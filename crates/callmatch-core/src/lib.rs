//! Callmatch Core — call-site equivalence predicates for matching code across two snapshots

pub mod model;
pub mod replacement;
pub mod distance;
pub mod call;
pub mod kinds;
pub mod classify;
pub mod config;
pub mod error;


#[cfg(test)]
pub mod test_utils;

pub use model::{Invocation, LocationInfo, StatementCoverage};
pub use replacement::{Replacement, ReplacementType, perform_replacement};
pub use distance::{levenshtein_distance, normalized_distance};
pub use call::Call;
pub use kinds::{CallSite, MethodCall, ObjectCreation};
pub use classify::{CallChange, CallComparison, MatchContext, classify, classify_all, compare};
pub use config::{DEFAULT_NAME_DISTANCE_THRESHOLD, MatchConfig};
pub use error::{MatchError, Result};
