//! Typed errors owned by the search crate.
//!
//! Domain failures are not represented here: they are the problem's own
//! [`crate::problem::Problem::Error`] and propagate out of
//! [`crate::algorithm::SearchAlgorithm::search`] untouched.

/// Failure while serializing a [`crate::trace::SearchTrace`].
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// The trace could not be rendered as JSON.
    #[error("trace serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
