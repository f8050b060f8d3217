//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `VisitState`: the per-URL traversal state (visiting, done)
//! - `VisitedSet`: every URL submitted to the traversal in the current run

mod visit_state;
mod visited;

// Re-export main types
pub use visit_state::VisitState;
pub use visited::VisitedSet;
