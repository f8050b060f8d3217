/// Visit state definitions for tracking crawl progress
///
/// A URL that has never been submitted has no state at all. Submission moves
/// it to `Visiting`; once its own work finishes (successfully or not) it
/// moves to `Done` and is never processed again in the same run.
use std::fmt;

/// Represents the current state of a URL in the traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitState {
    /// Submitted to the traversal; policy check, fetch or discovery in progress
    Visiting,

    /// Finished, regardless of whether the fetch or any later step failed
    Done,
}

impl VisitState {
    /// Returns true if moving from `self` to `next` is a legal transition
    ///
    /// The only transition is `Visiting -> Done`.
    pub fn can_transition_to(&self, next: VisitState) -> bool {
        matches!((self, next), (Self::Visiting, Self::Done))
    }

    /// Short lowercase name used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visiting => "visiting",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
