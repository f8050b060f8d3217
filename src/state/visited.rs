use crate::state::VisitState;
use crate::MirrorError;
use std::collections::HashMap;
use url::Url;

/// URLs already submitted to the traversal in this run
///
/// Identity is the serialized URL string. A URL is recorded before any
/// network activity for it, so cyclic link graphs can never cause a second
/// fetch attempt.
#[derive(Debug, Default)]
pub struct VisitedSet {
    states: HashMap<String, VisitState>,
}

impl VisitedSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state of a URL, or `None` if it was never submitted
    pub fn state_of(&self, url: &Url) -> Option<VisitState> {
        self.states.get(url.as_str()).copied()
    }

    /// Marks an unvisited URL as `Visiting`
    ///
    /// # Returns
    ///
    /// * `true` - The URL was unvisited and is now being visited
    /// * `false` - The URL was already submitted; nothing changed
    pub fn begin(&mut self, url: &Url) -> bool {
        if self.states.contains_key(url.as_str()) {
            return false;
        }
        self.states
            .insert(url.as_str().to_string(), VisitState::Visiting);
        true
    }

    /// Moves a `Visiting` URL to `Done`
    pub fn finish(&mut self, url: &Url) -> Result<(), MirrorError> {
        let state = self
            .states
            .get_mut(url.as_str())
            .ok_or_else(|| MirrorError::InvalidTransition {
                url: url.to_string(),
                from: None,
                to: VisitState::Done,
            })?;

        if !state.can_transition_to(VisitState::Done) {
            return Err(MirrorError::InvalidTransition {
                url: url.to_string(),
                from: Some(*state),
                to: VisitState::Done,
            });
        }

        *state = VisitState::Done;
        Ok(())
    }

    /// Number of URLs submitted so far
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if nothing has been submitted yet
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
