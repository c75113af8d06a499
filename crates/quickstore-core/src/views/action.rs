//! In-flight state of a user-triggered request.

/// Lifecycle of one action (a submit button, a delete confirmation...).
///
/// Front ends disable the triggering control while the action is
/// [`ActionState::Pending`]; [`ActionState::begin`] refuses a second start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Request in flight.
    Pending,
    /// Last request succeeded.
    Succeeded,
    /// Last request failed.
    Failed,
}

impl ActionState {
    /// Whether a request is in flight.
    #[must_use]
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }

    /// Marks the action pending. Returns `false` if it already was.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    /// Records the outcome of the request.
    pub fn finish(&mut self, ok: bool) {
        *self = if ok { Self::Succeeded } else { Self::Failed };
    }

    /// Returns to idle (e.g. when a dialog is closed).
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_begin_is_refused() {
        let mut state = ActionState::default();
        assert!(state.begin());
        assert!(!state.begin());
        assert!(state.is_pending());

        state.finish(false);
        assert_eq!(state, ActionState::Failed);
        assert!(state.begin());
    }
}
