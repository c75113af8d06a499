//! Transient success/error messages.

use std::time::{Duration, Instant};

/// How long a notice stays visible unless dismissed.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(6);

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Something worked.
    Success,
    /// Something failed.
    Error,
}

/// A message raised at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// Text shown to the user.
    pub text: String,
    raised_at: Instant,
}

impl Notice {
    /// When the notice disappears on its own.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.raised_at + NOTICE_TIMEOUT
    }

    /// Whether the notice has outlived [`NOTICE_TIMEOUT`] at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline()
    }
}

/// One success slot and one error slot, each auto-dismissing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    success: Option<Notice>,
    error: Option<Notice>,
}

impl Notices {
    /// Shows a success message, replacing the previous one.
    pub fn success(&mut self, text: impl Into<String>) {
        self.raise_at(NoticeKind::Success, text, Instant::now());
    }

    /// Shows an error message, replacing the previous one.
    pub fn error(&mut self, text: impl Into<String>) {
        self.raise_at(NoticeKind::Error, text, Instant::now());
    }

    /// Shows a message as if raised at `at`.
    pub fn raise_at(&mut self, kind: NoticeKind, text: impl Into<String>, at: Instant) {
        let notice = Notice {
            kind,
            text: text.into(),
            raised_at: at,
        };
        match kind {
            NoticeKind::Success => self.success = Some(notice),
            NoticeKind::Error => self.error = Some(notice),
        }
    }

    /// Dismisses a slot by hand.
    pub fn dismiss(&mut self, kind: NoticeKind) {
        match kind {
            NoticeKind::Success => self.success = None,
            NoticeKind::Error => self.error = None,
        }
    }

    /// Drops notices that have expired at `now`. Returns `true` if anything
    /// was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for slot in [&mut self.success, &mut self.error] {
            if slot.as_ref().is_some_and(|n| n.is_expired(now)) {
                *slot = None;
                changed = true;
            }
        }
        changed
    }

    /// Current success text.
    #[must_use]
    pub fn success_text(&self) -> Option<&str> {
        self.success.as_ref().map(|n| n.text.as_str())
    }

    /// Current error text.
    #[must_use]
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_ref().map(|n| n.text.as_str())
    }

    /// Earliest moment a visible notice expires.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [&self.success, &self.error]
            .into_iter()
            .flatten()
            .map(Notice::deadline)
            .min()
    }
}
