//! Session state machine for the upload → process → download cycle.
//!
//! [`SessionState`] owns everything the root component tracks: the
//! original and processed image handles, the [`ProcessingStatus`], and
//! a submission token that serializes overlapping submissions.  Every
//! submission bumps the token; a resolution carrying an older token is
//! stale and is discarded, so a slow earlier request can never
//! overwrite the result of a newer one.
//!
//! The struct is generic over the handle type so the transitions can
//! be unit-tested on the native target without a browser.

/// The single user-facing message for any processing failure.
///
/// The underlying cause is logged to the console for diagnostics but
/// never surfaced to the user.
pub const PROCESSING_FAILED: &str = "Failed to process image. Please try again.";

/// Mutually exclusive processing states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProcessingStatus {
    /// At rest: nothing pending, no error showing.
    #[default]
    Idle,
    /// A removal request is in flight.
    Loading,
    /// The last request failed; the message shows until the next
    /// submission.
    Error(String),
}

impl ProcessingStatus {
    /// Whether a removal request is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The error message, if the last request failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            Self::Idle | Self::Loading => None,
        }
    }
}

/// All state for one removal session.
///
/// `H` is the displayable-handle type — `Rc<ImageHandle>` in the app,
/// anything cheap in tests.
#[derive(Debug)]
pub struct SessionState<H> {
    source: Option<H>,
    processed: Option<H>,
    status: ProcessingStatus,
    token: u64,
}

impl<H> SessionState<H> {
    /// An empty session: no images, status [`ProcessingStatus::Idle`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source: None,
            processed: None,
            status: ProcessingStatus::Idle,
            token: 0,
        }
    }

    /// Begin a new submission.
    ///
    /// Sets the source handle, clears any previous processed handle
    /// (dropping it releases its object URL), switches to Loading, and
    /// returns the token the eventual resolution must present.  This
    /// all happens synchronously, before the collaborator runs.
    pub fn submit(&mut self, source: H) -> u64 {
        self.source = Some(source);
        self.processed = None;
        self.status = ProcessingStatus::Loading;
        self.token += 1;
        self.token
    }

    /// Record a successful resolution.
    ///
    /// Returns `false` (leaving all state untouched) if `token` is
    /// stale — a newer submission superseded this one while it was in
    /// flight.
    pub fn complete(&mut self, token: u64, processed: H) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.processed = Some(processed);
        self.status = ProcessingStatus::Idle;
        true
    }

    /// Record a failed resolution with the fixed user-facing message.
    ///
    /// Returns `false` (leaving all state untouched) if `token` is
    /// stale.
    pub fn fail(&mut self, token: u64) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.status = ProcessingStatus::Error(PROCESSING_FAILED.to_owned());
        true
    }

    /// Whether `token` identifies the newest submission.
    #[must_use]
    pub const fn is_current(&self, token: u64) -> bool {
        self.token == token
    }

    /// The original image handle, if a file has been submitted.
    #[must_use]
    pub const fn source(&self) -> Option<&H> {
        self.source.as_ref()
    }

    /// The processed image handle, if the last submission succeeded.
    #[must_use]
    pub const fn processed(&self) -> Option<&H> {
        self.processed.as_ref()
    }

    /// The current processing status.
    #[must_use]
    pub const fn status(&self) -> &ProcessingStatus {
        &self.status
    }

    /// Whether the download action should be offered.
    #[must_use]
    pub const fn can_download(&self) -> bool {
        self.processed.is_some()
    }
}

impl<H> Default for SessionState<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_sets_loading_synchronously() {
        let mut session = SessionState::new();
        let token = session.submit("cat.jpg");
        assert!(session.status().is_loading());
        assert!(session.is_current(token));
        assert_eq!(session.source(), Some(&"cat.jpg"));
        assert!(session.processed().is_none());
    }

    #[test]
    fn complete_sets_one_processed_handle_and_returns_to_idle() {
        let mut session = SessionState::new();
        let token = session.submit("cat.jpg");
        assert!(session.complete(token, "cat-cutout"));
        assert_eq!(session.status(), &ProcessingStatus::Idle);
        assert_eq!(session.processed(), Some(&"cat-cutout"));
        // The original set at submission time is unchanged.
        assert_eq!(session.source(), Some(&"cat.jpg"));
        assert!(session.can_download());
    }

    #[test]
    fn fail_sets_the_fixed_message_and_no_processed_handle() {
        let mut session = SessionState::new();
        let token = session.submit("cat.jpg");
        assert!(session.fail(token));
        assert_eq!(
            session.status().error_message(),
            Some("Failed to process image. Please try again.")
        );
        assert!(session.processed().is_none());
        assert!(!session.can_download());
        // The original stays visible on error.
        assert_eq!(session.source(), Some(&"cat.jpg"));
    }

    #[test]
    fn new_submission_clears_previous_processed_handle() {
        let mut session = SessionState::new();
        let first = session.submit("cat.jpg");
        assert!(session.complete(first, "cat-cutout"));

        // No stale processed image shown next to the new original.
        let second = session.submit("dog.png");
        assert!(session.processed().is_none());
        assert!(session.status().is_loading());
        assert_eq!(session.source(), Some(&"dog.png"));
        assert!(session.complete(second, "dog-cutout"));
        assert_eq!(session.processed(), Some(&"dog-cutout"));
    }

    #[test]
    fn stale_complete_is_discarded() {
        let mut session = SessionState::new();
        let slow = session.submit("slow.jpg");
        let fast = session.submit("fast.jpg");
        assert!(session.complete(fast, "fast-cutout"));

        // The slow first request resolves after the fast second one;
        // its result must not overwrite anything.
        assert!(!session.complete(slow, "slow-cutout"));
        assert_eq!(session.processed(), Some(&"fast-cutout"));
        assert_eq!(session.source(), Some(&"fast.jpg"));
        assert_eq!(session.status(), &ProcessingStatus::Idle);
    }

    #[test]
    fn stale_fail_is_discarded() {
        let mut session = SessionState::new();
        let slow = session.submit("slow.jpg");
        let fast = session.submit("fast.jpg");
        assert!(session.complete(fast, "fast-cutout"));

        assert!(!session.fail(slow));
        assert_eq!(session.status(), &ProcessingStatus::Idle);
        assert_eq!(session.processed(), Some(&"fast-cutout"));
    }

    #[test]
    fn error_state_accepts_a_new_submission() {
        let mut session = SessionState::new();
        let first = session.submit("bad.jpg");
        assert!(session.fail(first));

        let second = session.submit("good.jpg");
        assert!(session.status().is_loading());
        assert!(session.status().error_message().is_none());
        assert!(session.complete(second, "good-cutout"));
        assert_eq!(session.status(), &ProcessingStatus::Idle);
    }

    #[test]
    fn tokens_are_monotonic() {
        let mut session = SessionState::new();
        let a = session.submit("a");
        let b = session.submit("b");
        let c = session.submit("c");
        assert!(a < b && b < c);
        assert!(session.is_current(c));
        assert!(!session.is_current(a));
    }
}
