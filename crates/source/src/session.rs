//! The load-session state machine shared by every read view.
//!
//! A consuming view holds one `LoadSession` and drives it through
//! `Idle -> Loading -> {Ready, Failed}`. `Ready` and `Failed` are terminal
//! for that attempt; only an explicit new [`begin`](LoadSession::begin)
//! returns to `Loading`. There is no automatic transition out of `Failed`.
//!
//! `begin` hands out a ticket and `complete` refuses results carrying a
//! superseded one. That closes the race where a view re-requests the
//! catalogue while a fetch is still in flight and the *older* response lands
//! last, overwriting the fresher one. Stale results are dropped, not errors.

use crate::error::Error;
use tuto_catalog::Catalog;

/// Where a load attempt currently stands.
#[derive(Debug)]
pub enum LoadState {
    /// No load has been requested yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// The catalogue for this session
    Ready(Catalog),
    /// The attempt failed; surfaced inline by the consuming view
    Failed(Error),
}

impl LoadState {
    /// `Ready` and `Failed` are terminal for the current attempt.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Ready(_) | LoadState::Failed(_))
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            LoadState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }
}
impl Default for LoadState {
    fn default() -> Self {
        LoadState::Idle
    }
}

/// Proof of which load request a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Single-owner load state for one consuming view.
///
/// Deliberately not synchronised: the browsing model is single-threaded
/// cooperative scheduling, with at most one outstanding fetch per view.
///
/// # Examples
///
/// ```
/// use tuto_source::LoadSession;
/// use tuto_catalog::Catalog;
///
/// let mut session = LoadSession::new();
/// let ticket = session.begin();
/// assert!(session.complete(ticket, Ok(Catalog::default())));
/// assert!(session.state().catalog().is_some());
/// ```
#[derive(Debug, Default)]
pub struct LoadSession {
    state: LoadState,
    current: u64,
}

impl LoadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Consume the session, yielding whatever state the last attempt reached.
    pub fn into_state(self) -> LoadState {
        self.state
    }

    /// Start a new load attempt, superseding any attempt still in flight.
    pub fn begin(&mut self) -> LoadTicket {
        self.current += 1;
        self.state = LoadState::Loading;
        LoadTicket(self.current)
    }

    /// Deliver the result of a load attempt.
    ///
    /// Returns `false` (and leaves the state untouched) when the ticket has
    /// been superseded by a newer `begin`, or when this attempt already
    /// reached a terminal state.
    pub fn complete(&mut self, ticket: LoadTicket, result: Result<Catalog, Error>) -> bool {
        if ticket.0 != self.current {
            tracing::debug!(ticket = ticket.0, current = self.current, "ignoring superseded load result");
            return false;
        }
        if self.state.is_terminal() {
            tracing::debug!(ticket = ticket.0, "ignoring duplicate load result");
            return false;
        }
        self.state = match result {
            Ok(catalog) => LoadState::Ready(catalog),
            Err(err) => LoadState::Failed(err),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn catalog(json: &str) -> Catalog {
        serde_json::from_str(json).unwrap()
    }

    fn failure() -> Error {
        exn::Exn::from(ErrorKind::Unavailable("boom".to_string()))
    }

    #[test]
    fn test_idle_until_first_begin() {
        let session = LoadSession::new();
        assert!(matches!(session.state(), LoadState::Idle));
    }

    #[test]
    fn test_happy_path() {
        let mut session = LoadSession::new();
        let ticket = session.begin();
        assert!(matches!(session.state(), LoadState::Loading));
        assert!(session.complete(ticket, Ok(Catalog::default())));
        assert!(matches!(session.state(), LoadState::Ready(_)));
    }

    #[test]
    fn test_failure_is_terminal_until_explicit_retry() {
        let mut session = LoadSession::new();
        let ticket = session.begin();
        assert!(session.complete(ticket, Err(failure())));
        assert!(matches!(session.state(), LoadState::Failed(_)));
        // No automatic transition out of Failed; a new begin is required.
        let retry = session.begin();
        assert!(matches!(session.state(), LoadState::Loading));
        assert!(session.complete(retry, Ok(Catalog::default())));
    }

    #[test]
    fn test_stale_result_does_not_overwrite_fresher_one() {
        let mut session = LoadSession::new();
        let first = session.begin();
        // The view re-requests while the first fetch is still in flight.
        let second = session.begin();

        let fresh = catalog(r#"[{"id": 2, "title": "Fresh", "type": "tutorial"}]"#);
        assert!(session.complete(second, Ok(fresh)));

        // The older response arrives last and must be dropped.
        let stale = catalog(r#"[{"id": 1, "title": "Stale", "type": "tutorial"}]"#);
        assert!(!session.complete(first, Ok(stale)));

        let loaded = session.state().catalog().unwrap();
        assert_eq!(loaded.records()[0].title, "Fresh");
    }

    #[test]
    fn test_stale_failure_does_not_clobber_success() {
        let mut session = LoadSession::new();
        let first = session.begin();
        let second = session.begin();
        assert!(session.complete(second, Ok(Catalog::default())));
        assert!(!session.complete(first, Err(failure())));
        assert!(matches!(session.state(), LoadState::Ready(_)));
    }

    #[test]
    fn test_duplicate_completion_ignored() {
        let mut session = LoadSession::new();
        let ticket = session.begin();
        assert!(session.complete(ticket, Ok(Catalog::default())));
        assert!(!session.complete(ticket, Err(failure())));
        assert!(matches!(session.state(), LoadState::Ready(_)));
    }
}
