//! Session credential storage and the logged-in/logged-out state machine.
//!
//! The token issued by a successful login is persisted so the session
//! survives a restart: on startup [`Session::restore`] verifies the stored
//! token against the auth service and either resumes the session or clears
//! the stale credential. Sign-out and token invalidation both end at
//! `LoggedOut` with an empty store.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::api::Auth;
use crate::error::ApiError;
use crate::types::{Account, AuthSession};

/// Where the session currently stands. There are only two states; the
/// transitions are login success, sign-out, and token invalidation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    LoggedOut,
    LoggedIn(Account),
}

/// Errors from session operations: either the credential store or the
/// network verification failed.
#[derive(Debug)]
pub enum SessionError {
    Storage(io::Error),
    Api(ApiError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Storage(e) => write!(f, "credential store failed: {e}"),
            SessionError::Api(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        SessionError::Storage(e)
    }
}

impl From<ApiError> for SessionError {
    fn from(e: ApiError) -> Self {
        SessionError::Api(e)
    }
}

/// File-backed store for the session token.
///
/// One token, one file. `load` treats a missing file as "no session" and
/// `clear` is idempotent, so callers never need to special-case first runs
/// or repeated sign-outs.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store under the platform data directory.
    pub fn new() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("places");
        Self {
            path: base.join("session-token"),
        }
    }

    /// Store at an explicit path (tests, alternate profiles).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    pub fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(token) => Ok(Some(token.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The session state machine, coupled to a [`TokenStore`].
#[derive(Debug)]
pub struct Session {
    store: TokenStore,
    status: SessionStatus,
}

impl Session {
    pub fn new(store: TokenStore) -> Self {
        Self {
            store,
            status: SessionStatus::LoggedOut,
        }
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.status, SessionStatus::LoggedIn(_))
    }

    pub fn account(&self) -> Option<&Account> {
        match &self.status {
            SessionStatus::LoggedIn(account) => Some(account),
            SessionStatus::LoggedOut => None,
        }
    }

    /// The persisted token, if any.
    pub fn token(&self) -> io::Result<Option<String>> {
        self.store.load()
    }

    /// Resume the session on startup: verify the stored token, if there is
    /// one. A 401 means the token went stale; it is removed from the store
    /// and the session stays logged out. Other failures, like the service
    /// being unreachable, propagate without touching the stored token.
    pub fn restore(&mut self, auth: &Auth) -> Result<&SessionStatus, SessionError> {
        match self.store.load()? {
            None => self.status = SessionStatus::LoggedOut,
            Some(token) => match auth.get_content(&token) {
                Ok(account) => {
                    log::debug!("restored session for {}", account.email);
                    self.status = SessionStatus::LoggedIn(account);
                }
                Err(ApiError::Unauthorized) => {
                    log::info!("stored token rejected, signing out");
                    self.store.clear()?;
                    self.status = SessionStatus::LoggedOut;
                }
                Err(e) => return Err(e.into()),
            },
        }
        Ok(&self.status)
    }

    /// Log in: authorize, persist the issued token, resolve the account.
    /// Returns the granted token so the caller can build an authenticated
    /// resource client from it.
    pub fn login(
        &mut self,
        auth: &Auth,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, SessionError> {
        let granted = auth.authorize(email, password)?;
        self.store.save(&granted.token)?;
        let account = auth.get_content(&granted.token)?;
        self.status = SessionStatus::LoggedIn(account);
        Ok(granted)
    }

    /// Sign out: destroy the persisted token and drop to `LoggedOut`.
    pub fn logout(&mut self) -> io::Result<()> {
        self.store.clear()?;
        self.status = SessionStatus::LoggedOut;
        Ok(())
    }
}
