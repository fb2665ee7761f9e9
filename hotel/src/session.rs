//! Session state for the interactive client.
//!
//! A [`Session`] holds at most one authenticated identity. It starts out
//! anonymous, is populated by a successful login and is cleared when the user
//! leaves the account menu. Workflows receive the session by reference
//! instead of reading a process-wide "current user".

use crate::error::{Error, Result};
use crate::model::UserId;

/// The authenticated user behind a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Key of the user in `Users`.
    pub user_id: UserId,
    /// Display name of the user.
    pub name: String,
}

/// The single active identity of the running client.
///
/// # Examples
///
/// ```
/// use hotel::{Identity, Session, UserId};
///
/// let mut session = Session::anonymous();
/// assert!(session.require_identity().is_err());
///
/// session.authenticate(Identity { user_id: UserId::new(7), name: "Ana".into() });
/// assert_eq!(session.require_identity().unwrap().user_id, UserId::new(7));
///
/// session.end();
/// assert!(!session.is_authenticated());
/// ```
#[derive(Debug, Default)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    /// Creates a session with no identity.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { identity: None }
    }

    /// Makes `identity` the active identity, replacing any previous one.
    pub fn authenticate(&mut self, identity: Identity) {
        log::info!("user {} ({}) logged in", identity.user_id, identity.name);
        self.identity = Some(identity);
    }

    /// Ends the authenticated sub-session.
    pub fn end(&mut self) {
        if let Some(identity) = self.identity.take() {
            log::info!("user {} logged out", identity.user_id);
        }
    }

    /// Returns the active identity, if any.
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Returns true once a login has succeeded and until [`Session::end`].
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Returns the active identity or fails for an anonymous session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLoggedIn`] if nobody is logged in.
    pub fn require_identity(&self) -> Result<&Identity> {
        self.identity.as_ref().ok_or(Error::NotLoggedIn)
    }
}
