//! Admin session gate.
//!
//! A convenience gate for the operator surface, not a security boundary: the
//! passcode comparison happens wherever the store lives, with no identity,
//! lockout, or server-side validation. The flag survives as long as the
//! backing store does.

use crate::error::StoreError;
use crate::store::{ContentStore, SESSION_FLAG_KEY};

/// Sentinel stored under the session flag key while authenticated.
const AUTH_SENTINEL: &[u8] = b"true";

/// Two-state gate over the session flag: unauthenticated until `login`
/// succeeds, unauthenticated again after `logout`.
pub struct SessionGuard<S: ContentStore> {
    store: S,
    passcode: String,
}

impl<S: ContentStore> SessionGuard<S> {
    pub fn new(store: S, passcode: impl Into<String>) -> Self {
        Self {
            store,
            passcode: passcode.into(),
        }
    }

    /// Sets the session flag iff `passcode` matches the configured value
    /// exactly. Returns whether the login succeeded.
    pub fn login(&self, passcode: &str) -> Result<bool, StoreError> {
        if passcode == self.passcode {
            self.store.set(SESSION_FLAG_KEY, AUTH_SENTINEL)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Clears the session flag regardless of prior state.
    pub fn logout(&self) -> Result<(), StoreError> {
        self.store.remove(SESSION_FLAG_KEY)
    }

    /// True when the flag is present and equal to the sentinel. A missing,
    /// corrupt, or unreadable flag counts as unauthenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(
            self.store.get(SESSION_FLAG_KEY),
            Ok(Some(v)) if v.as_slice() == AUTH_SENTINEL
        )
    }
}
