//! Login state.
//!
//! The client is "logged in" when the persisted credential equals the
//! configured secret. Nothing is cached: every check re-reads the store.

use crate::error::AuthError;
use crate::storage::CredentialStore;

/// Whether `credential` grants access. An empty credential never does.
pub fn is_authenticated(credential: &str, secret: &str) -> bool {
    !credential.is_empty() && credential == secret
}

pub struct AuthStore<S> {
    store: S,
    secret: String,
    input: String,
    error: String,
}

impl<S: CredentialStore> AuthStore<S> {
    pub fn new(store: S, secret: impl Into<String>) -> Self {
        Self {
            store,
            secret: secret.into(),
            input: String::new(),
            error: String::new(),
        }
    }

    /// The persisted credential, or an empty string.
    pub fn credential(&self) -> String {
        self.store.load().unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        is_authenticated(&self.credential(), &self.secret)
    }

    /// Current contents of the login field.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Last login error, empty when there is none.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn set_credential(&mut self, value: &str) -> Result<(), AuthError> {
        self.store.save(value)?;
        Ok(())
    }

    /// Compare `candidate` with the secret. A match persists it and resets
    /// the form; a mismatch only sets the error.
    pub fn authenticate(&mut self, candidate: &str) -> Result<(), AuthError> {
        if !is_authenticated(candidate, &self.secret) {
            self.error = AuthError::InvalidSecret.to_string();
            return Err(AuthError::InvalidSecret);
        }

        if let Err(e) = self.set_credential(candidate) {
            self.error = e.to_string();
            return Err(e);
        }

        self.error.clear();
        self.input.clear();
        log::info!("authenticated");
        Ok(())
    }

    /// Authenticate with whatever is in the login field.
    pub fn submit(&mut self) -> Result<(), AuthError> {
        let candidate = self.input.clone();
        self.authenticate(&candidate)
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            log::warn!("failed to clear credential on logout: {}", e);
        }
        self.input.clear();
        self.error.clear();
        log::info!("logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store_with_secret(secret: &str) -> (AuthStore<MemoryStore>, MemoryStore) {
        let backing = MemoryStore::new();
        (AuthStore::new(backing.clone(), secret), backing)
    }

    #[test]
    fn matching_secret_authenticates_and_resets_form() {
        let (mut auth, backing) = store_with_secret("abc123");
        auth.set_input("abc123");

        assert!(auth.submit().is_ok());
        assert!(auth.is_authenticated());
        assert_eq!(auth.error(), "");
        assert_eq!(auth.input(), "");
        assert_eq!(backing.load().as_deref(), Some("abc123"));
    }

    #[test]
    fn wrong_secret_sets_error_and_keeps_credential() {
        let (mut auth, backing) = store_with_secret("abc123");
        backing.save("stale").unwrap();

        for candidate in ["abc12", "ABC123", "abc123 ", "x"] {
            assert_eq!(auth.authenticate(candidate), Err(AuthError::InvalidSecret));
            assert!(!auth.is_authenticated());
            assert_eq!(auth.error(), "Invalid secret key");
            assert_eq!(backing.load().as_deref(), Some("stale"));
        }
    }

    #[test]
    fn failed_attempt_keeps_the_typed_input() {
        let (mut auth, _) = store_with_secret("abc123");
        auth.set_input("nope");
        assert!(auth.submit().is_err());
        assert_eq!(auth.input(), "nope");
    }

    #[test]
    fn logout_then_empty_submit_stays_logged_out() {
        let (mut auth, backing) = store_with_secret("abc123");
        auth.authenticate("abc123").unwrap();
        auth.logout();

        auth.set_input("");
        assert!(auth.submit().is_err());
        assert!(!auth.is_authenticated());
        assert!(!auth.error().is_empty());
        assert_eq!(auth.credential(), "");
        assert_eq!(backing.load(), None);
    }

    #[test]
    fn logout_always_clears() {
        let (mut auth, backing) = store_with_secret("abc123");
        auth.logout();
        assert!(!auth.is_authenticated());

        backing.save("abc123").unwrap();
        auth.set_input("typing");
        auth.authenticate("bad").unwrap_err();
        auth.logout();
        assert!(!auth.is_authenticated());
        assert_eq!(auth.input(), "");
        assert_eq!(auth.error(), "");
        assert_eq!(backing.load(), None);
    }

    #[test]
    fn empty_secret_never_authenticates() {
        let (mut auth, _) = store_with_secret("");
        assert!(auth.authenticate("").is_err());
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn derived_state_is_a_pure_function_of_its_inputs() {
        for (credential, secret) in [("abc123", "abc123"), ("abc123", "other"), ("", "")] {
            let first = is_authenticated(credential, secret);
            assert_eq!(first, is_authenticated(credential, secret));
        }
        assert!(is_authenticated("abc123", "abc123"));
        assert!(!is_authenticated("abc123", "other"));
        assert!(!is_authenticated("", ""));
    }

    #[test]
    fn credential_written_elsewhere_is_picked_up() {
        let (auth, backing) = store_with_secret("abc123");
        assert!(!auth.is_authenticated());
        backing.save("abc123").unwrap();
        assert!(auth.is_authenticated());
    }
}
