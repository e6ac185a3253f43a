//! Authentication collaborator.
//!
//! The board is gated behind a signed-in user, but nothing in the engine
//! depends on identity beyond that gate, so the provider is a trait the host
//! wires in. [`MemoryAuth`] is the bundled in-process implementation with a
//! plain credential table; real deployments substitute their own backend.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from the authentication provider.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Sign-up for an email that already has an account
    #[error("account already exists: {email}")]
    AccountExists { email: String },

    /// Profile operation without a signed-in user
    #[error("not signed in")]
    NotSignedIn,
}

/// The signed-in user as the UI sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    /// Set when the session came from an external identity provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// Login/logout/current-user surface the board UI is gated behind.
pub trait AuthProvider {
    /// The currently signed-in user, if any.
    fn current_user(&self) -> Option<&User>;

    /// Whether a user is signed in.
    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Sign in with an email/password pair.
    fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError>;

    /// End the current session. Signing out twice is harmless.
    fn logout(&mut self);

    /// Create an account and sign it in.
    fn sign_up(&mut self, name: &str, email: &str, password: &str) -> Result<User, AuthError>;

    /// Update the signed-in user's display name and/or email.
    fn update_profile(
        &mut self,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<User, AuthError>;
}

#[derive(Debug, Clone)]
struct Account {
    name: Option<String>,
    password: String,
}

/// In-memory credential table.
#[derive(Debug, Default)]
pub struct MemoryAuth {
    accounts: HashMap<String, Account>,
    current: Option<User>,
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account without signing it in.
    pub fn with_account(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.accounts.insert(
            email.into(),
            Account {
                name: None,
                password: password.into(),
            },
        );
        self
    }
}

impl AuthProvider for MemoryAuth {
    fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let account = self
            .accounts
            .get(email)
            .filter(|a| a.password == password)
            .ok_or(AuthError::InvalidCredentials)?;
        let user = User {
            name: account.name.clone(),
            email: email.to_string(),
            provider: None,
        };
        self.current = Some(user.clone());
        Ok(user)
    }

    fn logout(&mut self) {
        self.current = None;
    }

    fn sign_up(&mut self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        if self.accounts.contains_key(email) {
            return Err(AuthError::AccountExists {
                email: email.to_string(),
            });
        }
        let name = if name.trim().is_empty() {
            None
        } else {
            Some(name.trim().to_string())
        };
        self.accounts.insert(
            email.to_string(),
            Account {
                name: name.clone(),
                password: password.to_string(),
            },
        );
        let user = User {
            name,
            email: email.to_string(),
            provider: None,
        };
        self.current = Some(user.clone());
        Ok(user)
    }

    fn update_profile(
        &mut self,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<User, AuthError> {
        let current = self.current.as_ref().ok_or(AuthError::NotSignedIn)?;
        let old_email = current.email.clone();

        if let Some(new_email) = &email {
            if new_email != &old_email && self.accounts.contains_key(new_email) {
                return Err(AuthError::AccountExists {
                    email: new_email.clone(),
                });
            }
        }

        let mut account = self
            .accounts
            .remove(&old_email)
            .ok_or(AuthError::NotSignedIn)?;
        if let Some(name) = &name {
            account.name = Some(name.clone());
        }
        let new_email = email.unwrap_or(old_email);
        let user = User {
            name: account.name.clone(),
            email: new_email.clone(),
            provider: self.current.as_ref().and_then(|u| u.provider.clone()),
        };
        self.accounts.insert(new_email, account);
        self.current = Some(user.clone());
        Ok(user)
    }
}
