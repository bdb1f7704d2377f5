//! Identity issuance consumed by entry submission.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque user identifier issued by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wraps a service-issued identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
/// Errors returned by the identity service.
pub enum IdentityError {
    /// Network or service failure.
    #[error("identity transport failure: {message}")]
    Transport {
        /// Error message.
        message: String,
    },
}

#[async_trait]
/// Anonymous/token identity issuance.
pub trait IdentityProvider: Send + Sync {
    /// Returns the signed-in identity, if any.
    async fn current_identity(&self) -> Result<Option<UserId>, IdentityError>;

    /// Signs in anonymously and returns the issued identity.
    async fn sign_in_anonymously(&self) -> Result<UserId, IdentityError>;
}

#[cfg(any(test, feature = "mock"))]
pub use mock::MockIdentityProvider;

#[cfg(any(test, feature = "mock"))]
mod mock {
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use uuid::Uuid;

    use super::{IdentityError, IdentityProvider, UserId};

    /// In-memory identity provider for tests and examples.
    #[derive(Default)]
    pub struct MockIdentityProvider {
        current: Mutex<Option<UserId>>,
    }

    impl MockIdentityProvider {
        pub fn new() -> Self {
            Self::default()
        }

        /// Starts the provider already signed in as `id`.
        pub fn signed_in(id: UserId) -> Self {
            Self {
                current: Mutex::new(Some(id)),
            }
        }
    }

    #[async_trait]
    impl IdentityProvider for MockIdentityProvider {
        async fn current_identity(&self) -> Result<Option<UserId>, IdentityError> {
            Ok(self.current.lock().clone())
        }

        async fn sign_in_anonymously(&self) -> Result<UserId, IdentityError> {
            let id = UserId::new(Uuid::new_v4().to_string());
            *self.current.lock() = Some(id.clone());
            Ok(id)
        }
    }
}
