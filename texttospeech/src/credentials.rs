//! # Credentials
//!
//! Bearer credentials attached to every request sent through a channel created by the client.
//!
//! Minting OAuth tokens is out of the scope of this crate: the credentials carry an already
//! issued access token, either handed over by the caller or picked up from the environment.
use std::fmt;
use tonic::metadata::{AsciiMetadataValue, errors::InvalidMetadataValue};

/// OAuth scope required by every method of the service.
pub const DEFAULT_SCOPES: &[&str] = &["https://www.googleapis.com/auth/cloud-platform"];

/// Environment variables checked, in order, by [`Credentials::from_env`].
pub const TOKEN_ENV_VARS: &[&str] = &["GOOGLE_OAUTH_ACCESS_TOKEN", "CLOUDSDK_AUTH_ACCESS_TOKEN"];

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    scopes: Vec<String>,
}

impl Credentials {
    /// Credentials for an already issued access token, scoped to [`DEFAULT_SCOPES`].
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Resolves the ambient credentials from the first non-empty variable of [`TOKEN_ENV_VARS`].
    pub fn from_env() -> Option<Self> {
        TOKEN_ENV_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|token| !token.trim().is_empty()))
            .map(|token| Self::bearer(token.trim()))
    }

    #[must_use]
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Value of the `authorization` metadata entry.
    pub fn authorization_value(&self) -> Result<AsciiMetadataValue, InvalidMetadataValue> {
        let mut value = AsciiMetadataValue::try_from(format!("Bearer {}", self.token))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("scopes", &self.scopes)
            .finish()
    }
}
