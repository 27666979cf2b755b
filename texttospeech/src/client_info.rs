//! # Client Identification
//!
//! Metadata sent with every request so the service can tell which library (and which version of
//! it) issued the call.
//!
//! A configured user agent prefixes the `x-goog-api-client` value on every channel. gRPC reserves
//! the `user-agent` header, so it is only set as a header on the endpoint of the default channel.
use crate::types::ArgumentError;
use tonic::metadata::{AsciiMetadataValue, MetadataMap};

/// Version of this library, baked in at build time.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const API_CLIENT_HEADER: &str = "x-goog-api-client";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    pub gapic_version: String,
    pub user_agent: Option<String>,
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            gapic_version: CLIENT_VERSION.to_string(),
            user_agent: None,
        }
    }
}

impl ClientInfo {
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Value of the `x-goog-api-client` metadata entry.
    pub fn api_client_header(&self) -> String {
        let header = format!("gl-rust gapic/{} grpc/tonic", self.gapic_version);

        match &self.user_agent {
            Some(user_agent) => format!("{user_agent} {header}"),
            None => header,
        }
    }

    pub(crate) fn apply(&self, metadata: &mut MetadataMap) -> Result<(), ArgumentError> {
        let value = AsciiMetadataValue::try_from(self.api_client_header()).map_err(|source| {
            ArgumentError::InvalidMetadataValue {
                key: API_CLIENT_HEADER.to_string(),
                source,
            }
        })?;
        metadata.insert(API_CLIENT_HEADER, value);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_reports_crate_version() {
        let info = ClientInfo::default();

        assert_eq!(info.gapic_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(
            info.api_client_header(),
            format!("gl-rust gapic/{} grpc/tonic", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_apply_sets_api_client_header() {
        let mut metadata = MetadataMap::new();
        ClientInfo::default()
            .with_user_agent("my-app/1.0")
            .apply(&mut metadata)
            .unwrap();

        assert_eq!(
            metadata.get(API_CLIENT_HEADER).unwrap().to_str().unwrap(),
            format!("my-app/1.0 gl-rust gapic/{CLIENT_VERSION} grpc/tonic")
        );
        assert!(metadata.get("user-agent").is_none());
    }

    #[test]
    fn test_invalid_version_is_an_argument_error() {
        let info = ClientInfo {
            gapic_version: "1.0\n".to_string(),
            user_agent: None,
        };

        assert!(matches!(
            info.apply(&mut MetadataMap::new()),
            Err(ArgumentError::InvalidMetadataValue { key, .. }) if key == API_CLIENT_HEADER
        ));
    }
}
