//! # Per-call Options
//!
//! Overrides applied to a single call. Anything left unset falls back to the [`MethodConfig`]
//! bound to the method when the client was built.
use crate::{config::MethodConfig, retry::Retry};
use std::time::Duration;

/// How the retry policy of a single call is chosen.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RetryOverride {
    /// Use the retry policy bound to the method.
    #[default]
    Default,
    /// Perform a single attempt, even if the method is configured to retry.
    Disabled,
    /// Use this policy instead of the bound one.
    Policy(Retry),
}

/// Options of a single call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    pub retry: RetryOverride,
    /// Per-attempt timeout. `None` uses the method's bound timeout.
    pub timeout: Option<Duration>,
    /// Additional metadata (headers) attached to the outbound request.
    pub metadata: Vec<(String, String)>,
}

impl CallOptions {
    #[must_use]
    pub fn with_retry(mut self, retry: Retry) -> Self {
        self.retry = RetryOverride::Policy(retry);
        self
    }

    #[must_use]
    pub fn without_retry(mut self) -> Self {
        self.retry = RetryOverride::Disabled;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }

    /// Effective retry policy and timeout of a call against a method bound to `config`.
    pub(crate) fn resolve<'a>(
        &'a self,
        config: &'a MethodConfig,
    ) -> (Option<&'a Retry>, Option<Duration>) {
        let retry = match &self.retry {
            RetryOverride::Default => config.retry.as_ref(),
            RetryOverride::Disabled => None,
            RetryOverride::Policy(retry) => Some(retry),
        };

        (retry, self.timeout.or(config.timeout))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tonic::Code;

    fn bound() -> MethodConfig {
        MethodConfig {
            retry: Some(Retry::default()),
            timeout: Some(Duration::from_secs(20)),
        }
    }

    #[test]
    fn test_unset_options_use_bound_defaults() {
        let config = bound();
        let options = CallOptions::default();

        let (retry, timeout) = options.resolve(&config);

        assert_eq!(retry, Some(&Retry::default()));
        assert_eq!(timeout, Some(Duration::from_secs(20)));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = bound();
        let custom = Retry::new([Code::Internal]);
        let options = CallOptions::default()
            .with_retry(custom.clone())
            .with_timeout(Duration::from_millis(250));

        let (retry, timeout) = options.resolve(&config);

        assert_eq!(retry, Some(&custom));
        assert_eq!(timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_disabled_retry_ignores_bound_policy() {
        let config = bound();
        let options = CallOptions::default().without_retry();

        let (retry, timeout) = options.resolve(&config);

        assert_eq!(retry, None);
        assert_eq!(timeout, Some(Duration::from_secs(20)));
    }

    #[test]
    fn test_metadata_keeps_order_and_duplicates() {
        let options = CallOptions::default()
            .with_metadata("x-trace", "a")
            .with_metadata("x-trace", "b");

        assert_eq!(
            options.metadata,
            vec![
                ("x-trace".to_string(), "a".to_string()),
                ("x-trace".to_string(), "b".to_string()),
            ]
        );
    }
}
