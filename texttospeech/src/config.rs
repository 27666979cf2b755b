//! # Method Configuration
//!
//! Static per-RPC policy (retry behaviour and timeout) applied to every call unless it is
//! overridden per call.
//!
//! The table is a JSON document keyed by interface name. Each interface declares named sets of
//! retryable status codes, named backoff parameters and, per method, which of them it uses:
//!
//! ```json
//! {
//!   "interfaces": {
//!     "google.cloud.texttospeech.v1beta1.TextToSpeech": {
//!       "retry_codes": { "idempotent": ["DEADLINE_EXCEEDED", "UNAVAILABLE"] },
//!       "retry_params": { "default": { "initial_retry_delay_millis": 100, "...": 0 } },
//!       "methods": {
//!         "ListVoices": { "timeout_millis": 30000, "retry_codes_name": "idempotent", "retry_params_name": "default" }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! The table is parsed once, when the client is built, into a [`MethodConfig`] per method.
use crate::retry::Retry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tonic::Code;

/// Name under which the Text-to-Speech methods are looked up in a [`ClientConfig`].
pub const INTERFACE_NAME: &str = "google.cloud.texttospeech.v1beta1.TextToSpeech";

/// The built-in method configuration table.
pub const DEFAULT_CLIENT_CONFIG: &str = r#"{
  "interfaces": {
    "google.cloud.texttospeech.v1beta1.TextToSpeech": {
      "retry_codes": {
        "idempotent": ["DEADLINE_EXCEEDED", "UNAVAILABLE"],
        "non_idempotent": []
      },
      "retry_params": {
        "default": {
          "initial_retry_delay_millis": 100,
          "retry_delay_multiplier": 1.3,
          "max_retry_delay_millis": 60000,
          "initial_rpc_timeout_millis": 20000,
          "rpc_timeout_multiplier": 1.0,
          "max_rpc_timeout_millis": 20000,
          "total_timeout_millis": 600000
        }
      },
      "methods": {
        "ListVoices": {
          "timeout_millis": 30000,
          "retry_codes_name": "idempotent",
          "retry_params_name": "default"
        },
        "SynthesizeSpeech": {
          "timeout_millis": 30000,
          "retry_codes_name": "idempotent",
          "retry_params_name": "default"
        }
      }
    }
  }
}"#;

#[derive(Debug, thiserror::Error)]
pub enum ConfigParseError {
    #[error("Invalid client configuration: '{0}'")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Interface '{0}' not found in client configuration")]
    MissingInterface(String),
    #[error("Method '{method}' references unknown retry codes '{name}'")]
    UnknownRetryCodes { method: String, name: String },
    #[error("Method '{method}' references unknown retry params '{name}'")]
    UnknownRetryParams { method: String, name: String },
    #[error("Unknown status code name '{0}'")]
    UnknownStatusCode(String),
    #[error("Retry params '{name}' have an invalid delay multiplier: {multiplier}")]
    InvalidMultiplier { name: String, multiplier: f64 },
}

/// Retry and timeout policy bound to one RPC.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodConfig {
    /// `None` disables retries for the method.
    pub retry: Option<Retry>,
    /// Per-attempt timeout. `None` lets an attempt run until the transport gives up.
    pub timeout: Option<Duration>,
}

/// Raw client configuration table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub interfaces: HashMap<String, InterfaceConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterfaceConfig {
    #[serde(default)]
    pub retry_codes: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub retry_params: HashMap<String, RetryParams>,
    #[serde(default)]
    pub methods: HashMap<String, MethodSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryParams {
    pub initial_retry_delay_millis: u64,
    pub retry_delay_multiplier: f64,
    pub max_retry_delay_millis: u64,
    pub initial_rpc_timeout_millis: u64,
    pub rpc_timeout_multiplier: f64,
    pub max_rpc_timeout_millis: u64,
    pub total_timeout_millis: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodSettings {
    #[serde(default)]
    pub timeout_millis: Option<u64>,
    #[serde(default)]
    pub retry_codes_name: Option<String>,
    #[serde(default)]
    pub retry_params_name: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        serde_json::from_str(DEFAULT_CLIENT_CONFIG).expect("built-in client config is valid")
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves the [`MethodConfig`] of every method declared for `interface`.
    ///
    /// When a method references retry params, its per-attempt timeout is the initial RPC timeout
    /// of those params; otherwise it is the method's own `timeout_millis`.
    pub fn method_configs(
        &self,
        interface: &str,
    ) -> Result<HashMap<String, MethodConfig>, ConfigParseError> {
        let interface_config = self
            .interfaces
            .get(interface)
            .ok_or_else(|| ConfigParseError::MissingInterface(interface.to_string()))?;

        interface_config
            .methods
            .iter()
            .map(|(name, settings)| {
                let config = interface_config.method_config(name, settings)?;
                Ok((name.clone(), config))
            })
            .collect()
    }
}

impl InterfaceConfig {
    fn method_config(
        &self,
        method: &str,
        settings: &MethodSettings,
    ) -> Result<MethodConfig, ConfigParseError> {
        let constant_timeout = settings.timeout_millis.map(Duration::from_millis);

        let Some(params_name) = &settings.retry_params_name else {
            return Ok(MethodConfig {
                retry: None,
                timeout: constant_timeout,
            });
        };

        let params = self.retry_params.get(params_name).ok_or_else(|| {
            ConfigParseError::UnknownRetryParams {
                method: method.to_string(),
                name: params_name.clone(),
            }
        })?;

        if !params.retry_delay_multiplier.is_finite() || params.retry_delay_multiplier < 0.0 {
            return Err(ConfigParseError::InvalidMultiplier {
                name: params_name.clone(),
                multiplier: params.retry_delay_multiplier,
            });
        }

        let codes = match &settings.retry_codes_name {
            Some(codes_name) => {
                let names = self.retry_codes.get(codes_name).ok_or_else(|| {
                    ConfigParseError::UnknownRetryCodes {
                        method: method.to_string(),
                        name: codes_name.clone(),
                    }
                })?;

                names
                    .iter()
                    .map(|name| {
                        code_from_name(name)
                            .ok_or_else(|| ConfigParseError::UnknownStatusCode(name.clone()))
                    })
                    .collect::<Result<Vec<_>, _>>()?
            }
            None => Vec::new(),
        };

        let retry = (!codes.is_empty()).then(|| {
            Retry::new(codes)
                .with_initial_delay(Duration::from_millis(params.initial_retry_delay_millis))
                .with_multiplier(params.retry_delay_multiplier)
                .with_max_delay(Duration::from_millis(params.max_retry_delay_millis))
                .with_deadline(Some(Duration::from_millis(params.total_timeout_millis)))
        });

        Ok(MethodConfig {
            retry,
            timeout: Some(Duration::from_millis(params.initial_rpc_timeout_millis)),
        })
    }
}

/// Maps a canonical gRPC status code name (e.g. `UNAVAILABLE`) to its [`Code`].
pub fn code_from_name(name: &str) -> Option<Code> {
    let code = match name {
        "OK" => Code::Ok,
        "CANCELLED" => Code::Cancelled,
        "UNKNOWN" => Code::Unknown,
        "INVALID_ARGUMENT" => Code::InvalidArgument,
        "DEADLINE_EXCEEDED" => Code::DeadlineExceeded,
        "NOT_FOUND" => Code::NotFound,
        "ALREADY_EXISTS" => Code::AlreadyExists,
        "PERMISSION_DENIED" => Code::PermissionDenied,
        "RESOURCE_EXHAUSTED" => Code::ResourceExhausted,
        "FAILED_PRECONDITION" => Code::FailedPrecondition,
        "ABORTED" => Code::Aborted,
        "OUT_OF_RANGE" => Code::OutOfRange,
        "UNIMPLEMENTED" => Code::Unimplemented,
        "INTERNAL" => Code::Internal,
        "UNAVAILABLE" => Code::Unavailable,
        "DATA_LOSS" => Code::DataLoss,
        "UNAUTHENTICATED" => Code::Unauthenticated,
        _ => return None,
    };

    Some(code)
}
