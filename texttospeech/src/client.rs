//! # Text-to-Speech Client
//!
//! This module implements the facade over the generated `TextToSpeech` stub.
//!
//! The [`TextToSpeechClient`] owns the channel, the credentials attached to every request, the
//! client identification metadata and the [`MethodConfig`] bound to each RPC. Every call builds a
//! fresh request message from the caller arguments, runs it through the retry executor and
//! returns the response message untouched.
//!
//! ## Construction
//!
//! Clients are created with [`TextToSpeechClient::builder`]. The builder follows a typestate
//! pattern:
//!
//! 1. **[`DefaultChannel`]**: No channel was supplied. `build` creates a lazy TLS channel to
//!    [`SERVICE_ADDRESS`] and attaches the supplied credentials, or the ones found in the
//!    environment.
//! 2. **[`CustomChannel`]**: A channel (or any `GrpcService`) was supplied. Channels come with
//!    their own authentication, so supplying credentials as well is a configuration error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use texttospeech::{CallOptions, Credentials, TextToSpeechClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TextToSpeechClient::builder()
//!     .credentials(Credentials::bearer("ya29.access-token"))
//!     .build()?;
//!
//! let options = CallOptions::default()
//!     .without_retry()
//!     .with_timeout(Duration::from_secs(5));
//!
//! let voices = client.list_voices(None, options).await?;
//! # Ok(())
//! # }
//! ```
mod builder;
mod options;

pub use builder::{CustomChannel, DefaultChannel, TextToSpeechClientBuilder};
pub use options::{CallOptions, RetryOverride};

use crate::{
    BoxError,
    client_info::ClientInfo,
    config::{ConfigParseError, MethodConfig},
    credentials::Credentials,
    generated::texttospeech_v1beta1::text_to_speech_client::TextToSpeechClient as TextToSpeechStub,
    retry,
    types::{
        ArgumentError, AudioConfig, ListVoicesRequest, ListVoicesResponse, SynthesisInput,
        SynthesizeSpeechRequest, SynthesizeSpeechResponse, VoiceSelectionParams,
    },
};
use http::Uri;
use http_body::Body as HttpBody;
use std::{str::FromStr, time::Duration};
use tonic::{
    client::GrpcService,
    metadata::{Ascii, AsciiMetadataValue, MetadataKey, MetadataValue},
    transport::Channel,
};

/// The default address of the service.
pub const SERVICE_ADDRESS: &str = "https://texttospeech.googleapis.com:443";

/// Domain name checked against the server certificate of [`SERVICE_ADDRESS`].
pub const SERVICE_DOMAIN: &str = "texttospeech.googleapis.com";

pub const LIST_VOICES: &str = "ListVoices";
pub const SYNTHESIZE_SPEECH: &str = "SynthesizeSpeech";

const AUTHORIZATION_HEADER: &str = "authorization";

/// Errors detected locally while configuring the client, before any network activity.
#[derive(Debug, thiserror::Error)]
pub enum ClientConfigError {
    #[error("The `channel` and `credentials` arguments are mutually exclusive")]
    ChannelAndCredentials,
    #[error(
        "No credentials were supplied and none were found in the environment (GOOGLE_OAUTH_ACCESS_TOKEN, CLOUDSDK_AUTH_ACCESS_TOKEN)"
    )]
    MissingCredentials,
    #[error("Invalid credentials: '{0}'")]
    InvalidCredentials(#[source] tonic::metadata::errors::InvalidMetadataValue),
    #[error("Failed to configure the channel to '{address}': '{source}'")]
    InvalidChannel {
        address: &'static str,
        source: tonic::transport::Error,
    },
    #[error(transparent)]
    InvalidMethodConfig(#[from] ConfigParseError),
    #[error("Method '{0}' has no configuration")]
    UnconfiguredMethod(&'static str),
}

/// Errors returned by the calls of a [`TextToSpeechClient`].
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The service (or the transport) reported a failure that was not retried.
    #[error("gRPC call failed: '{0}'")]
    Status(#[source] tonic::Status),
    /// A retryable failure persisted past the retry budget.
    #[error("Retry budget exhausted after {attempts} attempt(s), last error: '{last}'")]
    RetryExhausted {
        attempts: u32,
        #[source]
        last: tonic::Status,
    },
    #[error(transparent)]
    Config(#[from] ClientConfigError),
    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

impl CallError {
    /// The status of the last failed attempt, if the call reached the transport.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            CallError::Status(status) => Some(status),
            CallError::RetryExhausted { last, .. } => Some(last),
            _ => None,
        }
    }
}

/// Client for the `google.cloud.texttospeech.v1beta1.TextToSpeech` service.
///
/// Cloning the client is cheap: clones share the underlying channel.
#[derive(Debug, Clone)]
pub struct TextToSpeechClient<S = Channel> {
    stub: TextToSpeechStub<S>,
    endpoint: Option<Uri>,
    credentials: Option<Credentials>,
    authorization: Option<AsciiMetadataValue>,
    client_info: ClientInfo,
    list_voices_config: Option<MethodConfig>,
    synthesize_speech_config: Option<MethodConfig>,
}

impl TextToSpeechClient<Channel> {
    pub fn builder() -> TextToSpeechClientBuilder {
        TextToSpeechClientBuilder::default()
    }
}

impl<S> TextToSpeechClient<S> {
    /// Address of the service when the client created its own channel.
    pub fn endpoint(&self) -> Option<&Uri> {
        self.endpoint.as_ref()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn client_info(&self) -> &ClientInfo {
        &self.client_info
    }

    /// The configuration bound to `method` (`ListVoices` or `SynthesizeSpeech`).
    pub fn method_config(&self, method: &str) -> Option<&MethodConfig> {
        match method {
            LIST_VOICES => self.list_voices_config.as_ref(),
            SYNTHESIZE_SPEECH => self.synthesize_speech_config.as_ref(),
            _ => None,
        }
    }
}

impl<S> TextToSpeechClient<S>
where
    S: GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Returns the voices supported for synthesis.
    ///
    /// # Arguments
    ///
    /// * `language_code` - Optional BCP-47 tag. When set, only voices able to synthesize this
    ///   language are returned. `None` and `Some("")` both return every voice.
    /// * `options` - Per-call overrides.
    ///
    /// # Returns
    ///
    /// * `Ok(ListVoicesResponse)` - The response exactly as sent by the service.
    /// * `Err(CallError)` - See [`CallError`] for the possible failures.
    pub async fn list_voices(
        &self,
        language_code: Option<&str>,
        options: CallOptions,
    ) -> Result<ListVoicesResponse, CallError> {
        let config = self
            .list_voices_config
            .as_ref()
            .ok_or(ClientConfigError::UnconfiguredMethod(LIST_VOICES))?;
        let (retry, timeout) = options.resolve(config);

        let message = ListVoicesRequest::for_language(language_code);

        retry::execute(LIST_VOICES, retry, timeout, || {
            let request = self.build_request(message.clone(), &options.metadata, timeout)?;
            let mut stub = self.stub.clone();

            Ok(async move {
                stub.list_voices(request)
                    .await
                    .map(tonic::Response::into_inner)
            })
        })
        .await
    }

    /// Synthesizes speech synchronously: the response arrives once all the input was processed.
    ///
    /// # Arguments
    ///
    /// * `input` - Plain text or SSML.
    /// * `voice` - The desired voice of the synthesized audio.
    /// * `audio_config` - The configuration of the synthesized audio.
    /// * `options` - Per-call overrides.
    pub async fn synthesize_speech(
        &self,
        input: SynthesisInput,
        voice: VoiceSelectionParams,
        audio_config: AudioConfig,
        options: CallOptions,
    ) -> Result<SynthesizeSpeechResponse, CallError> {
        let request = SynthesizeSpeechRequest::new(input, voice, audio_config);
        self.synthesize_speech_request(request, options).await
    }

    /// Sends a pre-built [`SynthesizeSpeechRequest`], see [`SynthesizeSpeechRequest::builder`].
    ///
    /// The request is sent as is: its contents are validated by the service.
    pub async fn synthesize_speech_request(
        &self,
        message: SynthesizeSpeechRequest,
        options: CallOptions,
    ) -> Result<SynthesizeSpeechResponse, CallError> {
        let config = self
            .synthesize_speech_config
            .as_ref()
            .ok_or(ClientConfigError::UnconfiguredMethod(SYNTHESIZE_SPEECH))?;
        let (retry, timeout) = options.resolve(config);

        retry::execute(SYNTHESIZE_SPEECH, retry, timeout, || {
            let request = self.build_request(message.clone(), &options.metadata, timeout)?;
            let mut stub = self.stub.clone();

            Ok(async move {
                stub.synthesize_speech(request)
                    .await
                    .map(tonic::Response::into_inner)
            })
        })
        .await
    }

    fn build_request<T>(
        &self,
        message: T,
        metadata: &[(String, String)],
        timeout: Option<Duration>,
    ) -> Result<tonic::Request<T>, ArgumentError> {
        let mut request = tonic::Request::new(message);

        self.client_info.apply(request.metadata_mut())?;

        if let Some(authorization) = &self.authorization {
            request
                .metadata_mut()
                .insert(AUTHORIZATION_HEADER, authorization.clone());
        }

        for (k, v) in metadata {
            let key = MetadataKey::<Ascii>::from_str(k).map_err(|source| {
                ArgumentError::InvalidMetadataKey {
                    key: k.clone(),
                    source,
                }
            })?;
            let val = MetadataValue::from_str(v).map_err(|source| {
                ArgumentError::InvalidMetadataValue {
                    key: k.clone(),
                    source,
                }
            })?;
            request.metadata_mut().append(key, val);
        }

        if let Some(timeout) = timeout {
            request.set_timeout(timeout);
        }

        Ok(request)
    }
}
