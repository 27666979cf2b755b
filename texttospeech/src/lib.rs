//! # Text-to-Speech Client
//!
//! `texttospeech` is a gRPC client for the Cloud Text-to-Speech `v1beta1` API. It exposes the
//! two remote procedures of the service (listing voices and synthesizing speech) behind a
//! typed facade that takes care of the channel, the credentials and the per-method
//! retry/timeout policy.
//!
//! ## Key Components
//!
//! * **[`TextToSpeechClient`]:** The main entry point. It owns the channel, binds the default
//!   [`MethodConfig`] of each RPC and marshals caller arguments into request messages.
//! * **[`CallOptions`]:** Per-call overrides for the retry policy, the timeout and the request
//!   metadata.
//! * **[`Retry`]:** Exponential backoff policy applied to retryable status codes.
//! * **[`Credentials`]:** Bearer credentials attached to every outbound request.
//!
//! ## Generated code
//!
//! The protobuf messages, the low level stub and the server trait live in [`generated`] and are
//! re-exported through [`types`]. They are generated from `proto/cloud_tts.proto`.
//!
//! ## Feature Flags (Internal use only)
//!
//! * `gen-proto`: Enables the binary that regenerates the protobuf bindings.
//!
//! ## Re-exports
//!
//! This crate re-exports `prost` and `tonic` to ensure that consumers use compatible versions of
//! these underlying dependencies.
//!
//! ## Example
//!
//! ```rust,no_run
//! use texttospeech::{CallOptions, TextToSpeechClient};
//! use texttospeech::types::{AudioConfig, AudioEncoding, SynthesisInput, VoiceSelectionParams};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TextToSpeechClient::builder().build()?;
//!
//! let voices = client.list_voices(Some("en-US"), CallOptions::default()).await?;
//! println!("{} voices available", voices.voices.len());
//!
//! let response = client
//!     .synthesize_speech(
//!         SynthesisInput::text("Hello, world!"),
//!         VoiceSelectionParams::builder().language_code("en-US").build(),
//!         AudioConfig::builder().audio_encoding(AudioEncoding::Mp3).build(),
//!         CallOptions::default(),
//!     )
//!     .await?;
//!
//! std::fs::write("hello.mp3", response.audio_content)?;
//! # Ok(())
//! # }
//! ```
pub mod client;
pub mod client_info;
pub mod config;
pub mod credentials;
pub mod generated;
pub mod retry;
pub mod types;

pub use client::{CallError, CallOptions, ClientConfigError, RetryOverride, TextToSpeechClient};
pub use client_info::ClientInfo;
pub use config::{ClientConfig, MethodConfig};
pub use credentials::Credentials;
pub use retry::Retry;
pub use types::ArgumentError;

// Re-exports
pub use prost;
pub use tonic;

/// Type alias for the standard boxed error used in generic bounds.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
