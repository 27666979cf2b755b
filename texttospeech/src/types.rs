//! # Request and Response Values
//!
//! Re-exports the protobuf messages of the service and adds typed constructors so callers
//! build every request value explicitly.
//!
//! The required fields of a synthesis request are enforced by the type system when calling
//! [`crate::TextToSpeechClient::synthesize_speech`]. Callers that assemble the request piece by
//! piece use [`SynthesizeSpeechRequest::builder`], which reports a missing field as an
//! [`ArgumentError`] before anything is sent. The *contents* of the fields (language tags,
//! SSML markup, encodings) are never validated locally: the service rejects invalid values.
use tonic::metadata::errors::{InvalidMetadataKey, InvalidMetadataValue};

pub use crate::generated::texttospeech_v1beta1::{
    AudioConfig, AudioEncoding, ListVoicesRequest, ListVoicesResponse, SsmlVoiceGender,
    SynthesisInput, SynthesizeSpeechRequest, SynthesizeSpeechResponse, Voice,
    VoiceSelectionParams, synthesis_input::InputSource,
};

/// Errors raised while shaping a request, before it reaches the transport.
#[derive(Debug, thiserror::Error)]
pub enum ArgumentError {
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
    #[error("Invalid metadata (header) key '{key}': '{source}'")]
    InvalidMetadataKey {
        key: String,
        source: InvalidMetadataKey,
    },
    #[error("Invalid metadata (header) value for key '{key}': '{source}'")]
    InvalidMetadataValue {
        key: String,
        source: InvalidMetadataValue,
    },
}

impl ListVoicesRequest {
    /// Builds the request for an optional language filter.
    ///
    /// `None` and an empty tag are equivalent: both ask for every supported voice.
    pub fn for_language(language_code: Option<&str>) -> Self {
        Self {
            language_code: language_code.unwrap_or_default().to_string(),
        }
    }
}

impl SynthesisInput {
    /// Plain text to be synthesized.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            input_source: Some(InputSource::Text(text.into())),
        }
    }

    /// SSML document to be synthesized.
    pub fn ssml(ssml: impl Into<String>) -> Self {
        Self {
            input_source: Some(InputSource::Ssml(ssml.into())),
        }
    }
}

impl VoiceSelectionParams {
    pub fn builder() -> VoiceSelectionParamsBuilder {
        VoiceSelectionParamsBuilder::default()
    }
}

/// Builder for [`VoiceSelectionParams`].
#[derive(Debug, Clone, Default)]
pub struct VoiceSelectionParamsBuilder {
    params: VoiceSelectionParams,
}

impl VoiceSelectionParamsBuilder {
    /// BCP-47 language tag of the voice (e.g. `en-US`).
    pub fn language_code(mut self, language_code: impl Into<String>) -> Self {
        self.params.language_code = language_code.into();
        self
    }

    /// Name of a specific voice (e.g. `en-US-Wavenet-D`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.params.name = name.into();
        self
    }

    pub fn ssml_gender(mut self, gender: SsmlVoiceGender) -> Self {
        self.params.set_ssml_gender(gender);
        self
    }

    pub fn build(self) -> VoiceSelectionParams {
        self.params
    }
}

impl AudioConfig {
    pub fn builder() -> AudioConfigBuilder {
        AudioConfigBuilder::default()
    }
}

/// Builder for [`AudioConfig`].
///
/// Unset numeric fields stay at zero, which the service interprets as its own default
/// (normal speaking rate, original pitch, no gain, natural sample rate).
#[derive(Debug, Clone, Default)]
pub struct AudioConfigBuilder {
    config: AudioConfig,
}

impl AudioConfigBuilder {
    pub fn audio_encoding(mut self, encoding: AudioEncoding) -> Self {
        self.config.set_audio_encoding(encoding);
        self
    }

    pub fn speaking_rate(mut self, rate: f64) -> Self {
        self.config.speaking_rate = rate;
        self
    }

    pub fn pitch(mut self, pitch: f64) -> Self {
        self.config.pitch = pitch;
        self
    }

    pub fn volume_gain_db(mut self, gain: f64) -> Self {
        self.config.volume_gain_db = gain;
        self
    }

    pub fn sample_rate_hertz(mut self, hertz: i32) -> Self {
        self.config.sample_rate_hertz = hertz;
        self
    }

    /// Appends an audio effects profile (e.g. `telephony-class-application`).
    pub fn effects_profile_id(mut self, profile: impl Into<String>) -> Self {
        self.config.effects_profile_id.push(profile.into());
        self
    }

    pub fn build(self) -> AudioConfig {
        self.config
    }
}

impl SynthesizeSpeechRequest {
    pub fn new(input: SynthesisInput, voice: VoiceSelectionParams, audio_config: AudioConfig) -> Self {
        Self {
            input: Some(input),
            voice: Some(voice),
            audio_config: Some(audio_config),
        }
    }

    pub fn builder() -> SynthesizeSpeechRequestBuilder {
        SynthesizeSpeechRequestBuilder::default()
    }
}

/// Incremental builder for [`SynthesizeSpeechRequest`].
#[derive(Debug, Clone, Default)]
pub struct SynthesizeSpeechRequestBuilder {
    input: Option<SynthesisInput>,
    voice: Option<VoiceSelectionParams>,
    audio_config: Option<AudioConfig>,
}

impl SynthesizeSpeechRequestBuilder {
    pub fn input(mut self, input: SynthesisInput) -> Self {
        self.input = Some(input);
        self
    }

    pub fn voice(mut self, voice: VoiceSelectionParams) -> Self {
        self.voice = Some(voice);
        self
    }

    pub fn audio_config(mut self, audio_config: AudioConfig) -> Self {
        self.audio_config = Some(audio_config);
        self
    }

    /// Fails with [`ArgumentError::MissingField`] if any of the three fields was not set.
    pub fn build(self) -> Result<SynthesizeSpeechRequest, ArgumentError> {
        let input = self.input.ok_or(ArgumentError::MissingField("input"))?;
        let voice = self.voice.ok_or(ArgumentError::MissingField("voice"))?;
        let audio_config = self
            .audio_config
            .ok_or(ArgumentError::MissingField("audio_config"))?;

        Ok(SynthesizeSpeechRequest::new(input, voice, audio_config))
    }
}
