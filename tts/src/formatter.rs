use colored::*;
use std::{fmt::Display, path::Path};
use texttospeech::{
    CallError, ClientConfigError,
    types::{AudioConfig, ListVoicesResponse, SynthesizeSpeechResponse, Voice},
};

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

pub struct GenericError<T: Display>(pub &'static str, pub T);

/// A synthesis response together with the file its audio was written to.
pub struct SavedAudio<'a>(pub &'a SynthesizeSpeechResponse, pub &'a Path);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl From<CallError> for FormattedString {
    fn from(err: CallError) -> Self {
        let title = match &err {
            CallError::RetryExhausted { attempts, .. } => {
                format!("Retry Budget Exhausted after {attempts} attempt(s):")
            }
            _ => "gRPC Failed:".to_string(),
        };

        match err.status() {
            Some(status) => FormattedString(format!(
                "{} code={:?} message={:?}",
                title.red().bold(),
                status.code(),
                status.message()
            )),
            None => FormattedString(format!("{}\n\n'{}'", "Call Failed:".red().bold(), err)),
        }
    }
}

impl From<ClientConfigError> for FormattedString {
    fn from(err: ClientConfigError) -> Self {
        FormattedString(format!(
            "{}\n\n'{}'",
            "Invalid Client Configuration:".red().bold(),
            err
        ))
    }
}

impl From<anyhow::Error> for FormattedString {
    fn from(err: anyhow::Error) -> Self {
        FormattedString(format!("{}\n\n'{:#}'", "Error:".red().bold(), err))
    }
}

impl<T: Display> From<GenericError<T>> for FormattedString {
    fn from(GenericError(msg, err): GenericError<T>) -> Self {
        FormattedString(format!("{}:\n\n'{}'", msg.red().bold(), err))
    }
}

impl From<ListVoicesResponse> for FormattedString {
    fn from(response: ListVoicesResponse) -> Self {
        if response.voices.is_empty() {
            return FormattedString("No voices found.".yellow().to_string());
        }

        let mut out = String::new();
        out.push_str("Available Voices:\n");
        for voice in &response.voices {
            out.push_str(&format!("  - {}\n", format_voice(voice)));
        }
        FormattedString(out.trim_end().to_string())
    }
}

impl From<SavedAudio<'_>> for FormattedString {
    fn from(SavedAudio(response, path): SavedAudio<'_>) -> Self {
        let mut out = format!(
            "{} {} bytes written to {}",
            "Synthesized:".green().bold(),
            response.audio_content.len(),
            path.display().to_string().cyan()
        );

        if let Some(config) = &response.audio_config {
            out.push_str(&format!("\n  {}", format_audio_config(config)));
        }

        FormattedString(out)
    }
}

fn format_voice(voice: &Voice) -> String {
    format!(
        "{} [{}] {} {} Hz",
        voice.name.green(),
        voice.language_codes.join(", "),
        voice.ssml_gender().as_str_name().blue(),
        voice.natural_sample_rate_hertz
    )
}

fn format_audio_config(config: &AudioConfig) -> String {
    format!(
        "{}={} {}={} Hz",
        "encoding".yellow(),
        config.audio_encoding().as_str_name(),
        "sample_rate".yellow(),
        config.sample_rate_hertz
    )
}
