//! # CLI
//!
//! This module defines the command-line interface of `tts` using `clap`.
//!
//! It is responsible for parsing user input and performing validation (e.g., ensuring headers are
//! `key:value` and enum values name a known protobuf variant).
use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use texttospeech::types::{AudioEncoding, SsmlVoiceGender};

#[derive(Parser)]
#[command(name = "tts", version, about = "Cloud Text-to-Speech v1beta1 CLI")]
pub struct Cli {
    /// OAuth access token. Defaults to GOOGLE_OAUTH_ACCESS_TOKEN or CLOUDSDK_AUTH_ACCESS_TOKEN
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Timeout of each attempt, in seconds (e.g. 2.5)
    #[arg(long, global = true, value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// Disable the retry policy bound to the method
    #[arg(long, global = true)]
    pub no_retry: bool,

    /// Extra request metadata
    #[arg(short = 'H', long = "header", global = true, value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the voices supported for synthesis
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// tts voices --language en-US
    /// ```
    Voices {
        /// BCP-47 language tag used to filter the voices (e.g. en-US)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Synthesize speech and write the audio to a file
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// tts synthesize --text "Hello, world!" --language en-US --encoding mp3 -o hello.mp3
    /// ```
    Synthesize {
        #[command(flatten)]
        input: InputArgs,

        /// BCP-47 language tag of the voice (e.g. en-US)
        #[arg(short, long)]
        language: String,

        /// Name of the voice (e.g. en-US-Wavenet-D)
        #[arg(long)]
        voice: Option<String>,

        /// Preferred gender of the voice (male, female, neutral)
        #[arg(long, value_parser = parse_gender)]
        gender: Option<SsmlVoiceGender>,

        /// Audio encoding (linear16, mp3, ogg_opus)
        #[arg(long, value_parser = parse_encoding, default_value = "mp3")]
        encoding: AudioEncoding,

        /// Speaking rate, between 0.25 and 4.0
        #[arg(long)]
        speaking_rate: Option<f64>,

        /// Pitch in semitones, between -20.0 and 20.0
        #[arg(long, allow_hyphen_values = true)]
        pitch: Option<f64>,

        /// File the audio content is written to
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Plain text to synthesize
    #[arg(long)]
    pub text: Option<String>,

    /// SSML document to synthesize
    #[arg(long)]
    pub ssml: Option<String>,
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    s.split_once(':')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| "Format must be 'key:value'".to_string())
}

fn parse_timeout(value: &str) -> Result<Duration, String> {
    let secs: f64 = value
        .parse()
        .map_err(|e| format!("Invalid timeout '{value}': {e}"))?;

    Duration::try_from_secs_f64(secs).map_err(|e| format!("Invalid timeout '{value}': {e}"))
}

fn parse_gender(value: &str) -> Result<SsmlVoiceGender, String> {
    SsmlVoiceGender::from_str_name(&value.to_ascii_uppercase())
        .ok_or_else(|| format!("Unknown voice gender '{value}'. Expected male, female or neutral"))
}

fn parse_encoding(value: &str) -> Result<AudioEncoding, String> {
    AudioEncoding::from_str_name(&value.to_ascii_uppercase())
        .ok_or_else(|| format!("Unknown audio encoding '{value}'. Expected linear16, mp3 or ogg_opus"))
}
