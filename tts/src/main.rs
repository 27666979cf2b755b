//! # TTS CLI Entry Point
//!
//! The main executable of the `tts` tool. This file drives the application lifecycle:
//!
//! 1. **Initialization**: Parses command-line arguments using [`cli::Cli`] and sets up logging
//!    (controlled with `RUST_LOG`, `warn` by default).
//! 2. **Connection**: Builds a [`TextToSpeechClient`] over a lazily connected TLS channel.
//! 3. **Execution**: Issues the requested RPC with the per-call options given on the command line.
//! 4. **Presentation**: Formats and prints the result or error to standard output/error.

mod cli;
mod formatter;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, InputArgs};
use formatter::{FormattedString, GenericError, SavedAudio};
use std::{path::PathBuf, process};
use texttospeech::{
    CallOptions, Credentials, TextToSpeechClient,
    types::{AudioConfig, AudioEncoding, SsmlVoiceGender, SynthesisInput, VoiceSelectionParams},
};
use tracing_subscriber::EnvFilter;

struct Synthesis {
    input: SynthesisInput,
    voice: VoiceSelectionParams,
    audio_config: AudioConfig,
    output: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    init_tracing();

    let mut options = args
        .headers
        .into_iter()
        .fold(CallOptions::default(), |options, (k, v)| {
            options.with_metadata(k, v)
        });
    if args.no_retry {
        options = options.without_retry();
    }
    if let Some(timeout) = args.timeout {
        options = options.with_timeout(timeout);
    }

    tracing::debug!(
        no_retry = args.no_retry,
        timeout = ?args.timeout,
        "Parsed call options"
    );

    let client = connect_or_exit(args.token);

    match args.command {
        Commands::Voices { language } => list_voices(&client, language.as_deref(), options).await,
        Commands::Synthesize {
            input,
            language,
            voice,
            gender,
            encoding,
            speaking_rate,
            pitch,
            output,
        } => {
            let synthesis = Synthesis {
                input: synthesis_input(input),
                voice: voice_selection(language, voice, gender),
                audio_config: audio_config(encoding, speaking_rate, pitch),
                output,
            };
            synthesize(&client, synthesis, options).await
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!(
            "{}",
            FormattedString::from(GenericError("Failed to set up logging", err))
        );
    }
}

fn connect_or_exit(token: Option<String>) -> TextToSpeechClient {
    let mut builder = TextToSpeechClient::builder();
    if let Some(token) = token {
        builder = builder.credentials(Credentials::bearer(token));
    }

    match builder.build() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

async fn list_voices(client: &TextToSpeechClient, language: Option<&str>, options: CallOptions) {
    match client.list_voices(language, options).await {
        Ok(response) => println!("{}", FormattedString::from(response)),
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

async fn synthesize(client: &TextToSpeechClient, synthesis: Synthesis, options: CallOptions) {
    let response = match client
        .synthesize_speech(synthesis.input, synthesis.voice, synthesis.audio_config, options)
        .await
    {
        Ok(response) => response,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    };

    let written = std::fs::write(&synthesis.output, &response.audio_content)
        .with_context(|| format!("Failed to write audio to {}", synthesis.output.display()));

    match written {
        Ok(()) => println!(
            "{}",
            FormattedString::from(SavedAudio(&response, &synthesis.output))
        ),
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

fn synthesis_input(input: InputArgs) -> SynthesisInput {
    match (input.text, input.ssml) {
        (_, Some(ssml)) => SynthesisInput::ssml(ssml),
        (text, None) => SynthesisInput::text(text.unwrap_or_default()),
    }
}

fn voice_selection(
    language: String,
    name: Option<String>,
    gender: Option<SsmlVoiceGender>,
) -> VoiceSelectionParams {
    let mut builder = VoiceSelectionParams::builder().language_code(language);
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if let Some(gender) = gender {
        builder = builder.ssml_gender(gender);
    }
    builder.build()
}

fn audio_config(encoding: AudioEncoding, speaking_rate: Option<f64>, pitch: Option<f64>) -> AudioConfig {
    let mut builder = AudioConfig::builder().audio_encoding(encoding);
    if let Some(rate) = speaking_rate {
        builder = builder.speaking_rate(rate);
    }
    if let Some(pitch) = pitch {
        builder = builder.pitch(pitch);
    }
    builder.build()
}
