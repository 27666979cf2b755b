use fake_text_to_speech_impl::{FakeTextToSpeech, all_voices, default_audio_config, expected_synthesis};
use std::sync::Arc;
use std::time::Duration;
use texttospeech::config::{ConfigParseError, DEFAULT_CLIENT_CONFIG};
use texttospeech::generated::texttospeech_v1beta1::text_to_speech_server::TextToSpeechServer;
use texttospeech::types::{
    ArgumentError, AudioConfig, AudioEncoding, ListVoicesResponse, SsmlVoiceGender,
    SynthesisInput, SynthesizeSpeechRequest, SynthesizeSpeechResponse, VoiceSelectionParams,
};
use texttospeech::{
    CallError, CallOptions, ClientConfig, ClientConfigError, ClientInfo, Credentials, Retry,
    TextToSpeechClient,
};
use tonic::Code;


type FakeServer = TextToSpeechServer<FakeTextToSpeech>;

fn setup_client(fake: &Arc<FakeTextToSpeech>) -> TextToSpeechClient<FakeServer> {
    TextToSpeechClient::builder()
        .channel(TextToSpeechServer::from_arc(fake.clone()))
        .build()
        .unwrap()
}

/// A table whose bound retry policy gives up quickly, so exhausting it stays cheap.
fn fast_retry_config() -> ClientConfig {
    ClientConfig::from_json(
        r#"{
          "interfaces": {
            "google.cloud.texttospeech.v1beta1.TextToSpeech": {
              "retry_codes": { "idempotent": ["DEADLINE_EXCEEDED", "UNAVAILABLE"] },
              "retry_params": {
                "fast": {
                  "initial_retry_delay_millis": 10,
                  "retry_delay_multiplier": 1.0,
                  "max_retry_delay_millis": 10,
                  "initial_rpc_timeout_millis": 1000,
                  "rpc_timeout_multiplier": 1.0,
                  "max_rpc_timeout_millis": 1000,
                  "total_timeout_millis": 100
                }
              },
              "methods": {
                "ListVoices": { "retry_codes_name": "idempotent", "retry_params_name": "fast" },
                "SynthesizeSpeech": { "retry_codes_name": "idempotent", "retry_params_name": "fast" }
              }
            }
          }
        }"#,
    )
    .unwrap()
}

fn hello_request() -> SynthesizeSpeechRequest {
    SynthesizeSpeechRequest::new(
        SynthesisInput::text("hello"),
        VoiceSelectionParams::builder().language_code("en-US").build(),
        default_audio_config(),
    )
}

#[tokio::test]
async fn test_list_voices_without_filter() {
    let fake = Arc::new(FakeTextToSpeech::new());
    let client = setup_client(&fake);

    let none = client.list_voices(None, CallOptions::default()).await.unwrap();
    let empty = client
        .list_voices(Some(""), CallOptions::default())
        .await
        .unwrap();

    let expected = ListVoicesResponse {
        voices: all_voices(),
    };
    assert_eq!(none, expected);
    assert_eq!(empty, expected);

    let requests = fake.list_voices_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].0.language_code, "");
    assert_eq!(requests[1].0.language_code, "");
}

#[tokio::test]
async fn test_list_voices_with_filter() {
    let fake = Arc::new(FakeTextToSpeech::new());
    let client = setup_client(&fake);

    let response = client
        .list_voices(Some("en-US"), CallOptions::default())
        .await
        .unwrap();

    assert_eq!(fake.list_voices_requests()[0].0.language_code, "en-US");
    assert_eq!(response.voices.len(), 2);
    assert!(
        response
            .voices
            .iter()
            .all(|v| v.language_codes == vec!["en-US".to_string()])
    );
    assert_eq!(response.voices[0].ssml_gender(), SsmlVoiceGender::Male);
}

#[tokio::test]
async fn test_synthesize_speech_returns_response_unchanged() {
    let fake = Arc::new(FakeTextToSpeech::new());
    let client = setup_client(&fake);

    let input = SynthesisInput::ssml("<speak>Hello <break time=\"1s\"/> world</speak>");
    let voice = VoiceSelectionParams::builder()
        .language_code("en-US")
        .name("en-US-Wavenet-D")
        .ssml_gender(SsmlVoiceGender::Male)
        .build();
    let audio_config = AudioConfig::builder()
        .audio_encoding(AudioEncoding::OggOpus)
        .speaking_rate(0.9)
        .build();

    let response = client
        .synthesize_speech(
            input.clone(),
            voice.clone(),
            audio_config.clone(),
            CallOptions::default(),
        )
        .await
        .unwrap();

    let sent = SynthesizeSpeechRequest::new(input, voice, audio_config);
    assert_eq!(fake.synthesize_requests()[0].0, sent);
    assert_eq!(response, expected_synthesis(&sent));
    assert_eq!(
        response.audio_content,
        b"ssml:<speak>Hello <break time=\"1s\"/> world</speak>".to_vec()
    );
}

#[tokio::test]
async fn test_missing_synthesis_argument_never_reaches_transport() {
    let fake = Arc::new(FakeTextToSpeech::always_failing(Code::Unavailable));
    let client = setup_client(&fake);

    async fn synthesize(
        client: &TextToSpeechClient<FakeServer>,
        input: Option<SynthesisInput>,
        voice: Option<VoiceSelectionParams>,
        audio_config: Option<AudioConfig>,
    ) -> Result<SynthesizeSpeechResponse, CallError> {
        let mut builder = SynthesizeSpeechRequest::builder();
        if let Some(input) = input {
            builder = builder.input(input);
        }
        if let Some(voice) = voice {
            builder = builder.voice(voice);
        }
        if let Some(audio_config) = audio_config {
            builder = builder.audio_config(audio_config);
        }

        let request = builder.build()?;
        client
            .synthesize_speech_request(request, CallOptions::default())
            .await
    }

    let input = SynthesisInput::text("hello");
    let voice = VoiceSelectionParams::builder().language_code("en-US").build();
    let audio = default_audio_config();

    let results = [
        synthesize(&client, None, Some(voice.clone()), Some(audio.clone())).await,
        synthesize(&client, Some(input.clone()), None, Some(audio.clone())).await,
        synthesize(&client, Some(input.clone()), Some(voice.clone()), None).await,
    ];

    for result in results {
        assert!(matches!(
            result,
            Err(CallError::Argument(ArgumentError::MissingField(_)))
        ));
    }
    assert_eq!(fake.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_retry_recovers_within_budget() {
    let fake = Arc::new(FakeTextToSpeech::failing(2, Code::Unavailable));
    let client = setup_client(&fake);

    let retry = Retry::default()
        .with_initial_delay(Duration::from_millis(10))
        .with_max_attempts(Some(3));

    let response = client
        .list_voices(None, CallOptions::default().with_retry(retry))
        .await
        .unwrap();

    assert_eq!(response.voices, all_voices());
    assert_eq!(fake.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_retry_exhaustion_is_distinguishable() {
    let fake = Arc::new(FakeTextToSpeech::failing(2, Code::Unavailable));
    let client = setup_client(&fake);

    let retry = Retry::default()
        .with_initial_delay(Duration::from_millis(10))
        .with_max_attempts(Some(2));

    let result = client
        .synthesize_speech_request(hello_request(), CallOptions::default().with_retry(retry))
        .await;

    match result {
        Err(CallError::RetryExhausted { attempts, last }) => {
            assert_eq!(attempts, 2);
            assert_eq!(last.code(), Code::Unavailable);
        }
        other => panic!("Expected retry exhaustion, got {other:?}"),
    }
    assert_eq!(fake.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_non_retryable_error_surfaces_verbatim() {
    let fake = Arc::new(FakeTextToSpeech::failing(1, Code::InvalidArgument));
    let client = setup_client(&fake);

    let result = client
        .list_voices(Some("not a tag"), CallOptions::default())
        .await;

    match result {
        Err(CallError::Status(status)) => {
            assert_eq!(status.code(), Code::InvalidArgument);
            assert_eq!(status.message(), "injected failure");
        }
        other => panic!("Expected a status error, got {other:?}"),
    }
    assert_eq!(fake.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_retry_override_applies_to_single_call() {
    let fake = Arc::new(FakeTextToSpeech::always_failing(Code::Unavailable));
    let client = TextToSpeechClient::builder()
        .channel(TextToSpeechServer::from_arc(fake.clone()))
        .client_config(fast_retry_config())
        .build()
        .unwrap();

    let first = client
        .list_voices(None, CallOptions::default().without_retry())
        .await;
    assert!(matches!(first, Err(CallError::Status(s)) if s.code() == Code::Unavailable));
    assert_eq!(fake.calls(), 1);

    let second = client.list_voices(None, CallOptions::default()).await;
    let Err(CallError::RetryExhausted { attempts, .. }) = second else {
        panic!("Expected the bound policy to retry, got {second:?}");
    };
    assert!(attempts > 1);
    assert_eq!(fake.calls(), 1 + attempts as usize);

    let third = client
        .list_voices(None, CallOptions::default().without_retry())
        .await;
    assert!(matches!(third, Err(CallError::Status(_))));
    assert_eq!(fake.calls(), 2 + attempts as usize);
}

#[tokio::test(start_paused = true)]
async fn test_timeout_override_applies_to_single_call() {
    let fake = Arc::new(FakeTextToSpeech::new().with_delay(Duration::from_millis(500)));
    let client = TextToSpeechClient::builder()
        .channel(TextToSpeechServer::from_arc(fake.clone()))
        .client_config(fast_retry_config())
        .build()
        .unwrap();

    let short = client
        .list_voices(
            None,
            CallOptions::default()
                .without_retry()
                .with_timeout(Duration::from_millis(50)),
        )
        .await;
    assert!(matches!(short, Err(CallError::Status(s)) if s.code() == Code::DeadlineExceeded));

    // The bound per-attempt timeout (1s) leaves enough room for the slow answer.
    let bound = client
        .list_voices(None, CallOptions::default().without_retry())
        .await
        .unwrap();
    assert_eq!(bound.voices, all_voices());
}

#[tokio::test(start_paused = true)]
async fn test_timeout_is_per_attempt() {
    let fake = Arc::new(FakeTextToSpeech::new().with_delay(Duration::from_millis(300)));
    let client = setup_client(&fake);

    let retry = Retry::default()
        .with_initial_delay(Duration::from_millis(10))
        .with_max_attempts(Some(3));

    let result = client
        .list_voices(
            None,
            CallOptions::default()
                .with_retry(retry)
                .with_timeout(Duration::from_millis(100)),
        )
        .await;

    // Every attempt times out on its own and DEADLINE_EXCEEDED is retryable.
    match result {
        Err(CallError::RetryExhausted { attempts, last }) => {
            assert_eq!(attempts, 3);
            assert_eq!(last.code(), Code::DeadlineExceeded);
        }
        other => panic!("Expected retry exhaustion, got {other:?}"),
    }
    assert_eq!(fake.calls(), 3);
}

#[tokio::test]
async fn test_metadata_is_attached_to_request() {
    let fake = Arc::new(FakeTextToSpeech::new());
    let client = setup_client(&fake);

    client
        .synthesize_speech_request(
            hello_request(),
            CallOptions::default()
                .with_metadata("x-goog-request-params", "voice=en-US")
                .with_metadata("x-trace-id", "abc123"),
        )
        .await
        .unwrap();

    let (_, metadata) = &fake.synthesize_requests()[0];
    assert_eq!(
        metadata.get("x-goog-request-params").unwrap().to_str().unwrap(),
        "voice=en-US"
    );
    assert_eq!(
        metadata.get("x-trace-id").unwrap().to_str().unwrap(),
        "abc123"
    );
    assert!(
        metadata
            .get("x-goog-api-client")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("gl-rust gapic/")
    );
    assert!(metadata.get("authorization").is_none());
}

#[tokio::test]
async fn test_user_agent_is_reported_on_custom_channel() {
    let fake = Arc::new(FakeTextToSpeech::new());
    let client = TextToSpeechClient::builder()
        .channel(TextToSpeechServer::from_arc(fake.clone()))
        .client_info(ClientInfo::default().with_user_agent("my-app/2.1"))
        .build()
        .unwrap();

    client.list_voices(None, CallOptions::default()).await.unwrap();

    let (_, metadata) = &fake.list_voices_requests()[0];
    assert!(
        metadata
            .get("x-goog-api-client")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("my-app/2.1 gl-rust gapic/")
    );
}

#[tokio::test]
async fn test_invalid_metadata_never_reaches_transport() {
    let fake = Arc::new(FakeTextToSpeech::new());
    let client = setup_client(&fake);

    let bad_key = client
        .list_voices(None, CallOptions::default().with_metadata("bad key", "v"))
        .await;
    assert!(matches!(
        bad_key,
        Err(CallError::Argument(ArgumentError::InvalidMetadataKey { key, .. })) if key == "bad key"
    ));

    let bad_value = client
        .list_voices(None, CallOptions::default().with_metadata("x-key", "line\nbreak"))
        .await;
    assert!(matches!(
        bad_value,
        Err(CallError::Argument(ArgumentError::InvalidMetadataValue { key, .. })) if key == "x-key"
    ));

    assert_eq!(fake.calls(), 0);
}

#[tokio::test]
async fn test_unconfigured_method_fails_locally() {
    let fake = Arc::new(FakeTextToSpeech::new());
    let config = ClientConfig::from_json(
        r#"{
          "interfaces": {
            "google.cloud.texttospeech.v1beta1.TextToSpeech": {
              "methods": {
                "ListVoices": { "timeout_millis": 1000 },
                "StreamingSynthesize": { "timeout_millis": 1000 }
              }
            }
          }
        }"#,
    )
    .unwrap();

    let client = TextToSpeechClient::builder()
        .channel(TextToSpeechServer::from_arc(fake.clone()))
        .client_config(config)
        .build()
        .unwrap();

    assert!(client.method_config("SynthesizeSpeech").is_none());
    assert!(client.list_voices(None, CallOptions::default()).await.is_ok());

    let result = client
        .synthesize_speech_request(hello_request(), CallOptions::default())
        .await;
    assert!(matches!(
        result,
        Err(CallError::Config(ClientConfigError::UnconfiguredMethod("SynthesizeSpeech")))
    ));
    assert_eq!(fake.calls(), 1);
}

#[tokio::test]
async fn test_negative_delay_multiplier_fails_construction() {
    let fake = Arc::new(FakeTextToSpeech::failing(1, Code::Unavailable));
    let json = DEFAULT_CLIENT_CONFIG.replace(
        r#""retry_delay_multiplier": 1.3"#,
        r#""retry_delay_multiplier": -1.0"#,
    );

    let result = TextToSpeechClient::builder()
        .channel(TextToSpeechServer::from_arc(fake.clone()))
        .client_config(ClientConfig::from_json(&json).unwrap())
        .build();

    assert!(matches!(
        result,
        Err(ClientConfigError::InvalidMethodConfig(
            ConfigParseError::InvalidMultiplier { .. }
        ))
    ));
    assert_eq!(fake.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_huge_delay_multiplier_still_retries() {
    let fake = Arc::new(FakeTextToSpeech::failing(2, Code::Unavailable));
    let client = setup_client(&fake);

    let retry = Retry::default()
        .with_initial_delay(Duration::from_millis(10))
        .with_multiplier(f64::MAX)
        .with_max_delay(Duration::from_millis(50));

    let response = client
        .list_voices(None, CallOptions::default().with_retry(retry))
        .await
        .unwrap();

    assert_eq!(response.voices, all_voices());
    assert_eq!(fake.calls(), 3);
}

#[tokio::test]
async fn test_channel_and_credentials_are_mutually_exclusive() {
    let credentials = [
        Credentials::bearer("token"),
        Credentials::bearer(""),
        Credentials::bearer("token").with_scopes(["https://example.com/scope"]),
    ];

    for credentials in credentials {
        let fake = Arc::new(FakeTextToSpeech::new());

        let by_credentials_first = TextToSpeechClient::builder()
            .credentials(credentials.clone())
            .channel(TextToSpeechServer::from_arc(fake.clone()))
            .build();
        assert!(matches!(
            by_credentials_first,
            Err(ClientConfigError::ChannelAndCredentials)
        ));

        let by_channel_first = TextToSpeechClient::builder()
            .channel(TextToSpeechServer::from_arc(fake.clone()))
            .credentials(credentials)
            .build();
        assert!(matches!(
            by_channel_first,
            Err(ClientConfigError::ChannelAndCredentials)
        ));

        assert_eq!(fake.calls(), 0);
    }
}

#[tokio::test]
async fn test_default_channel_targets_service_address() {
    let client = TextToSpeechClient::builder()
        .credentials(Credentials::bearer("ya29.token"))
        .build()
        .unwrap();

    let endpoint = client.endpoint().unwrap();
    assert_eq!(endpoint.scheme_str(), Some("https"));
    assert_eq!(endpoint.host(), Some("texttospeech.googleapis.com"));
    assert_eq!(endpoint.port_u16(), Some(443));
    assert_eq!(
        client.credentials().unwrap().scopes(),
        ["https://www.googleapis.com/auth/cloud-platform"]
    );
    assert!(client.method_config("ListVoices").is_some());
    assert!(client.method_config("SynthesizeSpeech").is_some());
}

#[tokio::test]
async fn test_clones_share_the_channel() {
    let fake = Arc::new(FakeTextToSpeech::new());
    let client = setup_client(&fake);
    let other = client.clone();

    let (voices, speech) = tokio::join!(
        client.list_voices(Some("nb"), CallOptions::default()),
        other.synthesize_speech_request(hello_request(), CallOptions::default()),
    );

    assert_eq!(voices.unwrap().voices.len(), 1);
    assert_eq!(speech.unwrap().audio_content, b"text:hello".to_vec());
    assert_eq!(fake.calls(), 2);
}
