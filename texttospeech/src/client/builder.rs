//! # Client Builder
//!
//! Construction of a [`TextToSpeechClient`]. Every check happens before the channel is created,
//! so a misconfigured client never touches the network.
use super::{
    ClientConfigError, LIST_VOICES, SERVICE_ADDRESS, SERVICE_DOMAIN, SYNTHESIZE_SPEECH,
    TextToSpeechClient, TextToSpeechStub,
};
use crate::{
    BoxError,
    client_info::ClientInfo,
    config::{ClientConfig, INTERFACE_NAME, MethodConfig},
    credentials::Credentials,
};
use http::Uri;
use http_body::Body as HttpBody;
use tonic::{
    client::GrpcService,
    metadata::AsciiMetadataValue,
    transport::{Channel, ClientTlsConfig, Endpoint},
};

/// Builder state: the client will create its own channel to [`SERVICE_ADDRESS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultChannel;

/// Builder state: the client will use a caller-supplied channel.
#[derive(Debug, Clone)]
pub struct CustomChannel<S>(S);

/// Builder for [`TextToSpeechClient`].
#[derive(Debug, Clone, Default)]
pub struct TextToSpeechClientBuilder<C = DefaultChannel> {
    channel: C,
    credentials: Option<Credentials>,
    client_config: Option<ClientConfig>,
    client_info: Option<ClientInfo>,
}

impl<C> TextToSpeechClientBuilder<C> {
    /// Uses `channel` (a `tonic` channel or any other `GrpcService`) instead of creating one.
    ///
    /// Mutually exclusive with [`Self::credentials`].
    pub fn channel<S>(self, channel: S) -> TextToSpeechClientBuilder<CustomChannel<S>> {
        TextToSpeechClientBuilder {
            channel: CustomChannel(channel),
            credentials: self.credentials,
            client_config: self.client_config,
            client_info: self.client_info,
        }
    }

    /// Credentials attached to every request. If none are given, they are resolved from the
    /// environment with [`Credentials::from_env`].
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Replaces the built-in method configuration table.
    pub fn client_config(mut self, client_config: ClientConfig) -> Self {
        self.client_config = Some(client_config);
        self
    }

    /// Replaces the default client identification.
    pub fn client_info(mut self, client_info: ClientInfo) -> Self {
        self.client_info = Some(client_info);
        self
    }
}

impl TextToSpeechClientBuilder<DefaultChannel> {
    /// Builds a client with a lazily connected TLS channel to [`SERVICE_ADDRESS`].
    ///
    /// No connection is attempted until the first call. Must be called from within a Tokio
    /// runtime.
    pub fn build(self) -> Result<TextToSpeechClient<Channel>, ClientConfigError> {
        let credentials = match self.credentials {
            Some(credentials) => credentials,
            None => Credentials::from_env().ok_or(ClientConfigError::MissingCredentials)?,
        };
        let authorization = authorization(&credentials)?;
        let (list_voices_config, synthesize_speech_config) = bind_method_configs(self.client_config)?;
        let client_info = self.client_info.unwrap_or_default();

        let channel = default_endpoint(&client_info)?.connect_lazy();

        tracing::debug!(
            address = SERVICE_ADDRESS,
            scopes = ?credentials.scopes(),
            "Created lazy channel to the Text-to-Speech service"
        );

        Ok(TextToSpeechClient {
            stub: TextToSpeechStub::new(channel),
            endpoint: Some(Uri::from_static(SERVICE_ADDRESS)),
            credentials: Some(credentials),
            authorization: Some(authorization),
            client_info,
            list_voices_config,
            synthesize_speech_config,
        })
    }
}

impl<S> TextToSpeechClientBuilder<CustomChannel<S>>
where
    S: GrpcService<tonic::body::Body>,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Builds a client over the supplied channel.
    ///
    /// Fails with [`ClientConfigError::ChannelAndCredentials`] if credentials were supplied too.
    pub fn build(self) -> Result<TextToSpeechClient<S>, ClientConfigError> {
        if self.credentials.is_some() {
            return Err(ClientConfigError::ChannelAndCredentials);
        }

        let (list_voices_config, synthesize_speech_config) = bind_method_configs(self.client_config)?;
        let CustomChannel(channel) = self.channel;

        Ok(TextToSpeechClient {
            stub: TextToSpeechStub::new(channel),
            endpoint: None,
            credentials: None,
            authorization: None,
            client_info: self.client_info.unwrap_or_default(),
            list_voices_config,
            synthesize_speech_config,
        })
    }
}

fn authorization(credentials: &Credentials) -> Result<AsciiMetadataValue, ClientConfigError> {
    credentials
        .authorization_value()
        .map_err(ClientConfigError::InvalidCredentials)
}

fn default_endpoint(client_info: &ClientInfo) -> Result<Endpoint, ClientConfigError> {
    let invalid = |source| ClientConfigError::InvalidChannel {
        address: SERVICE_ADDRESS,
        source,
    };

    let tls = ClientTlsConfig::new()
        .domain_name(SERVICE_DOMAIN)
        .with_webpki_roots();

    let mut endpoint = Endpoint::from_static(SERVICE_ADDRESS)
        .tls_config(tls)
        .map_err(invalid)?;

    if let Some(user_agent) = &client_info.user_agent {
        endpoint = endpoint.user_agent(user_agent.clone()).map_err(invalid)?;
    }

    Ok(endpoint)
}

/// Parses the table once and keeps the entries of the two methods of the service.
///
/// Entries for unknown methods are ignored, missing entries leave the method unconfigured.
fn bind_method_configs(
    client_config: Option<ClientConfig>,
) -> Result<(Option<MethodConfig>, Option<MethodConfig>), ClientConfigError> {
    let mut configs = client_config
        .unwrap_or_default()
        .method_configs(INTERFACE_NAME)?;

    Ok((
        configs.remove(LIST_VOICES),
        configs.remove(SYNTHESIZE_SPEECH),
    ))
}
