use crate::{
    config::ClientConfig,
    transport::{HttpRequest, HttpResponse, Transport, TransportError},
};

/// The default transport, backed by a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    pub client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport whose connect timeout follows the configured call timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.timeout)
            .build()?;
        Ok(ReqwestTransport { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        ReqwestTransport { client }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            TransportError::Body(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError::Body(err.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
