use std::{sync::Arc, time::Duration};

use base64::{Engine, prelude::BASE64_STANDARD};
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method, header};
use openpay_core::{
    classifier::{classify_response, classify_transport_failure},
    errors::{DeserializationError, EncodingError, Error, Result},
    params::{ParameterSet, SearchParams},
};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::{ClientConfig, ConfigError},
    transport::{HttpRequest, HttpResponse, Transport},
};

/// Dispatches JSON calls against resolved resource paths.
///
/// Every operation is exactly one round trip through the [`Transport`]: no retries, no
/// caching. A non-2xx response becomes a classified API error, a 2xx body that does not
/// decode into the expected type becomes a deserialization error.
///
/// The client holds only immutable configuration and can be shared between tasks.
#[derive(Debug, Clone)]
pub struct JsonServiceClient<T> {
    config: Arc<ClientConfig>,
    headers: HeaderMap,
    timeout: Duration,
    transport: T,
}

impl<T: Transport> JsonServiceClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> std::result::Result<Self, ConfigError> {
        let headers = default_headers(&config)?;
        Ok(JsonServiceClient {
            timeout: config.timeout,
            config: Arc::new(config),
            headers,
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// A copy of this client whose calls time out after `timeout` instead.
    pub fn with_timeout(&self, timeout: Duration) -> Self
    where
        T: Clone,
    {
        JsonServiceClient {
            config: self.config.clone(),
            headers: self.headers.clone(),
            timeout,
            transport: self.transport.clone(),
        }
    }

    /// Creates a resource (or triggers a resource action) with a POST.
    pub async fn create<E: DeserializeOwned>(
        &self,
        path: &str,
        params: &ParameterSet,
    ) -> Result<E> {
        let response = self.send(Method::POST, path, None, Some(params)).await?;
        decode(response)
    }

    /// Retrieves a single resource by its fully resolved path.
    pub async fn fetch<E: DeserializeOwned>(&self, path: &str) -> Result<E> {
        let response = self.send(Method::GET, path, None, None).await?;
        decode(response)
    }

    /// Retrieves one page of resources. Without filters the server defaults apply.
    pub async fn list<E: DeserializeOwned>(
        &self,
        path: &str,
        filter: Option<&SearchParams>,
    ) -> Result<Vec<E>> {
        let response = self.send(Method::GET, path, filter, None).await?;
        decode(response)
    }

    /// Replaces a resource's attributes with a PUT.
    pub async fn update<E: DeserializeOwned>(
        &self,
        path: &str,
        params: &ParameterSet,
    ) -> Result<E> {
        let response = self.send(Method::PUT, path, None, Some(params)).await?;
        decode(response)
    }

    /// Deletes a resource. Deleting an unknown or already deleted resource is a not-found error.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None, None).await?;
        Ok(())
    }

    fn resolve_url(&self, path: &str, filter: Option<&SearchParams>) -> Result<Url> {
        let mut url = self
            .config
            .base_url
            .join(path)
            .map_err(EncodingError::from)?;

        if let Some(filter) = filter.filter(|f| !f.is_empty()) {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in filter.iter() {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        filter: Option<&SearchParams>,
        params: Option<&ParameterSet>,
    ) -> Result<HttpResponse> {
        let url = self.resolve_url(path, filter)?;
        let mut headers = self.headers.clone();
        let body = match params {
            Some(params) => {
                headers.insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                );
                Some(Bytes::from(params.to_json_bytes()?))
            }
            None => None,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!("Dispatching {} {}", method, url.path());

        let request = HttpRequest {
            method,
            url,
            headers,
            body,
        };

        let response = match tokio::time::timeout(self.timeout, self.transport.execute(request))
            .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("No response for {}: {}", path, err);

                return Err(classify_transport_failure(err).into());
            }
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("No response for {} within {:?}", path, self.timeout);

                return Err(classify_transport_failure(format!(
                    "no response within {:?}",
                    self.timeout
                ))
                .into());
            }
        };

        if !response.status.is_success() {
            let err = classify_response(response.status.as_u16(), &response.body);

            #[cfg(feature = "tracing")]
            tracing::warn!("Request to {} failed: {}", path, err);

            return Err(err.into());
        }

        Ok(response)
    }
}

fn decode<E: DeserializeOwned>(response: HttpResponse) -> Result<E> {
    serde_json::from_slice(&response.body).map_err(|err| {
        #[cfg(feature = "tracing")]
        tracing::error!(
            "Response body does not match {}: {}",
            std::any::type_name::<E>(),
            err
        );

        Error::from(DeserializationError::new::<E>(
            response.status.as_u16(),
            &response.body,
            err,
        ))
    })
}

fn default_headers(config: &ClientConfig) -> std::result::Result<HeaderMap, ConfigError> {
    let credentials = BASE64_STANDARD.encode(format!("{}:", config.private_key));
    let mut authorization = HeaderValue::from_str(&format!("Basic {credentials}"))?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, authorization);
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(header::USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
    Ok(headers)
}
