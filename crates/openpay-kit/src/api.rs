use std::time::Duration;

use crate::{
    client::JsonServiceClient,
    config::{ClientConfig, ConfigError},
    operations::{
        CardOperations, ChargeOperations, CustomerOperations, FeeOperations, MerchantOperations,
        PayoutOperations,
    },
    transport::Transport,
};

#[cfg(feature = "reqwest-transport")]
use crate::transports::ReqwestTransport;

/// Entry point to the Openpay API.
///
/// Resource views borrow the API and are cheap to create, so a view per call is fine:
///
/// ```no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// use openpay_kit::{OpenpayApi, config::ClientConfig, params::SearchParams};
///
/// let api = OpenpayApi::new(ClientConfig::from_env()?)?;
/// let page = SearchParams::new().limit(10);
/// let charges = api.charges().customer("ag4nktpdzebjiye1tlze").list(Some(&page)).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenpayApi<T> {
    client: JsonServiceClient<T>,
}

#[cfg(feature = "reqwest-transport")]
pub type DefaultOpenpayApi = OpenpayApi<ReqwestTransport>;

#[cfg(feature = "reqwest-transport")]
impl OpenpayApi<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> OpenpayApi<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ConfigError> {
        Ok(OpenpayApi {
            client: JsonServiceClient::new(config, transport)?,
        })
    }

    /// A copy of this API whose calls time out after `timeout`.
    pub fn with_timeout(&self, timeout: Duration) -> Self
    where
        T: Clone,
    {
        OpenpayApi {
            client: self.client.with_timeout(timeout),
        }
    }

    pub fn client(&self) -> &JsonServiceClient<T> {
        &self.client
    }

    pub fn cards(&self) -> CardOperations<'_, T> {
        CardOperations::new(&self.client)
    }

    pub fn charges(&self) -> ChargeOperations<'_, T> {
        ChargeOperations::new(&self.client)
    }

    pub fn customers(&self) -> CustomerOperations<'_, T> {
        CustomerOperations::new(&self.client)
    }

    pub fn fees(&self) -> FeeOperations<'_, T> {
        FeeOperations::new(&self.client)
    }

    pub fn payouts(&self) -> PayoutOperations<'_, T> {
        PayoutOperations::new(&self.client)
    }

    pub fn merchant(&self) -> MerchantOperations<'_, T> {
        MerchantOperations::new(&self.client)
    }
}
