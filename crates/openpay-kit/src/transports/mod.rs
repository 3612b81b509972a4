//! Concrete [`Transport`](crate::transport::Transport) implementations.

#[cfg(feature = "reqwest-transport")]
mod reqwest_transport;

#[cfg(feature = "reqwest-transport")]
pub use reqwest_transport::ReqwestTransport;
