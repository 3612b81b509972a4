pub mod api;
pub mod client;
pub mod config;
pub mod operations;
pub mod path;
pub mod transport;
pub mod transports;

pub use openpay_core::{classifier, entities, errors, params, types};

pub use api::OpenpayApi;
