//! Resource objects returned by the API.
//!
//! Entities are plain values: every attribute except the identifier is optional, unknown
//! attributes are ignored, and nothing is shared between the caller and the client once a
//! response has been decoded.

mod card;
mod charge;
mod customer;
mod fee;
mod merchant;
mod payout;

pub use card::*;
pub use charge::*;
pub use customer::*;
pub use fee::*;
pub use merchant::*;
pub use payout::*;

use serde::de::DeserializeOwned;

/// A resource instance addressable by an opaque identifier.
pub trait Entity: DeserializeOwned + Send + 'static {
    fn id(&self) -> &str;
}

macro_rules! impl_entity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Entity for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_entity!(Card, Charge, Refund, Customer, Fee, Merchant, Payout);
