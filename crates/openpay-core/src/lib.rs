//! Openpay core library.
//!
//! Transport-free building blocks of the Openpay client: request parameter encoding,
//! list filters, entity value objects and the error taxonomy shared by every operation.

pub mod classifier;
pub mod entities;
pub mod errors;
pub mod params;
pub mod types;
