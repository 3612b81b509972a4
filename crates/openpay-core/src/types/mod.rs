//! Value types shared by parameters and entities.

mod amount;
mod common;

pub use amount::*;
pub use common::*;
