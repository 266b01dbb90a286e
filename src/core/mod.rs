//! Input model, builders, configuration and the small pure helpers the
//! rest of the crate is built on.

mod builder;
mod config;
mod error;
mod money;
mod types;
mod vat_id;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use money::round_amount;
pub use types::*;
pub use vat_id::normalize_vat_id;
