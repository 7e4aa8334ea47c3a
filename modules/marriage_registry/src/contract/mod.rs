pub mod client;
pub mod error;
pub mod model;

pub use client::MarriageRegistryApi;
pub use error::MarriageRegistryError;
pub use model::*;
