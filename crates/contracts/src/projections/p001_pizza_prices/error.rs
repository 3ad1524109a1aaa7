use super::key::PriceKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("storage write failed: {0}")]
    Storage(String),

    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("malformed `{key}` entry: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid price key `{0}`")]
    InvalidKey(String),

    #[error("invalid price {price} at `{key}`")]
    InvalidPrice { key: PriceKey, price: f64 },

    #[error("persisted prices and availability cover different keys")]
    Inconsistent,
}
