//! Editable per-size prices and availability of the pizza catalog.

pub mod error;
pub mod key;
pub mod state;
pub mod storage;

pub use error::PricingError;
pub use key::PriceKey;
pub use state::{PriceEdit, PricingState};
pub use storage::{KeyValueStore, MemoryStore, StorageKeys};
