pub mod aggregate;
pub mod catalog;

pub use aggregate::{Item, ItemId, PriceEntry, Size, SizeId};
pub use catalog::{Catalog, CatalogError};
