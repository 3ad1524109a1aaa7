use super::aggregate::{Item, ItemId, PriceEntry, Size, SizeId};
use std::collections::HashSet;
use thiserror::Error;

const ITEMS: &[Item] = &[
    Item {
        item_id: ItemId(0),
        name: "Margherita",
    },
    Item {
        item_id: ItemId(1),
        name: "Pepperoni",
    },
];

const SIZES: &[Size] = &[
    Size {
        size_id: SizeId(0),
        name: "Small",
    },
    Size {
        size_id: SizeId(1),
        name: "Medium",
    },
    Size {
        size_id: SizeId(2),
        name: "Large",
    },
];

const PRICES: &[PriceEntry] = &[
    PriceEntry {
        item_id: ItemId(0),
        size_id: SizeId(0),
        price: 3.99,
    },
    PriceEntry {
        item_id: ItemId(0),
        size_id: SizeId(1),
        price: 5.99,
    },
    PriceEntry {
        item_id: ItemId(0),
        size_id: SizeId(2),
        price: 7.99,
    },
    PriceEntry {
        item_id: ItemId(1),
        size_id: SizeId(0),
        price: 4.42,
    },
    PriceEntry {
        item_id: ItemId(1),
        size_id: SizeId(1),
        price: 6.52,
    },
    PriceEntry {
        item_id: ItemId(1),
        size_id: SizeId(2),
        price: 8.62,
    },
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("duplicate item id {0:?}")]
    DuplicateItem(ItemId),
    #[error("duplicate size id {0:?}")]
    DuplicateSize(SizeId),
    #[error("negative price {price} for {item_id:?}/{size_id:?}")]
    NegativePrice {
        item_id: ItemId,
        size_id: SizeId,
        price: f64,
    },
    #[error("no price for {item_id:?}/{size_id:?}")]
    MissingPrice { item_id: ItemId, size_id: SizeId },
}

/// Read-only pizza catalog: items, sizes and base prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catalog {
    pub items: &'static [Item],
    pub sizes: &'static [Size],
    pub prices: &'static [PriceEntry],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The hardcoded catalog shipped with the app.
    pub const fn builtin() -> Self {
        Self {
            items: ITEMS,
            sizes: SIZES,
            prices: PRICES,
        }
    }

    /// Item shown by the panel at `index`.
    pub fn item_at(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn price_entry(&self, item_id: ItemId, size_id: SizeId) -> Option<&PriceEntry> {
        self.prices
            .iter()
            .find(|p| p.item_id == item_id && p.size_id == size_id)
    }

    /// Checks id uniqueness, price sign and item × size coverage.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut item_ids = HashSet::new();
        for item in self.items {
            if !item_ids.insert(item.item_id) {
                return Err(CatalogError::DuplicateItem(item.item_id));
            }
        }

        let mut size_ids = HashSet::new();
        for size in self.sizes {
            if !size_ids.insert(size.size_id) {
                return Err(CatalogError::DuplicateSize(size.size_id));
            }
        }

        for entry in self.prices {
            if entry.price < 0.0 {
                return Err(CatalogError::NegativePrice {
                    item_id: entry.item_id,
                    size_id: entry.size_id,
                    price: entry.price,
                });
            }
        }

        for item in self.items {
            for size in self.sizes {
                if self.price_entry(item.item_id, size.size_id).is_none() {
                    return Err(CatalogError::MissingPrice {
                        item_id: item.item_id,
                        size_id: size.size_id,
                    });
                }
            }
        }

        Ok(())
    }
}
