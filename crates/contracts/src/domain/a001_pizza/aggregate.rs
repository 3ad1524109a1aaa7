use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Types
// ============================================================================

/// Pizza type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for ItemId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        u32::from_string(s).map(ItemId)
    }
}

/// Size tier identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SizeId(pub u32);

impl SizeId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for SizeId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        u32::from_string(s).map(SizeId)
    }
}

// ============================================================================
// Catalog records
// ============================================================================

/// Pizza type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Item {
    #[serde(rename = "itemId")]
    pub item_id: ItemId,
    pub name: &'static str,
}

/// Size tier, shared by every item
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    #[serde(rename = "sizeId")]
    pub size_id: SizeId,
    pub name: &'static str,
}

/// Base price of one (item, size) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceEntry {
    #[serde(rename = "itemId")]
    pub item_id: ItemId,
    #[serde(rename = "sizeId")]
    pub size_id: SizeId,
    pub price: f64,
}
