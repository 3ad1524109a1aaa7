use super::error::PricingError;
use crate::domain::a001_pizza::{ItemId, SizeId};
use crate::domain::common::AggregateId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Composite key of one (item, size) entry.
///
/// The string form is `"<item_id> <size_id>"`, e.g. `"0 2"`. It is what
/// ends up in local storage, so [`FromStr`] accepts exactly that shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriceKey {
    pub item_id: ItemId,
    pub size_id: SizeId,
}

impl PriceKey {
    pub fn new(item_id: ItemId, size_id: SizeId) -> Self {
        Self { item_id, size_id }
    }
}

impl fmt::Display for PriceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.item_id.as_string(), self.size_id.as_string())
    }
}

impl FromStr for PriceKey {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PricingError::InvalidKey(s.to_string());
        let (item, size) = s.split_once(' ').ok_or_else(invalid)?;
        let key = PriceKey::new(
            ItemId::from_string(item).map_err(|_| invalid())?,
            SizeId::from_string(size).map_err(|_| invalid())?,
        );
        // "+1 0" or "01 0" would parse but not map back to the same string
        if key.to_string() != s {
            return Err(invalid());
        }
        Ok(key)
    }
}

impl Serialize for PriceKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PriceKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(PriceKey::new(ItemId(0), SizeId(0)).to_string(), "0 0");
        assert_eq!(PriceKey::new(ItemId(12), SizeId(3)).to_string(), "12 3");
    }

    #[test]
    fn test_parse() {
        let key: PriceKey = "1 2".parse().unwrap();
        assert_eq!(key, PriceKey::new(ItemId(1), SizeId(2)));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        for raw in ["", "1", "1 ", " 1 2", "1  2", "1 2 3", "a 2", "-1 0", "+1 0", "01 2", "1_2"] {
            assert!(raw.parse::<PriceKey>().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_keys_do_not_collide() {
        // "1 12" and "11 2" must stay distinct
        let a = PriceKey::new(ItemId(1), SizeId(12));
        let b = PriceKey::new(ItemId(11), SizeId(2));
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_serializes_as_string() {
        let key = PriceKey::new(ItemId(0), SizeId(1));
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"0 1\"");
        let back: PriceKey = serde_json::from_str("\"0 1\"").unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<PriceKey>("\"0-1\"").is_err());
    }
}
