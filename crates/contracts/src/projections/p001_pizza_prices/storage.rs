use super::error::PricingError;
use super::key::PriceKey;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

const PRICES_STORAGE_KEY: &str = "pizzaPrices";
const AVAILABILITY_STORAGE_KEY: &str = "checkedSizes";

/// Minimal string key-value persistence, shaped after `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PricingError>;
}

/// Names of the two persisted entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub prices: String,
    pub availability: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            prices: PRICES_STORAGE_KEY.to_string(),
            availability: AVAILABILITY_STORAGE_KEY.to_string(),
        }
    }
}

/// In-memory store for tests and non-browser hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PricingError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Encodes a map as a JSON list of `[key, value]` pairs.
pub fn encode_pairs<T: Serialize>(map: &BTreeMap<PriceKey, T>) -> Result<String, PricingError> {
    let pairs: Vec<(&PriceKey, &T)> = map.iter().collect();
    serde_json::to_string(&pairs).map_err(PricingError::Encode)
}

/// Decodes a JSON list of `[key, value]` pairs. Later duplicates win.
pub fn decode_pairs<T: DeserializeOwned>(
    storage_key: &str,
    raw: &str,
) -> Result<BTreeMap<PriceKey, T>, PricingError> {
    let pairs: Vec<(PriceKey, T)> =
        serde_json::from_str(raw).map_err(|source| PricingError::Decode {
            key: storage_key.to_string(),
            source,
        })?;
    Ok(pairs.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_pizza::{ItemId, SizeId};

    fn key(item: u32, size: u32) -> PriceKey {
        PriceKey::new(ItemId(item), SizeId(size))
    }

    #[test]
    fn test_default_keys() {
        let keys = StorageKeys::default();
        assert_eq!(keys.prices, "pizzaPrices");
        assert_eq!(keys.availability, "checkedSizes");
    }

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("a"), None);

        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_encode_pairs_format() {
        let mut prices = BTreeMap::new();
        prices.insert(key(0, 1), 5.99);
        prices.insert(key(0, 0), 3.99);
        assert_eq!(
            encode_pairs(&prices).unwrap(),
            r#"[["0 0",3.99],["0 1",5.99]]"#
        );

        let mut available = BTreeMap::new();
        available.insert(key(1, 2), false);
        assert_eq!(encode_pairs(&available).unwrap(), r#"[["1 2",false]]"#);
    }

    #[test]
    fn test_decode_pairs() {
        let map: BTreeMap<PriceKey, f64> =
            decode_pairs("pizzaPrices", r#"[["0 0",3.99],["1 2",0]]"#).unwrap();
        assert_eq!(map.get(&key(0, 0)), Some(&3.99));
        assert_eq!(map.get(&key(1, 2)), Some(&0.0));
    }

    #[test]
    fn test_decode_pairs_last_duplicate_wins() {
        let map: BTreeMap<PriceKey, bool> =
            decode_pairs("checkedSizes", r#"[["0 0",true],["0 0",false]]"#).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&key(0, 0)), Some(&false));
    }

    #[test]
    fn test_decode_pairs_errors_name_the_entry() {
        let err = decode_pairs::<f64>("pizzaPrices", "{not json").unwrap_err();
        assert!(matches!(&err, PricingError::Decode { key, .. } if key == "pizzaPrices"));

        let err = decode_pairs::<f64>("pizzaPrices", r#"[["zero zero",1.0]]"#).unwrap_err();
        assert!(matches!(err, PricingError::Decode { .. }));

        let err = decode_pairs::<bool>("checkedSizes", r#"[["0 0",1.0]]"#).unwrap_err();
        assert!(matches!(err, PricingError::Decode { .. }));
    }
}
