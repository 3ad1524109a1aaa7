use super::error::PricingError;
use super::key::PriceKey;
use super::storage::{decode_pairs, encode_pairs, KeyValueStore, StorageKeys};
use crate::domain::a001_pizza::{Catalog, ItemId};
use std::collections::BTreeMap;

/// Outcome of a price edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceEdit {
    /// The input parsed to a non-negative number and was stored as is.
    Accepted(f64),
    /// The input was rejected and `0.00` was stored instead.
    Clamped,
}

/// Working and load-time prices/availability for every (item, size) pair,
/// plus the currently expanded panel.
///
/// The `original_*` maps are captured once per load and are only read
/// afterwards (change detection and revert).
#[derive(Debug, Clone, PartialEq)]
pub struct PricingState {
    catalog: Catalog,
    prices: BTreeMap<PriceKey, f64>,
    original_prices: BTreeMap<PriceKey, f64>,
    available: BTreeMap<PriceKey, bool>,
    original_available: BTreeMap<PriceKey, bool>,
    active_panel: Option<usize>,
}

impl PricingState {
    /// Fresh state: every catalog price, every size available.
    pub fn from_catalog(catalog: Catalog) -> Self {
        let mut prices = BTreeMap::new();
        let mut available = BTreeMap::new();
        for entry in catalog.prices {
            let key = PriceKey::new(entry.item_id, entry.size_id);
            prices.insert(key, entry.price);
            available.insert(key, true);
        }
        Self::with_baseline(catalog, prices, available)
    }

    /// Restores the last persisted session, falling back to the catalog when
    /// storage is empty, partial or malformed.
    pub fn load(catalog: Catalog, store: &impl KeyValueStore) -> Self {
        Self::load_with_keys(catalog, store, &StorageKeys::default())
    }

    pub fn load_with_keys(catalog: Catalog, store: &impl KeyValueStore, keys: &StorageKeys) -> Self {
        match Self::restore(catalog, store, keys) {
            Ok(Some(state)) => {
                log::debug!("pricing state restored from storage");
                state
            }
            Ok(None) => {
                log::debug!("no persisted pricing state, using catalog");
                Self::from_catalog(catalog)
            }
            Err(e) => {
                log::warn!("discarding persisted pricing state: {}", e);
                Self::from_catalog(catalog)
            }
        }
    }

    /// Reads both persisted entries.
    ///
    /// `Ok(None)` when either entry is absent. Catalog keys missing from a
    /// consistent snapshot are filled in from the catalog.
    pub fn restore(
        catalog: Catalog,
        store: &impl KeyValueStore,
        keys: &StorageKeys,
    ) -> Result<Option<Self>, PricingError> {
        let (raw_prices, raw_available) = match (store.get(&keys.prices), store.get(&keys.availability)) {
            (Some(p), Some(a)) => (p, a),
            (None, None) => return Ok(None),
            _ => {
                log::warn!("only one of the persisted pricing entries is present, ignoring it");
                return Ok(None);
            }
        };

        let mut prices: BTreeMap<PriceKey, f64> = decode_pairs(&keys.prices, &raw_prices)?;
        let mut available: BTreeMap<PriceKey, bool> =
            decode_pairs(&keys.availability, &raw_available)?;

        if let Some((key, price)) = prices.iter().find(|(_, p)| !p.is_finite() || **p < 0.0) {
            return Err(PricingError::InvalidPrice {
                key: *key,
                price: *price,
            });
        }
        if !prices.keys().eq(available.keys()) {
            return Err(PricingError::Inconsistent);
        }

        for entry in catalog.prices {
            let key = PriceKey::new(entry.item_id, entry.size_id);
            if !prices.contains_key(&key) {
                log::debug!("{} missing from storage, taking catalog price", key);
                prices.insert(key, entry.price);
                available.insert(key, true);
            }
        }

        Ok(Some(Self::with_baseline(catalog, prices, available)))
    }

    fn with_baseline(
        catalog: Catalog,
        prices: BTreeMap<PriceKey, f64>,
        available: BTreeMap<PriceKey, bool>,
    ) -> Self {
        Self {
            catalog,
            original_prices: prices.clone(),
            prices,
            original_available: available.clone(),
            available,
            active_panel: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn price(&self, key: PriceKey) -> Option<f64> {
        self.prices.get(&key).copied()
    }

    pub fn original_price(&self, key: PriceKey) -> Option<f64> {
        self.original_prices.get(&key).copied()
    }

    /// Unknown keys count as available.
    pub fn is_available(&self, key: PriceKey) -> bool {
        self.available.get(&key).copied().unwrap_or(true)
    }

    pub fn working_prices(&self) -> &BTreeMap<PriceKey, f64> {
        &self.prices
    }

    pub fn original_prices(&self) -> &BTreeMap<PriceKey, f64> {
        &self.original_prices
    }

    pub fn working_availability(&self) -> &BTreeMap<PriceKey, bool> {
        &self.available
    }

    pub fn original_availability(&self) -> &BTreeMap<PriceKey, bool> {
        &self.original_available
    }

    /// One key per catalog size, in catalog order.
    pub fn keys_for_item(&self, item_id: ItemId) -> Vec<PriceKey> {
        self.catalog
            .sizes
            .iter()
            .map(|size| PriceKey::new(item_id, size.size_id))
            .collect()
    }

    /// Applies a committed price input.
    pub fn edit_price(&mut self, key: PriceKey, raw_input: &str) -> PriceEdit {
        match parse_price(raw_input) {
            Some(value) => {
                self.prices.insert(key, value);
                PriceEdit::Accepted(value)
            }
            None => {
                self.prices.insert(key, 0.0);
                PriceEdit::Clamped
            }
        }
    }

    /// Flips availability and returns the new flag. Disabling zeroes the
    /// price; enabling leaves it at zero.
    pub fn toggle_availability(&mut self, key: PriceKey) -> bool {
        let available = !self.is_available(key);
        self.available.insert(key, available);
        if !available {
            self.prices.insert(key, 0.0);
        }
        available
    }

    pub fn active_panel(&self) -> Option<usize> {
        self.active_panel
    }

    pub fn is_panel_active(&self, index: usize) -> bool {
        self.active_panel == Some(index)
    }

    /// Accordion toggle: selecting the open panel closes it.
    pub fn select_panel(&mut self, index: usize) {
        self.active_panel = if self.active_panel == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Restores every size of `item_id` to its load-time price and
    /// availability. Returns how many sizes were restored.
    pub fn revert(&mut self, item_id: ItemId) -> usize {
        let mut restored = 0;
        for key in self.keys_for_item(item_id) {
            match (self.original_prices.get(&key), self.original_available.get(&key)) {
                (Some(&price), Some(&available)) => {
                    self.prices.insert(key, price);
                    self.available.insert(key, available);
                    restored += 1;
                }
                _ => log::error!("cannot revert {}: key is missing from the load-time snapshot", key),
            }
        }
        restored
    }

    /// Reverts the item of the open panel. `None` when no panel is open.
    pub fn revert_active(&mut self) -> Option<usize> {
        let index = self.active_panel?;
        let item_id = self.catalog.item_at(index)?.item_id;
        Some(self.revert(item_id))
    }

    /// True when any size of `item_id` has a price other than at load time.
    /// Availability is not compared, see [`Self::has_availability_changes`].
    pub fn has_changes(&self, item_id: ItemId) -> bool {
        self.keys_for_item(item_id)
            .into_iter()
            .any(|key| self.prices.get(&key) != self.original_prices.get(&key))
    }

    pub fn has_availability_changes(&self, item_id: ItemId) -> bool {
        self.keys_for_item(item_id)
            .into_iter()
            .any(|key| self.available.get(&key) != self.original_available.get(&key))
    }

    /// Writes both working maps, overwriting earlier values.
    pub fn persist(&self, store: &mut impl KeyValueStore) -> Result<(), PricingError> {
        self.persist_with_keys(store, &StorageKeys::default())
    }

    pub fn persist_with_keys(
        &self,
        store: &mut impl KeyValueStore,
        keys: &StorageKeys,
    ) -> Result<(), PricingError> {
        let prices = encode_pairs(&self.prices)?;
        let available = encode_pairs(&self.available)?;
        store.set(&keys.prices, &prices)?;
        store.set(&keys.availability, &available)?;
        Ok(())
    }
}

/// `None` for anything that is not a finite, non-negative number.
fn parse_price(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    // -0 would render as "-0.00"
    Some(if value == 0.0 { 0.0 } else { value })
}
