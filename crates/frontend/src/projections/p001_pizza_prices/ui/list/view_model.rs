use crate::system::storage::LocalStorage;
use contracts::domain::a001_pizza::{Catalog, ItemId};
use contracts::projections::p001_pizza_prices::{PriceEdit, PriceKey, PricingState};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// ViewModel for the pizza prices page
#[derive(Clone, Copy)]
pub struct PizzaPricesViewModel {
    pub state: RwSignal<PricingState>,
}

impl PizzaPricesViewModel {
    /// Loads the last saved session from localStorage, or the catalog.
    pub fn new() -> Self {
        let state = PricingState::load(Catalog::builtin(), &LocalStorage::open());
        Self {
            state: RwSignal::new(state),
        }
    }

    pub fn catalog(&self) -> Catalog {
        self.state.with_untracked(|s| *s.catalog())
    }

    pub fn price(&self, key: PriceKey) -> Option<f64> {
        self.state.with(|s| s.price(key))
    }

    pub fn is_available(&self, key: PriceKey) -> bool {
        self.state.with(|s| s.is_available(key))
    }

    pub fn is_panel_active(&self, index: usize) -> bool {
        self.state.with(|s| s.is_panel_active(index))
    }

    /// Revert is offered when either prices or availability differ from load time.
    pub fn can_revert(&self, item_id: ItemId) -> bool {
        self.state
            .with(|s| s.has_changes(item_id) || s.has_availability_changes(item_id))
    }

    pub fn select_panel(&self, index: usize) {
        self.state.update(|s| s.select_panel(index));
    }

    pub fn edit_price(&self, key: PriceKey, raw_input: &str) -> PriceEdit {
        let mut outcome = PriceEdit::Clamped;
        self.state.update(|s| outcome = s.edit_price(key, raw_input));
        outcome
    }

    pub fn toggle_availability(&self, key: PriceKey) {
        self.state.update(|s| {
            s.toggle_availability(key);
        });
    }

    pub fn revert_command(&self) {
        self.state.update(|s| match s.revert_active() {
            Some(restored) => log::debug!("reverted {} sizes", restored),
            None => log::warn!("revert requested without an open panel"),
        });
    }

    /// Saves the working maps once, right before the page goes away.
    pub fn install_unload_hook(&self) {
        let state = self.state;
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let mut storage = LocalStorage::open();
            match state.try_with_untracked(|s| s.persist(&mut storage)) {
                Some(Ok(())) => log::debug!("pizza prices saved"),
                Some(Err(e)) => log::error!("failed to save pizza prices: {}", e),
                None => log::warn!("pizza prices state already disposed, nothing saved"),
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
            closure.forget(); // Keep the closure alive
        }
    }
}
