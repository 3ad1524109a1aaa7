//! Pizza prices list
//!
//! - view_model.rs: pricing state signal, commands, unload persistence
//! - view.rs: accordion of items with per-size price rows

mod view;
mod view_model;

pub use view::PizzaPricesList;
pub use view_model::PizzaPricesViewModel;
