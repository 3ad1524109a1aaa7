use super::view_model::PizzaPricesViewModel;
use crate::shared::number_format::format_price;
use contracts::domain::a001_pizza::{Item, Size};
use contracts::projections::p001_pizza_prices::{PriceEdit, PriceKey};
use leptos::prelude::*;
use thaw::*;
use web_sys::HtmlInputElement;

#[component]
#[allow(non_snake_case)]
pub fn PizzaPricesList() -> impl IntoView {
    let vm = PizzaPricesViewModel::new();
    vm.install_unload_hook();

    let items = vm.catalog().items;

    view! {
        <div class="pizza-prices">
            <h2 class="pizza-prices-title">"Pizzas"</h2>
            {items
                .iter()
                .enumerate()
                .map(|(index, item)| view! { <PizzaPanel vm=vm index=index item=*item /> })
                .collect_view()}
        </div>
    }
}

/// One accordion panel: header toggles it, body lists the sizes.
#[component]
fn PizzaPanel(vm: PizzaPricesViewModel, index: usize, item: Item) -> impl IntoView {
    let item_id = item.item_id;
    let sizes = vm.catalog().sizes;
    let is_open = move || vm.is_panel_active(index);

    view! {
        <div class=move || if is_open() { "pizza-panel open" } else { "pizza-panel" }>
            <div class="pizza-panel-header" on:click=move |_| vm.select_panel(index)>
                <span class="pizza-panel-name">{item.name}</span>
                <span class="pizza-panel-chevron">{move || if is_open() { "▾" } else { "▸" }}</span>
            </div>

            <Show when=is_open>
                <div class="pizza-panel-body">
                    {sizes
                        .iter()
                        .map(|size| {
                            let price_key = PriceKey::new(item_id, size.size_id);
                            view! { <SizeRow vm=vm price_key=price_key size=*size /> }
                        })
                        .collect_view()}

                    <Show when=move || vm.can_revert(item_id)>
                        <div class="pizza-panel-actions">
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.revert_command()
                            >
                                "Revert"
                            </Button>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// Availability checkbox and price field of one size.
#[component]
fn SizeRow(vm: PizzaPricesViewModel, price_key: PriceKey, size: Size) -> impl IntoView {
    let input_id = format!(
        "price-{}-{}",
        price_key.item_id.value(),
        price_key.size_id.value()
    );
    let is_available = move || vm.is_available(price_key);

    // committed on blur, not per keystroke
    let on_blur = move |ev: leptos::ev::FocusEvent| {
        let input = event_target::<HtmlInputElement>(&ev);
        if vm.edit_price(price_key, &input.value()) == PriceEdit::Clamped {
            input.set_value(&format_price(0.0));
        }
    };

    view! {
        <div class="size-row">
            <label class="size-row-toggle">
                <input
                    type="checkbox"
                    prop:checked=is_available
                    on:click=move |_| vm.toggle_availability(price_key)
                />
                <span>{size.name}</span>
            </label>
            <input
                id=input_id
                class="size-row-price"
                type="number"
                min="0"
                step="0.01"
                prop:value=move || format_price(vm.price(price_key).unwrap_or(0.0))
                prop:disabled=move || !is_available()
                on:blur=on_blur
            />
        </div>
    }
}
