use crate::projections::p001_pizza_prices::ui::list::PizzaPricesList;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// The only page of the app; `/` redirects here.
pub const PIZZAS_PATH: &str = "/pizzas";

#[component]
fn NotFound() -> impl IntoView {
    view! { <p class="not-found">"Page not found"</p> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-content">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/pizzas") view=PizzaPricesList />
                    <Route path=path!("/") view=|| view! { <Redirect path=PIZZAS_PATH /> } />
                </Routes>
            </main>
        </Router>
    }
}
