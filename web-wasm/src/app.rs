//! Application shell: navbar and page switching

use crate::components::{
    admin_page::AdminPage, home_page::HomePage, navbar::Navbar, portfolio_page::PortfolioPage,
};
use crate::route::Route;
use gloo::history::{BrowserHistory, History};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let history = BrowserHistory::new();
    let initial = Route::from_path(history.location().path()).unwrap_or_else(|| {
        history.replace(Route::Home.path());
        Route::Home
    });
    let route = RwSignal::new(initial);
    let current = Memo::new(move |_| route.get());

    // back / forward buttons
    let listener = history.listen({
        let history = history.clone();
        move || match Route::from_path(history.location().path()) {
            Some(next) => route.set(next),
            None => {
                history.replace(Route::Home.path());
                route.set(Route::Home);
            }
        }
    });
    // lives as long as the page
    std::mem::forget(listener);

    let navigate = move |target: Route| {
        if current.get_untracked() != target {
            BrowserHistory::new().push(target.path());
            route.set(target);
        }
    };

    view! {
        <Navbar current=current on_navigate=navigate />
        <main class="page">
            {move || match current.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Portfolio => view! { <PortfolioPage /> }.into_any(),
                Route::Admin => view! { <AdminPage /> }.into_any(),
            }}
        </main>
    }
}
