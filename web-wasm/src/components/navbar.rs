//! Fixed top navigation

use crate::profile;
use crate::route::Route;
use gloo::events::EventListener;
use leptos::prelude::*;

#[component]
pub fn Navbar<F>(current: Memo<Route>, on_navigate: F) -> impl IntoView
where
    F: Fn(Route) + 'static + Clone,
{
    let (scrolled, set_scrolled) = signal(false);

    if let Some(window) = web_sys::window() {
        let win = window.clone();
        let listener = EventListener::new(&window, "scroll", move |_| {
            let y = win.scroll_y().unwrap_or(0.0);
            let _ = set_scrolled.try_set(y > 12.0);
        });
        listener.forget();
    }

    let links = Route::ALL
        .into_iter()
        .map(|route| {
            let on_navigate = on_navigate.clone();
            view! {
                <a
                    href=route.path()
                    class=move || {
                        let mut classes = vec!["nav-link"];
                        if route == Route::Admin {
                            classes.push("accent");
                        }
                        if current.get() == route {
                            classes.push("active");
                        }
                        classes.join(" ")
                    }
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_navigate(route);
                    }
                >
                    {route.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class=move || if scrolled.get() { "navbar scrolled" } else { "navbar" }>
            <nav class="navbar-inner">
                <div class="brand">
                    <span class="brand-name">{profile::NAME}</span>
                    <span class="brand-tagline">{profile::TAGLINE}</span>
                </div>
                <div class="nav-links">{links}</div>
            </nav>
        </header>
    }
}
