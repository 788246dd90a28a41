//! Gallery category selector

use leptos::prelude::*;
use portfolio_common::CategoryFilter;

#[component]
pub fn CategoryFilterSelect(
    value: ReadSignal<CategoryFilter>,
    set_value: WriteSignal<CategoryFilter>,
) -> impl IntoView {
    view! {
        <div class="category-filter">
            <select
                id="category-filter"
                on:change=move |ev| {
                    set_value.set(CategoryFilter::from_key(&event_target_value(&ev)));
                }
            >
                {CategoryFilter::OPTIONS
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option value=option.key() selected=move || value.get() == option>
                                {option.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
