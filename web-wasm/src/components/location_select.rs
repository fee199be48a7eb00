//! County → Town cascading selector
//!
//! Shared by both registration forms. The parent owns the catalog
//! signals and the town fetch; selecting a county replaces the town
//! options wholesale.

use leptos::prelude::*;

#[component]
pub fn LocationSelect<F>(
    counties: ReadSignal<Vec<String>>,
    towns: ReadSignal<Vec<String>>,
    county: ReadSignal<String>,
    town: ReadSignal<String>,
    set_town: WriteSignal<String>,
    on_county_change: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    view! {
        <div class="form-group">
            <label for="county-select">"County"</label>
            <select
                id="county-select"
                on:change=move |ev| {
                    on_county_change(event_target_value(&ev));
                }
            >
                <option value="" selected=move || county.get().is_empty()>
                    "Select a county..."
                </option>
                <For
                    each=move || counties.get()
                    key=|name| name.clone()
                    children=move |name| {
                        let value = name.clone();
                        view! {
                            <option
                                value=name.clone()
                                selected=move || county.get() == value
                            >
                                {name.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </div>
        <div class="form-group">
            <label for="town-select">"Town"</label>
            <select
                id="town-select"
                on:change=move |ev| {
                    set_town.set(event_target_value(&ev));
                }
            >
                <option value="" selected=move || town.get().is_empty()>
                    "Select a town..."
                </option>
                <For
                    each=move || towns.get()
                    key=|name| name.clone()
                    children=move |name| {
                        let value = name.clone();
                        view! {
                            <option value=name.clone() selected=move || town.get() == value>
                                {name.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
