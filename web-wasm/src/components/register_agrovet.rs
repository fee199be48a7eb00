//! Agrovet registration form

use leafscan_common::{validate, AgrovetRegistration};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::location_select::LocationSelect;
use crate::api::{self, ApiConfig};
use crate::notify;

#[component]
pub fn RegisterAgrovet(config: ApiConfig) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (county, set_county) = signal(String::new());
    let (town, set_town) = signal(String::new());
    let (contact, set_contact) = signal(String::new());
    let (counties, set_counties) = signal(Vec::<String>::new());
    let (towns, set_towns) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    // Fresh catalog on every open; nothing survives leaving the form.
    {
        let config = config.clone();
        spawn_local(async move {
            match api::reference::counties(&config).await {
                Ok(list) => set_counties.set(list),
                Err(error) => notify::log_error("county fetch failed", &error.to_string()),
            }
        });
    }

    let on_county_change = {
        let config = config.clone();
        move |selected: String| {
            set_county.set(selected.clone());
            set_town.set(String::new());
            set_towns.set(Vec::new());
            if selected.is_empty() {
                return;
            }
            let config = config.clone();
            spawn_local(async move {
                match api::reference::towns(&config, &selected).await {
                    Ok(list) => set_towns.set(list),
                    Err(error) => notify::log_error("town fetch failed", &error.to_string()),
                }
            });
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let registration = AgrovetRegistration {
            name: name.get_untracked(),
            county: county.get_untracked(),
            town: town.get_untracked(),
            contact: contact.get_untracked(),
        };
        if let Err(error) = validate::agrovet_fields(&registration) {
            notify::alert(&error.to_string());
            return;
        }

        set_submitting.set(true);
        let config = config.clone();
        spawn_local(async move {
            match api::auth::register_agrovet(&config, &registration).await {
                Ok(response) => notify::alert(&response.message),
                Err(error) => {
                    notify::log_error("agrovet registration failed", &error.to_string());
                    notify::alert(&error.to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="form-section">
            <h2>"Register Agrovet"</h2>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="agrovet-name">"Business name"</label>
                    <input
                        type="text"
                        id="agrovet-name"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            set_name.set(event_target_value(&ev));
                        }
                    />
                </div>
                <LocationSelect
                    counties=counties
                    towns=towns
                    county=county
                    town=town
                    set_town=set_town
                    on_county_change=on_county_change
                />
                <div class="form-group">
                    <label for="agrovet-contact">"Contact"</label>
                    <input
                        type="text"
                        id="agrovet-contact"
                        prop:value=move || contact.get()
                        on:input=move |ev| {
                            set_contact.set(event_target_value(&ev));
                        }
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    "Register"
                </button>
            </form>
        </section>
    }
}
