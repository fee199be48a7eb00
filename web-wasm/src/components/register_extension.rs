//! Extension worker registration form

use leafscan_common::{validate, ExtensionWorkerRegistration};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::location_select::LocationSelect;
use crate::api::{self, ApiConfig};
use crate::notify;

/// Comma-separated services field, split and trimmed client-side.
fn parse_services(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[component]
pub fn RegisterExtension(config: ApiConfig) -> impl IntoView {
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (services, set_services) = signal(String::new());
    let (county, set_county) = signal(String::new());
    let (town, set_town) = signal(String::new());
    let (contact, set_contact) = signal(String::new());
    let (counties, set_counties) = signal(Vec::<String>::new());
    let (towns, set_towns) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

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

        let registration = ExtensionWorkerRegistration {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            services: parse_services(&services.get_untracked()),
            county: county.get_untracked(),
            town: town.get_untracked(),
            contact: contact.get_untracked(),
        };
        if let Err(error) = validate::extension_worker_fields(&registration) {
            notify::alert(&error.to_string());
            return;
        }

        set_submitting.set(true);
        let config = config.clone();
        spawn_local(async move {
            match api::auth::register_extension_worker(&config, &registration).await {
                Ok(response) => notify::alert(&response.message),
                Err(error) => {
                    notify::log_error("extension worker registration failed", &error.to_string());
                    notify::alert(&error.to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="form-section">
            <h2>"Register Extension Worker"</h2>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="extension-first-name">"First name"</label>
                    <input
                        type="text"
                        id="extension-first-name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| {
                            set_first_name.set(event_target_value(&ev));
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="extension-last-name">"Last name"</label>
                    <input
                        type="text"
                        id="extension-last-name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| {
                            set_last_name.set(event_target_value(&ev));
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="extension-services">"Services (comma separated)"</label>
                    <input
                        type="text"
                        id="extension-services"
                        placeholder="scouting, spraying"
                        prop:value=move || services.get()
                        on:input=move |ev| {
                            set_services.set(event_target_value(&ev));
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
                    <label for="extension-contact">"Contact"</label>
                    <input
                        type="text"
                        id="extension-contact"
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_services_splits_and_trims() {
        assert_eq!(
            parse_services("scouting, spraying ,  soil testing"),
            vec!["scouting", "spraying", "soil testing"]
        );
    }

    #[test]
    fn test_parse_services_drops_empty_entries() {
        assert_eq!(parse_services(" , ,"), Vec::<String>::new());
        assert_eq!(parse_services(""), Vec::<String>::new());
    }
}
