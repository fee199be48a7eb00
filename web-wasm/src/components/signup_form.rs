//! Signup form component

use leafscan_common::{validate, SignupRequest};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiConfig};
use crate::notify;

#[component]
pub fn SignupForm<F>(config: ApiConfig, on_done: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send,
{
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let request = SignupRequest {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(error) = validate::signup_fields(&request) {
            notify::alert(&error.to_string());
            return;
        }

        set_submitting.set(true);
        let config = config.clone();
        let on_done = on_done.clone();
        spawn_local(async move {
            match api::auth::signup(&config, &request).await {
                Ok(_) => {
                    notify::alert("Signup successful! Please verify your email.");
                    on_done();
                }
                Err(error) => {
                    notify::log_error("signup failed", &error.to_string());
                    notify::alert(&error.to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="form-section">
            <h2>"Signup"</h2>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="signup-first-name">"First name"</label>
                    <input
                        type="text"
                        id="signup-first-name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| {
                            set_first_name.set(event_target_value(&ev));
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="signup-last-name">"Last name"</label>
                    <input
                        type="text"
                        id="signup-last-name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| {
                            set_last_name.set(event_target_value(&ev));
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="signup-username">"Username"</label>
                    <input
                        type="text"
                        id="signup-username"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            set_username.set(event_target_value(&ev));
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="signup-email">"Email"</label>
                    <input
                        type="email"
                        id="signup-email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            set_email.set(event_target_value(&ev));
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="signup-password">"Password"</label>
                    <input
                        type="password"
                        id="signup-password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            set_password.set(event_target_value(&ev));
                        }
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    "Signup"
                </button>
            </form>
        </section>
    }
}
