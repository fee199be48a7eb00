//! Login form component

use leafscan_common::{display_name_for, validate, LoginRequest};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiConfig};
use crate::notify;

#[component]
pub fn LoginForm<F>(config: ApiConfig, on_success: F) -> impl IntoView
where
    F: Fn(String, String) + 'static + Clone + Send,
{
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(error) = validate::login_fields(&request.email, &request.password) {
            notify::alert(&error.to_string());
            return;
        }

        set_submitting.set(true);
        let config = config.clone();
        let on_success = on_success.clone();
        spawn_local(async move {
            match api::auth::login(&config, &request).await {
                Ok(response) => {
                    let name = display_name_for(&response.first_name, &request.email);
                    on_success(response.token, name);
                }
                Err(error) => {
                    notify::log_error("login failed", &error.to_string());
                    notify::alert(&error.to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="form-section">
            <h2>"Login"</h2>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="login-email">"Email"</label>
                    <input
                        type="email"
                        id="login-email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            set_email.set(event_target_value(&ev));
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="login-password">"Password"</label>
                    <input
                        type="password"
                        id="login-password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            set_password.set(event_target_value(&ev));
                        }
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    "Login"
                </button>
            </form>
        </section>
    }
}
