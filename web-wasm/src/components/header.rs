//! Header component: brand, greeting and navigation

use leafscan_common::{NavAction, Session};
use leptos::prelude::*;

#[component]
pub fn Header<F>(session: ReadSignal<Session>, on_nav: F) -> impl IntoView
where
    F: Fn(NavAction) + 'static + Clone + Send + Sync,
{
    let authenticated = move || session.get().is_authenticated();
    let greeting = move || {
        let session = session.get();
        if session.is_authenticated() {
            format!("Welcome, {}!", session.greeting_name())
        } else {
            String::new()
        }
    };

    let on_nav_a = on_nav.clone();
    let on_nav_b = on_nav.clone();
    view! {
        <header class="header">
            <h1>"LeafScan - Maize Leaf Diagnostics"</h1>
            <span class="user-greeting">{greeting}</span>
            <nav class="nav-buttons">
                <Show when=move || !authenticated()>
                    <button
                        class="btn btn-secondary"
                        on:click={
                            let on_nav = on_nav_a.clone();
                            move |_| on_nav(NavAction::LoginClick)
                        }
                    >
                        "Login"
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click={
                            let on_nav = on_nav_a.clone();
                            move |_| on_nav(NavAction::SignupClick)
                        }
                    >
                        "Signup"
                    </button>
                </Show>
                <Show when=authenticated>
                    <button
                        class="btn btn-secondary"
                        on:click={
                            let on_nav = on_nav_b.clone();
                            move |_| on_nav(NavAction::LogoutClick)
                        }
                    >
                        "Logout"
                    </button>
                </Show>
                <button
                    class="btn btn-tertiary"
                    on:click={
                        let on_nav = on_nav.clone();
                        move |_| on_nav(NavAction::RegisterAgrovetClick)
                    }
                >
                    "Register Agrovet"
                </button>
                <button
                    class="btn btn-tertiary"
                    on:click={
                        let on_nav = on_nav.clone();
                        move |_| on_nav(NavAction::RegisterExtensionClick)
                    }
                >
                    "Register Extension Worker"
                </button>
            </nav>
        </header>
    }
}
