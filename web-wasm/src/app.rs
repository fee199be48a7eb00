//! Application shell
//!
//! Owns the session, the active surface and the latest results, and
//! wires navigation. The results signal is written exactly once per
//! submission; switching surfaces discards the previous table.

use leafscan_common::{
    initial_surface, transition, EnrichedRow, Error, NavAction, Result, SessionStore, ViewSurface,
};
use leptos::prelude::*;

use crate::api::ApiConfig;
use crate::components::{
    header::Header, login_form::LoginForm, register_agrovet::RegisterAgrovet,
    register_extension::RegisterExtension, results_table::ResultsTable, signup_form::SignupForm,
    upload_form::UploadForm,
};
use crate::storage::LocalStorageStore;

/// Mount precondition: the document and its body region must exist.
/// A broken host page is a configuration error, not a silent return.
pub fn boot() -> Result<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| Error::Config("document is not available".to_string()))?;
    if document.body().is_none() {
        return Err(Error::Config(
            "document has no <body> mount region".to_string(),
        ));
    }
    leptos::mount::mount_to_body(App);
    Ok(())
}

#[component]
pub fn App() -> impl IntoView {
    let store = LocalStorageStore;
    let config = ApiConfig::default();

    let (session, set_session) = signal(store.get());
    let (surface, set_surface) = signal(initial_surface(&store.get()));
    let (rows, set_rows) = signal(None::<Vec<EnrichedRow>>);

    let navigate = move |action: NavAction| {
        if matches!(action, NavAction::LogoutClick) {
            store.clear();
            set_session.set(store.get());
        }
        let next = transition(action);
        if next != ViewSurface::Upload {
            // Leaving the upload surface discards the previous table.
            set_rows.set(None);
        }
        set_surface.set(next);
    };

    let on_login_success = move |token: String, display_name: String| {
        store.set(&token, &display_name);
        set_session.set(store.get());
        navigate(NavAction::LoginSuccess);
    };

    let on_signup_done = move || navigate(NavAction::LoginClick);

    let on_results = move |new_rows: Vec<EnrichedRow>| {
        set_rows.set(Some(new_rows));
    };

    view! {
        <div class="container">
            <Header session=session on_nav=navigate />
            {
                let config = config.clone();
                move || match surface.get() {
                    ViewSurface::Login => {
                        view! { <LoginForm config=config.clone() on_success=on_login_success /> }
                            .into_any()
                    }
                    ViewSurface::Signup => {
                        view! { <SignupForm config=config.clone() on_done=on_signup_done /> }
                            .into_any()
                    }
                    ViewSurface::Upload => {
                        view! {
                            <UploadForm
                                config=config.clone()
                                session=session
                                on_results=on_results
                            />
                            <ResultsTable rows=rows />
                        }
                            .into_any()
                    }
                    ViewSurface::RegisterAgrovet => {
                        view! { <RegisterAgrovet config=config.clone() /> }.into_any()
                    }
                    ViewSurface::RegisterExtensionWorker => {
                        view! { <RegisterExtension config=config.clone() /> }.into_any()
                    }
                }
            }
        </div>
    }
}
