//! Upload form component
//!
//! Owns the file input and the in-flight state. Submission runs the
//! whole pipeline: local validation, best-effort geolocation, batch
//! classification, per-row enrichment, then a single callback with
//! the finished rows.

use leafscan_common::{align_results, validate, EnrichedRow, Session};
use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api::{self, ApiConfig};
use crate::{enrich, geolocation, notify};

#[component]
pub fn UploadForm<F>(
    config: ApiConfig,
    session: ReadSignal<Session>,
    on_results: F,
) -> impl IntoView
where
    F: Fn(Vec<EnrichedRow>) + 'static + Clone + Send,
{
    let file_input: NodeRef<Input> = NodeRef::new();
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let files: Vec<File> = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();

        if let Err(error) = validate::batch_non_empty(files.len()) {
            notify::alert(&error.to_string());
            return;
        }

        set_busy.set(true);
        let config = config.clone();
        let session = session.get_untracked();
        let on_results = on_results.clone();
        spawn_local(async move {
            let coordinates = geolocation::acquire().await;
            match api::upload::classify_batch(&config, &session, &files, &coordinates).await {
                Ok(results) => {
                    if results.len() != files.len() {
                        notify::log_warn(
                            "result count mismatch",
                            &format!("{} files submitted, {} results", files.len(), results.len()),
                        );
                    }
                    let pairs = align_results(files, results);
                    let rows = enrich::enrich_rows(&config, pairs).await;
                    on_results(rows);
                }
                Err(error) => {
                    notify::log_error("upload failed", &error.to_string());
                    notify::alert("Image processing failed. See console for details.");
                }
            }
            // In-flight UI is restored on every settle path.
            set_busy.set(false);
        });
    };

    view! {
        <section class="upload-panel">
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="image-upload">"Leaf images"</label>
                    <input
                        type="file"
                        id="image-upload"
                        accept="image/*"
                        multiple=true
                        node_ref=file_input
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Working..." } else { "Predict" }}
                </button>
            </form>
            <Show when=move || busy.get()>
                <p class="loading-indicator">"Analyzing images..."</p>
            </Show>
        </section>
    }
}
