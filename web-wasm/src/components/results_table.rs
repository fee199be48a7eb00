//! Results table component
//!
//! Renders the enriched rows of the latest submission as one table.
//! The rows signal is written once per submission, after the
//! enrichment join, so the replacement is atomic and row order is the
//! batch order.

use leafscan_common::{ConfidenceTier, EnrichedRow};
use leptos::prelude::*;

#[component]
pub fn ResultsTable(rows: ReadSignal<Option<Vec<EnrichedRow>>>) -> impl IntoView {
    view! {
        <div class="predictions-container">
            {move || {
                rows.get().map(|rows| {
                    view! {
                        <table class="table table-striped table-bordered">
                            <thead class="table-dark">
                                <tr>
                                    <th>"Image"</th>
                                    <th>"Diagnostic"</th>
                                    <th>"Confidence Interval"</th>
                                    <th>"Treatment"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|row| view! { <ResultRow row=row /> })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                })
            }}
        </div>
    }
}

#[component]
fn ResultRow(row: EnrichedRow) -> impl IntoView {
    let tier = ConfidenceTier::from_confidence(row.classification.confidence);
    let confidence_label = format!("{:.2}%", row.classification.confidence);

    view! {
        <tr>
            <td>
                {match row.preview {
                    Some(data_url) => {
                        view! { <img src=data_url class="img-thumbnail" width="100" /> }.into_any()
                    }
                    None => view! { <span class="text-muted">"No preview"</span> }.into_any(),
                }}
            </td>
            <td>{row.classification.disease}</td>
            <td class=tier.text_class()>
                <strong>{confidence_label}</strong>
            </td>
            <td>
                <p>{row.treatment.text}</p>
                <div class="treatment-images">
                    {row
                        .treatment
                        .images
                        .into_iter()
                        .map(|uri| view! { <img src=uri class="treatment-thumb" width="60" /> })
                        .collect_view()}
                </div>
            </td>
        </tr>
    }
}
