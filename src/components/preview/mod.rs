//! Dataset preview section.
//!
//! Fetches the dataset document once on mount, derives at most
//! [`PREVIEW_LIMIT`] question/context/answer blocks, and renders them (or
//! one of the fallback messages) into the preview region.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::{
    sections, DATASET_URL, PREVIEW_EMPTY_MESSAGE, PREVIEW_ERROR_MESSAGE, PREVIEW_LIMIT,
    PREVIEW_LOADING_MESSAGE,
};
use crate::core::collect_preview;
use crate::models::{Dataset, PreviewItem, PreviewState};
use crate::utils::fetch_json;

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

/// Load the dataset from its fixed location and resolve the preview state.
async fn load_preview() -> PreviewState {
    load_preview_from(DATASET_URL).await
}

/// Load a dataset document from `url` and resolve the next preview state.
///
/// Any retrieval or derivation failure collapses into
/// [`PreviewState::Failed`]; the cause goes to the console, the page shows
/// a single static message.
async fn load_preview_from(url: &str) -> PreviewState {
    let dataset: Dataset = match fetch_json(url).await {
        Ok(dataset) => dataset,
        Err(e) => {
            web_sys::console::error_1(&format!("Error loading dataset preview: {e}").into());
            return PreviewState::Failed;
        }
    };

    match collect_preview(&dataset, PREVIEW_LIMIT) {
        Ok(items) => PreviewState::from_items(items),
        Err(e) => {
            web_sys::console::error_1(&format!("Error loading dataset preview: {e}").into());
            PreviewState::Failed
        }
    }
}

/// One rendered preview block.
#[component]
fn PreviewBlock(item: PreviewItem) -> impl IntoView {
    view! {
        <div class=css::item>
            <h4 class=css::question>{format!("Q: {}", item.question)}</h4>
            <p class=css::context>{format!("Context: {}", item.context_snippet)}</p>
            <p class=css::answer>{format!("A: {}", item.answer)}</p>
        </div>
    }
}

/// Preview section: heading plus the preview region.
///
/// The load runs exactly once per mount; each state change fully replaces
/// the region's content.
#[component]
pub fn Preview() -> impl IntoView {
    let (state, set_state) = signal(PreviewState::Loading);

    let load_started = StoredValue::new(false);
    Effect::new(move || {
        if !load_started.get_value() {
            load_started.set_value(true);
            spawn_local(async move {
                set_state.set(load_preview().await);
            });
        }
    });

    view! {
        <section id=sections::PREVIEW class=css::section>
            <h2 class=css::heading>"Dataset Preview"</h2>
            <div class=css::region>
                {move || match state.get() {
                    PreviewState::Loading => view! {
                        <p class=css::notice>{PREVIEW_LOADING_MESSAGE}</p>
                    }
                    .into_any(),
                    PreviewState::Failed => view! {
                        <p class=css::error>{PREVIEW_ERROR_MESSAGE}</p>
                    }
                    .into_any(),
                    PreviewState::Empty => view! {
                        <p class=css::notice>{PREVIEW_EMPTY_MESSAGE}</p>
                    }
                    .into_any(),
                    PreviewState::Ready(items) => {
                        let blocks = items
                            .into_iter()
                            .map(|item| view! { <PreviewBlock item=item /> })
                            .collect::<Vec<_>>();
                        view! { <div class=css::items>{blocks}</div> }.into_any()
                    }
                }}
            </div>
        </section>
    }
}
