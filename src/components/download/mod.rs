//! Download section for the dataset file.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{sections, DATASET_URL};

stylance::import_crate_style!(css, "src/components/download/download.module.css");

/// Download section pointing at the published dataset file.
#[component]
pub fn Download() -> impl IntoView {
    view! {
        <section id=sections::DOWNLOAD class=css::section>
            <h2 class=css::heading>"Download"</h2>
            <p class=css::text>
                "The complete dataset ships as a single JSON file in SQuAD "
                "format and loads with any SQuAD-compatible tooling."
            </p>
            <a class=css::button href=DATASET_URL download="">
                <span class=css::buttonIcon>
                    <Icon icon=ic::DOWNLOAD />
                </span>
                "Download squad_format.json"
            </a>
        </section>
    }
}
