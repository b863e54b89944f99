//! Page footer.

use leptos::prelude::*;

use crate::config::{APP_NAME, APP_VERSION};

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

/// Footer with the project name and version.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class=css::bar>
            <span class=css::meta>{format!("{APP_NAME} v{APP_VERSION}")}</span>
            <span class=css::note>"Built for reading comprehension research."</span>
        </footer>
    }
}
