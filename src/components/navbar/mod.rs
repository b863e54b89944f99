//! Top navigation bar.
//!
//! Brand on the left, section links on the right. Links smooth-scroll to
//! their target section instead of navigating.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{sections, APP_NAME};
use crate::utils::scroll_to_section;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// One smooth-scrolling section link.
#[component]
fn NavLink(label: &'static str, section_id: &'static str) -> impl IntoView {
    view! {
        <button class=css::link on:click=move |_| scroll_to_section(section_id)>
            {label}
        </button>
    }
}

/// Top navigation bar with smooth-scroll links to the page sections.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class=css::bar>
            <span class=css::brand>
                <span class=css::brandIcon>
                    <Icon icon=ic::BRAND />
                </span>
                {APP_NAME}
            </span>
            <div class=css::links>
                <NavLink label="Overview" section_id=sections::OVERVIEW />
                <NavLink label="Preview" section_id=sections::PREVIEW />
                <NavLink label="Download" section_id=sections::DOWNLOAD />
            </div>
        </nav>
    }
}
