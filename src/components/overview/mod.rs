//! Overview section: what the dataset is, plus headline statistics.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{sections, stats, APP_NAME, APP_TAGLINE};
use crate::utils::format_number;

stylance::import_crate_style!(css, "src/components/overview/overview.module.css");

/// One statistic card with an icon, grouped value, and label.
#[component]
fn StatCard(icon: IconData, value: u64, label: &'static str) -> impl IntoView {
    view! {
        <div class=css::stat>
            <span class=css::statIcon>
                <Icon icon=icon />
            </span>
            <span class=css::statValue>{format_number(value)}</span>
            <span class=css::statLabel>{label}</span>
        </div>
    }
}

/// Overview section with the dataset description and statistics strip.
#[component]
pub fn Overview() -> impl IntoView {
    view! {
        <section id=sections::OVERVIEW class=css::section>
            <h1 class=css::title>{APP_NAME}</h1>
            <p class=css::tagline>{APP_TAGLINE}</p>
            <p class=css::description>
                "Every entry pairs a context passage with questions and their "
                "answers, following the SQuAD layout used by extractive "
                "question answering models. The preview below renders the "
                "first entries of the published file."
            </p>
            <div class=css::stats>
                <StatCard icon=ic::QUESTIONS value=stats::QUESTIONS label="Questions" />
                <StatCard icon=ic::PASSAGES value=stats::PASSAGES label="Passages" />
                <StatCard icon=ic::TOPICS value=stats::TOPICS label="Topics" />
            </div>
        </section>
    }
}
