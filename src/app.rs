//! Root component assembling the page sections.

use leptos::prelude::*;

use crate::components::{Download, Footer, Navbar, Overview, Preview};

/// Root component: navbar, the three content sections, footer.
///
/// Everything sits inside an [`ErrorBoundary`] so a rendering error shows a
/// reload screen instead of a blank page.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    padding: 2rem;
                    background: #0a0e27;
                    color: #e0e0e0;
                    text-align: center;
                ">
                    <h1 style="color: #ff6b6b; margin: 0;">"Something went wrong"</h1>
                    <p style="color: #a0a8c0; margin: 0;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="list-style: none; padding: 0; color: #ff6b6b; font-size: 0.9rem;">
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, error)| view! { <li>{error.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <button
                        style="
                            margin-top: 1rem;
                            padding: 0.7rem 1.8rem;
                            border: none;
                            border-radius: 6px;
                            background: #4a90e2;
                            color: #0a0e27;
                            font-size: 1rem;
                            cursor: pointer;
                        "
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Navbar />
            <main>
                <Overview />
                <Preview />
                <Download />
            </main>
            <Footer />
        </ErrorBoundary>
    }
}
