use leptos::prelude::*;
use leptos_router::hooks::use_location;
use ov_routes::Page;

use crate::components::NavLink;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    leptos::logging::warn!("404: no route for {}", path);

    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-16 text-center">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-[var(--ink-light)] mb-4">"Oops! Page not found"</p>
            <NavLink page=Page::Index>"Return to Home"</NavLink>
        </main>
    }
}
