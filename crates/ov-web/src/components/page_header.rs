use leptos::prelude::*;
use ov_routes::Page;

use super::NavLink;
use crate::config::CONFIG;

/// Page heading with a way back to the landing page.
#[component]
pub fn PageHeader(#[prop(into)] title: String, #[prop(optional, into)] subtitle: Option<String>) -> impl IntoView {
    view! {
        <header class="mb-8">
            <div class="text-sm text-[var(--ink-light)]">
                <NavLink page=Page::Index>{CONFIG.name}</NavLink>
            </div>
            <h1 class="text-2xl font-bold">{title}</h1>
            {subtitle.map(|s| view! { <div class="text-[var(--ink-light)] mt-2">{s}</div> })}
        </header>
    }
}
