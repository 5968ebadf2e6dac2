use leptos::prelude::*;
use ov_routes::Page;

use crate::components::{NavLink, PageHeader, Section};
use crate::config::CONFIG;

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <header class="mb-8 text-center">
                <h1 class="text-2xl font-bold">{CONFIG.name}</h1>
                <div class="text-[var(--ink-light)] mt-2">{CONFIG.tagline}</div>
            </header>

            <Section id="voters" title="Voters">
                <div class="space-y-1">
                    <div><NavLink page=Page::Login>"sign in \u{2192}"</NavLink></div>
                    <div><NavLink page=Page::Register>"create an account \u{2192}"</NavLink></div>
                    <div><NavLink page=Page::ElectionList>"open elections \u{2192}"</NavLink></div>
                </div>
            </Section>

            <Section id="results" title="Results">
                <NavLink page=Page::Results>"published results \u{2192}"</NavLink>
            </Section>

            <Section id="admin" title="Administrators">
                <NavLink page=Page::AdminLogin>"admin sign in \u{2192}"</NavLink>
            </Section>
        </main>
    }
}

#[component]
pub fn UserHomePage() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <PageHeader title="Your account" />
            <Section id="next" title="Next steps">
                <div class="space-y-1">
                    <div><NavLink page=Page::ElectionList>"elections you can vote in \u{2192}"</NavLink></div>
                    <div><NavLink page=Page::Results>"results \u{2192}"</NavLink></div>
                </div>
            </Section>
        </main>
    }
}
