use leptos::prelude::*;
use ov_routes::Page;

use crate::components::{ElectionLink, ElectionTable, NavLink, PageHeader, Section};

#[component]
pub fn AdminDashboardNewPage() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <PageHeader title="Admin dashboard" />
            <Section id="elections" title="Elections">
                <ElectionTable link=ElectionLink::AdminResults />
            </Section>
        </main>
    }
}

/// The previous dashboard, kept reachable at its old address.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <PageHeader title="Admin dashboard (legacy)" />
            <p class="mb-6">
                "This dashboard is being replaced. "
                <NavLink page=Page::AdminDashboardNew>"Open the new dashboard \u{2192}"</NavLink>
            </p>
            <Section id="elections" title="Elections">
                <ElectionTable link=ElectionLink::AdminResults />
            </Section>
        </main>
    }
}

#[component]
pub fn ElectionResultsPage(#[prop(into)] election_id: String) -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <PageHeader title="Election results" subtitle=format!("Election {}", election_id) />
            <NavLink page=Page::AdminDashboardNew>"\u{2190} back to dashboard"</NavLink>
        </main>
    }
}
