use leptos::prelude::*;
use ov_routes::Page;

use crate::components::{ElectionLink, ElectionTable, NavLink, PageHeader, Section};
use crate::tooltip::Tooltip;

#[component]
pub fn ElectionListPage() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <PageHeader title="Elections" subtitle="Open elections can be voted in once per account." />
            <ElectionTable link=ElectionLink::Vote />
        </main>
    }
}

#[component]
pub fn VotePage(#[prop(into)] election_id: String) -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <PageHeader title="Cast your vote" subtitle=format!("Election {}", election_id) />
            <Section id="ballot" title="Ballot">
                <p>
                    <Tooltip label="Ballots are stored without your identity.">
                        "Your vote is anonymous \u{24D8}"
                    </Tooltip>
                </p>
            </Section>
            <div class="space-y-1">
                <div><NavLink page=Page::ElectionList>"\u{2190} all elections"</NavLink></div>
                <div><NavLink page=Page::Results>"results \u{2192}"</NavLink></div>
            </div>
        </main>
    }
}

#[component]
pub fn VoteSuccessPage() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12 text-center">
            <PageHeader title="Vote recorded" subtitle="Thank you for voting." />
            <div class="space-y-1">
                <div><NavLink page=Page::UserHome>"back to your account"</NavLink></div>
                <div><NavLink page=Page::Results>"see results \u{2192}"</NavLink></div>
            </div>
        </main>
    }
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <PageHeader title="Results" subtitle="Results are published once an election closes." />
            <ElectionTable link=ElectionLink::Plain />
        </main>
    }
}
