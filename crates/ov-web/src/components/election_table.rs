use leptos::prelude::*;
use ov_routes::Page;

use super::NavLink;
use crate::api::{ElectionStatus, ElectionSummary, elections_key, elections_url};
use crate::notify::use_notifications;
use crate::query::{use_query, use_query_client};

/// What each row links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElectionLink {
    Vote,
    AdminResults,
    /// Listing only.
    Plain,
}

/// Skeleton loading state for the election listing
#[component]
fn ElectionTableSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-1">
            <div class="skeleton-line">"\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}"</div>
            <div class="skeleton-line">"\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}"</div>
            <div class="skeleton-line">"\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}\u{2591}"</div>
        </div>
    }
}

/// Election listing loaded through the shared query cache.
#[component]
pub fn ElectionTable(link: ElectionLink) -> impl IntoView {
    let elections = use_query::<Vec<ElectionSummary>>(elections_key(), elections_url());
    let handle = use_query_client();
    let sonner = use_notifications().sonner;

    view! {
        <div class="space-y-2">
            <Suspense fallback=move || view! { <ElectionTableSkeleton /> }>
                {move || {
                    elections.get().map(|result| match result {
                        Ok(rows) if rows.is_empty() => view! {
                            <div class="text-[var(--ink-light)]">"No elections yet."</div>
                        }.into_any(),
                        Ok(rows) => view! {
                            <ul class="space-y-1">
                                {rows.into_iter().map(|row| view! { <ElectionRow row=row link=link /> }).collect_view()}
                            </ul>
                        }.into_any(),
                        Err(_) => view! {
                            <div class="text-[var(--ink-light)]">
                                "Elections are unavailable right now. Try again shortly."
                            </div>
                        }.into_any(),
                    })
                }}
            </Suspense>
            <button
                type="button"
                class="px-3 py-1 border border-dashed border-[var(--rule)] hover:bg-[var(--rule)] transition-colors cursor-pointer"
                on:click=move |_| {
                    handle.invalidate(&elections_key());
                    sonner.info("Refreshing elections");
                }
            >
                "refresh"
            </button>
        </div>
    }
}

#[component]
fn ElectionRow(row: ElectionSummary, link: ElectionLink) -> impl IntoView {
    let ElectionSummary { id, title, status } = row;
    let target = match link {
        ElectionLink::Vote if status == ElectionStatus::Active => Some((Page::Vote, "vote \u{2192}")),
        ElectionLink::Vote => None,
        ElectionLink::AdminResults => Some((Page::ElectionResults, "results \u{2192}")),
        ElectionLink::Plain => None,
    };

    view! {
        <li>
            <strong>{title}</strong>
            " \u{00B7} " {status.label()} " "
            {target.map(|(page, label)| view! { <NavLink page=page election_id=id.clone()>{label}</NavLink> })}
        </li>
    }
}
