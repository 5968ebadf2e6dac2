use leptos::prelude::*;
use ov_routes::{Page, Params, election_params};

use crate::routing::page_href;

/// In-app link to a page, with the deployment base path applied.
#[component]
pub fn NavLink(
    page: Page,
    /// Bound to `:electionId` for the election-scoped pages
    #[prop(optional, into)]
    election_id: Option<String>,
    children: Children,
) -> impl IntoView {
    let params = election_id.as_deref().map(election_params).unwrap_or_else(Params::new);

    view! { <a href=page_href(page, &params)>{children()}</a> }
}
