//! Location -> page dispatch for the app shell, and link generation.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;
use ov_routes::{BasePath, ELECTION_ID, Page, Params, RouteTableError, app_routes};

use crate::components::SiteNav;
use crate::config::CONFIG;
use crate::pages::{
    AdminDashboardNewPage, AdminDashboardPage, AdminLoginPage, ElectionListPage, ElectionResultsPage,
    ForgotPasswordPage, IndexPage, LoginPage, NotFoundPage, RegisterPage, ResetPasswordPage, ResultsPage,
    UserHomePage, VotePage, VoteSuccessPage,
};

/// The page chosen for one location, with its bound parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub page: Page,
    pub params: Params,
}

/// Strip `base` from a browser path and dispatch the rest.
///
/// Paths outside the base resolve to the catch-all page.
pub fn resolve_with(base: BasePath, path: &str) -> Result<Resolved, RouteTableError> {
    let table = app_routes()?;
    let resolved = match base.strip(path) {
        Some(local) => {
            let m = table.dispatch(local);
            Resolved {
                page: m.page,
                params: m.params,
            }
        }
        None => Resolved {
            page: table.fallback_page(),
            params: Params::default(),
        },
    };
    Ok(resolved)
}

pub fn resolve(path: &str) -> Result<Resolved, RouteTableError> {
    resolve_with(CONFIG.base_path, path)
}

/// Link to `page`, base path included. Falls back to the home link when
/// the page has no route or a parameter is missing.
pub fn page_href(page: Page, params: &Params) -> String {
    let path = app_routes()
        .ok()
        .and_then(|table| table.href_for(page, params))
        .unwrap_or_else(|| "/".to_string());
    CONFIG.base_path.href(&path)
}

/// Renders exactly one page for the current location.
#[component]
pub fn Dispatcher() -> impl IntoView {
    let location = use_location();
    let resolved = Memo::new(move |_| resolve(&location.pathname.get()));

    move || match resolved.get() {
        Ok(resolved) => render_page(resolved).into_any(),
        Err(e) => {
            leptos::logging::error!("route table rejected: {}", e);
            view! {
                <main class="max-w-[80ch] mx-auto px-4 py-8">
                    <p>"This site is misconfigured and cannot show any page."</p>
                </main>
            }
            .into_any()
        }
    }
}

fn render_page(resolved: Resolved) -> impl IntoView {
    let page = resolved.page;
    let election_id = resolved.params.get(ELECTION_ID).unwrap_or_default().to_string();

    let body = match page {
        Page::Index => view! { <IndexPage /> }.into_any(),
        Page::Results => view! { <ResultsPage /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Register => view! { <RegisterPage /> }.into_any(),
        Page::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        Page::ResetPassword => view! { <ResetPasswordPage /> }.into_any(),
        Page::AdminLogin => view! { <AdminLoginPage /> }.into_any(),
        Page::AdminDashboardNew => view! { <AdminDashboardNewPage /> }.into_any(),
        Page::AdminDashboard => view! { <AdminDashboardPage /> }.into_any(),
        Page::ElectionResults => view! { <ElectionResultsPage election_id=election_id /> }.into_any(),
        Page::UserHome => view! { <UserHomePage /> }.into_any(),
        Page::ElectionList => view! { <ElectionListPage /> }.into_any(),
        Page::Vote => view! { <VotePage election_id=election_id /> }.into_any(),
        Page::VoteSuccess => view! { <VoteSuccessPage /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    };

    view! {
        <Title text=format!("{} | {}", page.title(), CONFIG.name) />
        <SiteNav page=page />
        {body}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ov_routes::DeployTarget;

    #[test]
    fn root_deploy() {
        let base = BasePath::for_target(DeployTarget::Default);
        let r = resolve_with(base, "/admin/results/7").unwrap();
        assert_eq!(r.page, Page::ElectionResults);
        assert_eq!(r.params.get(ELECTION_ID), Some("7"));
        assert_eq!(resolve_with(base, "/nonexistent/page").unwrap().page, Page::NotFound);
    }

    #[test]
    fn project_site_deploy() {
        let base = BasePath::for_target(DeployTarget::GithubPages);
        assert_eq!(
            resolve_with(base, "/Online_Voting_System/vote/success").unwrap().page,
            Page::VoteSuccess
        );
        assert_eq!(resolve_with(base, "/Online_Voting_System/").unwrap().page, Page::Index);
        // Outside the prefix nothing matches.
        assert_eq!(resolve_with(base, "/elections").unwrap().page, Page::NotFound);
    }

    #[test]
    fn hrefs_carry_the_built_base() {
        let href = page_href(Page::Vote, &ov_routes::election_params("42"));
        assert_eq!(href, CONFIG.base_path.href("/vote/42"));
        assert_eq!(page_href(Page::Vote, &Params::new()), CONFIG.base_path.href("/"));
    }
}
