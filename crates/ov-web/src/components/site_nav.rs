use leptos::prelude::*;
use ov_routes::Page;

use super::NavLink;

const VOTER_LINKS: &[(Page, &str)] = &[
    (Page::ElectionList, "elections"),
    (Page::Results, "results"),
    (Page::UserHome, "account"),
];

const ADMIN_LINKS: &[(Page, &str)] = &[(Page::AdminDashboardNew, "dashboard"), (Page::Results, "public results")];

/// Links shown above `page`. Sign-in and recovery forms get none.
pub fn nav_links(page: Page) -> &'static [(Page, &'static str)] {
    if page.is_auth_flow() {
        &[]
    } else if page.is_admin() {
        ADMIN_LINKS
    } else {
        VOTER_LINKS
    }
}

/// Top navigation for the voter or admin side, depending on the page shown.
#[component]
pub fn SiteNav(page: Page) -> impl IntoView {
    let links = nav_links(page);
    let class = if page.is_admin() { "site-nav site-nav-admin" } else { "site-nav" };

    (!links.is_empty()).then(|| {
        view! {
            <nav class=class>
                {links
                    .iter()
                    .map(|(target, label)| {
                        let class = if *target == page { "mr-4 font-bold" } else { "mr-4" };
                        view! {
                            <span class=class>
                                <NavLink page=*target>{*label}</NavLink>
                            </span>
                        }
                    })
                    .collect_view()}
            </nav>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(page: Page) -> Vec<Page> {
        nav_links(page).iter().map(|(p, _)| *p).collect()
    }

    #[test]
    fn forms_have_no_navigation() {
        for page in [Page::Login, Page::Register, Page::ResetPassword, Page::AdminLogin] {
            assert!(nav_links(page).is_empty(), "{page:?}");
        }
    }

    #[test]
    fn admin_pages_link_to_the_dashboard() {
        assert_eq!(targets(Page::ElectionResults), [Page::AdminDashboardNew, Page::Results]);
        assert_eq!(targets(Page::AdminDashboard), [Page::AdminDashboardNew, Page::Results]);
    }

    #[test]
    fn voter_pages_link_to_elections() {
        assert_eq!(targets(Page::Vote), [Page::ElectionList, Page::Results, Page::UserHome]);
        assert_eq!(targets(Page::NotFound), targets(Page::Index));
    }
}
