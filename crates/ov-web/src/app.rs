use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::notify::{Sonner, Toaster, provide_notifications};
use crate::query::QueryClientProvider;
use crate::routing::Dispatcher;
use crate::tooltip::TooltipProvider;

/// Root component: shared providers first, then the router.
///
/// The router only tracks the location; [`Dispatcher`] picks the page from
/// the app route table, so every path lands on it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_notifications();

    view! {
        <QueryClientProvider>
            <TooltipProvider>
                <Toaster />
                <Sonner />
                <Router>
                    <Routes fallback=|| view! { <Dispatcher /> }>
                        <Route path=path!("/") view=Dispatcher />
                        <Route path=path!("/*any") view=Dispatcher />
                    </Routes>
                </Router>
            </TooltipProvider>
        </QueryClientProvider>
    }
}
