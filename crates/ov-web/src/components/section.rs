use leptos::prelude::*;

/// Part of a page reachable by fragment, e.g. `/#voters` on the landing
/// page or `#ballot` on a vote page.
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    let heading_id = format!("{id}-heading");
    let fragment = format!("#{id}");

    view! {
        <section id=id aria-labelledby=heading_id.clone() class="mb-8">
            <h2 id=heading_id.clone() class="font-bold uppercase mb-3">
                {title}
                <a href=fragment class="section-anchor ml-1" aria-hidden="true">"#"</a>
            </h2>
            <div class="pl-4 border-l border-[var(--rule)]">{children()}</div>
        </section>
    }
}
