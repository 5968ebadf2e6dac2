//! HTTP surface of the server build: the HTML document shell, the compiled
//! package files and the Leptos page routes.

use std::path::Path;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use leptos_meta::MetaTags;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::App;
use crate::config::CONFIG;

/// Public URL of the package directory (`/pkg`), base path included.
pub fn pkg_url(options: &LeptosOptions) -> String {
    CONFIG.base_path.href(&format!("/{}", options.site_pkg_dir))
}

/// Full HTML document wrapped around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let stylesheet = format!("{}/{}.css", pkg_url(&options), options.output_name);
    // HydrationScripts wants the prefix without a trailing slash, empty at the root.
    let script_root = if CONFIG.base_path.is_root() {
        String::new()
    } else {
        CONFIG.base_path.as_str().to_string()
    };

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=CONFIG.tagline />
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🗳</text></svg>" />
                <link rel="stylesheet" href=stylesheet />
                <AutoReload options=options.clone() />
                <HydrationScripts options=options.clone() root=script_root />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Build the site router.
///
/// The package directory is mounted ahead of the page routes: the page
/// router has a catch-all, so anything left to a fallback service would
/// render the not-found page instead of the file.
pub fn router(options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let pkg_dir = Path::new(&*options.site_root).join(&*options.site_pkg_dir);

    Router::new()
        .nest_service(&pkg_url(&options), ServeDir::new(pkg_dir))
        .leptos_routes(&options, routes, {
            let options = options.clone();
            move || shell(options.clone())
        })
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(options)
}
