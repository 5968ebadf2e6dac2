#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use leptos::prelude::get_configuration;
    use tracing::{info, warn};
    use tracing_subscriber::EnvFilter;

    use ov_web::config::{CONFIG, ServerSettings};

    let settings = ServerSettings::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level)))
        .init();

    // Refuse to start with a route table the dispatcher cannot trust.
    let table = ov_routes::app_routes().context("invalid route table")?;

    if settings.deploy_target_mismatch(CONFIG.deploy_target) {
        warn!(
            runtime = settings.runtime_deploy_target.as_deref().unwrap_or_default(),
            built = ?CONFIG.deploy_target,
            "DEPLOY_TARGET differs from the value this binary was built with; the build-time value wins"
        );
    }

    let conf = get_configuration(None).context("failed to load Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    info!(
        routes = table.len(),
        base_path = CONFIG.base_path.as_str(),
        api = CONFIG.api_base_url,
        "starting {}",
        CONFIG.name
    );

    let app = ov_web::server::router(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    info!("listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client entry point is `ov_web::hydrate`.
}
