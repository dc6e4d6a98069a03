use propertyhub::server::{app, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up TENANCY_* and PROPERTYHUB_* settings
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "propertyhub=info,tower_http=info".into()),
        )
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = propertyhub::config::config();
    tracing::info!("Starting PropertyHub in {:?} mode", config.environment);

    let state = AppState::from_config(config).unwrap_or_else(|e| {
        eprintln!("Failed to load organization directory: {}", e);
        std::process::exit(1);
    });

    tracing::info!("  Organizations: {}", state.organizations.list().len());
    tracing::info!("  Default:       {}", state.organizations.default_organization().slug);
    if state.organizations.classifier().platform_domains().is_empty() {
        tracing::info!("  Platform:      (label-count classification)");
    } else {
        tracing::info!(
            "  Platform:      {}",
            state.organizations.classifier().platform_domains().join(", ")
        );
    }
    if propertyhub::is_development!() {
        tracing::info!("  Dev override:  ?org=<slug> on localhost");
    }

    let bind_addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Failed to bind {}: {}", bind_addr, e);
            std::process::exit(1);
        });

    tracing::info!("PropertyHub listening on http://{}", bind_addr);

    if let Err(e) = axum::serve(listener, app(state, config)).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
