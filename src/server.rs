use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers::{health, organizations, pages};
use crate::middleware::resolve_organization_middleware;
use crate::organization::DirectoryError;
use crate::services::OrganizationService;

/// State shared by handlers and the edge resolver. The directory is
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub organizations: Arc<OrganizationService>,
    pub trust_forwarded_host: bool,
}

impl AppState {
    pub fn new(organizations: OrganizationService, trust_forwarded_host: bool) -> Self {
        Self {
            organizations: Arc::new(organizations),
            trust_forwarded_host,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, DirectoryError> {
        let organizations = OrganizationService::from_config(
            config.tenancy.directory_path.as_deref(),
            &config.tenancy.platform_domains,
        )?;

        Ok(Self::new(organizations, config.tenancy.trust_forwarded_host))
    }
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Pages (edge resolver applies)
        .route("/", get(pages::home))
        .route("/dashboard/:role", get(pages::dashboard))
        .route("/health", get(health))
        // API (skipped by the edge resolver)
        .merge(api_routes())
        .layer(from_fn_with_state(state.clone(), resolve_organization_middleware))
        .with_state(state);

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/organizations", get(organizations::list))
        .route("/api/organizations/:slug", get(organizations::get))
        .route("/api/resolve", get(organizations::resolve))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
}
