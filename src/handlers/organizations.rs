use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::handlers::pages::OrganizationSummary;
use crate::middleware::{ApiResponse, ApiResult};
use crate::organization::Organization;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub host: Option<String>,
    pub org: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResolveResult {
    pub host: String,
    /// Classifier output in header wire form
    pub identifier: String,
    /// True when nothing matched and the default organization was served
    pub is_default: bool,
    pub organization: Organization,
}

/// GET /api/organizations
pub async fn list(State(state): State<AppState>) -> ApiResponse<Vec<OrganizationSummary>> {
    let summaries = state
        .organizations
        .list()
        .iter()
        .map(OrganizationSummary::from)
        .collect();

    ApiResponse::success(summaries)
}

/// GET /api/organizations/:slug
pub async fn get(State(state): State<AppState>, Path(slug): Path<String>) -> ApiResult<Organization> {
    let org = state
        .organizations
        .find_by_slug(&slug)
        .ok_or_else(|| ApiError::not_found(format!("Organization '{}' not found", slug)))?;

    Ok(ApiResponse::success(org.clone()))
}

/// GET /api/resolve?host=...&org=...
pub async fn resolve(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> ApiResult<ResolveResult> {
    let host = query
        .host
        .filter(|h| !h.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Query parameter 'host' is required"))?;

    let svc = &state.organizations;
    let identifier = svc.classifier().classify(&host, query.org.as_deref());
    let matched = svc.lookup(&identifier);

    Ok(ApiResponse::success(ResolveResult {
        identifier: identifier.to_header_value(),
        is_default: matched.is_none(),
        organization: matched.unwrap_or_else(|| svc.resolve(&identifier)).clone(),
        host,
    }))
}
