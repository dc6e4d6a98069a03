use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::HOST, request::Parts, uri::PathAndQuery, HeaderMap, HeaderValue, Uri},
    middleware::Next,
    response::Response,
};
use url::form_urlencoded;

use super::route_filter;
use crate::organization::Organization;
use crate::server::AppState;
use crate::tenancy::{
    is_development_host, normalize_host, HostIdentifier, OrganizationHint, HOSTNAME_HEADER,
    ORGANIZATION_HEADER, ORG_QUERY_PARAM,
};

const FORWARDED_HOST: &str = "x-forwarded-host";

/// Edge resolver: classifies the request host before any page handler runs
/// and attaches the result as `x-organization-slug` / `x-hostname` request
/// headers, mirrored on the response.
///
/// On development hosts the derived identifier is also written into the
/// `org` query parameter unless the request already carries one.
pub async fn resolve_organization_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if route_filter::is_excluded(request.uri().path()) {
        return next.run(request).await;
    }

    let hostname = request_host(request.headers(), request.uri(), state.trust_forwarded_host);
    let development = is_development_host(&normalize_host(&hostname));

    let dev_override = if development {
        query_param(request.uri(), ORG_QUERY_PARAM)
    } else {
        None
    };

    let identifier = state
        .organizations
        .classifier()
        .classify(&hostname, dev_override.as_deref());

    tracing::debug!(
        "Resolved host '{}' to identifier '{}' for {}",
        hostname,
        identifier,
        request.uri().path()
    );

    if development && !identifier.is_none() {
        let rewritten = with_org_query(request.uri(), &identifier.to_header_value());
        *request.uri_mut() = rewritten;
    }

    let identifier_value = header_value(&identifier.to_header_value());
    let hostname_value = header_value(&hostname);

    request.headers_mut().insert(ORGANIZATION_HEADER, identifier_value.clone());
    request.headers_mut().insert(HOSTNAME_HEADER, hostname_value.clone());
    request.extensions_mut().insert(OrganizationHint {
        identifier,
        hostname,
    });

    let mut response = next.run(request).await;
    response.headers_mut().insert(ORGANIZATION_HEADER, identifier_value);
    response.headers_mut().insert(HOSTNAME_HEADER, hostname_value);
    response
}

/// Raw host of the request: `X-Forwarded-Host` (first value) when trusted,
/// then `Host`, then the URI authority.
pub fn request_host(headers: &HeaderMap, uri: &Uri, trust_forwarded_host: bool) -> String {
    let forwarded = trust_forwarded_host
        .then(|| header_str(headers, FORWARDED_HOST))
        .flatten()
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    forwarded
        .or_else(|| header_str(headers, HOST.as_str()))
        .map(str::to_string)
        .or_else(|| uri.authority().map(|a| a.as_str().to_string()))
        .unwrap_or_default()
}

/// Uri with `org=<identifier>` appended, or unchanged when `org` is already
/// present. Applying it repeatedly yields the same Uri.
pub fn with_org_query(uri: &Uri, identifier: &str) -> Uri {
    if query_param(uri, ORG_QUERY_PARAM).is_some() {
        return uri.clone();
    }

    let pair = form_urlencoded::Serializer::new(String::new())
        .append_pair(ORG_QUERY_PARAM, identifier)
        .finish();

    let path_and_query = match uri.query() {
        Some(query) if !query.is_empty() => format!("{}?{}&{}", uri.path(), query, pair),
        _ => format!("{}?{}", uri.path(), pair),
    };

    let mut parts = uri.clone().into_parts();
    match PathAndQuery::try_from(path_and_query) {
        Ok(pq) => parts.path_and_query = Some(pq),
        Err(e) => {
            tracing::warn!("Skipping org query rewrite: {}", e);
            return uri.clone();
        }
    }

    Uri::from_parts(parts).unwrap_or_else(|_| uri.clone())
}

fn query_param(uri: &Uri, name: &str) -> Option<String> {
    form_urlencoded::parse(uri.query()?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn header_value(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// Organization for the current request, taken from the hint the edge
/// resolver attached. Requests the resolver skipped get the default; tenant
/// headers sent by the client are never consulted.
#[derive(Debug, Clone)]
pub struct ResolvedOrganization {
    pub organization: Organization,
    pub identifier: HostIdentifier,
    pub hostname: String,
}

#[async_trait]
impl FromRequestParts<AppState> for ResolvedOrganization {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let (identifier, hostname) = match parts.extensions.get::<OrganizationHint>() {
            Some(hint) => (hint.identifier.clone(), hint.hostname.clone()),
            None => (HostIdentifier::None, String::new()),
        };

        let organization = state.organizations.resolve(&identifier).clone();

        Ok(Self {
            organization,
            identifier,
            hostname,
        })
    }
}
