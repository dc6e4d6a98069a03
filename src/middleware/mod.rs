pub mod resolve_organization;
pub mod response;
pub mod route_filter;

pub use resolve_organization::{resolve_organization_middleware, with_org_query, ResolvedOrganization};
pub use response::{ApiResponse, ApiResult};
