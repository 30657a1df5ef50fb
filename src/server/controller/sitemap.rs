use axum::{http::StatusCode, Json};

use crate::model::api::SitemapDto;

/// Builds the machine-readable route directory served at the root path.
///
/// The route list is derived from the generated OpenAPI document when the
/// router is assembled, so it always reflects what is actually registered.
///
/// # Arguments
/// - `routes` - Every declared route path
///
/// # Returns
/// A 200 OK response with the route listing as JSON
pub fn sitemap(routes: Vec<String>) -> (StatusCode, Json<SitemapDto>) {
    (StatusCode::OK, Json(SitemapDto { routes }))
}
