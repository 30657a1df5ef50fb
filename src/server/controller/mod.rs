//! HTTP request handlers for all API endpoints.
//!
//! Controllers extract request data, call into the service layer, and convert
//! domain models to DTOs for the response. Each handler carries a utoipa path
//! annotation; the generated OpenAPI document doubles as the source of the
//! sitemap served at the root path.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod user;
