//! HTTP routing, sitemap, and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with their
//! OpenAPI specifications. The generated document serves two purposes: Swagger UI
//! at `/docs` for interactive exploration, and the machine-readable sitemap at
//! `/` listing every registered route.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the API router and the OpenAPI document describing it.
///
/// Every endpoint is registered through utoipa-axum so the route table and the
/// OpenAPI document cannot drift apart.
fn api() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::user::USER_TAG, description = "User and favorites listing routes"),
        (name = controller::character::PEOPLE_TAG, description = "Character lookup routes"),
        (name = controller::planet::PLANETS_TAG, description = "Planet lookup routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite lifecycle routes"),
    ))]
    struct ApiDoc;

    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_character_by_id))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet_by_id))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::delete_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::delete_favorite_character
        ))
        .split_for_parts()
}

/// Collects every declared route path from the OpenAPI document.
///
/// Includes the root sitemap route itself, sorted for stable output.
fn declared_routes(api: &utoipa::openapi::OpenApi) -> Vec<String> {
    let mut paths: Vec<String> = api.paths.paths.keys().cloned().collect();

    paths.push("/".to_string());
    paths.sort();

    paths
}

/// Builds the application's HTTP router with all API endpoints, the sitemap,
/// and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Machine-readable directory of all registered routes
/// - `GET /user` - List all users
/// - `GET /user/favorites/{user_id}` - List a user's favorites
/// - `GET /people` / `GET /people/{character_id}` - Character lookups
/// - `GET /planets` / `GET /planets/{planet_id}` - Planet lookups
/// - `POST|DELETE /favorite/planet/{planet_id}` - Planet favorite lifecycle
/// - `POST|DELETE /favorite/character/{character_id}` - Character favorite lifecycle
/// - `GET /docs` - Swagger UI over the generated OpenAPI document
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be served
/// once state is attached.
pub fn router() -> Router<AppState> {
    let (router, api) = api();

    let route_paths = declared_routes(&api);

    let router = router.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api));

    router.route(
        "/",
        get(move || {
            let routes = route_paths.clone();
            async move { controller::sitemap::sitemap(routes) }
        }),
    )
}
