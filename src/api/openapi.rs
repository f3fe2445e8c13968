//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, papers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BibSync API",
        version = "0.3.0",
        description = "Bibliographic record synchronization REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Papers
        papers::sync_search,
        papers::local_search,
        papers::get_paper,
        papers::get_paper_by_external_id,
        papers::get_external_ids,
        papers::get_authors,
    ),
    components(
        schemas(
            // Papers
            crate::models::paper::Paper,
            crate::models::paper::PaperSearchQuery,
            crate::models::paper_id::PaperId,
            crate::models::author::Author,
            papers::PaperListResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "papers", description = "Paper catalog search and lookups")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
