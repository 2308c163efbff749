//! OpenAPI specification and Swagger UI

use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::{health, resources};
use crate::api::types::PaginationMeta;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sieve API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Filtered, paginated listing over an embedded catalog"
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "resources", description = "Resource catalog and listing")
    ),
    paths(
        health::health,
        resources::list_catalog,
        resources::list_resource,
    ),
    components(schemas(
        PaginationMeta,
        health::HealthResponse,
        resources::AssociationDto,
        resources::ResourceDto,
        resources::CatalogResponse,
    ))
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
pub async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiDoc::openapi()),
    )
}

/// Serve Swagger UI from CDN
pub async fn swagger_ui_html() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sieve API</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({ url: "/api/openapi.json", dom_id: '#swagger-ui' });
        };
    </script>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_resource_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/health"));
        assert!(doc.paths.paths.contains_key("/api/v1/resources"));
        assert!(doc.paths.paths.contains_key("/api/v1/resources/{resource}"));
    }
}
