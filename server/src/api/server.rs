//! API server initialization

use std::net::SocketAddr;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use super::middleware::{self, AllowedOrigins};
use super::openapi::{openapi_json, swagger_ui_html};
use super::routes::{health, resources};
use crate::core::CoreApp;
use crate::core::constants::DEFAULT_BODY_LIMIT;
use crate::domain::ListService;

pub struct ApiServer {
    app: CoreApp,
    allowed_origins: AllowedOrigins,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        let allowed_origins = AllowedOrigins::new(
            &app.config.server.host,
            app.config.server.port,
            &app.config.server.cors_origins,
        );
        Self {
            app,
            allowed_origins,
        }
    }

    /// Returns CoreApp for graceful shutdown
    pub async fn start(self) -> Result<CoreApp> {
        let Self {
            app,
            allowed_origins,
        } = self;

        let shutdown = app.shutdown.clone();
        let addr = SocketAddr::new(app.config.server.host.parse()?, app.config.server.port);

        let router = router(app.list.clone(), &allowed_origins);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "Listening");
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown.wait())
        .await?;

        Ok(app)
    }
}

/// Full application router
pub fn router(list: ListService, allowed_origins: &AllowedOrigins) -> Router {
    let health_routes = Router::new()
        .route("/api/v1/health", get(health::health))
        .with_state(list.clone());

    Router::new()
        .route("/api/openapi.json", get(openapi_json))
        .route("/api/docs", get(swagger_ui_html))
        .merge(health_routes)
        .nest("/api/v1/resources", resources::routes(list))
        .fallback(middleware::handle_404)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(middleware::cors(allowed_origins))
        .layer(DefaultBodyLimit::max(DEFAULT_BODY_LIMIT))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::data::filters::PageBounds;
    use crate::data::sqlite::SqliteService;
    use crate::data::sqlite::seed::seed_demo;

    async fn app() -> Router {
        let db = Arc::new(SqliteService::in_memory().await.unwrap());
        seed_demo(db.pool()).await.unwrap();
        let list = ListService::new(db, PageBounds::default());
        router(list, &AllowedOrigins::new("127.0.0.1", 5380, &[]))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn titles(body: &Value) -> Vec<&str> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["title"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_health_ok() {
        let (status, body) = get_json(app().await, "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_catalog_lists_resources() {
        let (status, body) = get_json(app().await, "/api/v1/resources").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body["resources"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["authors", "books", "reviews"]);
        assert_eq!(body["resources"][1]["associations"][0]["kind"], "belongs_to");
        assert_eq!(body["resources"][1]["searchable"], serde_json::json!(["title"]));
        assert_eq!(body["resources"][0]["searchable"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_list_with_meta() {
        let (status, body) =
            get_json(app().await, "/api/v1/resources/books?limit=2&offset=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["meta"],
            serde_json::json!({ "limit": 2, "offset": 1, "total_items": 6 })
        );
        assert_eq!(
            titles(&body),
            vec!["The Left Hand of Darkness", "Guards! Guards!"]
        );
    }

    #[tokio::test]
    async fn test_list_with_encoded_filters() {
        // genre={fantasy}&price=(,10)&order_by=-price
        let (status, body) = get_json(
            app().await,
            "/api/v1/resources/books?genre=%7Bfantasy%7D&price=(%2C10)&order_by=-price",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), vec!["A Wizard of Earthsea", "Guards! Guards!"]);
        assert_eq!(body["meta"]["total_items"], 2);
    }

    #[tokio::test]
    async fn test_list_with_repeated_keys_and_populate() {
        let (status, body) = get_json(
            app().await,
            "/api/v1/resources/reviews?rating=%5B3%2C%5D&rating=(%2C5)&populate=%5Bbook%5D",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let rows = body["data"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["rating"], 4);
        assert_eq!(rows[0]["Book"]["title"], "A Wizard of Earthsea");
        assert_eq!(rows[1]["rating"], 3);
    }

    #[tokio::test]
    async fn test_unknown_resource_is_404() {
        let (status, body) = get_json(app().await, "/api/v1/resources/users").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "RESOURCE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_malformed_resource_is_400() {
        let (status, body) = get_json(app().await, "/api/v1/resources/Books").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, body) = get_json(app().await, "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "ROUTE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_openapi_is_served() {
        let (status, body) = get_json(app().await, "/api/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "Sieve API");
    }

    #[tokio::test]
    async fn test_full_text_filter_on_indexed_column() {
        let (status, body) =
            get_json(app().await, "/api/v1/resources/books?title=m%5Bwizard%5Dm").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), vec!["A Wizard of Earthsea"]);

        let (status, body) =
            get_json(app().await, "/api/v1/resources/books?title=m%5Bdragon%5Dm").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meta"]["total_items"], 0);
    }

    #[tokio::test]
    async fn test_full_text_filter_without_index_is_ignored() {
        let (status, body) =
            get_json(app().await, "/api/v1/resources/reviews?body=m%5Bbleak%5Dm").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meta"]["total_items"], 5);
    }

    #[tokio::test]
    async fn test_or_key_with_unknown_column() {
        let (status, body) =
            get_json(app().await, "/api/v1/resources/books?nope%7C%7Ctitle=x").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meta"]["total_items"], 0);

        let (status, body) = get_json(
            app().await,
            "/api/v1/resources/books?nope%7C%7Ctitle=Small%20Gods",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(titles(&body), vec!["Small Gods"]);
    }

    #[tokio::test]
    async fn test_short_boolean_spelling() {
        let (status, body) = get_json(app().await, "/api/v1/resources/books?in_stock=f").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            titles(&body),
            vec!["The Left Hand of Darkness", "The Snowman"]
        );
    }
}
