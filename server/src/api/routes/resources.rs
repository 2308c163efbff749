//! Resource listing endpoints
//!
//! `GET /api/v1/resources` describes the catalog; `GET
//! /api/v1/resources/{resource}` lists rows using the filter grammar in the
//! query string.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::api::extractors::{QueryPairs, ResourcePath};
use crate::api::types::{ApiError, PaginatedResponse};
use crate::data::types::AssociationKind;
use crate::domain::ListService;
use crate::domain::catalog::CATALOG;

// ============================================================================
// Response DTOs
// ============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct AssociationDto {
    pub name: &'static str,
    #[schema(value_type = String)]
    pub kind: AssociationKind,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResourceDto {
    pub name: &'static str,
    pub filterable: Vec<String>,
    pub sortable: Vec<String>,
    /// Columns accepting full-text `m[...]m` filters
    pub searchable: Vec<String>,
    pub associations: Vec<AssociationDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub resources: Vec<ResourceDto>,
}

// ============================================================================
// Routes
// ============================================================================

pub fn routes(service: ListService) -> Router<()> {
    Router::new()
        .route("/", get(list_catalog))
        .route("/{resource}", get(list_resource))
        .with_state(service)
}

// ============================================================================
// Handlers
// ============================================================================

/// Describe every listable resource
#[utoipa::path(
    get,
    path = "/api/v1/resources",
    tag = "resources",
    responses(
        (status = 200, description = "Resource catalog", body = CatalogResponse)
    )
)]
pub async fn list_catalog() -> Json<CatalogResponse> {
    let resources = CATALOG
        .iter()
        .map(|r| ResourceDto {
            name: r.name,
            filterable: r.filterable.iter().map(|f| f.to_string()).collect(),
            sortable: r.sortable.iter().map(|f| f.to_string()).collect(),
            searchable: r
                .full_text
                .map(|index| index.columns.iter().map(|f| f.to_string()).collect())
                .unwrap_or_default(),
            associations: r
                .associations
                .iter()
                .map(|a| AssociationDto {
                    name: a.name,
                    kind: a.kind,
                })
                .collect(),
        })
        .collect();
    Json(CatalogResponse { resources })
}

/// List rows of a resource
///
/// Every query key other than `limit`, `offset`, `order_by` and `populate`
/// is a field filter. Filters on fields outside the resource's allow-list
/// are ignored.
#[utoipa::path(
    get,
    path = "/api/v1/resources/{resource}",
    tag = "resources",
    params(
        ("resource" = String, Path, description = "Resource name"),
        ("limit" = Option<u32>, Query, description = "Page size, clamped to the configured maximum"),
        ("offset" = Option<u64>, Query, description = "Rows to skip"),
        ("order_by" = Option<String>, Query, description = "Sort field, `-` prefix for descending; repeatable"),
        ("populate" = Option<String>, Query, description = "Associations to preload, e.g. `[author,reviews]`")
    ),
    responses(
        (status = 200, description = "One page of rows"),
        (status = 400, description = "Malformed resource name or query string"),
        (status = 404, description = "Unknown resource")
    )
)]
pub async fn list_resource(
    State(service): State<ListService>,
    path: ResourcePath,
    QueryPairs(pairs): QueryPairs,
) -> Result<Json<PaginatedResponse<Value>>, ApiError> {
    let result = service.list(&path.resource, pairs).await?;
    let data = result.rows.into_iter().map(Value::Object).collect();
    Ok(Json(PaginatedResponse::new(
        data,
        result.limit,
        result.offset,
        result.total,
    )))
}
