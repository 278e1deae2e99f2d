//! Inbound HTTP surface.
//!
//! Every handler wraps one table-client call and answers with the
//! `{success, data | error, message}` envelope. Client failures map to a
//! generic 500 through [`ApiError::into_response`].

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::client::error::ApiError;
use crate::client::table::ListQuery;
use crate::remap::project::{to_external_fields, to_project, Project, ProjectPatch};
use crate::server::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            axum::routing::put(update_project).delete(delete_project),
        )
        .route("/fields", get(list_fields))
        .route("/test", get(test_connection))
}

async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, ApiError> {
    let page = state.client.list_records(&query).await?;
    let projects: Vec<Project> = page
        .items
        .iter()
        .map(|record| to_project(state.schema, record))
        .collect();

    Ok(Json(json!({
        "success": true,
        "data": {
            "projects": projects,
            "has_more": page.has_more,
            "page_token": page.page_token,
            "total": page.total,
        }
    })))
}

async fn create_project(
    State(state): State<AppState>,
    Json(patch): Json<ProjectPatch>,
) -> Result<Json<Value>, ApiError> {
    let fields = to_external_fields(state.schema, &patch);
    let record = state.client.create_record(fields).await?;

    Ok(Json(json!({
        "success": true,
        "data": { "project": to_project(state.schema, &record) }
    })))
}

async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProjectPatch>,
) -> Result<Json<Value>, ApiError> {
    let fields = to_external_fields(state.schema, &patch);
    let record = state.client.update_record(&id, fields).await?;

    Ok(Json(json!({
        "success": true,
        "data": { "project": to_project(state.schema, &record) }
    })))
}

async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.client.delete_record(&id).await?;

    Ok(Json(json!({
        "success": true,
        "data": { "deleted": deleted }
    })))
}

async fn list_fields(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let fields = state.client.list_fields().await?;

    Ok(Json(json!({
        "success": true,
        "data": { "fields": fields.items, "total": fields.total }
    })))
}

/// Connectivity probe: forces a token fetch and reports presence and length,
/// never the token itself.
async fn test_connection(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let token = state.client.tokens().get_token().await?;

    Ok(Json(json!({
        "success": true,
        "message": "remote table connection ok",
        "data": { "has_token": !token.is_empty(), "token_length": token.len() }
    })))
}
