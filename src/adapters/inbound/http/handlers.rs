use super::error::ApiError;
use super::AppState;
use crate::application::dto::{DependencyViewRequest, ModuleViewRequest, TreeRequest};
use crate::application::read_models::{DependencyGraphView, ModuleGraphView, TreeView};
use crate::topology::domain::{
    AppRecord, DependencyRecord, FederatedAppManifest, NodePath, SavedApp,
};
use crate::topology::policies::Viewport;
use crate::topology::services::MAX_SEARCH_LENGTH;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

/// Largest viewport edge accepted from a client
const MAX_VIEWPORT_EDGE: f64 = 100_000.0;

#[derive(Debug, Deserialize)]
pub struct AppsQuery {
    pub host: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TreeQuery {
    pub host: String,
    /// Comma-separated node paths
    pub collapsed: Option<String>,
    pub depth: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub search: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ViewQuery {
    fn viewport(&self) -> Result<Viewport, ApiError> {
        let default = Viewport::default();
        let width = self.width.unwrap_or(default.width);
        let height = self.height.unwrap_or(default.height);

        for (name, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value <= 0.0 || value > MAX_VIEWPORT_EDGE {
                return Err(ApiError::bad_request(format!(
                    "Invalid {}: {}. Expected a positive number up to {}",
                    name, value, MAX_VIEWPORT_EDGE
                )));
            }
        }
        Ok(Viewport::new(width, height))
    }

    fn search(&self) -> Result<String, ApiError> {
        let search = self.search.clone().unwrap_or_default();
        if search.len() > MAX_SEARCH_LENGTH {
            return Err(ApiError::bad_request(format!(
                "Invalid search: {} bytes. Expected at most {}",
                search.len(),
                MAX_SEARCH_LENGTH
            )));
        }
        Ok(search)
    }
}

fn parse_collapsed(raw: Option<&str>) -> Result<Vec<NodePath>, ApiError> {
    raw.unwrap_or("")
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.trim().parse::<NodePath>().map_err(ApiError::bad_request))
        .collect()
}

pub async fn save_app(
    State(state): State<AppState>,
    body: Result<Json<FederatedAppManifest>, JsonRejection>,
) -> ApiResult<SavedApp> {
    let Json(manifest) = body?;
    let saved = state.topology.save_manifest(manifest).await?;
    Ok(Json(saved))
}

pub async fn list_apps(
    State(state): State<AppState>,
    query: Result<Query<AppsQuery>, QueryRejection>,
) -> ApiResult<Vec<AppRecord>> {
    let Query(query) = query?;
    let host = query.host.filter(|host| !host.is_empty());
    Ok(Json(state.topology.list_apps(host).await?))
}

pub async fn list_hosts(State(state): State<AppState>) -> ApiResult<Vec<AppRecord>> {
    Ok(Json(state.topology.list_hosts().await?))
}

pub async fn list_dependencies(State(state): State<AppState>) -> ApiResult<Vec<DependencyRecord>> {
    Ok(Json(state.topology.list_dependencies().await?))
}

pub async fn app_tree(
    State(state): State<AppState>,
    query: Result<Query<TreeQuery>, QueryRejection>,
) -> ApiResult<TreeView> {
    let Query(query) = query?;
    let collapsed = parse_collapsed(query.collapsed.as_deref())?;
    let request = TreeRequest::new(query.host)
        .with_collapsed(collapsed)
        .with_max_depth(query.depth);
    Ok(Json(state.topology.app_tree(request).await?))
}

pub async fn dependency_view(
    State(state): State<AppState>,
    query: Result<Query<ViewQuery>, QueryRejection>,
) -> ApiResult<DependencyGraphView> {
    let Query(query) = query?;
    let viewport = query.viewport()?;
    let request = DependencyViewRequest::new(query.search()?, viewport);
    Ok(Json(state.topology.dependency_view(request).await?))
}

pub async fn module_view(
    State(state): State<AppState>,
    query: Result<Query<ViewQuery>, QueryRejection>,
) -> ApiResult<ModuleGraphView> {
    let Query(query) = query?;
    let request = ModuleViewRequest::new(query.viewport()?);
    Ok(Json(state.topology.module_view(request).await?))
}

pub async fn healthz() -> &'static str {
    "ok"
}
