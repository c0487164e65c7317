//! Axum route handlers for the template gallery.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::AssetUrls;
use crate::errors::AppError;
use crate::export::ExportOptions;
use crate::layout::scripts::viewport_fit_script_for;
use crate::layout::{
    calculate_standard_layout, generate_title_fit_script, generate_viewport_fit_script,
    get_standard_title_config, LayoutPlan, TitleBucket, TitleFitConfig, ViewportFitParams,
};
use crate::state::AppState;
use crate::templates::{Content, GridPlan, TemplateMeta, TemplateResolver};

const MAX_PREVIEW_SCALE: f32 = 4.0;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub default_template_id: String,
    pub templates: Vec<TemplateMeta>,
    /// Stylesheet and script URLs exported documents link to.
    pub assets: AssetUrls,
}

#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResponse {
    pub card_count: usize,
    pub layout: LayoutPlan,
    pub title_bucket: TitleBucket,
    pub title_fit: TitleFitConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridPlan>,
    /// Fit routines for live pages, identical to the ones embedded in exports.
    pub title_fit_script: String,
    pub viewport_fit_script: String,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub scale: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub content: Content,
    #[serde(default)]
    pub options: ExportOptions,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        default_template_id: state.registry.default_template_id().to_string(),
        templates: state.registry.list(),
        assets: state.exporter.assets().clone(),
    })
}

/// GET /api/v1/layout/:card_count
///
/// Layout plan and title bounds for a card count, optionally with a template's
/// title overrides and bespoke grid applied.
pub async fn handle_layout(
    State(state): State<AppState>,
    Path(card_count): Path<usize>,
    Query(query): Query<LayoutQuery>,
) -> Result<Json<LayoutResponse>, AppError> {
    let template = match query.template.as_deref() {
        Some(id) => Some(
            state
                .registry
                .resolve(id)
                .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found")))?,
        ),
        None => None,
    };

    let overrides = template.as_ref().and_then(|t| t.title_overrides());
    let title_fit = get_standard_title_config(card_count, overrides.as_ref());
    let viewport_fit_script = match &template {
        Some(t) => viewport_fit_script_for(&ViewportFitParams::with_floor(t.viewport_floor_scale())),
        None => generate_viewport_fit_script(),
    };

    Ok(Json(LayoutResponse {
        card_count,
        layout: calculate_standard_layout(card_count),
        title_bucket: TitleBucket::for_count(card_count),
        title_fit,
        grid: template.and_then(|t| t.grid_plan(card_count)),
        title_fit_script: generate_title_fit_script(&title_fit),
        viewport_fit_script,
    }))
}

/// POST /api/v1/templates/:id/preview?scale=
///
/// Renders the bare template fragment for in-app preview.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
    Query(query): Query<PreviewQuery>,
    Json(content): Json<Content>,
) -> Result<Html<String>, AppError> {
    let scale = query.scale.unwrap_or(1.0);
    if !scale.is_finite() || scale <= 0.0 || scale > MAX_PREVIEW_SCALE {
        return Err(AppError::Validation(format!(
            "scale must be in (0, {MAX_PREVIEW_SCALE}], got {scale}"
        )));
    }

    let exporter = state.exporter.clone();
    let markup = tokio::task::spawn_blocking(move || {
        exporter.generate_preview_markup(&content, &template_id, scale)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in preview: {e}")))??;

    Ok(Html(markup))
}

/// POST /api/v1/templates/:id/export
///
/// Returns the standalone document as an HTML attachment.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
    Json(request): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    export_document(state, template_id, request).await
}

/// POST /api/v1/export
///
/// Same as above, using the registry's default template.
pub async fn handle_export_default(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    let template_id = state
        .exporter
        .default_template_id()
        .unwrap_or(state.config.default_template_id.as_str())
        .to_string();
    export_document(state, template_id, request).await
}

async fn export_document(
    state: AppState,
    template_id: String,
    request: ExportRequest,
) -> Result<impl IntoResponse, AppError> {
    if request.content.main_title.trim().is_empty() {
        return Err(AppError::Validation("mainTitle cannot be empty".to_string()));
    }

    let export_id = Uuid::new_v4();
    info!(
        %export_id,
        template_id = %template_id,
        cards = request.content.cards.len(),
        "Export requested"
    );

    let exporter = state.exporter.clone();
    let id = template_id.clone();
    let html = tokio::task::spawn_blocking(move || {
        exporter.generate_downloadable_html(&request.content, &id, &request.options)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in export: {e}")))??;

    info!(%export_id, bytes = html.len(), "Export complete");

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{template_id}.html\""),
            ),
        ],
        html,
    ))
}
