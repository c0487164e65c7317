use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures raised while turning content into a standalone document.
///
/// Configuration errors (`ResolverNotRegistered`, `ResolverAlreadyRegistered`,
/// `UnknownTemplate`) are kept apart from `Render`, which wraps a template bug.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No template resolver registered; cannot resolve template '{template_id}'")]
    ResolverNotRegistered { template_id: String },

    #[error("A template resolver is already registered")]
    ResolverAlreadyRegistered,

    #[error("Unknown template id '{template_id}'")]
    UnknownTemplate { template_id: String },

    #[error("Template '{template_id}' failed to render")]
    Render {
        template_id: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ExportError {
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ExportError::ResolverNotRegistered { .. }
                | ExportError::ResolverAlreadyRegistered
                | ExportError::UnknownTemplate { .. }
        )
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Export(e @ ExportError::UnknownTemplate { .. }) => {
                (StatusCode::NOT_FOUND, "UNKNOWN_TEMPLATE", e.to_string())
            }
            AppError::Export(e) if e.is_configuration() => {
                tracing::error!("Export configuration error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    e.to_string(),
                )
            }
            AppError::Export(e) => {
                tracing::error!("Export error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    e.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unknown_template_message_names_id() {
        let err = ExportError::UnknownTemplate {
            template_id: "does-not-exist".to_string(),
        };
        assert!(err.to_string().contains("does-not-exist"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_render_error_keeps_cause() {
        let err = ExportError::Render {
            template_id: "synthwave".to_string(),
            source: anyhow::anyhow!("missing palette"),
        };
        assert!(!err.is_configuration());
        let cause = err.source().expect("render error must expose its cause");
        assert!(cause.to_string().contains("missing palette"));
    }

    #[test]
    fn test_status_codes() {
        let unknown = AppError::from(ExportError::UnknownTemplate {
            template_id: "x".to_string(),
        });
        assert_eq!(unknown.into_response().status(), StatusCode::NOT_FOUND);

        let unregistered = AppError::from(ExportError::ResolverNotRegistered {
            template_id: "x".to_string(),
        });
        assert_eq!(
            unregistered.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let invalid = AppError::Validation("bad scale".to_string());
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
