use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use sojourn_pipeline::{ScoutRequest, ScoutResult};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ScoutRequestBody {
    pub location: String,
    pub category: String,
    pub retreat_description: Option<String>,
}

/// POST /api/v1/scout — run one vendor discovery.
///
/// Zero results and zero emailable candidates are 200s with an empty
/// vendor list; only validation problems, missing credentials, and fatal
/// upstream failures are errors.
pub(super) async fn run_scout(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ScoutRequestBody>,
) -> Result<Json<ApiResponse<ScoutResult>>, ApiError> {
    let rid = req_id.0.as_str();

    let location = body.location.trim();
    let category = body.category.trim();
    if location.is_empty() {
        return Err(ApiError::new(
            rid,
            "validation_error",
            "'location' must be a non-empty string",
        ));
    }
    if category.is_empty() {
        return Err(ApiError::new(
            rid,
            "validation_error",
            "'category' must be a non-empty string",
        ));
    }

    let Some(scout) = state.deps.scout() else {
        return Err(ApiError::new(
            rid,
            "config_error",
            "vendor discovery is not configured: GOOGLE_PLACES_API_KEY and OPENAI_API_KEY must be set",
        ));
    };

    let request = ScoutRequest {
        location: location.to_owned(),
        category: category.to_owned(),
        retreat_description: body
            .retreat_description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned),
    };

    match scout.run(&request).await {
        Ok(result) => Ok(Json(ApiResponse {
            data: result,
            meta: ResponseMeta::new(req_id.0),
        })),
        Err(e) => {
            tracing::error!(error = %e, location, category, "vendor discovery failed");
            Err(ApiError::new(
                rid,
                "upstream_error",
                format!("vendor discovery failed: {e}"),
            ))
        }
    }
}
