use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use sojourn_db::NewOutreachRecord;
use sojourn_outreach::{compose, ComposeParams};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct OutreachRequestBody {
    pub vendor_email: String,
    pub vendor_name: String,
    pub vendor_category: String,
    pub location: String,
    pub guide_user_id: String,
    pub retreat_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct OutreachData {
    pub success: bool,
}

/// POST /api/v1/outreach — compose and send one outreach email, then log
/// the attempt.
///
/// The send is fatal on failure; the log write is fire-and-forget. The
/// caller sees success as soon as the gateway accepts the message,
/// whatever later happens to the log row.
pub(super) async fn send_outreach(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<OutreachRequestBody>,
) -> Result<Json<ApiResponse<OutreachData>>, ApiError> {
    let rid = req_id.0.as_str();

    for (field, value) in [
        ("vendor_email", &body.vendor_email),
        ("vendor_name", &body.vendor_name),
        ("vendor_category", &body.vendor_category),
        ("location", &body.location),
        ("guide_user_id", &body.guide_user_id),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::new(
                rid,
                "validation_error",
                format!("'{field}' must be a non-empty string"),
            ));
        }
    }

    let Some(mailer) = state.deps.mailer() else {
        return Err(ApiError::new(
            rid,
            "config_error",
            "outreach is not configured: RESEND_API_KEY must be set",
        ));
    };

    let message = compose(&ComposeParams {
        vendor_name: body.vendor_name.clone(),
        vendor_email: body.vendor_email.clone(),
        vendor_category: body.vendor_category.clone(),
        location: body.location.clone(),
        signup_base_url: state.deps.signup_base_url().to_owned(),
    });

    if let Err(e) = mailer.send(&message).await {
        tracing::error!(
            vendor_email = %body.vendor_email,
            error = %e,
            "outreach send failed"
        );
        return Err(ApiError::new(
            rid,
            "upstream_error",
            format!("email gateway rejected the message: {e}"),
        ));
    }

    // Fire-and-forget: the outreach succeeded once the gateway accepted the
    // message, so the log write must not change the response.
    let record = NewOutreachRecord {
        vendor_email: body.vendor_email,
        vendor_name: body.vendor_name,
        vendor_category: body.vendor_category,
        location: body.location,
        guide_user_id: body.guide_user_id,
        retreat_id: body.retreat_id,
    };
    let pool = state.pool.clone();
    tokio::spawn(async move {
        if let Err(e) = sojourn_db::insert_outreach_record(&pool, &record).await {
            tracing::error!(
                vendor_email = %record.vendor_email,
                guide_user_id = %record.guide_user_id,
                error = %e,
                "failed to log outreach attempt"
            );
        }
    });

    Ok(Json(ApiResponse {
        data: OutreachData { success: true },
        meta: ResponseMeta::new(req_id.0),
    }))
}
