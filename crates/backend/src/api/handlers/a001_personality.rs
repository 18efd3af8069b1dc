use axum::Json;
use contracts::domain::a001_personality::aggregate::{
    SetPersonalityRequest, SetPersonalityResponse,
};

use super::ApiError;
use crate::domain::a001_personality;

/// POST /set-personality
pub async fn set_personality(
    Json(request): Json<SetPersonalityRequest>,
) -> Result<Json<SetPersonalityResponse>, ApiError> {
    match a001_personality::service::set_personality(request).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::warn!("Rejected personality: {:?}", e);
            Err(ApiError::bad_request(e.to_string()))
        }
    }
}
