//! Personality - API

use crate::shared::api_utils::{post_json, ApiError};
use contracts::domain::a001_personality::aggregate::{
    SetPersonalityRequest, SetPersonalityResponse,
};
use contracts::enums::Personality;

/// Сообщить backend выбранный стиль ответов
pub async fn set_personality(personality: Personality) -> Result<SetPersonalityResponse, ApiError> {
    post_json("/set-personality", &SetPersonalityRequest::new(personality)).await
}
