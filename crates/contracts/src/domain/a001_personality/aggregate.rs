use crate::enums::Personality;
use serde::{Deserialize, Serialize};

/// POST /set-personality
///
/// `type` остаётся строкой: backend сам проверяет значение и отвечает 400 с описанием.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPersonalityRequest {
    #[serde(rename = "type")]
    pub kind: String,
}

impl SetPersonalityRequest {
    pub fn new(personality: Personality) -> Self {
        Self {
            kind: personality.code().to_string(),
        }
    }

    /// Распознать стиль из запроса
    pub fn personality(&self) -> Option<Personality> {
        Personality::from_code(&self.kind)
    }
}

/// Ответ на смену стиля (клиент только логирует его)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPersonalityResponse {
    #[serde(default)]
    pub message: String,
}
