use contracts::domain::a001_personality::aggregate::{
    SetPersonalityRequest, SetPersonalityResponse,
};
use contracts::enums::Personality;
use once_cell::sync::Lazy;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PersonalityError {
    #[error("Invalid personality type. Choose from: normal, salesperson, or shakespeare")]
    Invalid(String),
}

/// Текущий стиль. Применяется при следующей загрузке PDF.
static CURRENT: Lazy<RwLock<Personality>> = Lazy::new(|| RwLock::new(Personality::default()));

pub async fn current() -> Personality {
    *CURRENT.read().await
}

/// Проверить значение из запроса
pub fn parse(request: &SetPersonalityRequest) -> Result<Personality, PersonalityError> {
    request
        .personality()
        .ok_or_else(|| PersonalityError::Invalid(request.kind.clone()))
}

/// POST /set-personality
pub async fn set_personality(
    request: SetPersonalityRequest,
) -> Result<SetPersonalityResponse, PersonalityError> {
    let personality = parse(&request)?;
    *CURRENT.write().await = personality;
    tracing::info!("Personality set to: {}", personality);

    Ok(SetPersonalityResponse {
        message: format!("Personality set to {}", personality),
    })
}

/// Системное сообщение модели для выбранного стиля
pub fn system_message(personality: Personality) -> &'static str {
    match personality {
        Personality::Normal => "You're a smart, and helpful assistant.",
        Personality::Salesperson => {
            "You're an over-the-top, enthusiastic salesperson. Use exaggerated language, superlatives, and be extremely excited about everything!"
        }
        Personality::Shakespeare => {
            "You're William Shakespeare. Respond in Shakespearean English with poetic flair, using archaic terms, and the style of Shakespeare's works."
        }
    }
}
