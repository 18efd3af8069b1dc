use serde::{Deserialize, Serialize};
use std::fmt;

/// Стиль ответов ассистента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    Normal,
    Salesperson,
    Shakespeare,
}

impl Personality {
    /// Код для API (`type` в теле запроса)
    pub fn code(&self) -> &'static str {
        match self {
            Personality::Normal => "normal",
            Personality::Salesperson => "salesperson",
            Personality::Shakespeare => "shakespeare",
        }
    }

    /// Название на кнопке выбора
    pub fn display_name(&self) -> &'static str {
        match self {
            Personality::Normal => "Normal",
            Personality::Salesperson => "Crazy Salesperson",
            Personality::Shakespeare => "Shakespeare",
        }
    }

    /// Подпись под кнопками
    pub fn description(&self) -> &'static str {
        match self {
            Personality::Normal => "The AI will respond in a helpful, straightforward manner.",
            Personality::Salesperson => {
                "The AI will respond like an enthusiastic, over-the-top salesperson!"
            }
            Personality::Shakespeare => {
                "The AI will respond in the style of William Shakespeare, with poetic flair and old English."
            }
        }
    }

    /// Как ассистент будет отвечать: "AI will respond as ..."
    pub fn respond_as(&self) -> &'static str {
        match self {
            Personality::Normal => "a helpful assistant",
            Personality::Salesperson => "an over-the-top salesperson",
            Personality::Shakespeare => "Shakespeare",
        }
    }

    /// Все варианты в порядке отображения
    pub fn all() -> [Personality; 3] {
        [
            Personality::Normal,
            Personality::Salesperson,
            Personality::Shakespeare,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "normal" => Some(Personality::Normal),
            "salesperson" => Some(Personality::Salesperson),
            "shakespeare" => Some(Personality::Shakespeare),
            _ => None,
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for p in Personality::all() {
            assert_eq!(Personality::from_code(p.code()), Some(p));
        }
        assert_eq!(Personality::from_code("pirate"), None);
        assert_eq!(Personality::from_code("Normal"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Personality::Salesperson).unwrap();
        assert_eq!(json, "\"salesperson\"");

        let p: Personality = serde_json::from_str("\"shakespeare\"").unwrap();
        assert_eq!(p, Personality::Shakespeare);
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(Personality::default(), Personality::Normal);
        assert_eq!(Personality::default().respond_as(), "a helpful assistant");
    }
}
