//! Контракты между frontend и backend: DTO запросов/ответов и общие перечисления.

pub mod domain;
pub mod enums;
