pub mod config;
pub mod format;
pub mod llm;
pub mod logger;
pub mod pdf;
