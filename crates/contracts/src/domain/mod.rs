pub mod a001_personality;
pub mod a002_pdf_chat;
