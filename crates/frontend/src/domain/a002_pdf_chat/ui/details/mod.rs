//! PDF Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - state.rs: ConversationState and its transitions
//! - view_model.rs: PdfChatVm with RwSignals
//! - view.rs: Main component PdfChatPage

mod model;
pub mod state;
mod view;
mod view_model;

pub use state::ConversationState;
pub use view::PdfChatPage;
pub use view_model::PdfChatVm;
