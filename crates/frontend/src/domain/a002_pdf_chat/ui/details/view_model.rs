//! PDF Chat - View Model

use super::state::ConversationState;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PdfChatVm {
    /// Всё состояние страницы в одном сигнале
    pub state: RwSignal<ConversationState>,
    /// Выбранные файлы браузера (не Send, поэтому отдельно от состояния)
    pub files: StoredValue<Vec<web_sys::File>, LocalStorage>,
}

impl PdfChatVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ConversationState::new()),
            files: StoredValue::new_local(Vec::new()),
        }
    }

    /// Запомнить выбранные в `<input type="file">` файлы
    pub fn select_files(&self, files: Vec<web_sys::File>) {
        let names = files.iter().map(|f| f.name()).collect();
        self.files.set_value(files);
        self.state.update(|s| s.select_files(names));
    }
}

impl Default for PdfChatVm {
    fn default() -> Self {
        Self::new()
    }
}
