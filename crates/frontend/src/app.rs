use crate::domain::a002_pdf_chat::ui::details::PdfChatPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <PdfChatPage />
    }
}
