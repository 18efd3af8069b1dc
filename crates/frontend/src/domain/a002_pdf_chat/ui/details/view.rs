//! PDF Chat - View Component

use super::model::{ask_question, upload_files};
use super::view_model::PdfChatVm;
use crate::domain::a001_personality::model::set_personality;
use crate::domain::a001_personality::ui::PersonalitySelector;
use crate::shared::icons::icon;
use contracts::enums::Personality;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn PdfChatPage() -> impl IntoView {
    let vm = PdfChatVm::new();
    let state = vm.state;
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    // Personality: fire-and-forget, без флага загрузки
    let handle_personality = Callback::new(move |personality: Personality| {
        let mut to_send = None;
        state.update(|s| to_send = s.select_personality(personality));
        let Some(personality) = to_send else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            let result = set_personality(personality).await;
            match &result {
                Ok(resp) => log::info!("Personality set response: {:?}", resp),
                Err(e) => log::error!("Error setting personality: {}", e),
            }
            state.update(|s| s.finish_personality(personality, result));
        });
    });

    // Upload selected PDFs
    let handle_upload = Callback::new(move |_: ()| {
        let mut sent = None;
        state.update(|s| sent = s.begin_upload());
        let Some(sent) = sent else {
            return;
        };

        let files = vm.files.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = upload_files(&files).await;
            match &result {
                Ok(resp) => log::info!("Upload response: {:?}", resp),
                Err(e) => log::error!("Error uploading files: {}", e),
            }
            state.update(|s| s.finish_upload(sent, result));
            scroll_to_bottom();
        });
    });

    // Ask question; user message is shown before the answer arrives
    let handle_ask = Callback::new(move |_: ()| {
        // Enter в поле ввода не должен обходить заблокированную кнопку
        if state.with_untracked(|s| s.ask_disabled()) {
            return;
        }
        let mut question = None;
        state.update(|s| question = s.begin_question());
        let Some(question) = question else {
            return;
        };
        scroll_to_bottom();

        wasm_bindgen_futures::spawn_local(async move {
            log::info!("Sending question: {}", question);
            let result = ask_question(&question).await;
            match &result {
                Ok(resp) => log::info!("Answer response: {:?}", resp),
                Err(e) => log::error!("Error asking question: {}", e),
            }
            state.update(|s| s.finish_question(result));
            scroll_to_bottom();
        });
    });

    view! {
        <div class="App">
            <h1>"PDF Question Answering"</h1>

            <PersonalitySelector
                selected=Signal::derive(move || state.with(|s| s.personality))
                disabled=Signal::derive(move || state.with(|s| s.personality_disabled()))
                on_select=handle_personality
            />

            <div class="upload-section">
                <h2>"Upload PDFs"</h2>
                <Flex align=FlexAlign::Center style="gap: 8px;">
                    <input
                        type="file"
                        accept=".pdf"
                        multiple=true
                        prop:disabled=move || state.with(|s| s.file_input_disabled())
                        on:change=move |ev| {
                            use wasm_bindgen::JsCast;
                            let Some(input) = ev
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                            else {
                                return;
                            };
                            let mut selected = Vec::new();
                            if let Some(list) = input.files() {
                                for i in 0..list.length() {
                                    if let Some(file) = list.get(i) {
                                        selected.push(file);
                                    }
                                }
                            }
                            vm.select_files(selected);
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || state.with(|s| s.upload_disabled()))
                        on_click=move |_| handle_upload.run(())
                    >
                        {icon("upload")}
                        " Upload PDFs"
                    </Button>
                </Flex>

                {move || {
                    state
                        .with(|s| s.is_loading())
                        .then(|| {
                            view! {
                                <Flex align=FlexAlign::Center style="gap: 8px; margin-top: 8px;">
                                    <Spinner />
                                    <span>"Processing..."</span>
                                </Flex>
                            }
                        })
                }}

                {move || {
                    let files = state.with(|s| s.uploaded_files.clone());
                    if files.is_empty() {
                        return None;
                    }
                    Some(
                        view! {
                            <div class="uploaded-files">
                                <h3>"Uploaded Files:"</h3>
                                <ul>
                                    {files
                                        .into_iter()
                                        .map(|filename| {
                                            view! {
                                                <li>
                                                    {icon("document")}
                                                    " "
                                                    {filename}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        },
                    )
                }}
            </div>

            // Лента беседы
            <div class="conversation" node_ref=messages_container_ref>
                <For
                    each=move || state.with(|s| s.transcript.clone())
                    key=|entry| entry.id
                    let:entry
                >
                    <div class=format!("message {}", entry.role.as_str())>
                        <strong>{entry.role.speaker_label()}</strong>
                        <span style="white-space: pre-wrap;">{entry.content.clone()}</span>
                    </div>
                </For>

                {move || {
                    state
                        .with(|s| s.error.clone())
                        .map(|e| view! { <div class="error">{e}</div> })
                }}
            </div>

            <Flex class="question-form" style="gap: 8px;">
                <input
                    type="text"
                    style="flex: 1;"
                    placeholder="Ask a question about the PDFs..."
                    prop:value=move || state.with(|s| s.question.clone())
                    prop:disabled=move || state.with(|s| s.question_disabled())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.question = value);
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            handle_ask.run(());
                        }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || state.with(|s| s.ask_disabled()))
                    on_click=move |_| handle_ask.run(())
                >
                    {icon("send")}
                    {move || format!(" {}", state.with(|s| s.ask_caption()))}
                </Button>
            </Flex>
        </div>
    }
}
