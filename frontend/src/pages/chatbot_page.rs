//! Chatbot page layout and integration.

use common::chat::{ChatSender, ChatTranscript};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_content_icons::MdSend};

use crate::{api::chat_api::ask_chatbot, components::formatted_message::FormattedMessage};

/// Chatbot page
#[component]
pub fn ChatbotPage() -> Element {
    let mut draft = use_signal(String::new);
    let mut transcript = use_signal(ChatTranscript::default);
    let mut waiting = use_signal(|| false);

    let mut send = move || {
        let text = draft.read().trim().to_string();
        if text.is_empty() || waiting() {
            return;
        }
        transcript.write().push(ChatSender::User, text.clone());
        draft.set(String::new());
        waiting.set(true);
        spawn(async move {
            let outcome = ask_chatbot(text).await.map_err(|e| e.to_string());
            transcript.write().push_reply(outcome);
            waiting.set(false);
        });
    };
    let can_send = use_memo(move || !draft.read().trim().is_empty() && !waiting());

    rsx! {
        Title { "Research Catalog - Chatbot" }
        div {
            id: "x-chatbot-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 16px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
            ",

            div {
                id: "x-chatbot-transcript",
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 12px;
                    flex-grow: 1;
                    overflow-y: auto;
                ",
                if transcript.read().is_empty() {
                    div { style: "color: #6B7280; font-size: 18px;", "What can I do for your research?" }
                }
                for message in transcript.read().messages().to_vec() {
                    ChatBubble { key: "{message.id}", from: message.from, text: message.text }
                }
                if waiting() {
                    div {
                        style: "align-self: flex-start; padding: 6px 14px;",
                        div { class: "x-spinner" }
                    }
                }
            }

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: flex-end;
                    gap: 10px;
                    background-color: white;
                    border: 1px solid #D1D5DB;
                    border-radius: 14px;
                    padding: 10px 14px;
                ",
                textarea {
                    placeholder: "Ask away :)",
                    rows: "3",
                    value: "{draft}",
                    style: "
                        flex: 1;
                        border: none;
                        outline: none;
                        resize: none;
                        background: transparent;
                        font-size: 15px;
                    ",
                    oninput: move |e| draft.set(e.value()),
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Enter && !e.modifiers().contains(Modifiers::SHIFT) {
                            e.prevent_default();
                            send();
                        }
                    },
                }
                button {
                    disabled: !can_send(),
                    style: "cursor: pointer; border: none; background: transparent;",
                    onclick: move |_| send(),
                    Icon { icon: MdSend, style: "width: 26px; height: 26px; color: #1D1B20;" }
                }
            }
        }
    }
}

/// User text is shown as typed; bot replies go through [`FormattedMessage`].
#[component]
fn ChatBubble(from: ChatSender, text: String) -> Element {
    let (align, background) = match from {
        ChatSender::User => ("flex-end", "#EEF2FF"),
        ChatSender::Bot => ("flex-start", "white"),
    };
    rsx! {
        div {
            style: "
                align-self: {align};
                max-width: 70%;
                padding: 10px 14px;
                border-radius: 14px;
                background: {background};
                border: 1px solid #E5E7EB;
            ",
            {match from {
                ChatSender::User => rsx! {
                    div { style: "white-space: pre-wrap;", "{text}" }
                },
                ChatSender::Bot => rsx! {
                    FormattedMessage { text: text.clone() }
                },
            }}
        }
    }
}
