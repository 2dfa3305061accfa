use common::chat_format::{MessageBlock, format_message};
use dioxus::prelude::*;

/// Renders chatbot text with the light formatting of [`format_message`].
#[component]
pub fn FormattedMessage(text: ReadSignal<String>) -> Element {
    let blocks = use_memo(move || format_message(&text.read()));
    rsx! {
        div {
            style: "white-space: normal; word-wrap: break-word; max-width: 100%;",
            for (index, block) in blocks().into_iter().enumerate() {
                MessageBlockView { key: "{index}", block }
            }
        }
    }
}

#[component]
fn MessageBlockView(block: MessageBlock) -> Element {
    match block {
        MessageBlock::Break => rsx! { br {} },
        MessageBlock::Paragraph(spans) => rsx! {
            div {
                style: "margin-bottom: 8px; line-height: 1.5;",
                for span in spans {
                    if span.is_bold {
                        strong { "{span.text}" }
                    } else {
                        "{span.text}"
                    }
                }
            }
        },
        MessageBlock::Bullet(text) => rsx! {
            div {
                style: "margin-left: 16px; margin-bottom: 4px; display: flex; align-items: flex-start;",
                span { style: "margin-right: 8px; color: #666;", "•" }
                span { "{text}" }
            }
        },
        MessageBlock::Numbered { marker, text } => rsx! {
            div {
                style: "margin-left: 16px; margin-bottom: 4px; display: flex; align-items: flex-start;",
                span { style: "margin-right: 8px; color: #666; font-weight: bold;", "{marker}" }
                span { "{text}" }
            }
        },
        MessageBlock::Header { level, text } => {
            let (font_size, font_weight) = MessageBlock::header_style(level);
            rsx! {
                div {
                    style: "font-size: {font_size}; font-weight: {font_weight}; margin-top: 16px; margin-bottom: 8px; color: #333;",
                    "{text}"
                }
            }
        }
    }
}
