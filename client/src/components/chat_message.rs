//! One entry of the chat transcript.
//!
//! Assistant text is Markdown rendered with raw HTML removed; user text is
//! shown verbatim. Images arrive as base64 PNG payloads.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatRole};
use crate::util::markdown::{png_data_url, render_markdown_html};
use crate::util::time::local_clock;

#[component]
pub fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let ChatMessage { role, content, timestamp, images, .. } = message;
    let class = format!("chat-message chat-message--{}", role.as_class());
    let body = match role {
        ChatRole::Assistant => {
            view! { <div class="chat-message__markdown" inner_html=render_markdown_html(&content)></div> }
                .into_any()
        }
        ChatRole::User => view! { <p class="chat-message__text">{content}</p> }.into_any(),
    };
    let figures = (!images.is_empty()).then(|| {
        let items = images
            .iter()
            .enumerate()
            .map(|(idx, payload)| {
                view! {
                    <img
                        class="chat-message__image"
                        src=png_data_url(payload)
                        alt=format!("Figure {}", idx + 1)
                        loading="lazy"
                    />
                }
            })
            .collect_view();
        view! { <div class="chat-message__images">{items}</div> }
    });

    view! {
        <div class=class>
            <div class="chat-message__bubble">
                {body}
                {figures}
                <span class="chat-message__time">{local_clock(timestamp)}</span>
            </div>
        </div>
    }
}
