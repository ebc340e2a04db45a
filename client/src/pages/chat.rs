//! Manual Q&A conversation (`/chat/:id`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The transcript is page-local and starts with a greeting. Each question
//! is posted on its own; a failure appends a fixed apology instead of an
//! error banner. The transcript renders only after mount so server and
//! client markup agree.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::chat_message::ChatBubble;
use crate::components::site_header::SiteHeader;
use crate::components::spinner::Spinner;
use crate::state::chat::{ChatState, parse_model_id};
use crate::util::time::now_ms;

/// Enter sends; Shift+Enter inserts a newline; IME composition never sends.
pub(crate) fn should_send_on_key(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let params = use_params_map();
    let model_id = Memo::new(move |_| params.read().get("id").as_deref().and_then(parse_model_id));

    view! {
        <div class="page page--chat">
            <SiteHeader/>
            <Show when=move || model_id.get().is_some() fallback=missing_product>
                <Conversation model_id=model_id/>
            </Show>
        </div>
    }
}

#[component]
fn Conversation(model_id: Memo<Option<i64>>) -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let mounted = RwSignal::new(false);
    let end_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    // Fresh transcript per product.
    Effect::new(move || {
        let _ = model_id.get();
        chat.set(ChatState::new(now_ms()));
        mounted.set(true);
    });

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());
        #[cfg(feature = "hydrate")]
        if let Some(end) = end_ref.get() {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            end.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let send = move || {
        let Some(id) = model_id.get_untracked() else {
            return;
        };
        let mut question = None;
        chat.update(|c| question = c.submit_draft(now_ms()));
        let Some(question) = question else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::app_client().send_question(id, &question).await {
                Ok(answer) => chat.update(|c| c.receive_answer(answer, now_ms())),
                Err(_) => chat.update(|c| c.receive_failure(now_ms())),
            }
            if let Some(input) = input_ref.get_untracked() {
                let _ = input.focus();
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, question, input_ref);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if should_send_on_key(&ev.key(), ev.shift_key(), ev.is_composing()) {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <main class="chat">
            <div class="chat__transcript">
                <Show when=move || mounted.get()>
                    <For
                        each=move || chat.with(|c| c.messages.clone())
                        key=|message| message.id.clone()
                        children=|message| view! { <ChatBubble message=message/> }
                    />
                </Show>
                <Show when=move || chat.with(|c| c.loading)>
                    <div class="chat-message chat-message--assistant">
                        <Spinner label="Thinking..."/>
                    </div>
                </Show>
                <div class="chat__end" node_ref=end_ref></div>
            </div>
            <form
                class="chat__composer"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    send();
                }
            >
                <textarea
                    class="chat__input"
                    rows="2"
                    placeholder="Ask a question about this product..."
                    node_ref=input_ref
                    prop:value=move || chat.with(|c| c.draft.clone())
                    on:input=move |ev| chat.update(|c| c.draft = event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    class="btn btn--primary chat__send"
                    type="submit"
                    disabled=move || chat.with(|c| c.loading || c.draft.trim().is_empty())
                >
                    "Send"
                </button>
            </form>
        </main>
    }
}

fn missing_product() -> impl IntoView {
    view! {
        <main class="page__center">
            <h2>"This product does not exist"</h2>
            <a href="/">"Back to home"</a>
        </main>
    }
}
