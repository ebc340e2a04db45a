//! Selectable card for a public model on the home page.

use leptos::prelude::*;

use crate::net::types::Model;

/// A clickable model card. Selecting it reveals the link into chat.
#[component]
pub fn ModelCard(model: Model, #[prop(into)] selected: Signal<bool>, on_select: Callback<i64>) -> impl IntoView {
    let id = model.id;
    let caption = model.caption();
    let href = format!("/chat/{id}");

    view! {
        <div
            class="model-card"
            class:model-card--selected=move || selected.get()
            on:click=move |_| on_select.run(id)
        >
            <h3 class="model-card__name">{model.name}</h3>
            <p class="model-card__caption">{caption}</p>
            <Show when=move || selected.get()>
                <a class="btn btn--primary model-card__start" href=href.clone()>
                    "Start Q&A →"
                </a>
            </Show>
        </div>
    }
}
